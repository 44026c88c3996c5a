//! Circular arithmetic on the 360° ecliptic.
//!
//! Every resolver works in these terms. Clockwise here means the direction
//! of increasing longitude, which is how the zodiac is read.

pub const FULL_CIRCLE: f64 = 360.0;
pub const HALF_CIRCLE: f64 = 180.0;
pub const SIGN_SPAN: f64 = 30.0;

/// Wrap any finite angle into [0, 360).
pub fn normalize(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_CIRCLE);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_CIRCLE {
        0.0
    } else {
        wrapped
    }
}

/// Distance travelled from `from` to `to` in the increasing-angle direction.
///
/// Not symmetric: `clockwise_distance(358.0, 2.0)` is 4 while
/// `clockwise_distance(2.0, 358.0)` is 356.
pub fn clockwise_distance(from: f64, to: f64) -> f64 {
    normalize(to - from)
}

/// Minimal separation of two longitudes, in [0, 180].
pub fn shortest_distance(a: f64, b: f64) -> f64 {
    let cw = clockwise_distance(a, b);
    cw.min(FULL_CIRCLE - cw)
}

/// Zodiac sign index (0 = Aries .. 11 = Pisces) of a longitude.
pub fn sign_index(longitude: f64) -> u8 {
    ((normalize(longitude) / SIGN_SPAN).floor() as u8).min(11)
}

/// Position within the sign, in [0, 30).
pub fn sign_degree(longitude: f64) -> f64 {
    normalize(longitude) % SIGN_SPAN
}

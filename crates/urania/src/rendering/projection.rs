//! Polar projection for chart wheels.
//!
//! Astrological angles run counter-clockwise from 3 o'clock. SVG's y axis
//! points down, hence the negated sine.

use crate::angles::normalize;
use crate::rendering::primitives::Point;

/// Project an ecliptic longitude at `radius` around `center`.
pub fn polar_to_cartesian(center: Point, radius: f64, angle: f64, rotation_offset: f64) -> Point {
    let theta = normalize(angle + rotation_offset).to_radians();
    Point {
        x: center.x + radius * theta.cos(),
        y: center.y - radius * theta.sin(),
    }
}

/// Rotation that puts the ascendant at 9 o'clock.
pub fn ascendant_offset(ascendant: f64) -> f64 {
    180.0 - ascendant
}

/// SVG path for an annular sector, e.g. one sign of the zodiac band.
pub fn describe_ring_sector(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
    rotation_offset: f64,
) -> String {
    let outer_start = polar_to_cartesian(center, outer_radius, start_angle, rotation_offset);
    let outer_end = polar_to_cartesian(center, outer_radius, end_angle, rotation_offset);
    let inner_start = polar_to_cartesian(center, inner_radius, start_angle, rotation_offset);
    let inner_end = polar_to_cartesian(center, inner_radius, end_angle, rotation_offset);
    let large_arc = if end_angle - start_angle <= 180.0 { 0 } else { 1 };

    // counter-clockwise along the outer edge, back clockwise along the inner
    format!(
        "M {} {} A {} {} 0 {} 0 {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        outer_start.x,
        outer_start.y,
        outer_radius,
        outer_radius,
        large_arc,
        outer_end.x,
        outer_end.y,
        inner_end.x,
        inner_end.y,
        inner_radius,
        inner_radius,
        large_arc,
        inner_start.x,
        inner_start.y
    )
}

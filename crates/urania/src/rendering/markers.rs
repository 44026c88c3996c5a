//! Tick markers linking a body's true longitude to its displaced glyph.

use serde::{Deserialize, Serialize};

use crate::rendering::primitives::Point;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// Points from the true position toward the glyph, so it slopes when
    /// the glyph was pushed sideways
    #[default]
    Line,
    /// Runs along the radius regardless of the glyph's angular shift
    Radial,
}

impl Marker {
    pub fn draw(self, start: Point, target: Point, length: f64, center: Point) -> Option<(Point, Point)> {
        match self {
            Marker::Line => line_marker(start, target, length),
            Marker::Radial => Some(radial_marker(start, target, length, center)),
        }
    }
}

/// `None` when start and target coincide, since there is no direction.
pub fn line_marker(start: Point, target: Point, length: f64) -> Option<(Point, Point)> {
    let dist = start.distance_to(target);
    if dist == 0.0 {
        return None;
    }
    let ratio = length / dist;
    let end = Point {
        x: start.x + (target.x - start.x) * ratio,
        y: start.y + (target.y - start.y) * ratio,
    };
    Some((start, end))
}

/// Inward when the target sits nearer the center than `start`, else outward.
pub fn radial_marker(start: Point, target: Point, length: f64, center: Point) -> (Point, Point) {
    let start_dist = center.distance_to(start);
    let target_dist = center.distance_to(target);
    let angle = (start.y - center.y).atan2(start.x - center.x);
    let direction = if target_dist < start_dist { -1.0 } else { 1.0 };
    let end = Point {
        x: start.x + angle.cos() * length * direction,
        y: start.y + angle.sin() * length * direction,
    };
    (start, end)
}

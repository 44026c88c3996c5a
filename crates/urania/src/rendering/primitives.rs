use serde::{Deserialize, Serialize};

use crate::chart::ZodiacSign;

/// Point in SVG space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Shapes emitted for a chart wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// Body symbol at its resolved position
    BodyGlyph {
        center: Point,
        body_id: String,
        glyph: String,
        /// "m"/"t" for mean and true points
        indicator: Option<String>,
        retrograde: bool,
        track: usize,
    },
    /// Tick anchored at the body's true longitude
    Tick { from: Point, to: Point },
    /// Degree annotation, e.g. "14°" or "14°27'"
    Label {
        position: Point,
        body_id: String,
        content: String,
    },
    /// One sign of the zodiac band as an SVG path
    SignSector {
        sign: ZodiacSign,
        path: String,
        glyph: String,
        glyph_position: Point,
    },
    HouseLine {
        house: u8,
        from: Point,
        to: Point,
        /// Cusp of house 1, 4, 7 or 10
        angle: bool,
    },
}

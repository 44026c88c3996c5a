//! Fixed wheel furniture drawn around the body ring.

use serde::{Deserialize, Serialize};

use crate::angles::SIGN_SPAN;
use crate::chart::{HouseCusp, ZodiacSign};
use crate::rendering::glyphs::sign_glyph;
use crate::rendering::primitives::{Point, Shape};
use crate::rendering::projection::{describe_ring_sector, polar_to_cartesian};

/// Radii of the zodiac band and the house-cusp spokes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelGeometry {
    pub center: Point,
    pub zodiac_outer_radius: f64,
    pub zodiac_inner_radius: f64,
    /// Sign glyphs sit here, halfway through each sign
    pub sign_glyph_radius: f64,
    pub house_inner_radius: f64,
    /// Cusp lines run out to here, usually the zodiac band's inner edge
    pub house_outer_radius: f64,
    pub rotation_offset: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            center: Point::new(300.0, 300.0),
            zodiac_outer_radius: 300.0,
            zodiac_inner_radius: 270.0,
            sign_glyph_radius: 285.0,
            house_inner_radius: 150.0,
            house_outer_radius: 270.0,
            rotation_offset: 0.0,
        }
    }
}

/// One ring sector and centred glyph per sign.
pub fn zodiac_band(geometry: &WheelGeometry) -> Vec<Shape> {
    ZodiacSign::ALL
        .iter()
        .map(|&sign| {
            let start = sign.start_longitude();
            Shape::SignSector {
                sign,
                path: describe_ring_sector(
                    geometry.center,
                    geometry.zodiac_inner_radius,
                    geometry.zodiac_outer_radius,
                    start,
                    start + SIGN_SPAN,
                    geometry.rotation_offset,
                ),
                glyph: sign_glyph(sign).to_string(),
                glyph_position: polar_to_cartesian(
                    geometry.center,
                    geometry.sign_glyph_radius,
                    start + SIGN_SPAN / 2.0,
                    geometry.rotation_offset,
                ),
            }
        })
        .collect()
}

/// A spoke per cusp; ASC, IC, DSC and MC are flagged for emphasis.
pub fn house_lines(cusps: &[HouseCusp], geometry: &WheelGeometry) -> Vec<Shape> {
    cusps
        .iter()
        .map(|cusp| Shape::HouseLine {
            house: cusp.house,
            from: polar_to_cartesian(
                geometry.center,
                geometry.house_inner_radius,
                cusp.longitude,
                geometry.rotation_offset,
            ),
            to: polar_to_cartesian(
                geometry.center,
                geometry.house_outer_radius,
                cusp.longitude,
                geometry.rotation_offset,
            ),
            angle: cusp.is_angle(),
        })
        .collect()
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::angles::sign_degree;
use crate::chart::{AdjustedPosition, CelestialPosition};
use crate::rendering::glyphs::{body_glyph, node_indicator};
use crate::rendering::markers::Marker;
use crate::rendering::primitives::{Point, Shape};
use crate::rendering::projection::polar_to_cartesian;

/// Radii and styling for one ring of body glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingGeometry {
    pub center: Point,
    /// Radius of track 0
    pub symbol_radius: f64,
    /// Radial distance between consecutive tracks
    pub orbit_step: f64,
    pub tick_radius: f64,
    pub tick_length: f64,
    /// Radius of the degree label; `None` hides labels
    pub degree_radius: Option<f64>,
    pub show_minutes: bool,
    pub rotation_offset: f64,
    pub marker: Marker,
}

impl Default for RingGeometry {
    fn default() -> Self {
        // natal-style ring inside a 300px wheel
        Self {
            center: Point::new(300.0, 300.0),
            symbol_radius: 235.0,
            orbit_step: 18.0,
            tick_radius: 260.0,
            tick_length: 10.0,
            degree_radius: Some(210.0),
            show_minutes: false,
            rotation_offset: 0.0,
            marker: Marker::Line,
        }
    }
}

impl RingGeometry {
    /// Glyph radius of a track, stepping inward from track 0.
    pub fn track_radius(&self, track: usize) -> f64 {
        self.symbol_radius - track as f64 * self.orbit_step
    }
}

/// Emit glyph, tick and degree label shapes for each adjusted body.
///
/// `bodies` supplies the retrograde flag and in-sign degree; an adjusted
/// id missing from it still gets a glyph, with the degree derived from
/// its original longitude.
pub fn place_bodies(
    adjusted: &[AdjustedPosition],
    bodies: &[CelestialPosition],
    geometry: &RingGeometry,
) -> Vec<Shape> {
    let by_id: HashMap<&str, &CelestialPosition> =
        bodies.iter().map(|body| (body.id.as_str(), body)).collect();
    let mut shapes = Vec::with_capacity(adjusted.len() * 3);

    for adj in adjusted {
        let body = by_id.get(adj.id.as_str()).copied();
        let symbol = polar_to_cartesian(
            geometry.center,
            geometry.track_radius(adj.track),
            adj.adjusted_longitude,
            geometry.rotation_offset,
        );
        let tick_start = polar_to_cartesian(
            geometry.center,
            geometry.tick_radius,
            adj.original_longitude,
            geometry.rotation_offset,
        );

        if let Some((from, to)) = geometry
            .marker
            .draw(tick_start, symbol, geometry.tick_length, geometry.center)
        {
            shapes.push(Shape::Tick { from, to });
        }

        shapes.push(Shape::BodyGlyph {
            center: symbol,
            body_id: adj.id.clone(),
            glyph: body_glyph(&adj.id).to_string(),
            indicator: node_indicator(&adj.id).map(str::to_string),
            retrograde: body.map(|b| b.retrograde).unwrap_or(false),
            track: adj.track,
        });

        if let Some(radius) = geometry.degree_radius {
            let position = polar_to_cartesian(
                geometry.center,
                radius - adj.track as f64 * geometry.orbit_step,
                adj.adjusted_longitude,
                geometry.rotation_offset,
            );
            shapes.push(Shape::Label {
                position,
                body_id: adj.id.clone(),
                content: degree_label(adj, body, geometry.show_minutes),
            });
        }
    }

    shapes
}

fn degree_label(adj: &AdjustedPosition, body: Option<&CelestialPosition>, show_minutes: bool) -> String {
    let (degree, minutes) = match body {
        Some(body) => (body.degree, body.minutes()),
        None => {
            let within = sign_degree(adj.original_longitude);
            let minutes = ((within - within.floor()) * 60.0).floor().min(59.0) as u8;
            (within.floor() as u8, minutes)
        }
    };
    if show_minutes {
        format!("{}°{:02}'", degree, minutes)
    } else {
        format!("{}°", degree)
    }
}

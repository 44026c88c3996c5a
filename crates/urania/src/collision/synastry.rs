//! Two-track resolver for synastry wheels.
//!
//! Cheaper than the greedy multi-track search: crowded neighbours simply
//! alternate between the outer and inner track.

use log::debug;

use crate::angles::clockwise_distance;
use crate::chart::{validate_bodies, AdjustedPosition, CelestialPosition};
use crate::collision::spread::{spread_track, Relaxation};
use crate::collision::{finish, prepare, WorkingBody};
use crate::config::DualChartSettings;
use crate::error::Result;

pub const DUAL_TRACKS: usize = 2;

/// Resolve the merged bodies of two charts onto tracks 0 and 1.
///
/// The caller concatenates both charts' bodies; ids must be distinct
/// across the two sides.
pub fn resolve_dual_chart(
    merged_bodies: &[CelestialPosition],
    min_spacing: f64,
) -> Result<Vec<AdjustedPosition>> {
    let settings = DualChartSettings {
        min_spacing,
        ..DualChartSettings::default()
    };
    resolve_dual_chart_with(merged_bodies, &settings)
}

pub fn resolve_dual_chart_with(
    merged_bodies: &[CelestialPosition],
    settings: &DualChartSettings,
) -> Result<Vec<AdjustedPosition>> {
    settings.validate()?;
    validate_bodies(merged_bodies)?;

    let mut data = prepare(merged_bodies);
    if data.is_empty() {
        return Ok(Vec::new());
    }

    alternate_tracks(&mut data, settings.min_spacing);

    let relax = Relaxation {
        min_spacing: settings.min_spacing,
        tolerance: settings.tolerance,
        nudge: settings.nudge,
        max_iterations: settings.max_iterations,
    };
    for track in 0..DUAL_TRACKS {
        let outcome = spread_track(&mut data, track, &relax);
        debug!(
            "dual chart: track {} spread in {} iterations, converged={}",
            track, outcome.iterations, outcome.converged
        );
    }

    Ok(finish(data))
}

fn alternate_tracks(data: &mut [WorkingBody], min_spacing: f64) {
    let count = data.len();
    for i in 1..count {
        let gap = clockwise_distance(data[i - 1].current, data[i].current);
        data[i].track = if gap < min_spacing {
            (data[i - 1].track + 1) % DUAL_TRACKS
        } else {
            0
        };
    }

    // A lone body must not be compared with itself
    if count > 1 {
        let (first, last) = (0, count - 1);
        let gap = clockwise_distance(data[last].current, data[first].current);
        if gap < min_spacing && data[last].track == data[first].track {
            data[last].track = (data[first].track + 1) % DUAL_TRACKS;
        }
    }
}

//! Multi-track resolver: bodies that cannot share a ring are moved to
//! inner tracks instead of being pushed sideways.

use log::{debug, trace, warn};

use crate::angles::clockwise_distance;
use crate::chart::{validate_bodies, AdjustedPosition, CelestialPosition};
use crate::collision::spread::{spread_track, Relaxation};
use crate::collision::{finish, prepare, WorkingBody};
use crate::config::MultiTrackSettings;
use crate::error::Result;

pub fn resolve_multi_track(
    bodies: &[CelestialPosition],
    min_spacing: f64,
    max_tracks: usize,
) -> Result<Vec<AdjustedPosition>> {
    let settings = MultiTrackSettings {
        min_spacing,
        max_tracks,
        ..MultiTrackSettings::default()
    };
    resolve_multi_track_with(bodies, &settings)
}

pub fn resolve_multi_track_with(
    bodies: &[CelestialPosition],
    settings: &MultiTrackSettings,
) -> Result<Vec<AdjustedPosition>> {
    settings.validate()?;
    validate_bodies(bodies)?;

    if settings.max_tracks == 0 {
        warn!("multi track: max_tracks of 0 clamped to 1");
    }

    let mut data = prepare(bodies);
    if data.is_empty() {
        return Ok(Vec::new());
    }

    // tracks beyond one per body can never be occupied
    let max_tracks = settings.max_tracks.clamp(1, data.len());

    assign_tracks(&mut data, settings.min_spacing, max_tracks);

    let relax = Relaxation {
        min_spacing: settings.min_spacing,
        tolerance: settings.tolerance,
        nudge: settings.nudge,
        max_iterations: settings.max_iterations,
    };
    for track in 0..max_tracks {
        let outcome = spread_track(&mut data, track, &relax);
        debug!(
            "multi track: track {} spread in {} iterations, converged={}",
            track, outcome.iterations, outcome.converged
        );
    }

    Ok(finish(data))
}

/// Greedy pass: outermost track whose previous occupant is far enough
/// behind, else the track whose previous occupant is furthest behind.
fn assign_tracks(data: &mut [WorkingBody], min_spacing: f64, max_tracks: usize) {
    let mut last_on_track: Vec<Option<f64>> = vec![None; max_tracks];

    for body in data.iter_mut() {
        let free = last_on_track.iter().position(|last| match last {
            None => true,
            Some(prev) => clockwise_distance(*prev, body.current) >= min_spacing,
        });

        let track = match free {
            Some(track) => track,
            None => {
                let mut best_track = 0;
                let mut best_gap = f64::NEG_INFINITY;
                for (track, last) in last_on_track.iter().enumerate() {
                    let gap = last.map_or(f64::INFINITY, |prev| clockwise_distance(prev, body.current));
                    if gap > best_gap {
                        best_gap = gap;
                        best_track = track;
                    }
                }
                trace!(
                    "multi track: no free track for {}, falling back to {} ({:.3}° gap)",
                    body.id,
                    best_track,
                    best_gap
                );
                best_track
            }
        };

        body.track = track;
        last_on_track[track] = Some(body.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn working(lons: &[f64]) -> Vec<WorkingBody> {
        lons.iter()
            .enumerate()
            .map(|(i, &lon)| WorkingBody {
                id: format!("b{}", i),
                original: lon,
                current: lon,
                track: 0,
            })
            .collect()
    }

    #[test]
    fn test_assign_tracks_prefers_outermost() {
        let mut data = working(&[10.0, 12.0, 14.0, 40.0]);
        assign_tracks(&mut data, 6.0, 3);
        let tracks: Vec<usize> = data.iter().map(|b| b.track).collect();
        assert_eq!(tracks, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_assign_tracks_falls_back_to_widest_gap() {
        let mut data = working(&[10.0, 12.0, 14.0]);
        assign_tracks(&mut data, 6.0, 2);
        let tracks: Vec<usize> = data.iter().map(|b| b.track).collect();
        // 14 is 4° behind track 0's occupant and 2° behind track 1's
        assert_eq!(tracks, vec![0, 1, 0]);
    }
}

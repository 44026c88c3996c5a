//! Single-ring resolver with house-cusp exclusion zones.

use log::{debug, trace};

use crate::angles::{clockwise_distance, normalize, shortest_distance, FULL_CIRCLE, HALF_CIRCLE};
use crate::chart::{validate_bodies, validate_cusps, AdjustedPosition, CelestialPosition, HouseCusp};
use crate::collision::spread::{repel_pass, Relaxation};
use crate::collision::{finish, prepare, WorkingBody};
use crate::config::SingleTrackSettings;
use crate::error::Result;

/// Spread bodies around one ring, keeping them clear of house cusps.
///
/// `cusps` are only consulted when `avoid_cusps` is set. Every other
/// tunable takes its default from [`SingleTrackSettings`].
pub fn resolve_single_track(
    bodies: &[CelestialPosition],
    cusps: &[HouseCusp],
    min_spacing: f64,
    cusp_buffer: f64,
    avoid_cusps: bool,
) -> Result<Vec<AdjustedPosition>> {
    let settings = SingleTrackSettings {
        min_spacing,
        cusp_buffer,
        avoid_cusps,
        ..SingleTrackSettings::default()
    };
    resolve_single_track_with(bodies, cusps, &settings)
}

pub fn resolve_single_track_with(
    bodies: &[CelestialPosition],
    cusps: &[HouseCusp],
    settings: &SingleTrackSettings,
) -> Result<Vec<AdjustedPosition>> {
    settings.validate()?;
    validate_bodies(bodies)?;
    if settings.avoid_cusps {
        validate_cusps(cusps)?;
    }

    let mut data = prepare(bodies);
    if data.len() < 2 {
        return Ok(finish(data));
    }

    let relax = Relaxation {
        min_spacing: settings.min_spacing,
        tolerance: settings.tolerance,
        nudge: settings.nudge,
        max_iterations: settings.max_iterations,
    };
    let all: Vec<usize> = (0..data.len()).collect();

    let mut iterations = 0;
    let mut converged = false;
    while iterations < settings.max_iterations {
        iterations += 1;

        let mut moved = repel_pass(&mut data, &all, &relax);
        if settings.avoid_cusps {
            moved |= cusp_pass(&mut data, cusps, settings);
        }
        moved |= order_pass(&mut data, settings);

        if !moved {
            converged = true;
            break;
        }
    }

    debug!(
        "single track: {} bodies, {} iterations, converged={}",
        data.len(),
        iterations,
        converged
    );
    Ok(finish(data))
}

/// Push each body out of every cusp buffer it has drifted into.
fn cusp_pass(data: &mut [WorkingBody], cusps: &[HouseCusp], settings: &SingleTrackSettings) -> bool {
    let mut moved = false;
    for body in data.iter_mut() {
        for cusp in cusps {
            let diff = shortest_distance(body.current, cusp.longitude);
            if diff < settings.cusp_buffer {
                let shift = settings.cusp_buffer - diff + settings.cusp_nudge;
                let after_cusp = clockwise_distance(cusp.longitude, body.current) < HALF_CIRCLE;
                body.current = if after_cusp {
                    normalize(body.current + shift)
                } else {
                    normalize(body.current - shift)
                };
                moved = true;
            }
        }
    }
    moved
}

/// Snap a body that has lapped its predecessor back to `min_spacing`
/// after it.
///
/// A large clockwise gap alone is not a lap: on a clustered chart the
/// wraparound pair is the widest gap. The sequence has been inverted
/// only when its cyclic gaps add up to more than one turn.
fn order_pass(data: &mut [WorkingBody], settings: &SingleTrackSettings) -> bool {
    let count = data.len();
    let mut moved = false;
    for i in 0..count {
        let j = (i + 1) % count;
        let gap = clockwise_distance(data[i].current, data[j].current);
        if gap > settings.order_slack && winds_more_than_once(data) {
            let snapped = normalize(data[i].current + settings.min_spacing);
            trace!(
                "order snap: {} {:.3} -> {:.3} after {}",
                data[j].id,
                data[j].current,
                snapped,
                data[i].id
            );
            data[j].current = snapped;
            moved = true;
        }
    }
    moved
}

fn winds_more_than_once(data: &[WorkingBody]) -> bool {
    let count = data.len();
    let turn: f64 = (0..count)
        .map(|i| clockwise_distance(data[i].current, data[(i + 1) % count].current))
        .sum();
    turn > FULL_CIRCLE * 1.5
}

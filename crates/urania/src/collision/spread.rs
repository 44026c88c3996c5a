//! Cyclic repulsion shared by every resolver.

use crate::angles::{clockwise_distance, normalize};
use crate::collision::WorkingBody;

/// Parameters of one repulsion relaxation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Relaxation {
    pub min_spacing: f64,
    /// Gaps within this much of `min_spacing` count as satisfied
    pub tolerance: f64,
    /// Added to each half-deficit so exact ties cannot stall
    pub nudge: f64,
    pub max_iterations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SpreadOutcome {
    pub iterations: usize,
    pub converged: bool,
}

/// One pass over the cyclically adjacent pairs of `members` (indices into
/// `data`, in ascending longitude). Returns whether anything moved.
pub(crate) fn repel_pass(data: &mut [WorkingBody], members: &[usize], relax: &Relaxation) -> bool {
    let count = members.len();
    if count < 2 {
        return false;
    }

    let mut moved = false;
    for k in 0..count {
        let i = members[k];
        let j = members[(k + 1) % count];
        let gap = clockwise_distance(data[i].current, data[j].current);
        if gap < relax.min_spacing - relax.tolerance {
            let shift = (relax.min_spacing - gap) / 2.0 + relax.nudge;
            data[i].current = normalize(data[i].current - shift);
            data[j].current = normalize(data[j].current + shift);
            moved = true;
        }
    }
    moved
}

/// Relax the bodies assigned to `track` until no pair overlaps or the
/// iteration cap is hit.
pub(crate) fn spread_track(data: &mut [WorkingBody], track: usize, relax: &Relaxation) -> SpreadOutcome {
    let members: Vec<usize> = (0..data.len()).filter(|&i| data[i].track == track).collect();
    if members.len() < 2 {
        return SpreadOutcome {
            iterations: 0,
            converged: true,
        };
    }

    for iteration in 0..relax.max_iterations {
        if !repel_pass(data, &members, relax) {
            return SpreadOutcome {
                iterations: iteration + 1,
                converged: true,
            };
        }
    }

    SpreadOutcome {
        iterations: relax.max_iterations,
        converged: false,
    }
}

//! Angular collision resolution.
//!
//! Each resolver takes raw longitudes, sorts them into a cyclic sequence
//! and relaxes it until glyphs on the same track sit at least
//! `min_spacing` apart. Every resolver returns exactly one
//! [`AdjustedPosition`] per input body, in ascending original longitude.

pub mod single;
pub mod spread;
pub mod stacked;
pub mod synastry;

pub use single::{resolve_single_track, resolve_single_track_with};
pub use stacked::{resolve_multi_track, resolve_multi_track_with};
pub use synastry::{resolve_dual_chart, resolve_dual_chart_with};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::angles::normalize;
use crate::chart::{AdjustedPosition, CelestialPosition, HouseCusp};
use crate::config::ResolverSettings;
use crate::error::{LayoutError, Result};

/// Which resolver a ring uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// One ring, pushed clear of house cusps
    SingleTrack,
    /// Concentric tracks chosen greedily; cusps ignored
    MultiTrack,
    /// Two tracks alternating between neighbours, for synastry
    DualChart,
}

impl Strategy {
    pub fn resolve(
        self,
        bodies: &[CelestialPosition],
        cusps: &[HouseCusp],
        settings: &ResolverSettings,
    ) -> Result<Vec<AdjustedPosition>> {
        match self {
            Strategy::SingleTrack => resolve_single_track_with(bodies, cusps, &settings.single_track),
            Strategy::MultiTrack => resolve_multi_track_with(bodies, &settings.multi_track),
            Strategy::DualChart => resolve_dual_chart_with(bodies, &settings.dual_chart),
        }
    }
}

impl FromStr for Strategy {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "single" | "single_track" => Ok(Strategy::SingleTrack),
            "multi" | "multi_track" | "stacked" => Ok(Strategy::MultiTrack),
            "dual" | "dual_chart" | "synastry" => Ok(Strategy::DualChart),
            other => Err(LayoutError::InvalidSetting(format!(
                "unknown strategy '{}' (expected single, multi or dual)",
                other
            ))),
        }
    }
}

/// Mutable working copy of one body during relaxation.
#[derive(Debug, Clone)]
pub(crate) struct WorkingBody {
    pub id: String,
    pub original: f64,
    pub current: f64,
    pub track: usize,
}

/// Sort by normalized longitude. The sort is stable so coincident bodies
/// keep their input order, which keeps output deterministic.
pub(crate) fn prepare(bodies: &[CelestialPosition]) -> Vec<WorkingBody> {
    let mut data: Vec<WorkingBody> = bodies
        .iter()
        .map(|body| WorkingBody {
            id: body.id.clone(),
            original: body.longitude,
            current: normalize(body.longitude),
            track: 0,
        })
        .collect();
    data.sort_by(|a, b| a.current.total_cmp(&b.current));
    data
}

pub(crate) fn finish(data: Vec<WorkingBody>) -> Vec<AdjustedPosition> {
    data.into_iter()
        .map(|body| AdjustedPosition {
            id: body.id,
            original_longitude: body.original,
            adjusted_longitude: body.current,
            track: body.track,
        })
        .collect()
}

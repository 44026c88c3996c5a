//! Collision-free glyph placement for astrological chart wheels.
//!
//! Bodies clustered within a few degrees of each other are spread along
//! one ring ([`resolve_single_track`]), stacked onto concentric tracks
//! ([`resolve_multi_track`]) or split between two tracks for synastry
//! ([`resolve_dual_chart`]). The [`rendering`] module projects the
//! result to screen coordinates.

pub mod angles;
pub mod chart;
pub mod collision;
pub mod config;
pub mod error;
pub mod rendering;

pub use chart::{AdjustedPosition, CelestialPosition, ChartSnapshot, HouseCusp, ZodiacSign};
pub use collision::{
    resolve_dual_chart, resolve_dual_chart_with, resolve_multi_track, resolve_multi_track_with,
    resolve_single_track, resolve_single_track_with, Strategy,
};
pub use config::ResolverSettings;
pub use error::LayoutError;

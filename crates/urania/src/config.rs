//! Resolver tunables.
//!
//! Defaults reproduce the behaviour charts were tuned against. A TOML
//! document with `[single_track]`, `[multi_track]` and `[dual_chart]`
//! tables may override any subset of keys.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{LayoutError, Result};

/// Settings for the single-ring resolver with cusp avoidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleTrackSettings {
    pub min_spacing: f64,
    pub cusp_buffer: f64,
    pub avoid_cusps: bool,
    pub max_iterations: usize,
    /// Clockwise gap above which a neighbour counts as having been lapped
    pub order_slack: f64,
    pub tolerance: f64,
    pub nudge: f64,
    pub cusp_nudge: f64,
}

impl Default for SingleTrackSettings {
    fn default() -> Self {
        Self {
            min_spacing: 8.0,
            cusp_buffer: 3.5,
            avoid_cusps: true,
            max_iterations: 100,
            order_slack: 300.0,
            tolerance: 0.001,
            nudge: 0.05,
            cusp_nudge: 0.1,
        }
    }
}

/// Settings for the greedy multi-track resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiTrackSettings {
    pub min_spacing: f64,
    pub max_tracks: usize,
    pub max_iterations: usize,
    pub tolerance: f64,
    pub nudge: f64,
}

impl Default for MultiTrackSettings {
    fn default() -> Self {
        Self {
            min_spacing: 6.0,
            max_tracks: 2,
            max_iterations: 50,
            tolerance: 0.01,
            nudge: 0.01,
        }
    }
}

/// Settings for the two-track synastry resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DualChartSettings {
    pub min_spacing: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
    pub nudge: f64,
}

impl Default for DualChartSettings {
    fn default() -> Self {
        Self {
            min_spacing: 6.0,
            max_iterations: 50,
            tolerance: 0.1,
            nudge: 0.05,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    pub single_track: SingleTrackSettings,
    pub multi_track: MultiTrackSettings,
    pub dual_chart: DualChartSettings,
}

impl ResolverSettings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: ResolverSettings =
            toml::from_str(text).map_err(|e| LayoutError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            LayoutError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.single_track.validate()?;
        self.multi_track.validate()?;
        self.dual_chart.validate()
    }
}

impl SingleTrackSettings {
    pub fn validate(&self) -> Result<()> {
        check_spacing("single_track.min_spacing", self.min_spacing)?;
        check_non_negative("single_track.cusp_buffer", self.cusp_buffer)?;
        check_iterations("single_track.max_iterations", self.max_iterations)?;
        check_non_negative("single_track.tolerance", self.tolerance)?;
        check_non_negative("single_track.nudge", self.nudge)?;
        check_non_negative("single_track.cusp_nudge", self.cusp_nudge)?;
        if !(self.order_slack > 180.0 && self.order_slack < 360.0) {
            return Err(LayoutError::InvalidSetting(format!(
                "single_track.order_slack must be within (180, 360), got {}",
                self.order_slack
            )));
        }
        Ok(())
    }
}

impl MultiTrackSettings {
    pub fn validate(&self) -> Result<()> {
        check_spacing("multi_track.min_spacing", self.min_spacing)?;
        check_iterations("multi_track.max_iterations", self.max_iterations)?;
        check_non_negative("multi_track.tolerance", self.tolerance)?;
        check_non_negative("multi_track.nudge", self.nudge)
    }
}

impl DualChartSettings {
    pub fn validate(&self) -> Result<()> {
        check_spacing("dual_chart.min_spacing", self.min_spacing)?;
        check_iterations("dual_chart.max_iterations", self.max_iterations)?;
        check_non_negative("dual_chart.tolerance", self.tolerance)?;
        check_non_negative("dual_chart.nudge", self.nudge)
    }
}

fn check_spacing(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidSetting(format!(
            "{} must be a positive number of degrees, got {}",
            name, value
        )))
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidSetting(format!(
            "{} must be finite and non-negative, got {}",
            name, value
        )))
    }
}

fn check_iterations(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(LayoutError::InvalidSetting(format!("{} must be at least 1", name)));
    }
    Ok(())
}

use serde::{Deserialize, Deserializer, Serialize};

use crate::angles::{self, sign_degree, sign_index};
use crate::error::{LayoutError, Result};

/// Zodiac sign, in ecliptic order starting at 0° Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    #[serde(alias = "aries")]
    Aries,
    #[serde(alias = "taurus")]
    Taurus,
    #[serde(alias = "gemini")]
    Gemini,
    #[serde(alias = "cancer")]
    Cancer,
    #[serde(alias = "leo")]
    Leo,
    #[serde(alias = "virgo")]
    Virgo,
    #[serde(alias = "libra")]
    Libra,
    #[serde(alias = "scorpio")]
    Scorpio,
    #[serde(alias = "sagittarius")]
    Sagittarius,
    #[serde(alias = "capricorn")]
    Capricorn,
    #[serde(alias = "aquarius")]
    Aquarius,
    #[serde(alias = "pisces")]
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn from_longitude(longitude: f64) -> Self {
        Self::ALL[sign_index(longitude) as usize]
    }

    /// 0 = Aries .. 11 = Pisces
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Longitude where the sign begins.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * angles::SIGN_SPAN
    }
}

/// A body's position as delivered by the ephemeris layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialPosition {
    /// Body identifier, unique within one chart ("sun", "trueNode", ...)
    pub id: String,
    /// Ecliptic longitude in degrees [0, 360)
    pub longitude: f64,
    pub sign: ZodiacSign,
    /// Whole degrees within the sign (0-29)
    #[serde(deserialize_with = "whole_degree")]
    pub degree: u8,
    #[serde(rename = "isRetrograde", alias = "retrograde", default)]
    pub retrograde: bool,
}

impl CelestialPosition {
    /// Build a position, deriving sign and degree from the longitude.
    pub fn new(id: impl Into<String>, longitude: f64) -> Self {
        Self {
            id: id.into(),
            longitude,
            sign: ZodiacSign::from_longitude(longitude),
            degree: sign_degree(longitude).floor() as u8,
            retrograde: false,
        }
    }

    pub fn retrograde(mut self, retrograde: bool) -> Self {
        self.retrograde = retrograde;
        self
    }

    /// Arc minutes past the whole degree.
    pub fn minutes(&self) -> u8 {
        let within = sign_degree(self.longitude);
        ((within - within.floor()) * 60.0).floor().min(59.0) as u8
    }
}

// The ephemeris service reports the in-sign degree with its fraction.
fn whole_degree<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || !(0.0..30.0).contains(&raw) {
        return Err(serde::de::Error::custom(format!(
            "degree must be within [0, 30), got {}",
            raw
        )));
    }
    Ok(raw.floor() as u8)
}

/// A house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number 1-12
    pub house: u8,
    /// Cusp longitude in degrees [0, 360)
    pub longitude: f64,
}

impl HouseCusp {
    pub fn new(house: u8, longitude: f64) -> Self {
        Self { house, longitude }
    }

    /// Cusps 1, 4, 7 and 10 coincide with ASC, IC, DSC and MC.
    pub fn is_angle(&self) -> bool {
        matches!(self.house, 1 | 4 | 7 | 10)
    }
}

/// Engine output: one per input body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedPosition {
    pub id: String,
    /// The caller's longitude, untouched
    pub original_longitude: f64,
    /// Display longitude in [0, 360)
    pub adjusted_longitude: f64,
    /// 0 = outermost track, increasing inward
    pub track: usize,
}

/// One chart side: bodies plus house cusps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub bodies: Vec<CelestialPosition>,
    #[serde(default)]
    pub houses: Vec<HouseCusp>,
}

impl ChartSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: ChartSnapshot =
            serde_json::from_str(json).map_err(|e| LayoutError::InvalidJson(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> Result<()> {
        validate_bodies(&self.bodies)?;
        validate_cusps(&self.houses)
    }
}

/// Reject NaN and infinite longitudes.
pub fn validate_bodies(bodies: &[CelestialPosition]) -> Result<()> {
    for body in bodies {
        if !body.longitude.is_finite() {
            return Err(LayoutError::InvalidInput {
                id: body.id.clone(),
                field: "longitude",
                value: body.longitude,
            });
        }
    }
    Ok(())
}

/// Reject non-finite cusp longitudes and house numbers outside 1-12.
pub fn validate_cusps(cusps: &[HouseCusp]) -> Result<()> {
    for cusp in cusps {
        if !(1..=12).contains(&cusp.house) {
            return Err(LayoutError::InvalidHouse(cusp.house));
        }
        if !cusp.longitude.is_finite() {
            return Err(LayoutError::InvalidInput {
                id: format!("house_{}", cusp.house),
                field: "longitude",
                value: cusp.longitude,
            });
        }
    }
    Ok(())
}

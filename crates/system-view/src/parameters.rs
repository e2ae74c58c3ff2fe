//! Normalized generator input
//!
//! Every visualization field is optional on the wire. Defaults are applied
//! once, here, so the layout arithmetic can run unconditionally.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use prediction::{Classification, PredictionData};

pub const DEFAULT_STELLAR_RADIUS: f64 = 1.0;
pub const DEFAULT_STELLAR_TYPE: &str = "Unknown Star";
pub const DEFAULT_ORBITAL_PERIOD: f64 = 365.0;
pub const DEFAULT_PLANETARY_RADIUS: f64 = 1.0;
pub const DEFAULT_PLANET_TYPE: &str = "Unknown Planet";
pub const DEFAULT_CONFIDENCE: f64 = 0.0;

/// Fully populated parameters for one generated system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemParameters {
    /// Host star radius (R☉)
    pub stellar_radius: f64,
    pub stellar_type: String,
    /// Orbital period (days), possibly negative if upstream data is corrupt
    pub orbital_period: f64,
    /// Planet radius (R🜨), possibly negative if upstream data is corrupt
    pub planetary_radius: f64,
    pub planet_type: String,
    pub discovery_year: i32,
    pub classification: Classification,
    /// Confidence in percent, passed through unvalidated
    pub confidence: f64,
}

impl SystemParameters {
    /// Normalize a prediction, defaulting the discovery year to this year
    pub fn from_prediction(data: &PredictionData) -> Self {
        Self::from_prediction_in_year(data, current_year())
    }

    /// Normalize a prediction with an explicit fallback discovery year
    pub fn from_prediction_in_year(data: &PredictionData, fallback_year: i32) -> Self {
        let prediction = &data.prediction;
        let viz = data.visualizations.as_ref();

        Self {
            stellar_radius: viz
                .and_then(|v| v.stellar_radius)
                .unwrap_or(DEFAULT_STELLAR_RADIUS),
            stellar_type: viz
                .and_then(|v| v.stellar_type.clone())
                .unwrap_or_else(|| DEFAULT_STELLAR_TYPE.to_string()),
            orbital_period: viz
                .and_then(|v| v.orbital_period)
                .unwrap_or(DEFAULT_ORBITAL_PERIOD),
            planetary_radius: viz
                .and_then(|v| v.planetary_radius)
                .unwrap_or(DEFAULT_PLANETARY_RADIUS),
            planet_type: viz
                .and_then(|v| v.planet_type.clone())
                .unwrap_or_else(|| DEFAULT_PLANET_TYPE.to_string()),
            discovery_year: viz.and_then(|v| v.discovery_year).unwrap_or(fallback_year),
            classification: prediction.classification,
            confidence: if prediction.confidence.is_nan() {
                DEFAULT_CONFIDENCE
            } else {
                prediction.confidence
            },
        }
    }

    /// Orbital period floored at 0 for logarithmic scaling
    pub fn safe_orbital_period(&self) -> f64 {
        clamp_non_negative(self.orbital_period)
    }

    /// Planet radius floored at 0 for logarithmic scaling
    pub fn safe_planetary_radius(&self) -> f64 {
        clamp_non_negative(self.planetary_radius)
    }
}

/// Floor at zero; NaN also maps to zero
pub fn clamp_non_negative(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Current calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

//! Visualization fields attached to a prediction

use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// A single sample of a light curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct LightCurvePoint {
    /// Observation time (days)
    pub time: f64,
    /// Relative flux (dimensionless, ~1.0 out of transit)
    pub flux: f64,
}

/// Derived quantities the service returns alongside its verdict
///
/// Every field is optional: an absent value means "missing", never zero.
/// Consumers substitute their own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct VisualizationData {
    /// Orbital period in days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbital_period: Option<f64>,

    /// Transit duration in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_duration: Option<f64>,

    /// Planet radius in Earth radii (R🜨)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planetary_radius: Option<f64>,

    /// Host star radius in solar radii (R☉)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stellar_radius: Option<f64>,

    #[serde(deserialize_with = "null_as_empty")]
    pub light_curve: Vec<LightCurvePoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stellar_type: Option<String>,

    /// Accepts any integral JSON number, e.g. `2015` or `2015.0`
    #[serde(
        deserialize_with = "integral_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub discovery_year: Option<i32>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<LightCurvePoint>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<LightCurvePoint>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a year written as any JSON number; non-integral or out-of-range values count as absent
fn integral_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let year = Option::<f64>::deserialize(deserializer)?.filter(|v| {
        v.is_finite() && v.fract() == 0.0 && *v >= i32::MIN as f64 && *v <= i32::MAX as f64
    });
    Ok(year.map(|v| v as i32))
}

//! Chart data derived from the visualization block

use serde::Serialize;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::visualization::{LightCurvePoint, VisualizationData};

/// One bar of the "Key Statistics" chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatBar {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// Axis bounds of the light curve chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub struct CurveDomain {
    pub time_min: f64,
    pub time_max: f64,
    pub flux_min: f64,
    pub flux_max: f64,
}

/// Bars for the headline quantities; absent values chart as 0
pub fn key_statistics(viz: &VisualizationData) -> [StatBar; 4] {
    [
        StatBar {
            name: "Orbital Period",
            value: viz.orbital_period.unwrap_or(0.0),
            unit: "days",
        },
        StatBar {
            name: "Transit Duration",
            value: viz.transit_duration.unwrap_or(0.0),
            unit: "hours",
        },
        StatBar {
            name: "Planetary Radius",
            value: viz.planetary_radius.unwrap_or(0.0),
            unit: "R🜨",
        },
        StatBar {
            name: "Stellar Radius",
            value: viz.stellar_radius.unwrap_or(0.0),
            unit: "R☉",
        },
    ]
}

/// Data extent of a light curve, or `None` when there is nothing to plot
///
/// NaN samples are ignored.
pub fn light_curve_domain(points: &[LightCurvePoint]) -> Option<CurveDomain> {
    let finite: Vec<&LightCurvePoint> = points
        .iter()
        .filter(|p| !p.time.is_nan() && !p.flux.is_nan())
        .collect();

    if finite.is_empty() {
        return None;
    }

    let domain = finite.iter().fold(
        CurveDomain {
            time_min: f64::INFINITY,
            time_max: f64::NEG_INFINITY,
            flux_min: f64::INFINITY,
            flux_max: f64::NEG_INFINITY,
        },
        |acc, p| CurveDomain {
            time_min: acc.time_min.min(p.time),
            time_max: acc.time_max.max(p.time),
            flux_min: acc.flux_min.min(p.flux),
            flux_max: acc.flux_max.max(p.flux),
        },
    );

    Some(domain)
}

//! WASM bindings for request building, reply decoding and report data.

use wasm_bindgen::prelude::*;

use prediction::{
    ExoplanetData, FeatureRequest, PredictionData, PredictionResponse, ServiceConfig,
    VisualizationData, demo_inputs as preset_demo_inputs, key_statistics as chart_statistics,
    light_curve_domain as chart_light_curve_domain, prediction_csv as csv_report,
};

use crate::{from_js, to_js};

/// Default service configuration (endpoint, model info, export file name).
#[wasm_bindgen]
pub fn default_config() -> Result<JsValue, JsError> {
    to_js(&ServiceConfig::default())
}

/// Build the JSON request body for the prediction endpoint.
///
/// # Arguments
/// * `input` - An ExoplanetData object from the entry form
///
/// # Returns
/// JSON string `{"features": {...}}`
#[wasm_bindgen]
pub fn build_feature_request(input: JsValue) -> Result<String, JsError> {
    let input: ExoplanetData = from_js(input)?;
    FeatureRequest::from_input(&input)
        .to_json()
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Decode the prediction service reply.
///
/// # Arguments
/// * `json` - Raw response body
///
/// # Returns
/// `{ prediction, visualizations, model }`
#[wasm_bindgen]
pub fn parse_prediction_response(json: &str) -> Result<JsValue, JsError> {
    let response = PredictionResponse::from_json(json).map_err(|e| {
        log::warn!("rejected prediction reply: {}", e);
        JsError::new(&e.to_string())
    })?;
    to_js(&response)
}

/// Render a prediction as the downloadable CSV report.
#[wasm_bindgen]
pub fn prediction_csv(data: JsValue) -> Result<String, JsError> {
    let data: PredictionData = from_js(data)?;
    Ok(csv_report(&data))
}

/// Bars for the "Key Statistics" chart.
#[wasm_bindgen]
pub fn key_statistics(visualizations: JsValue) -> Result<JsValue, JsError> {
    let viz: VisualizationData = from_js(visualizations)?;
    to_js(&chart_statistics(&viz))
}

/// Axis bounds for the light curve chart, or `null` when there are no points.
#[wasm_bindgen]
pub fn light_curve_domain(visualizations: JsValue) -> Result<JsValue, JsError> {
    let viz: VisualizationData = from_js(visualizations)?;
    to_js(&chart_light_curve_domain(&viz.light_curve))
}

/// Example inputs for the entry form, one per classification.
#[wasm_bindgen]
pub fn demo_inputs() -> Result<JsValue, JsError> {
    to_js(&preset_demo_inputs())
}

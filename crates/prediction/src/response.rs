//! Decoding of the prediction service reply
//!
//! The service answers with a flat JSON object:
//!
//! ```json
//! {
//!   "label": "Candidate",
//!   "confidence": 87.5,
//!   "justification": "...",
//!   "visualizations": { "orbitalPeriod": 10.5, ... },
//!   "modelName": "...", "trainAccuracy": 99, "testAccuracy": 95
//! }
//! ```
//!
//! Model fields are optional and fall back to the configured defaults when
//! absent, zero or empty.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::classification::Classification;
use crate::error::PredictionError;
use crate::result::{ModelInfo, Prediction, PredictionData};
use crate::visualization::VisualizationData;

/// Wire shape of the service reply
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResponse {
    label: Option<String>,
    confidence: Option<f64>,
    justification: Option<String>,
    visualizations: Option<VisualizationData>,
    model_name: Option<String>,
    train_accuracy: Option<f64>,
    test_accuracy: Option<f64>,
    error: Option<String>,
}

/// A fully decoded service reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PredictionResponse {
    #[serde(flatten)]
    pub data: PredictionData,
    pub model: ModelInfo,
}

impl PredictionResponse {
    /// Decode a reply using the built-in model defaults
    ///
    /// # Example
    /// ```
    /// use prediction::{Classification, PredictionResponse};
    ///
    /// let reply = r#"{"label": "Confirmed", "confidence": 97, "justification": "Deep, periodic transit"}"#;
    /// let response = PredictionResponse::from_json(reply).unwrap();
    /// assert_eq!(response.data.prediction.classification, Classification::Confirmed);
    /// assert_eq!(response.model.name, "Exoplanet Model 90+");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, PredictionError> {
        Self::from_json_with_defaults(json, &ModelInfo::default())
    }

    /// Decode a reply, filling missing model fields from `defaults`
    pub fn from_json_with_defaults(
        json: &str,
        defaults: &ModelInfo,
    ) -> Result<Self, PredictionError> {
        let raw: RawResponse = serde_json::from_str(json)?;
        Self::from_raw(raw, defaults)
    }

    /// Decode an already parsed JSON value
    pub fn from_value(
        value: serde_json::Value,
        defaults: &ModelInfo,
    ) -> Result<Self, PredictionError> {
        let raw: RawResponse = serde_json::from_value(value)?;
        Self::from_raw(raw, defaults)
    }

    fn from_raw(raw: RawResponse, defaults: &ModelInfo) -> Result<Self, PredictionError> {
        let label = match (raw.label, raw.error) {
            (Some(label), _) => label,
            (None, Some(message)) => return Err(PredictionError::Service(message)),
            (None, None) => return Err(PredictionError::MissingField("label")),
        };
        let classification: Classification = label.parse()?;

        if raw.visualizations.is_none() {
            log::warn!("prediction response carries no visualization block");
        }

        let prediction = Prediction {
            classification,
            confidence: raw.confidence.unwrap_or(0.0),
            justification: raw.justification.unwrap_or_default(),
        };

        let model = ModelInfo {
            name: raw
                .model_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| defaults.name.clone()),
            train_accuracy: truthy(raw.train_accuracy).unwrap_or(defaults.train_accuracy),
            test_accuracy: truthy(raw.test_accuracy).unwrap_or(defaults.test_accuracy),
        };

        log::debug!(
            "decoded prediction: {} ({}%) from {}",
            prediction.classification,
            prediction.confidence,
            model.name
        );

        Ok(Self {
            data: PredictionData::new(prediction, raw.visualizations),
            model,
        })
    }
}

/// Treat zero and NaN as absent, like the dashboard's `||` fallbacks
pub(crate) fn truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

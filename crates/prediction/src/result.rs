//! Decoded prediction types

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::classification::Classification;
use crate::visualization::VisualizationData;

/// The classification verdict for one analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Prediction {
    pub classification: Classification,

    /// Model confidence in percent
    ///
    /// Expected in [0, 100] but passed through exactly as the service sent it.
    pub confidence: f64,

    /// Free-text explanation of the verdict
    pub justification: String,
}

/// A prediction together with its (optional) visualization block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PredictionData {
    pub prediction: Prediction,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualizations: Option<VisualizationData>,
}

impl PredictionData {
    pub fn new(prediction: Prediction, visualizations: Option<VisualizationData>) -> Self {
        Self {
            prediction,
            visualizations,
        }
    }

    /// Visualization block, or an empty one when the service sent none
    pub fn visualizations_or_default(&self) -> VisualizationData {
        self.visualizations.clone().unwrap_or_default()
    }
}

/// Description of the model that produced a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ModelInfo {
    pub name: String,
    /// Training accuracy in percent
    pub train_accuracy: f64,
    /// Held-out test accuracy in percent
    pub test_accuracy: f64,
}

impl Default for ModelInfo {
    fn default() -> Self {
        Self {
            name: "Exoplanet Model 90+".to_string(),
            train_accuracy: 99.0,
            test_accuracy: 95.0,
        }
    }
}

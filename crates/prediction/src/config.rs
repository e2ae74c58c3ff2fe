//! Service configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PredictionError;
use crate::result::ModelInfo;

pub const DEFAULT_ENDPOINT: &str = "https://exo-identifier-production.up.railway.app/predict";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "exoplanet_prediction_results.csv";

/// Where predictions come from and how results are labelled
///
/// Every field has a default, so a partial (or empty) JSON document is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceConfig {
    /// Prediction endpoint accepting a POSTed `FeatureRequest`
    pub endpoint: String,

    /// Model description shown when the service omits one
    pub default_model: ModelInfo,

    /// Suggested file name for CSV downloads
    pub export_file_name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_model: ModelInfo::default(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_json(json: &str) -> Result<Self, PredictionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PredictionError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        log::info!("loaded service config from {}", path.display());
        Ok(config)
    }
}

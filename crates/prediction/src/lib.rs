//! Prediction service data types.
//!
//! This crate models everything that crosses the boundary between the
//! dashboard and the remote exoplanet classification service: the feature
//! payload built from user input, the decoded prediction reply, the chart
//! data derived from it and the downloadable CSV report.

pub mod classification;
pub mod config;
pub mod error;
pub mod export;
pub mod features;
pub mod presets;
pub mod response;
pub mod result;
pub mod statistics;
pub mod visualization;

#[cfg(test)]
mod classification_test;
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod export_test;
#[cfg(test)]
mod statistics_test;

// Re-export main types at crate root
pub use classification::Classification;
pub use config::ServiceConfig;
pub use error::PredictionError;
pub use result::{ModelInfo, Prediction, PredictionData};
pub use visualization::{LightCurvePoint, VisualizationData};

// Re-export operations
pub use export::{js_number, prediction_csv};
pub use features::{ExoplanetData, FeatureRequest, InputMode, KoiFeatures, submission};
pub use presets::{DemoInput, demo_inputs, initial_manual_input, sample_input};
pub use response::PredictionResponse;
pub use statistics::{CurveDomain, StatBar, key_statistics, light_curve_domain};

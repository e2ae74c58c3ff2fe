use crate::config::{DEFAULT_ENDPOINT, ServiceConfig};
use crate::error::PredictionError;
use crate::result::ModelInfo;

#[test]
fn test_empty_document_is_default() {
    let config = ServiceConfig::from_json("{}").unwrap();
    assert_eq!(config, ServiceConfig::default());
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.export_file_name, "exoplanet_prediction_results.csv");
}

#[test]
fn test_partial_override() {
    let config = ServiceConfig::from_json(
        r#"{"endpoint": "http://localhost:5000/predict", "defaultModel": {"name": "Local RF", "trainAccuracy": 97, "testAccuracy": 91}}"#,
    )
    .unwrap();

    assert_eq!(config.endpoint, "http://localhost:5000/predict");
    assert_eq!(
        config.default_model,
        ModelInfo {
            name: "Local RF".to_string(),
            train_accuracy: 97.0,
            test_accuracy: 91.0,
        }
    );
    assert_eq!(config.export_file_name, "exoplanet_prediction_results.csv");
}

#[test]
fn test_invalid_document() {
    let err = ServiceConfig::from_json(r#"{"endpoint": 42}"#).unwrap_err();
    assert!(matches!(err, PredictionError::Json(_)));
}

#[test]
fn test_load_missing_file() {
    let err = ServiceConfig::load("/nonexistent/exo-config.json").unwrap_err();
    assert!(matches!(err, PredictionError::Io(_)));
}

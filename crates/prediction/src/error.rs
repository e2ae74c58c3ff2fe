use thiserror::Error;

/// Errors raised at the prediction service boundary.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unknown classification label: {0:?}")]
    UnknownClassification(String),

    #[error("prediction service reported an error: {0}")]
    Service(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

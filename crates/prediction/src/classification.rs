//! Classification labels returned by the prediction service

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::PredictionError;

/// Verdict of the classification model for a candidate signal
///
/// The label is opaque to this workspace: it is displayed and copied into
/// reports but never drives any computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum Classification {
    /// Planet confirmed by follow-up observation
    Confirmed,

    /// Plausible planet awaiting confirmation
    Candidate,

    /// Signal explained by something other than a transiting planet
    #[serde(rename = "False Positive", alias = "FalsePositive")]
    FalsePositive,
}

impl Classification {
    /// Display label, identical to the wire representation
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Candidate => "Candidate",
            Self::FalsePositive => "False Positive",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Confirmed, Self::Candidate, Self::FalsePositive]
    }
}

impl FromStr for Classification {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Confirmed" => Ok(Self::Confirmed),
            "Candidate" => Ok(Self::Candidate),
            "False Positive" | "FalsePositive" => Ok(Self::FalsePositive),
            other => Err(PredictionError::UnknownClassification(other.to_string())),
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

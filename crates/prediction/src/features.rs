//! Analysis request payload
//!
//! The dashboard collects transit and stellar parameters from the user and
//! submits them to the service as Kepler Object of Interest (KOI) features.
//! Advanced parameters the user left empty are filled with typical values.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::response::truthy;

/// Planet radius fallback (Earth radii)
pub const DEFAULT_PLANET_RADIUS: f64 = 1.2;
/// Equilibrium temperature fallback (K)
pub const DEFAULT_EQUILIBRIUM_TEMP: f64 = 500.0;
/// Insolation flux fallback (Earth flux)
pub const DEFAULT_INSOLATION: f64 = 140.0;
/// Transit signal-to-noise fallback
pub const DEFAULT_MODEL_SNR: f64 = 10.0;
/// Stellar effective temperature fallback (K)
pub const DEFAULT_STELLAR_TEMP: f64 = 5700.0;
/// Stellar surface gravity fallback (log10 cgs)
pub const DEFAULT_STELLAR_LOGG: f64 = 4.4;
/// Stellar radius fallback (solar radii)
pub const DEFAULT_STELLAR_RADIUS: f64 = 1.0;

/// Parameters entered by the user, either manually or via an uploaded file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ExoplanetData {
    /// Name of an uploaded light-curve file (file mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbital_period: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equilibrium_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insolation: Option<f64>,
    #[serde(rename = "modelSNR", skip_serializing_if = "Option::is_none")]
    pub model_snr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stellar_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stellar_logg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stellar_radius: Option<f64>,
}

/// KOI feature vector expected by the classification model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct KoiFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub koi_period: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub koi_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub koi_depth: Option<f64>,
    pub koi_prad: f64,
    pub koi_teq: f64,
    pub koi_insol: f64,
    pub koi_model_snr: f64,
    pub koi_steff: f64,
    pub koi_slogg: f64,
    pub koi_srad: f64,
}

/// Request body posted to the prediction endpoint: `{"features": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct FeatureRequest {
    pub features: KoiFeatures,
}

impl FeatureRequest {
    /// Build the request for a set of user parameters
    ///
    /// Period, duration and depth are forwarded as given. The remaining
    /// features fall back to typical values when absent, zero or NaN.
    ///
    /// # Example
    /// ```
    /// use prediction::{ExoplanetData, FeatureRequest};
    ///
    /// let input = ExoplanetData {
    ///     orbital_period: Some(10.5),
    ///     ..Default::default()
    /// };
    /// let request = FeatureRequest::from_input(&input);
    /// assert_eq!(request.features.koi_period, Some(10.5));
    /// assert_eq!(request.features.koi_steff, 5700.0);
    /// ```
    pub fn from_input(input: &ExoplanetData) -> Self {
        let features = KoiFeatures {
            koi_period: input.orbital_period,
            koi_duration: input.transit_duration,
            koi_depth: input.transit_depth,
            koi_prad: truthy(input.planet_radius).unwrap_or(DEFAULT_PLANET_RADIUS),
            koi_teq: truthy(input.equilibrium_temp).unwrap_or(DEFAULT_EQUILIBRIUM_TEMP),
            koi_insol: truthy(input.insolation).unwrap_or(DEFAULT_INSOLATION),
            koi_model_snr: truthy(input.model_snr).unwrap_or(DEFAULT_MODEL_SNR),
            koi_steff: truthy(input.stellar_temp).unwrap_or(DEFAULT_STELLAR_TEMP),
            koi_slogg: truthy(input.stellar_logg).unwrap_or(DEFAULT_STELLAR_LOGG),
            koi_srad: truthy(input.stellar_radius).unwrap_or(DEFAULT_STELLAR_RADIUS),
        };
        Self { features }
    }

    /// Serialize to the JSON body sent to the service
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// How the user supplies parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum InputMode {
    #[default]
    Manual,
    File,
}

/// Select what gets submitted for the current input mode
///
/// File mode submits only the chosen file's name and yields nothing until a
/// file has been chosen. Manual mode submits the manual record unchanged.
pub fn submission(
    mode: InputMode,
    file_name: Option<&str>,
    manual: &ExoplanetData,
) -> Option<ExoplanetData> {
    match mode {
        InputMode::File => file_name
            .filter(|name| !name.is_empty())
            .map(|name| ExoplanetData {
                file_name: Some(name.to_string()),
                ..Default::default()
            }),
        InputMode::Manual => Some(manual.clone()),
    }
}

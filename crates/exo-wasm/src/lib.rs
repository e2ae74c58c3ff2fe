//! WASM bindings for the exoplanet prediction dashboard.
//!
//! Exposes request building, reply decoding, chart data, CSV export and the
//! 3D system layout to the browser frontend.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, {
//!     build_feature_request,
//!     parse_prediction_response,
//!     generate_scene,
//! } from 'exo-wasm';
//!
//! await init();
//!
//! const body = build_feature_request({ orbitalPeriod: 10.5, transitDuration: 3.2 });
//! const reply = await fetch(endpoint, { method: 'POST', body }).then(r => r.text());
//! const response = parse_prediction_response(reply);
//! const scene = generate_scene(response);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

mod dashboard;
mod system;

/// Convert to a plain JS value; maps become objects so detail panels can
/// iterate them with `Object.entries`
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

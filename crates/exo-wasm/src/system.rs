//! WASM bindings for the 3D system view.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use wasm_bindgen::prelude::*;

use prediction::PredictionData;
use system_view::{SystemScene, generate_system_random, generate_system_seeded};

use crate::{from_js, to_js};

/// Generate the system layout for a prediction.
///
/// Filler planets are freshly randomized on every call; the host star and
/// the analyzed exoplanet depend only on the prediction.
///
/// # Arguments
/// * `data` - A PredictionData object (`{ prediction, visualizations }`)
///
/// # Returns
/// Array of CelestialObject, sorted by distance from the star
#[wasm_bindgen]
pub fn generate_system(data: JsValue) -> Result<JsValue, JsError> {
    let data: PredictionData = from_js(data)?;
    to_js(&generate_system_random(&data))
}

/// Generate a reproducible system layout.
///
/// # Arguments
/// * `data` - A PredictionData object
/// * `seed` - Random seed for the filler planets
#[wasm_bindgen]
pub fn generate_system_from_seed(data: JsValue, seed: u64) -> Result<JsValue, JsError> {
    let data: PredictionData = from_js(data)?;
    to_js(&generate_system_seeded(&data, seed))
}

/// Generate the full 3D scene: bodies, glows, orbit highlight, hover labels
/// and asteroid belt.
///
/// # Arguments
/// * `data` - A PredictionData object
/// * `seed` - Random seed for filler planets and asteroids
#[wasm_bindgen]
pub fn generate_scene(data: JsValue, seed: u64) -> Result<JsValue, JsError> {
    let data: PredictionData = from_js(data)?;
    let mut rng = ChaChaRng::seed_from_u64(seed);
    to_js(&SystemScene::build(&data, &mut rng))
}

//! Synthetic planetary system for the 3D prediction view.
//!
//! Turns a decoded prediction into a small renderable system: one host star,
//! the analyzed exoplanet, and three randomized context planets, plus the
//! scene decorations drawn around them.
//!
//! ```
//! use prediction::PredictionResponse;
//! use system_view::{CelestialKind, generate_system_seeded};
//!
//! let reply = r#"{"label": "Candidate", "confidence": 88, "visualizations": {"orbitalPeriod": 99}}"#;
//! let response = PredictionResponse::from_json(reply).unwrap();
//!
//! let system = generate_system_seeded(&response.data, 7);
//! let exoplanet = system.iter().find(|o| o.kind == CelestialKind::Exoplanet).unwrap();
//! assert!((exoplanet.distance - 11.0).abs() < 1e-9);
//! ```

pub mod celestial;
pub mod color;
pub mod layout;
pub mod parameters;
pub mod scene;

#[cfg(test)]
mod celestial_test;
#[cfg(test)]
mod parameters_test;
#[cfg(test)]
mod scene_test;

// Re-export main types at crate root
pub use celestial::{CelestialKind, CelestialObject, InfoMap, InfoValue};
pub use color::{ColorError, DisplayColor};
pub use parameters::SystemParameters;
pub use scene::{Asteroid, AsteroidBelt, Glow, HoverLabel, OrbitRing, SystemScene};

// Re-export generation functions
pub use layout::{
    filler_planets, generate_from_parameters, generate_system, generate_system_random,
    generate_system_seeded,
};

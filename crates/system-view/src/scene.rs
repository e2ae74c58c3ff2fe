//! Full 3D scene description
//!
//! Wraps the generated bodies with the decorations the viewer draws around
//! them: glow halos, the highlighted exoplanet orbit, hover labels and a
//! ring-shaped asteroid belt. Everything here is plain data; mapping it onto
//! primitives is up to the renderer.

use std::f64::consts::TAU;

use nalgebra::Point3;
use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use prediction::PredictionData;

use crate::celestial::{CelestialKind, CelestialObject};
use crate::color::DisplayColor;
use crate::layout::generate_system;

/// Halo radius relative to the body it surrounds
const GLOW_SCALE: f64 = 1.5;
const GLOW_OPACITY: f64 = 0.3;

/// Gap between a body's surface and its hover label
const LABEL_OFFSET: f64 = 0.3;

const ORBIT_TUBE_RADIUS: f64 = 0.015;

pub const ASTEROID_COUNT: usize = 200;
const BELT_RADIUS: f64 = 22.0;
/// Full radial width of the belt
const BELT_WIDTH: f64 = 5.0;
/// Full vertical thickness of the belt
const BELT_THICKNESS: f64 = 0.3;
const ASTEROID_MIN_SIZE: f64 = 0.05;
const ASTEROID_SIZE_RANGE: f64 = 0.12;

/// Translucent halo drawn around the star and the analyzed exoplanet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Glow {
    pub object_id: String,
    pub radius: f64,
    #[cfg_attr(feature = "tsify", tsify(type = "string"))]
    pub color: DisplayColor,
    pub opacity: f64,
}

/// Highlighted circular orbit in the ecliptic plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct OrbitRing {
    pub radius: f64,
    pub tube_radius: f64,
    #[cfg_attr(feature = "tsify", tsify(type = "string"))]
    pub color: DisplayColor,
}

/// Text shown while hovering a body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct HoverLabel {
    pub object_id: String,
    pub text: String,
    /// Height above the body's center
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Asteroid {
    #[cfg_attr(feature = "tsify", tsify(type = "[number, number, number]"))]
    pub position: Point3<f64>,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct AsteroidBelt {
    #[cfg_attr(feature = "tsify", tsify(type = "string"))]
    pub color: DisplayColor,
    pub asteroids: Vec<Asteroid>,
}

impl AsteroidBelt {
    /// Scatter `count` rocks in a thin ring of radius ~22 around the star
    pub fn generate(rng: &mut ChaChaRng, count: usize) -> Self {
        let asteroids = (0..count)
            .map(|_| {
                let angle = rng.random::<f64>() * TAU;
                let radius = BELT_RADIUS + (rng.random::<f64>() - 0.5) * BELT_WIDTH;
                let y = (rng.random::<f64>() - 0.5) * BELT_THICKNESS;
                Asteroid {
                    position: Point3::new(angle.cos() * radius, y, angle.sin() * radius),
                    radius: rng.random::<f64>() * ASTEROID_SIZE_RANGE + ASTEROID_MIN_SIZE,
                }
            })
            .collect();

        Self {
            color: DisplayColor::UMBER,
            asteroids,
        }
    }
}

/// Everything the 3D view renders for one prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SystemScene {
    /// Bodies sorted by distance from the star
    pub objects: Vec<CelestialObject>,
    pub glows: Vec<Glow>,
    pub exoplanet_orbit: Option<OrbitRing>,
    pub labels: Vec<HoverLabel>,
    pub asteroid_belt: AsteroidBelt,
}

impl SystemScene {
    /// Generate bodies and decorations for a prediction
    pub fn build(data: &PredictionData, rng: &mut ChaChaRng) -> Self {
        let objects = generate_system(data, rng);
        Self::from_objects(objects, rng)
    }

    /// Decorate an already generated set of bodies
    pub fn from_objects(objects: Vec<CelestialObject>, rng: &mut ChaChaRng) -> Self {
        let glows = objects
            .iter()
            .filter_map(|object| {
                let color = match object.kind {
                    CelestialKind::Star => DisplayColor::GOLD,
                    CelestialKind::Exoplanet => DisplayColor::CYAN,
                    CelestialKind::Planet => return None,
                };
                Some(Glow {
                    object_id: object.id.clone(),
                    radius: object.radius * GLOW_SCALE,
                    color,
                    opacity: GLOW_OPACITY,
                })
            })
            .collect();

        let exoplanet_orbit = objects
            .iter()
            .find(|object| object.kind == CelestialKind::Exoplanet)
            .map(|exoplanet| OrbitRing {
                radius: exoplanet.distance,
                tube_radius: ORBIT_TUBE_RADIUS,
                color: DisplayColor::CYAN,
            });

        let labels = objects
            .iter()
            .map(|object| HoverLabel {
                object_id: object.id.clone(),
                text: object.label(),
                height: object.radius + LABEL_OFFSET,
            })
            .collect();

        Self {
            objects,
            glows,
            exoplanet_orbit,
            labels,
            asteroid_belt: AsteroidBelt::generate(rng, ASTEROID_COUNT),
        }
    }

    /// Look up a body by id, e.g. for the selection detail panel
    pub fn find(&self, id: &str) -> Option<&CelestialObject> {
        self.objects.iter().find(|object| object.id == id)
    }

    pub fn star(&self) -> Option<&CelestialObject> {
        self.objects.iter().find(|o| o.kind == CelestialKind::Star)
    }

    pub fn exoplanet(&self) -> Option<&CelestialObject> {
        self.objects
            .iter()
            .find(|o| o.kind == CelestialKind::Exoplanet)
    }
}

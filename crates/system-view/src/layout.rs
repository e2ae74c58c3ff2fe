//! Synthetic system layout
//!
//! Builds the bodies shown in the 3D view of a prediction: the host star at
//! the origin, the analyzed exoplanet on a log-scaled orbit, and three
//! randomized rocky planets placed further out for context.
//!
//! The star and exoplanet are a pure function of the prediction. Only the
//! filler planets draw from the RNG, so a seeded `ChaChaRng` reproduces a
//! layout exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use uuid::Uuid;

use prediction::PredictionData;

use crate::celestial::{CelestialKind, CelestialObject, InfoMap};
use crate::color::DisplayColor;
use crate::parameters::{SystemParameters, clamp_non_negative};

// =============================================================================
// Scaling
// =============================================================================

/// Smallest visual radius of the host star
pub const STAR_MIN_RADIUS: f64 = 1.0;

/// Smallest visual radius of any planet
pub const PLANET_MIN_RADIUS: f64 = 0.1;

/// Star visual radius per solar radius
const STAR_RADIUS_SCALE: f64 = 0.8;

/// Visual distance per decade of orbital period
const DISTANCE_PER_DECADE: f64 = 5.0;

/// Planet visual radius per (radius × log10(radius + 1))
const PLANET_RADIUS_SCALE: f64 = 0.05;

// =============================================================================
// Filler planets
// =============================================================================

const FILLER_COUNT: usize = 3;

/// Guaranteed gap between consecutive filler orbits
const FILLER_SPACING: f64 = 4.0;

/// Upper bound of the random extra distance added to each filler orbit
const FILLER_JITTER: f64 = 5.0;

/// Filler radii (Earth radii) are drawn from (MIN, MAX]
const FILLER_RADIUS_MIN: f64 = 1.0;
const FILLER_RADIUS_MAX: f64 = 5.0;

const FILLER_COLORS: [DisplayColor; FILLER_COUNT] =
    [DisplayColor::SAND, DisplayColor::ICE, DisplayColor::RUST];

pub const STAR_ID: &str = "host-star";
pub const EXOPLANET_ID: &str = "exoplanet";

/// Visual radius of a star with the given radius in solar radii
pub fn star_visual_radius(stellar_radius: f64) -> f64 {
    (stellar_radius * STAR_RADIUS_SCALE).max(STAR_MIN_RADIUS)
}

/// Visual radius of a planet with the given radius in Earth radii
///
/// Negative input is treated as zero, so the result is always at least
/// [`PLANET_MIN_RADIUS`].
pub fn planet_visual_radius(planet_radius: f64) -> f64 {
    let r = clamp_non_negative(planet_radius);
    (r * PLANET_RADIUS_SCALE * (r + 1.0).log10()).max(PLANET_MIN_RADIUS)
}

/// Visual orbit distance for a period in days around a star of the given radius
///
/// Negative periods are treated as zero. The result never goes below zero,
/// even for a corrupt negative stellar radius.
pub fn orbit_distance(orbital_period: f64, stellar_radius: f64) -> f64 {
    let p = clamp_non_negative(orbital_period);
    clamp_non_negative(DISTANCE_PER_DECADE * (p + 1.0).log10() + stellar_radius)
}

/// The host star, fixed at the origin
pub fn host_star(params: &SystemParameters) -> CelestialObject {
    CelestialObject {
        id: STAR_ID.to_string(),
        kind: CelestialKind::Star,
        radius: star_visual_radius(params.stellar_radius),
        distance: 0.0,
        color: DisplayColor::GOLD,
        info: InfoMap::named("Host Star")
            .with(InfoMap::TYPE, params.stellar_type.as_str())
            .with("Radius (R☉)", params.stellar_radius),
    }
}

/// The analyzed object, carrying the prediction's verdict in its details
pub fn analyzed_exoplanet(params: &SystemParameters) -> CelestialObject {
    if params.orbital_period < 0.0 || params.planetary_radius < 0.0 {
        log::warn!(
            "negative exoplanet inputs clamped for layout (period {}, radius {})",
            params.orbital_period,
            params.planetary_radius
        );
    }

    CelestialObject {
        id: EXOPLANET_ID.to_string(),
        kind: CelestialKind::Exoplanet,
        radius: planet_visual_radius(params.safe_planetary_radius()),
        distance: orbit_distance(params.safe_orbital_period(), params.stellar_radius),
        color: DisplayColor::CYAN,
        info: InfoMap::named("Analyzed Object")
            .with(InfoMap::TYPE, params.planet_type.as_str())
            .with("Classification", params.classification.label())
            .with("Confidence", format!("{}%", params.confidence))
            .with("Orbital Period (days)", params.orbital_period)
            .with("Radius (R🜨)", params.planetary_radius)
            .with("Discovery Year", params.discovery_year),
    }
}

/// Letter designation of a filler planet: B, C, D, ...
///
/// The host star is the implicit "A".
fn filler_letter(index: usize) -> char {
    char::from(b'B' + index as u8)
}

/// Randomized context planets orbiting beyond `inner_distance`
///
/// Filler `i` sits at `inner_distance + U[0, 5) + 4 (i + 1)`, so each one's
/// lower bound lies further out than the previous one's.
pub fn filler_planets(inner_distance: f64, rng: &mut ChaChaRng) -> Vec<CelestialObject> {
    (0..FILLER_COUNT)
        .map(|i| {
            let jitter = rng.random::<f64>() * FILLER_JITTER;
            let distance = inner_distance + jitter + (i + 1) as f64 * FILLER_SPACING;

            // random() is in [0, 1), so this lands in (MIN, MAX]
            let planet_radius = FILLER_RADIUS_MAX
                - rng.random::<f64>() * (FILLER_RADIUS_MAX - FILLER_RADIUS_MIN);

            CelestialObject {
                id: format!("planet-{}", i),
                kind: CelestialKind::Planet,
                radius: planet_visual_radius(planet_radius),
                distance,
                color: FILLER_COLORS[i],
                info: InfoMap::named(format!("Planet {}", filler_letter(i)))
                    .with(InfoMap::TYPE, "Rocky Planet"),
            }
        })
        .collect()
}

/// Generate the system for normalized parameters
///
/// Returns star, exoplanet and fillers stably sorted by distance.
pub fn generate_from_parameters(
    params: &SystemParameters,
    rng: &mut ChaChaRng,
) -> Vec<CelestialObject> {
    let star = host_star(params);
    let exoplanet = analyzed_exoplanet(params);
    let fillers = filler_planets(exoplanet.distance, rng);

    let mut system = Vec::with_capacity(2 + FILLER_COUNT);
    system.push(star);
    system.push(exoplanet);
    system.extend(fillers);

    // sort_by is stable: equal distances keep generation order
    system.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    log::debug!(
        "generated system layout: {} bodies, outermost at {:.2}",
        system.len(),
        system.last().map(|o| o.distance).unwrap_or_default()
    );

    system
}

/// Generate the system for a prediction
///
/// Never fails: absent visualization fields are replaced with defaults and
/// numeric inputs are clamped before any logarithm.
///
/// # Example
/// ```
/// use prediction::{Classification, Prediction, PredictionData};
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use system_view::{CelestialKind, generate_system};
///
/// let data = PredictionData::new(
///     Prediction {
///         classification: Classification::Confirmed,
///         confidence: 97.0,
///         justification: String::new(),
///     },
///     None,
/// );
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let system = generate_system(&data, &mut rng);
///
/// assert_eq!(system.len(), 5);
/// assert_eq!(system[0].kind, CelestialKind::Star);
/// assert_eq!(system[0].distance, 0.0);
/// ```
pub fn generate_system(data: &PredictionData, rng: &mut ChaChaRng) -> Vec<CelestialObject> {
    generate_from_parameters(&SystemParameters::from_prediction(data), rng)
}

/// Generate the system with filler planets reproducible from `seed`
pub fn generate_system_seeded(data: &PredictionData, seed: u64) -> Vec<CelestialObject> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    generate_system(data, &mut rng)
}

/// Generate the system with freshly randomized filler planets
pub fn generate_system_random(data: &PredictionData) -> Vec<CelestialObject> {
    generate_system_seeded(data, Uuid::new_v4().as_u64_pair().0)
}

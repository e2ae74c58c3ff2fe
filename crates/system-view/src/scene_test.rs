use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use prediction::{Classification, Prediction, PredictionData, VisualizationData};

use crate::celestial::CelestialKind;
use crate::color::DisplayColor;
use crate::scene::{ASTEROID_COUNT, AsteroidBelt, SystemScene};

fn scene(seed: u64) -> SystemScene {
    let data = PredictionData::new(
        Prediction {
            classification: Classification::Candidate,
            confidence: 74.0,
            justification: String::new(),
        },
        Some(VisualizationData {
            orbital_period: Some(99.0),
            stellar_radius: Some(1.0),
            planet_type: Some("Hot Neptune".to_string()),
            ..Default::default()
        }),
    );
    let mut rng = ChaChaRng::seed_from_u64(seed);
    SystemScene::build(&data, &mut rng)
}

#[test]
fn scene_glows_only_star_and_exoplanet() {
    let scene = scene(1);
    assert_eq!(scene.glows.len(), 2);

    let star = scene.star().unwrap();
    let star_glow = scene
        .glows
        .iter()
        .find(|g| g.object_id == star.id)
        .unwrap();
    assert_relative_eq!(star_glow.radius, star.radius * 1.5);
    assert_eq!(star_glow.color, DisplayColor::GOLD);

    let exoplanet = scene.exoplanet().unwrap();
    let exo_glow = scene
        .glows
        .iter()
        .find(|g| g.object_id == exoplanet.id)
        .unwrap();
    assert_eq!(exo_glow.color, DisplayColor::CYAN);
    assert_relative_eq!(exo_glow.opacity, 0.3);
}

#[test]
fn scene_orbit_matches_exoplanet_distance() {
    let scene = scene(2);
    let orbit = scene.exoplanet_orbit.as_ref().unwrap();
    assert_relative_eq!(orbit.radius, scene.exoplanet().unwrap().distance);
    assert_relative_eq!(orbit.radius, 11.0, epsilon = 1e-12);
}

#[test]
fn scene_labels() {
    let scene = scene(3);
    assert_eq!(scene.labels.len(), scene.objects.len());

    let exo_label = scene
        .labels
        .iter()
        .find(|l| l.object_id == "exoplanet")
        .unwrap();
    assert_eq!(exo_label.text, "Analyzed Object (Hot Neptune)");
    assert_relative_eq!(exo_label.height, scene.find("exoplanet").unwrap().radius + 0.3);

    let star_label = scene
        .labels
        .iter()
        .find(|l| l.object_id == "host-star")
        .unwrap();
    assert_eq!(star_label.text, "Host Star (Unknown Star)");
}

#[test]
fn scene_find_by_id() {
    let scene = scene(4);
    assert_eq!(
        scene.find("planet-1").map(|o| o.kind),
        Some(CelestialKind::Planet)
    );
    assert!(scene.find("planet-3").is_none());
}

#[test]
fn asteroid_belt_bounds() {
    let mut rng = ChaChaRng::seed_from_u64(17);
    let belt = AsteroidBelt::generate(&mut rng, ASTEROID_COUNT);

    assert_eq!(belt.asteroids.len(), 200);
    assert_eq!(belt.color.to_hex(), "#5C4033");

    for asteroid in &belt.asteroids {
        let p = asteroid.position;
        let ring_radius = (p.x * p.x + p.z * p.z).sqrt();
        assert!((19.5 - 1e-9..=24.5 + 1e-9).contains(&ring_radius));
        assert!(p.y.abs() <= 0.15);
        assert!(asteroid.radius >= 0.05 && asteroid.radius < 0.17);
    }
}

#[test]
fn scene_is_reproducible_from_seed() {
    assert_eq!(scene(5), scene(5));
}

#[cfg(feature = "tsify")]
#[test]
fn scene_typescript_declaration() {
    use tsify_next::Tsify;

    use crate::scene::Asteroid;

    assert!(SystemScene::DECL.contains("asteroidBelt"));
    assert!(Asteroid::DECL.contains("[number, number, number]"));
}

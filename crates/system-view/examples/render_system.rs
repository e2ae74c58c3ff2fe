//! Print the 3D layout and CSV report for a prediction reply
//!
//! Usage: cargo run -p system-view --example render_system -- [reply.json] [seed]
//!
//! Without a file, a built-in sample reply is used. Set RUST_LOG=debug to see
//! generation details.

use flexi_logger::Logger;

use prediction::{PredictionResponse, ServiceConfig, key_statistics, prediction_csv};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use system_view::SystemScene;

const SAMPLE_REPLY: &str = r#"{
    "label": "Confirmed",
    "confidence": 96.4,
    "justification": "Repeated U-shaped transits with consistent depth",
    "visualizations": {
        "orbitalPeriod": 365.25,
        "transitDuration": 13,
        "planetaryRadius": 1.2,
        "stellarRadius": 1.0,
        "lightCurve": [
            {"time": -0.3, "flux": 1.0},
            {"time": -0.1, "flux": 0.9992},
            {"time": 0.0, "flux": 0.9916},
            {"time": 0.1, "flux": 0.9993},
            {"time": 0.3, "flux": 1.0}
        ],
        "planetType": "Terrestrial",
        "stellarType": "G-type main sequence",
        "discoveryYear": 2015
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Logger::try_with_env_or_str("info")?.start()?;

    let mut args = std::env::args().skip(1);
    let reply = match args.next() {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_REPLY.to_string(),
    };
    let seed = args
        .next()
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(42);

    let config = ServiceConfig::default();
    let response = PredictionResponse::from_json_with_defaults(&reply, &config.default_model)?;
    log::info!(
        "{} with {}% confidence ({})",
        response.data.prediction.classification,
        response.data.prediction.confidence,
        response.model.name
    );

    let mut rng = ChaChaRng::seed_from_u64(seed);
    let scene = SystemScene::build(&response.data, &mut rng);

    println!("id,type,radius,distance,color,label");
    for object in &scene.objects {
        println!(
            "{},{},{:.3},{:.3},{},{}",
            object.id,
            object.kind,
            object.radius,
            object.distance,
            object.color,
            object.label()
        );
    }

    if let Some(orbit) = &scene.exoplanet_orbit {
        println!("\nexoplanet orbit radius: {:.3}", orbit.radius);
    }

    println!("\nkey statistics:");
    for bar in key_statistics(&response.data.visualizations_or_default()) {
        println!("  {:<18} {:>10} {}", bar.name, bar.value, bar.unit);
    }

    println!("\n{}:", config.export_file_name);
    println!("{}", prediction_csv(&response.data));

    Ok(())
}

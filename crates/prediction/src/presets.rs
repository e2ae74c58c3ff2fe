//! Built-in example inputs offered by the data entry form

use serde::Serialize;

use crate::features::ExoplanetData;

/// A labelled example input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoInput {
    pub label: &'static str,
    pub data: ExoplanetData,
}

#[allow(clippy::too_many_arguments)]
fn koi(
    orbital_period: f64,
    transit_duration: f64,
    transit_depth: f64,
    planet_radius: f64,
    equilibrium_temp: f64,
    insolation: f64,
    model_snr: f64,
    stellar_temp: f64,
    stellar_logg: f64,
    stellar_radius: f64,
) -> ExoplanetData {
    ExoplanetData {
        file_name: None,
        orbital_period: Some(orbital_period),
        transit_duration: Some(transit_duration),
        transit_depth: Some(transit_depth),
        planet_radius: Some(planet_radius),
        equilibrium_temp: Some(equilibrium_temp),
        insolation: Some(insolation),
        model_snr: Some(model_snr),
        stellar_temp: Some(stellar_temp),
        stellar_logg: Some(stellar_logg),
        stellar_radius: Some(stellar_radius),
    }
}

/// One example per classification outcome, in display order
pub fn demo_inputs() -> Vec<DemoInput> {
    vec![
        DemoInput {
            label: "False Positive",
            data: koi(0.85, 0.5, 0.001, 0.5, 900.0, 3000.0, 3.0, 6200.0, 4.3, 1.1),
        },
        DemoInput {
            label: "Candidate",
            data: koi(10.5, 3.2, 0.007, 1.5, 550.0, 140.0, 10.0, 5700.0, 4.4, 1.0),
        },
        DemoInput {
            label: "Confirmed",
            data: koi(365.25, 13.0, 0.01, 1.2, 500.0, 140.0, 12.0, 5700.0, 4.4, 1.0),
        },
    ]
}

/// Earth-analog parameters loaded by "Load sample"
pub fn sample_input() -> ExoplanetData {
    koi(365.25, 13.0, 0.008, 1.2, 500.0, 140.0, 10.0, 5700.0, 4.4, 1.0)
}

/// Values the manual entry form starts with
pub fn initial_manual_input() -> ExoplanetData {
    koi(11.8, 3.5, 0.01, 1.2, 500.0, 140.0, 10.0, 5700.0, 4.4, 1.0)
}

use prediction::{Classification, Prediction, PredictionData, VisualizationData};

use crate::parameters::{SystemParameters, clamp_non_negative, current_year};

fn prediction() -> Prediction {
    Prediction {
        classification: Classification::Candidate,
        confidence: 82.0,
        justification: String::new(),
    }
}

#[test]
fn test_empty_visualizations_use_defaults() {
    let data = PredictionData::new(prediction(), Some(VisualizationData::default()));
    let params = SystemParameters::from_prediction_in_year(&data, 2031);

    assert_eq!(params.stellar_radius, 1.0);
    assert_eq!(params.stellar_type, "Unknown Star");
    assert_eq!(params.orbital_period, 365.0);
    assert_eq!(params.planetary_radius, 1.0);
    assert_eq!(params.planet_type, "Unknown Planet");
    assert_eq!(params.discovery_year, 2031);
    assert_eq!(params.classification, Classification::Candidate);
    assert_eq!(params.confidence, 82.0);
}

#[test]
fn test_missing_visualization_block_uses_defaults() {
    let with_block = PredictionData::new(prediction(), Some(VisualizationData::default()));
    let without_block = PredictionData::new(prediction(), None);

    assert_eq!(
        SystemParameters::from_prediction_in_year(&with_block, 2024),
        SystemParameters::from_prediction_in_year(&without_block, 2024)
    );
}

#[test]
fn test_present_values_are_kept() {
    let viz = VisualizationData {
        orbital_period: Some(-50.0),
        planetary_radius: Some(2.5),
        stellar_radius: Some(0.7),
        planet_type: Some("Super-Earth".to_string()),
        stellar_type: Some("M-dwarf".to_string()),
        discovery_year: Some(2016),
        ..Default::default()
    };
    let params =
        SystemParameters::from_prediction_in_year(&PredictionData::new(prediction(), Some(viz)), 2030);

    // Raw values are kept for display; only the safe accessors clamp
    assert_eq!(params.orbital_period, -50.0);
    assert_eq!(params.safe_orbital_period(), 0.0);
    assert_eq!(params.safe_planetary_radius(), 2.5);
    assert_eq!(params.stellar_type, "M-dwarf");
    assert_eq!(params.discovery_year, 2016);
}

#[test]
fn test_out_of_range_confidence_passes_through() {
    let mut p = prediction();
    p.confidence = -12.0;
    let params = SystemParameters::from_prediction(&PredictionData::new(p, None));
    assert_eq!(params.confidence, -12.0);
}

#[test]
fn test_default_year_is_current_year() {
    let params = SystemParameters::from_prediction(&PredictionData::new(prediction(), None));
    assert_eq!(params.discovery_year, current_year());
}

#[test]
fn test_clamp_non_negative() {
    assert_eq!(clamp_non_negative(-3.0), 0.0);
    assert_eq!(clamp_non_negative(f64::NAN), 0.0);
    assert_eq!(clamp_non_negative(4.5), 4.5);
}

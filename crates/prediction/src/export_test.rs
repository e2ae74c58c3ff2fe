use crate::classification::Classification;
use crate::export::{js_number, prediction_csv};
use crate::result::{Prediction, PredictionData};
use crate::visualization::{LightCurvePoint, VisualizationData};

fn confirmed() -> Prediction {
    Prediction {
        classification: Classification::Confirmed,
        confidence: 97.5,
        justification: "Clear periodic transit".to_string(),
    }
}

#[test]
fn test_full_report_layout() {
    let viz = VisualizationData {
        orbital_period: Some(365.25),
        transit_duration: Some(13.0),
        planetary_radius: Some(1.2),
        stellar_radius: Some(1.0),
        light_curve: vec![
            LightCurvePoint { time: 0.0, flux: 1.0 },
            LightCurvePoint {
                time: 0.5,
                flux: 0.9916,
            },
        ],
        ..Default::default()
    };
    let csv = prediction_csv(&PredictionData::new(confirmed(), Some(viz)));

    let expected = [
        "Parameter,Value",
        "Classification,Confirmed",
        "Confidence Score (%),97.5",
        "AI Justification,\"Clear periodic transit\"",
        "---Visualizations---,",
        "Orbital Period (days),365.25",
        "Transit Duration (hours),13",
        "Planetary Radius (Earth Radii),1.2",
        "Stellar Radius (Solar Radii),1",
        ",",
        "---Light Curve Data---,",
        "Time,Flux",
        "0,1",
        "0.5,0.9916",
    ]
    .join("\n");

    assert_eq!(csv, expected);
}

#[test]
fn test_false_positive_label() {
    let mut prediction = confirmed();
    prediction.classification = Classification::FalsePositive;
    let csv = prediction_csv(&PredictionData::new(prediction, None));

    assert!(csv.contains("\nClassification,False Positive\n"));
}

#[test]
fn test_quotes_in_justification_are_doubled() {
    let mut prediction = confirmed();
    prediction.justification = r#"Depth "too deep", likely an "EB""#.to_string();
    let csv = prediction_csv(&PredictionData::new(prediction, None));

    assert!(csv.contains(r#"AI Justification,"Depth ""too deep"", likely an ""EB""""#));
}

#[test]
fn test_missing_visualizations_leave_empty_cells() {
    let csv = prediction_csv(&PredictionData::new(confirmed(), None));
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 12);
    assert_eq!(lines[5], "Orbital Period (days),");
    assert_eq!(lines[11], "Time,Flux");
}

#[test]
fn test_js_number_formatting() {
    assert_eq!(js_number(0.0), "0");
    assert_eq!(js_number(-0.0), "0");
    assert_eq!(js_number(365.25), "365.25");
    assert_eq!(js_number(13.0), "13");
    assert_eq!(js_number(0.000001), "0.000001");
    assert_eq!(js_number(1e-7), "1e-7");
    assert_eq!(js_number(-2.5e-9), "-2.5e-9");
    assert_eq!(js_number(1e21), "1e+21");
    assert_eq!(js_number(1.5e22), "1.5e+22");
    assert_eq!(js_number(f64::INFINITY), "Infinity");
    assert_eq!(js_number(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(js_number(f64::NAN), "NaN");
}

#[test]
fn test_extreme_values_in_report() {
    let viz = VisualizationData {
        orbital_period: Some(f64::INFINITY),
        light_curve: vec![LightCurvePoint {
            time: 1e-7,
            flux: f64::INFINITY,
        }],
        ..Default::default()
    };
    let mut prediction = confirmed();
    prediction.confidence = f64::NAN;
    let csv = prediction_csv(&PredictionData::new(prediction, Some(viz)));
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[2], "Confidence Score (%),NaN");
    assert_eq!(lines[5], "Orbital Period (days),Infinity");
    assert_eq!(lines.last(), Some(&"1e-7,Infinity"));
}

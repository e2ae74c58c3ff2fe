//! CSV report of a prediction

use crate::result::PredictionData;

/// Format a number the way JavaScript's `Number.prototype.toString` does
///
/// Magnitudes in [1e-6, 1e21) print in plain decimal; anything else uses
/// exponent form with an explicit sign (`1e-7`, `1.5e+21`).
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exp,
    }
}

fn cell(value: Option<f64>) -> String {
    value.map(js_number).unwrap_or_default()
}

fn quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Render a prediction as a two-column CSV report
///
/// Lines are joined with `\n`. Only the justification is quoted; absent
/// visualization values are left empty. Numbers are formatted by
/// [`js_number`].
///
/// # Example
/// ```
/// use prediction::{Classification, Prediction, PredictionData, prediction_csv};
///
/// let data = PredictionData::new(
///     Prediction {
///         classification: Classification::Candidate,
///         confidence: 80.0,
///         justification: "Shallow \"U\" transit".to_string(),
///     },
///     None,
/// );
/// let csv = prediction_csv(&data);
/// assert!(csv.starts_with("Parameter,Value\nClassification,Candidate\nConfidence Score (%),80\n"));
/// assert!(csv.contains("AI Justification,\"Shallow \"\"U\"\" transit\""));
/// ```
pub fn prediction_csv(data: &PredictionData) -> String {
    let prediction = &data.prediction;
    let viz = data.visualizations_or_default();

    let mut rows: Vec<[String; 2]> = vec![
        ["Parameter".into(), "Value".into()],
        [
            "Classification".into(),
            prediction.classification.label().into(),
        ],
        [
            "Confidence Score (%)".into(),
            js_number(prediction.confidence),
        ],
        ["AI Justification".into(), quoted(&prediction.justification)],
        ["---Visualizations---".into(), String::new()],
        ["Orbital Period (days)".into(), cell(viz.orbital_period)],
        ["Transit Duration (hours)".into(), cell(viz.transit_duration)],
        [
            "Planetary Radius (Earth Radii)".into(),
            cell(viz.planetary_radius),
        ],
        ["Stellar Radius (Solar Radii)".into(), cell(viz.stellar_radius)],
        [String::new(), String::new()],
        ["---Light Curve Data---".into(), String::new()],
        ["Time".into(), "Flux".into()],
    ];

    rows.extend(
        viz.light_curve
            .iter()
            .map(|point| [js_number(point.time), js_number(point.flux)]),
    );

    log::debug!("exporting prediction report with {} rows", rows.len());

    rows.iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

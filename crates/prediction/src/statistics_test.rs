use approx::assert_relative_eq;

use crate::statistics::{key_statistics, light_curve_domain};
use crate::visualization::{LightCurvePoint, VisualizationData};

#[test]
fn test_key_statistics_order_and_units() {
    let viz = VisualizationData {
        orbital_period: Some(10.5),
        transit_duration: Some(3.2),
        planetary_radius: Some(2.4),
        stellar_radius: Some(0.9),
        ..Default::default()
    };
    let bars = key_statistics(&viz);

    let names: Vec<_> = bars.iter().map(|b| b.name).collect();
    assert_eq!(
        names,
        [
            "Orbital Period",
            "Transit Duration",
            "Planetary Radius",
            "Stellar Radius"
        ]
    );
    assert_eq!(bars[0].unit, "days");
    assert_eq!(bars[1].unit, "hours");
    assert_relative_eq!(bars[2].value, 2.4);
    assert_relative_eq!(bars[3].value, 0.9);
}

#[test]
fn test_key_statistics_missing_values_are_zero() {
    let bars = key_statistics(&VisualizationData::default());
    assert!(bars.iter().all(|b| b.value == 0.0));
}

#[test]
fn test_light_curve_domain() {
    let points = [
        LightCurvePoint { time: 0.5, flux: 1.0 },
        LightCurvePoint { time: -0.2, flux: 0.991 },
        LightCurvePoint { time: 1.5, flux: 1.002 },
    ];
    let domain = light_curve_domain(&points).unwrap();

    assert_relative_eq!(domain.time_min, -0.2);
    assert_relative_eq!(domain.time_max, 1.5);
    assert_relative_eq!(domain.flux_min, 0.991);
    assert_relative_eq!(domain.flux_max, 1.002);
}

#[test]
fn test_light_curve_domain_empty() {
    assert!(light_curve_domain(&[]).is_none());
    let only_nan = [LightCurvePoint {
        time: f64::NAN,
        flux: 1.0,
    }];
    assert!(light_curve_domain(&only_nan).is_none());
}

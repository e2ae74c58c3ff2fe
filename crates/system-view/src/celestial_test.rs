use crate::celestial::{CelestialKind, CelestialObject, InfoMap, InfoValue};
use crate::color::DisplayColor;

fn planet() -> CelestialObject {
    CelestialObject {
        id: "planet-0".to_string(),
        kind: CelestialKind::Planet,
        radius: 0.2,
        distance: 17.5,
        color: DisplayColor::SAND,
        info: InfoMap::named("Planet B").with("Type", "Rocky Planet"),
    }
}

#[test]
fn info_map_keeps_insertion_order() {
    let info = InfoMap::named("Host Star")
        .with("Type", "G-type")
        .with("Radius (R☉)", 1.0);
    assert_eq!(info.labels(), ["Name", "Type", "Radius (R☉)"]);

    let details: Vec<&str> = info.details().map(|(k, _)| k).collect();
    assert_eq!(details, ["Type", "Radius (R☉)"]);
}

#[test]
fn info_map_replace_keeps_position() {
    let mut info = InfoMap::named("Host Star").with("Type", "G-type");
    info.insert("Name", "Renamed");

    assert_eq!(info.len(), 2);
    assert_eq!(info.labels(), ["Name", "Type"]);
    assert_eq!(info.name(), Some(&InfoValue::Text("Renamed".into())));
}

#[test]
fn info_value_display() {
    assert_eq!(InfoValue::from(2019).to_string(), "2019");
    assert_eq!(InfoValue::from(365.25).to_string(), "365.25");
    assert_eq!(InfoValue::from("K-type").to_string(), "K-type");
}

#[test]
fn celestial_object_json_shape() {
    let json = serde_json::to_string(&planet()).unwrap();
    assert_eq!(
        json,
        r##"{"id":"planet-0","type":"Planet","radius":0.2,"distance":17.5,"color":"#E3A869","info":{"Name":"Planet B","Type":"Rocky Planet"}}"##
    );

    let parsed: CelestialObject = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, planet());
}

#[test]
fn celestial_object_label_falls_back_to_kind() {
    let mut object = planet();
    assert_eq!(object.label(), "Planet B (Rocky Planet)");

    object.info = InfoMap::named("Mystery");
    assert_eq!(object.label(), "Mystery (Planet)");
}

#[test]
fn celestial_object_position_on_x_axis() {
    let p = planet().position();
    assert_eq!((p.x, p.y, p.z), (17.5, 0.0, 0.0));
}

#[cfg(feature = "tsify")]
#[test]
fn celestial_object_typescript_declaration() {
    use tsify_next::Tsify;

    let decl = CelestialObject::DECL;
    assert!(decl.contains("CelestialObject"));
    assert!(decl.contains("color: string"));
    assert!(decl.contains("Record<string, string | number>"));
    assert!(CelestialKind::DECL.contains("Exoplanet"));
}

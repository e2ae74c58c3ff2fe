use crate::classification::Classification;
use crate::error::PredictionError;

#[test]
fn test_labels_match_wire_format() {
    assert_eq!(Classification::Confirmed.label(), "Confirmed");
    assert_eq!(Classification::Candidate.label(), "Candidate");
    assert_eq!(Classification::FalsePositive.label(), "False Positive");
}

#[test]
fn test_parse_accepts_both_false_positive_spellings() {
    assert_eq!(
        "False Positive".parse::<Classification>().unwrap(),
        Classification::FalsePositive
    );
    assert_eq!(
        "FalsePositive".parse::<Classification>().unwrap(),
        Classification::FalsePositive
    );
}

#[test]
fn test_parse_unknown_label() {
    let err = "Maybe".parse::<Classification>().unwrap_err();
    assert!(matches!(err, PredictionError::UnknownClassification(label) if label == "Maybe"));
}

#[test]
fn test_serde_uses_display_label() {
    let json = serde_json::to_string(&Classification::FalsePositive).unwrap();
    assert_eq!(json, "\"False Positive\"");

    let parsed: Classification = serde_json::from_str("\"Candidate\"").unwrap();
    assert_eq!(parsed, Classification::Candidate);
}

#[test]
fn test_display_roundtrips_through_parse() {
    for class in Classification::all() {
        assert_eq!(class.to_string().parse::<Classification>().unwrap(), class);
    }
}

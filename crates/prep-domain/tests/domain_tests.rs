use prep_domain::{CalculationRecord, DomainError, FieldValue};

#[test]
fn test_record_construction_assigns_fresh_keys() {
    let a = CalculationRecord::new("relax_static").unwrap();
    let b = CalculationRecord::new("relax_static").unwrap();
    assert_eq!(a.style(), "relax_static");
    assert_ne!(a.key(), b.key());
    assert!(a.is_empty());
}

#[test]
fn test_empty_style_is_rejected() {
    assert_eq!(CalculationRecord::new("").unwrap_err(), DomainError::EmptyStyle);
    assert_eq!(CalculationRecord::new("   ").unwrap_err(), DomainError::EmptyStyle);
}

#[test]
fn test_field_names_are_validated() {
    let mut rec = CalculationRecord::new("relax_static").unwrap();
    assert_eq!(rec.set_field("", 1.0).unwrap_err(), DomainError::EmptyFieldName);
    assert_eq!(rec.set_field("style", "x").unwrap_err(),
               DomainError::ReservedFieldName("style".to_string()));
    assert_eq!(rec.set_field("key", "x").unwrap_err(),
               DomainError::ReservedFieldName("key".to_string()));
    rec.set_field("potential_key", "P1").unwrap();
    assert!(rec.has_field("potential_key"));
}

#[test]
fn test_set_field_replaces_previous_value() {
    let mut rec = CalculationRecord::new("relax_static").unwrap();
    rec.set_field("minimum_r", 2.0).unwrap();
    rec.set_field("minimum_r", 2.5).unwrap();
    assert_eq!(rec.get("minimum_r"), Some(&FieldValue::Float(2.5)));
    assert_eq!(rec.len(), 1);
}

#[test]
fn test_field_order_is_preserved() {
    let rec = CalculationRecord::new("E_vs_r_scan").unwrap()
        .with_field("potential_key", "P1").unwrap()
        .with_field("symbols", vec!["Cu", "Ni"]).unwrap()
        .with_field("minimum_r", 2.0).unwrap();
    let names: Vec<&str> = rec.field_names().collect();
    assert_eq!(names, vec!["potential_key", "symbols", "minimum_r"]);
}

#[test]
fn test_deserialization_rejects_invalid_records() {
    // Same validation as the constructors, applied at the wire boundary.
    let empty_style = r#"{"style": "  ",
                          "key": "e4f6afae-8b90-4f44-a96c-56b3f1d7e2aa",
                          "created": "2026-08-27T00:00:00Z",
                          "fields": {"minimum_r": 2.0}}"#;
    let err = serde_json::from_str::<CalculationRecord>(empty_style).unwrap_err();
    assert!(err.to_string().contains("calculation style must not be empty"));

    let reserved_field = r#"{"style": "relax_static",
                             "key": "e4f6afae-8b90-4f44-a96c-56b3f1d7e2aa",
                             "created": "2026-08-27T00:00:00Z",
                             "fields": {"key": "sneaky"}}"#;
    let err = serde_json::from_str::<CalculationRecord>(reserved_field).unwrap_err();
    assert!(err.to_string().contains("reserved field name"));
}

#[test]
fn test_json_round_trip_keeps_fields_and_key() {
    let rec = CalculationRecord::new("E_vs_r_scan").unwrap()
        .with_field("symbols", vec!["Cu"]).unwrap()
        .with_field("number_of_measurements", 300i64).unwrap();
    let text = serde_json::to_string(&rec).unwrap();
    let back: CalculationRecord = serde_json::from_str(&text).unwrap();
    assert_eq!(back.key(), rec.key());
    assert_eq!(back.style(), rec.style());
    assert_eq!(back.get("number_of_measurements"), Some(&FieldValue::Int(300)));
    assert_eq!(back.get("symbols"),
               Some(&FieldValue::List(vec![FieldValue::Str("Cu".to_string())])));
}

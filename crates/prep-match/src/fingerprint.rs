//! Input fingerprint over a record's exact-match keys.
//!
//! The matcher itself never consults fingerprints (tolerance fields cannot
//! be hashed), but callers can index their database by this value to shrink
//! the population they hand to `first_match`: two records with different
//! fingerprints can never be duplicates of each other.

use std::collections::BTreeMap;

use prep_domain::{CalculationRecord, FieldValue};
use serde::Serialize;
use serde_json::Value;

use crate::errors::MatchError;
use crate::hashing;
use crate::spec::MatchSpec;

/// Insumos del fingerprint, previos a canonicalizar. Las claves van en
/// `BTreeMap` para que el orden de inserción de campos no altere el hash.
#[derive(Serialize)]
pub struct RecordFingerprintInput<'a> {
    pub style: &'a str,
    pub exact_values: BTreeMap<&'a str, Value>,
}

/// Blake3 hex over the canonical JSON of the record's style plus its
/// exact-key values. Same errors as the matcher: the record must belong to
/// the spec's style and carry every exact key.
pub fn input_fingerprint(record: &CalculationRecord, spec: &MatchSpec) -> Result<String, MatchError> {
    if record.style() != spec.style() {
        return Err(MatchError::InvalidStyle { candidate: record.style().to_string(),
                                              spec: spec.style().to_string() });
    }
    let mut exact_values = BTreeMap::new();
    for key in spec.exact_keys() {
        let value = match record.get(key) {
            Some(v) => v,
            None => return Err(MatchError::MissingField { field: key.to_string() }),
        };
        exact_values.insert(key, canonical_value(value));
    }
    let input = RecordFingerprintInput { style: record.style(), exact_values };
    Ok(hashing::hash_value(&serde_json::json!(input)))
}

/// JSON view with numbers canonicalized the way exact comparison sees them:
/// whole-valued floats hash as ints, so `300` and `300.0` — equal under
/// `compare::exact_eq` — produce the same fingerprint.
fn canonical_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Float(f)
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 =>
        {
            Value::Number((*f as i64).into())
        }
        FieldValue::List(items) => Value::Array(items.iter().map(canonical_value).collect()),
        other => other.to_json(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{ListRule, MatchSpec, Tolerance};
    use prep_domain::CalculationRecord;

    fn scan_spec() -> MatchSpec {
        MatchSpec::for_style("E_vs_r_scan").exact("potential_key")
                                           .exact("family")
                                           .tolerance("minimum_r", Tolerance::Absolute(0.001))
                                           .list("symbols", ListRule::unordered())
                                           .build()
                                           .unwrap()
    }

    #[test]
    fn fingerprint_ignores_field_insertion_order() {
        let spec = scan_spec();
        let a = CalculationRecord::new("E_vs_r_scan").unwrap()
            .with_field("potential_key", "P1").unwrap()
            .with_field("family", "A1--Cu--fcc").unwrap();
        let b = CalculationRecord::new("E_vs_r_scan").unwrap()
            .with_field("family", "A1--Cu--fcc").unwrap()
            .with_field("potential_key", "P1").unwrap();
        assert_eq!(input_fingerprint(&a, &spec).unwrap(), input_fingerprint(&b, &spec).unwrap());
    }

    #[test]
    fn fingerprint_tracks_exact_values_only() {
        let spec = scan_spec();
        let base = CalculationRecord::new("E_vs_r_scan").unwrap()
            .with_field("potential_key", "P1").unwrap()
            .with_field("family", "A1--Cu--fcc").unwrap()
            .with_field("minimum_r", 2.0).unwrap();
        let tol_changed = base.clone().with_field("minimum_r", 3.0).unwrap();
        let exact_changed = base.clone().with_field("potential_key", "P2").unwrap();
        let fp = input_fingerprint(&base, &spec).unwrap();
        assert_eq!(fp, input_fingerprint(&tol_changed, &spec).unwrap());
        assert_ne!(fp, input_fingerprint(&exact_changed, &spec).unwrap());
    }

    #[test]
    fn fingerprint_agrees_with_exact_comparison_on_whole_numbers() {
        // An exact-key value stored as 300 in one record and 300.0 in
        // another compares equal, so the fingerprints must agree too.
        let spec = MatchSpec::for_style("E_vs_r_scan").exact("potential_key")
                                                      .exact("number_of_measurements")
                                                      .build()
                                                      .unwrap();
        let as_int = CalculationRecord::new("E_vs_r_scan").unwrap()
            .with_field("potential_key", "P1").unwrap()
            .with_field("number_of_measurements", 300i64).unwrap();
        let as_float = CalculationRecord::new("E_vs_r_scan").unwrap()
            .with_field("potential_key", "P1").unwrap()
            .with_field("number_of_measurements", 300.0).unwrap();
        assert!(crate::matcher::is_duplicate(&as_int, std::slice::from_ref(&as_float), &spec).unwrap());
        assert_eq!(input_fingerprint(&as_int, &spec).unwrap(),
                   input_fingerprint(&as_float, &spec).unwrap());
        // A genuinely fractional value still changes the fingerprint.
        let fractional = CalculationRecord::new("E_vs_r_scan").unwrap()
            .with_field("potential_key", "P1").unwrap()
            .with_field("number_of_measurements", 300.5).unwrap();
        assert_ne!(input_fingerprint(&as_int, &spec).unwrap(),
                   input_fingerprint(&fractional, &spec).unwrap());
    }

    #[test]
    fn fingerprint_requires_every_exact_key() {
        let spec = scan_spec();
        let rec = CalculationRecord::new("E_vs_r_scan").unwrap()
            .with_field("potential_key", "P1").unwrap();
        assert_eq!(input_fingerprint(&rec, &spec).unwrap_err(),
                   MatchError::MissingField { field: "family".to_string() });
    }
}

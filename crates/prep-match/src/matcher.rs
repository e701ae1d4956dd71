//! The duplicate decision itself.
//!
//! `first_match` scans the population in order and returns the first member
//! that satisfies every key group of the style's `MatchSpec`; `is_duplicate`
//! and `is_new` are the boolean views prepare scripts consume. The scan is
//! pure: no I/O, no retries, deterministic for a given input. Population
//! members with partial historical data are skipped as non-matching, while
//! an incomplete *candidate* is a hard caller error.

use prep_domain::{CalculationRecord, FieldValue};

use crate::compare;
use crate::errors::MatchError;
use crate::spec::MatchSpec;

/// First population member the candidate duplicates, in population order.
pub fn first_match<'a>(candidate: &CalculationRecord,
                       population: &'a [CalculationRecord],
                       spec: &MatchSpec)
                       -> Result<Option<&'a CalculationRecord>, MatchError> {
    if candidate.style() != spec.style() {
        return Err(MatchError::InvalidStyle { candidate: candidate.style().to_string(),
                                              spec: spec.style().to_string() });
    }
    // The candidate must be fully formed before any comparison occurs.
    for field in spec.required_fields() {
        if !candidate.has_field(field) {
            return Err(MatchError::MissingField { field: field.to_string() });
        }
    }
    // A non-numeric value in a tolerance field fails closed: the candidate
    // can match nothing, but the scan is not an error.
    for (field, _) in spec.tolerance_keys() {
        if let Some(value) = candidate.get(field) {
            if !value.is_numeric() {
                log::warn!("candidate {}: tolerance field '{}' holds a {} value, matches nothing",
                           candidate.key(),
                           field,
                           value.type_name());
                return Ok(None);
            }
        }
    }
    for member in population {
        if member.style() != candidate.style() {
            log::debug!("record {} skipped: style '{}' differs from candidate style '{}'",
                        member.key(),
                        member.style(),
                        candidate.style());
            continue;
        }
        if member_matches(candidate, member, spec) {
            log::debug!("candidate {} duplicates existing record {}", candidate.key(), member.key());
            return Ok(Some(member));
        }
    }
    Ok(None)
}

/// True iff some population member matches the candidate on every key group.
pub fn is_duplicate(candidate: &CalculationRecord,
                    population: &[CalculationRecord],
                    spec: &MatchSpec)
                    -> Result<bool, MatchError> {
    Ok(first_match(candidate, population, spec)?.is_some())
}

/// Source terminology: a candidate is "new" when nothing in the population
/// duplicates it.
pub fn is_new(candidate: &CalculationRecord,
              population: &[CalculationRecord],
              spec: &MatchSpec)
              -> Result<bool, MatchError> {
    Ok(first_match(candidate, population, spec)?.is_none())
}

/// All three key groups must hold simultaneously. A member missing any
/// required field, or holding a non-numeric tolerance value, is simply not
/// a match.
fn member_matches(candidate: &CalculationRecord, member: &CalculationRecord, spec: &MatchSpec) -> bool {
    for key in spec.exact_keys() {
        let cv = match candidate.get(key) {
            Some(v) => v,
            None => return false,
        };
        let mv = match member.get(key) {
            Some(v) => v,
            None => return false,
        };
        if !compare::exact_eq(cv, mv) {
            return false;
        }
    }
    for (key, tolerance) in spec.tolerance_keys() {
        let cv = match candidate.get(key) {
            Some(v) => v,
            None => return false,
        };
        let mv = match member.get(key) {
            Some(v) => v,
            None => return false,
        };
        if compare::within_tolerance(cv, mv, tolerance) != Some(true) {
            return false;
        }
    }
    for (key, rule) in spec.list_keys() {
        let cv = match candidate.get(key) {
            Some(v) => v,
            None => return false,
        };
        let mv = match member.get(key) {
            Some(v) => v,
            None => return false,
        };
        if !compare::lists_match(as_sequence(cv), as_sequence(mv), rule) {
            return false;
        }
    }
    true
}

/// Historical records sometimes store a lone scalar where a list is
/// expected; treat it as a one-element sequence.
fn as_sequence(value: &FieldValue) -> &[FieldValue] {
    match value {
        FieldValue::List(items) => items,
        other => std::slice::from_ref(other),
    }
}

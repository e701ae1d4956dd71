//! Value comparison primitives shared by the matcher.
//!
//! Exact equality is type-aware (strings against strings, booleans against
//! booleans) but bridges ints and floats numerically, because historical
//! JSON records do not distinguish `3` from `3.0`. Sequence comparison
//! follows the per-field `ListRule`: order-insensitive fields are sorted by
//! a canonical key on both sides before the pairwise pass.

use std::cmp::Ordering;

use prep_domain::FieldValue;

use crate::spec::{ListRule, OrderSensitivity, Tolerance};

/// Strict, type-aware equality for exact-match keys.
pub fn exact_eq(a: &FieldValue, b: &FieldValue) -> bool {
    match (a, b) {
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x == y,
        (FieldValue::Str(x), FieldValue::Str(y)) => x == y,
        (FieldValue::Int(x), FieldValue::Int(y)) => x == y,
        (FieldValue::List(x), FieldValue::List(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(p, q)| exact_eq(p, q))
        }
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

/// Numeric closeness for tolerance keys. `None` when either value is not
/// numeric; the caller decides whether that fails closed or raises.
pub fn within_tolerance(a: &FieldValue, b: &FieldValue, tolerance: Tolerance) -> Option<bool> {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => Some(tolerance.within(x, y)),
        _ => None,
    }
}

/// Sequence comparison under the field's declared rule.
pub fn lists_match(a: &[FieldValue], b: &[FieldValue], rule: ListRule) -> bool {
    if a.len() != b.len() {
        return false;
    }
    match rule.order {
        OrderSensitivity::Ordered => {
            a.iter().zip(b).all(|(p, q)| elements_match(p, q, rule.tolerance))
        }
        OrderSensitivity::Unordered => {
            let mut xs: Vec<&FieldValue> = a.iter().collect();
            let mut ys: Vec<&FieldValue> = b.iter().collect();
            xs.sort_by(|p, q| canonical_cmp(p, q));
            ys.sort_by(|p, q| canonical_cmp(p, q));
            xs.into_iter().zip(ys).all(|(p, q)| elements_match(p, q, rule.tolerance))
        }
    }
}

/// One element pair: numeric elements honor the field tolerance, nested
/// sequences recurse positionally, everything else is exact.
fn elements_match(a: &FieldValue, b: &FieldValue, tolerance: Option<Tolerance>) -> bool {
    if let (FieldValue::List(x), FieldValue::List(y)) = (a, b) {
        return x.len() == y.len()
            && x.iter().zip(y).all(|(p, q)| elements_match(p, q, tolerance));
    }
    if let Some(t) = tolerance {
        if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) {
            return t.within(x, y);
        }
    }
    exact_eq(a, b)
}

/// Canonical ordering used to sort order-insensitive sequences: booleans,
/// then numerics ascending, then strings lexicographic, then sublists
/// elementwise. Mixed-type sequences sort by that type rank, so both sides
/// end up in the same arrangement whenever they hold equal content.
fn canonical_cmp(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(y),
        (FieldValue::Str(x), FieldValue::Str(y)) => x.cmp(y),
        (FieldValue::List(x), FieldValue::List(y)) => {
            for (p, q) in x.iter().zip(y) {
                let ord = canonical_cmp(p, q);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => type_rank(a).cmp(&type_rank(b)),
        },
    }
}

fn type_rank(v: &FieldValue) -> u8 {
    match v {
        FieldValue::Bool(_) => 0,
        FieldValue::Int(_) | FieldValue::Float(_) => 1,
        FieldValue::Str(_) => 2,
        FieldValue::List(_) => 3,
    }
}

//! Declarative comparison table for one calculation style.
//!
//! A `MatchSpec` names the input fields that decide whether two records of
//! the same style describe the same prospective calculation, and how each
//! field is compared: strict equality, numeric closeness, or sequence
//! comparison. Specs are built once at startup and read-only afterwards.

use indexmap::{IndexMap, IndexSet};

use crate::errors::MatchError;

/// Numeric closeness convention for one field.
///
/// The historical per-style comparison tables mixed absolute and relative
/// thresholds without saying which was which; here every field declares its
/// convention explicitly. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// |a - b| <= t, in the field's own units.
    Absolute(f64),
    /// |a - b| <= t * max(|a|, |b|).
    Relative(f64),
}

impl Tolerance {
    pub fn within(&self, a: f64, b: f64) -> bool {
        match *self {
            Tolerance::Absolute(t) => (a - b).abs() <= t,
            Tolerance::Relative(t) => (a - b).abs() <= t * a.abs().max(b.abs()),
        }
    }
}

/// Whether element position carries meaning for a list field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSensitivity {
    /// Positional comparison (size multipliers: position is the a/b/c axis).
    Ordered,
    /// Content comparison; both sides are canonically sorted first
    /// (symbol lists behave as sets).
    Unordered,
}

/// Comparison rule for one list-valued field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListRule {
    pub order: OrderSensitivity,
    /// Closeness used for numeric elements; `None` means exact.
    pub tolerance: Option<Tolerance>,
}

impl ListRule {
    pub fn ordered() -> Self {
        ListRule { order: OrderSensitivity::Ordered, tolerance: None }
    }

    pub fn unordered() -> Self {
        ListRule { order: OrderSensitivity::Unordered, tolerance: None }
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
}

/// Per-style declaration of which fields to compare and how.
#[derive(Debug, Clone)]
pub struct MatchSpec {
    style: String,
    exact_keys: IndexSet<String>,
    tolerance_keys: IndexMap<String, Tolerance>,
    list_keys: IndexMap<String, ListRule>,
}

impl MatchSpec {
    /// Start building a spec for the named style.
    pub fn for_style(style: &str) -> MatchSpecBuilder {
        MatchSpecBuilder { style: style.to_string(),
                           exact_keys: IndexSet::new(),
                           tolerance_keys: IndexMap::new(),
                           list_keys: IndexMap::new() }
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn exact_keys(&self) -> impl Iterator<Item = &str> {
        self.exact_keys.iter().map(String::as_str)
    }

    pub fn tolerance_keys(&self) -> impl Iterator<Item = (&str, Tolerance)> {
        self.tolerance_keys.iter().map(|(k, t)| (k.as_str(), *t))
    }

    pub fn list_keys(&self) -> impl Iterator<Item = (&str, ListRule)> {
        self.list_keys.iter().map(|(k, r)| (k.as_str(), *r))
    }

    /// Every field a fully-formed candidate must carry: exact keys, then
    /// tolerance keys, then list keys, each group in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.exact_keys
            .iter()
            .map(String::as_str)
            .chain(self.tolerance_keys.keys().map(String::as_str))
            .chain(self.list_keys.keys().map(String::as_str))
    }
}

/// Builder for `MatchSpec`. Rejects a field declared in more than one key
/// group, since the groups have incompatible comparison semantics.
pub struct MatchSpecBuilder {
    style: String,
    exact_keys: IndexSet<String>,
    tolerance_keys: IndexMap<String, Tolerance>,
    list_keys: IndexMap<String, ListRule>,
}

impl MatchSpecBuilder {
    pub fn exact(mut self, field: &str) -> Self {
        self.exact_keys.insert(field.to_string());
        self
    }

    pub fn tolerance(mut self, field: &str, tolerance: Tolerance) -> Self {
        self.tolerance_keys.insert(field.to_string(), tolerance);
        self
    }

    pub fn list(mut self, field: &str, rule: ListRule) -> Self {
        self.list_keys.insert(field.to_string(), rule);
        self
    }

    pub fn build(self) -> Result<MatchSpec, MatchError> {
        for field in self.tolerance_keys.keys() {
            if self.exact_keys.contains(field) {
                return Err(MatchError::OverlappingKey { field: field.clone() });
            }
        }
        for field in self.list_keys.keys() {
            if self.exact_keys.contains(field) || self.tolerance_keys.contains_key(field) {
                return Err(MatchError::OverlappingKey { field: field.clone() });
            }
        }
        Ok(MatchSpec { style: self.style,
                       exact_keys: self.exact_keys,
                       tolerance_keys: self.tolerance_keys,
                       list_keys: self.list_keys })
    }
}

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value::FieldValue;
use std::fmt;

/// Field names that would collide with record metadata on serialization.
const RESERVED_FIELD_NAMES: [&str; 3] = ["style", "key", "created"];

/// One prospective (or persisted) calculation.
///
/// A record belongs to exactly one calculation style, carries an immutable
/// UUID key assigned at creation, and holds its input fields as an ordered
/// name → value map. Result fields are appended later by the harvesting
/// path and play no role in duplicate matching, so this type only models
/// the input side.
///
/// Invariants
/// - `style` is non-empty and never changes.
/// - `key` is unique per record and never reused.
/// - Field names are non-empty and distinct from the metadata names above.
///
/// Deserialization runs the same validation as the constructors, so a
/// malformed persisted record surfaces a `DomainError` at the boundary
/// instead of deep inside comparison logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct CalculationRecord {
    style: String,
    key: Uuid,
    created: DateTime<Utc>,
    fields: IndexMap<String, FieldValue>,
}

/// Unvalidated wire shape; only exists to funnel `Deserialize` through the
/// invariant checks.
#[derive(Deserialize)]
struct RawRecord {
    style: String,
    key: Uuid,
    created: DateTime<Utc>,
    fields: IndexMap<String, FieldValue>,
}

impl TryFrom<RawRecord> for CalculationRecord {
    type Error = DomainError;

    fn try_from(raw: RawRecord) -> Result<Self, DomainError> {
        if raw.style.trim().is_empty() {
            return Err(DomainError::EmptyStyle);
        }
        for name in raw.fields.keys() {
            if name.trim().is_empty() {
                return Err(DomainError::EmptyFieldName);
            }
            if RESERVED_FIELD_NAMES.contains(&name.as_str()) {
                return Err(DomainError::ReservedFieldName(name.clone()));
            }
        }
        Ok(CalculationRecord { style: raw.style,
                               key: raw.key,
                               created: raw.created,
                               fields: raw.fields })
    }
}

impl CalculationRecord {
    /// Create an empty record of the given style with a fresh UUID key.
    pub fn new(style: &str) -> Result<Self, DomainError> {
        if style.trim().is_empty() {
            return Err(DomainError::EmptyStyle);
        }
        Ok(CalculationRecord {
            style: style.to_string(),
            key: Uuid::new_v4(),
            created: Utc::now(),
            fields: IndexMap::new(),
        })
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn key(&self) -> Uuid {
        self.key
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Set an input field, replacing any previous value under that name.
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyFieldName);
        }
        if RESERVED_FIELD_NAMES.contains(&name) {
            return Err(DomainError::ReservedFieldName(name.to_string()));
        }
        self.fields.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Chainable variant of `set_field` for building records inline.
    pub fn with_field(mut self, name: &str, value: impl Into<FieldValue>) -> Result<Self, DomainError> {
        self.set_field(name, value)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} record {}>", self.style, self.key)
    }
}

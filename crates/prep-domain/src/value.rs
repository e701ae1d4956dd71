use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Value held by one record field.
///
/// Records arrive as plain JSON from the database layer, so this is an
/// untagged enum: `true` deserializes as `Bool`, `3` as `Int`, `3.0` as
/// `Float`, `"Cu"` as `Str` and arrays as `List`. Variant order matters for
/// untagged deserialization (ints must be tried before floats).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Numeric view of the value. Ints are numerics too; historical records
    /// do not distinguish `3` from `3.0`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldValue::Int(_) | FieldValue::Float(_))
    }

    /// Short variant name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) => "int",
            FieldValue::Float(_) => "float",
            FieldValue::Str(_) => "str",
            FieldValue::List(_) => "list",
        }
    }

    /// Plain JSON view of the value. Non-finite floats map to `null`, same
    /// as serde_json would refuse to emit them.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Int(i) => Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldValue::Str(s) => Value::String(s.clone()),
            FieldValue::List(items) => Value::Array(items.iter().map(FieldValue::to_json).collect()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::Str(s) => write!(f, "{s}"),
            FieldValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self { FieldValue::Bool(b) }
}
impl From<i64> for FieldValue {
    fn from(i: i64) -> Self { FieldValue::Int(i) }
}
impl From<f64> for FieldValue {
    fn from(f: f64) -> Self { FieldValue::Float(f) }
}
impl From<&str> for FieldValue {
    fn from(s: &str) -> Self { FieldValue::Str(s.to_string()) }
}
impl From<String> for FieldValue {
    fn from(s: String) -> Self { FieldValue::Str(s) }
}
impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_deserialization_keeps_scalar_types() {
        let v: FieldValue = serde_json::from_str("3").unwrap();
        assert_eq!(v, FieldValue::Int(3));
        let v: FieldValue = serde_json::from_str("3.5").unwrap();
        assert_eq!(v, FieldValue::Float(3.5));
        let v: FieldValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, FieldValue::Bool(true));
        let v: FieldValue = serde_json::from_str("\"Cu\"").unwrap();
        assert_eq!(v, FieldValue::Str("Cu".to_string()));
    }

    #[test]
    fn nested_lists_deserialize() {
        let v: FieldValue = serde_json::from_str("[[0, 3], [0, 3], [0, 3]]").unwrap();
        let rows = v.as_list().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], FieldValue::List(vec![FieldValue::Int(0), FieldValue::Int(3)]));
    }

    #[test]
    fn as_f64_bridges_int_and_float() {
        assert_eq!(FieldValue::Int(2).as_f64(), Some(2.0));
        assert_eq!(FieldValue::Float(2.0).as_f64(), Some(2.0));
        assert_eq!(FieldValue::Str("2".into()).as_f64(), None);
    }

    #[test]
    fn nan_serializes_to_null() {
        assert_eq!(FieldValue::Float(f64::NAN).to_json(), Value::Null);
    }
}

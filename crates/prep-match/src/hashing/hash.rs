//! Hash helpers – blake3 en hex, misma identidad que usan los fingerprints.

use serde_json::Value;

use super::canonical_json::to_canonical_json;

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    blake3::hash(input.as_bytes()).to_hex().to_string()
}

/// Hashea un JSON canonicalizado.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}

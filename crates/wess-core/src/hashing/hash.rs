//! Huellas blake3 en hex (64 caracteres).

use serde_json::Value;

use super::canonical_json::to_canonical_json;

pub fn hash_str(input: &str) -> String {
    blake3::hash(input.as_bytes()).to_hex().to_string()
}

/// Huella de la serialización canónica: valores equivalentes comparten huella.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}

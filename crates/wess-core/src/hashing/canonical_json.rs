//! Serialización canónica de un `Value`: claves ordenadas, sin espacios redundantes.

use serde_json::Value;

use crate::canonical::canonicalize;

/// Dos valores equivalentes producen exactamente la misma cadena.
pub fn to_canonical_json(value: &Value) -> String {
    canonicalize(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::to_canonical_json;
    use serde_json::json;

    #[test]
    fn test_primitives() {
        assert_eq!(to_canonical_json(&json!(null)), "null");
        assert_eq!(to_canonical_json(&json!(true)), "true");
        assert_eq!(to_canonical_json(&json!(123)), "123");
        assert_eq!(to_canonical_json(&json!("hola")), "\"hola\"");
    }

    #[test]
    fn test_array() {
        let val = json!([3, "a", false]);
        assert_eq!(to_canonical_json(&val), "[3,\"a\",false]");
    }

    #[test]
    fn test_object_sorted_keys() {
        let val = json!({ "return_type": "u8", "func": "sum" });
        assert_eq!(to_canonical_json(&val), "{\"func\":\"sum\",\"return_type\":\"u8\"}");
    }

    #[test]
    fn test_nested() {
        let val = json!({ "wasm": [121], "args": [ { "type": "", "name": "" }, null ] });
        assert_eq!(
            to_canonical_json(&val),
            "{\"args\":[{\"name\":\"\",\"type\":\"\"},null],\"wasm\":[121]}"
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(to_canonical_json(&json!({"q\"k": "a\nb"})), "{\"q\\\"k\":\"a\\nb\"}");
    }
}

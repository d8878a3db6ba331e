//! Interpretación de la envoltura `{"message": ...}` del servicio y
//! comprobación de ida y vuelta de un módulo creado.

use log::debug;
use serde_json::{Map, Value};
use wess_core::{canonicalize, first_difference, Mismatch};

use crate::DomainError;

fn kind_of(value: &Value) -> &'static str {
    canonicalize(value).kind_name()
}

/// Devuelve `message.Success` de una respuesta de lectura.
pub(crate) fn success_payload(response: &Value) -> Result<&Value, DomainError> {
    let body = response
        .as_object()
        .ok_or_else(|| DomainError::MalformedInput(format!("body must be an object, got {}", kind_of(response))))?;
    let message = body
        .get("message")
        .ok_or_else(|| DomainError::MalformedInput("body has no 'message'".into()))?;
    match message {
        Value::String(msg) => Err(DomainError::Rejected(msg.clone())),
        Value::Object(m) => m.get("Success").ok_or_else(|| DomainError::MissingField("message.Success".into())),
        other => Err(DomainError::MalformedInput(format!("'message' must be an object, got {}", kind_of(other)))),
    }
}

/// Construye la forma esperada de un módulo leído: `metadata` con `wasm` superpuesto.
pub fn expected_shape(response: &Value) -> Result<Value, DomainError> {
    let success = success_payload(response)?;
    let metadata = match success.get("metadata") {
        Some(Value::Object(m)) => m,
        Some(other) => {
            return Err(DomainError::MalformedInput(format!(
                "'message.Success.metadata' must be an object, got {}",
                kind_of(other)
            )))
        }
        None => return Err(DomainError::MissingField("message.Success.metadata".into())),
    };
    let wasm = success
        .get("wasm")
        .ok_or_else(|| DomainError::MissingField("message.Success.wasm".into()))?;

    let mut shape = Map::with_capacity(metadata.len() + 1);
    for (k, v) in metadata {
        shape.insert(k.clone(), v.clone());
    }
    shape.insert("wasm".to_string(), wasm.clone());
    Ok(Value::Object(shape))
}

/// Primera diferencia entre el módulo leído y el payload esperado, si la hay.
pub fn explain_wasm(response: &Value, expected: &Value) -> Result<Option<Mismatch>, DomainError> {
    let shape = expected_shape(response)?;
    Ok(first_difference(&shape, expected))
}

/// `true` si el módulo leído coincide estructuralmente con el payload esperado.
pub fn check_wasm(response: &Value, expected: &Value) -> Result<bool, DomainError> {
    match explain_wasm(response, expected)? {
        None => Ok(true),
        Some(m) => {
            debug!("round-trip mismatch: {m}");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merges_metadata_and_wasm() {
        let resp = json!({"message": {"Success": {
            "wasm": [1, 2],
            "metadata": {"func": "f", "return_type": "i32", "args": []}
        }}});
        let shape = expected_shape(&resp).unwrap();
        assert_eq!(shape, json!({"func": "f", "return_type": "i32", "args": [], "wasm": [1, 2]}));
    }

    #[test]
    fn top_level_wasm_overrides_metadata_field() {
        let resp = json!({"message": {"Success": {"wasm": [9], "metadata": {"wasm": [0]}}}});
        assert_eq!(expected_shape(&resp).unwrap(), json!({"wasm": [9]}));
    }

    #[test]
    fn error_envelope_is_rejected() {
        let err = expected_shape(&json!({"message": "module not found"})).unwrap_err();
        assert!(matches!(err, DomainError::Rejected(ref m) if m == "module not found"));
    }

    #[test]
    fn structural_problems_are_reported() {
        assert!(matches!(expected_shape(&json!([1])), Err(DomainError::MalformedInput(_))));
        assert!(matches!(expected_shape(&json!({})), Err(DomainError::MalformedInput(_))));
        assert!(matches!(expected_shape(&json!({"message": 3})), Err(DomainError::MalformedInput(_))));
        assert!(matches!(expected_shape(&json!({"message": {}})), Err(DomainError::MissingField(_))));
        assert!(matches!(
            expected_shape(&json!({"message": {"Success": {"wasm": []}}})),
            Err(DomainError::MissingField(ref f)) if f == "message.Success.metadata"
        ));
        assert!(matches!(
            expected_shape(&json!({"message": {"Success": {"metadata": {}}}})),
            Err(DomainError::MissingField(ref f)) if f == "message.Success.wasm"
        ));
    }

    #[test]
    fn malformed_input_names_the_json_kind() {
        let err = expected_shape(&json!([1])).unwrap_err();
        assert_eq!(err.to_string(), "Entrada mal formada: body must be an object, got array");
        let err = expected_shape(&json!({"message": {"Success": {"metadata": 5, "wasm": []}}})).unwrap_err();
        assert!(err.to_string().ends_with("got number"), "{err}");
    }
}

use serde_json::Value;
use uuid::Uuid;

use crate::DomainError;

/// Extrae el ID de módulo de una respuesta de creación.
///
/// Acepta `{"message": "<uuid>"}` y `{"message": {"id": "<uuid>"}}`. El ID debe ser UUID v4.
pub fn parse_module_id(body: &Value) -> Result<Uuid, DomainError> {
    let message = body
        .get("message")
        .ok_or_else(|| DomainError::MalformedInput("body has no 'message'".into()))?;
    let raw = match message {
        Value::String(s) => s.as_str(),
        Value::Object(m) => m
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| DomainError::MissingField("message.id".into()))?,
        other => return Err(DomainError::MalformedInput(format!("unexpected 'message': {other}"))),
    };
    let id = Uuid::parse_str(raw).map_err(|_| DomainError::InvalidId(raw.to_string()))?;
    if id.get_version_num() != 4 {
        return Err(DomainError::InvalidId(raw.to_string()));
    }
    Ok(id)
}

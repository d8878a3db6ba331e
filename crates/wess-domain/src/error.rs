use thiserror::Error;

/// Errores al decodificar o interpretar respuestas del servicio de módulos Wasm.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entrada mal formada: {0}")]
    MalformedInput(String),

    #[error("Campo ausente: {0}")]
    MissingField(String),

    #[error("Respuesta de error del servicio: {0}")]
    Rejected(String),

    #[error("ID de módulo inválido: {0}")]
    InvalidId(String),

    #[error("Error de serialización: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Serialization(e.to_string())
    }
}

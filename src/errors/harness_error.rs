use thiserror::Error;
use wess_domain::DomainError;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Uso incorrecto: {0}")]
    Usage(String),
}

impl HarnessError {
    /// Código de salida del binario: 2 para uso incorrecto, 3 para el resto.
    pub fn exit_code(&self) -> i32 {
        match self {
            HarnessError::Usage(_) => 2,
            _ => 3,
        }
    }
}

//! Configuración del harness.
//! Carga variables de entorno (.env) una sola vez y expone `HarnessConfig`.
//!
//! - `WESS_URL`: URL base del servicio (por defecto `http://127.0.0.1:7770`).
//! - `WESS_MAX_DURATION_MS`: umbral de latencia de los checks (por defecto 4000).
//! - `WESS_EXPECTED_PAYLOAD`: ruta opcional a un JSON con el payload esperado.
use once_cell::sync::Lazy;
use serde_json::Value;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;

use crate::errors::HarnessError;
use crate::files::read_json_file;

pub const DEFAULT_URL: &str = "http://127.0.0.1:7770";
pub const DEFAULT_MAX_DURATION_MS: u64 = 4000;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// URL base sin barra final.
    pub base_url: String,
    /// Una muestra cumple el check de latencia si dura estrictamente menos.
    pub max_duration_ms: u64,
    pub expected_payload: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_URL.to_string(), max_duration_ms: DEFAULT_MAX_DURATION_MS, expected_payload: None }
    }
}

impl HarnessConfig {
    pub fn from_env() -> Result<Self, HarnessError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda de variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HarnessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match lookup("WESS_URL") {
            Some(url) => {
                let trimmed = url.trim().trim_end_matches('/').to_string();
                if trimmed.is_empty() {
                    return Err(HarnessError::Config("WESS_URL is empty".into()));
                }
                trimmed
            }
            None => DEFAULT_URL.to_string(),
        };
        let max_duration_ms = match lookup("WESS_MAX_DURATION_MS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| HarnessError::Config(format!("WESS_MAX_DURATION_MS={raw}")))?,
            None => DEFAULT_MAX_DURATION_MS,
        };
        let expected_payload = lookup("WESS_EXPECTED_PAYLOAD").filter(|p| !p.trim().is_empty()).map(PathBuf::from);
        Ok(Self { base_url, max_duration_ms, expected_payload })
    }

    pub fn module_url(&self, id: impl Display) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Payload esperado: el archivo configurado o, si no hay, el payload por defecto.
    pub fn expected_value(&self) -> Result<Value, HarnessError> {
        match &self.expected_payload {
            Some(path) => read_json_file(path),
            None => Ok(wess_domain::default_payload().to_value()?),
        }
    }
}

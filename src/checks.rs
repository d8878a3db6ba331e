//! Checks nombrados sobre muestras grabadas del escenario "crear y leer módulo".
//!
//! Cada muestra produce un conjunto fijo de checks según su fase. Un cuerpo que no
//! se puede decodificar cuenta como check fallido, nunca aborta la evaluación.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use wess_domain::{check_wasm, parse_module_id, DomainError};

use crate::config::HarnessConfig;

pub const ROUND_TRIP_CHECK: &str = "check if has created correctly";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Create,
    Read,
}

impl Phase {
    fn label(self) -> &'static str {
        match self {
            Phase::Create => "createWasm",
            Phase::Read => "readWasm",
        }
    }
}

/// Intercambio HTTP ya grabado: fase, estado, latencia y cuerpo crudo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub phase: Phase,
    pub status: u16,
    pub duration_ms: u64,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
}

impl CheckOutcome {
    pub fn new(name: impl Into<String>, passed: bool) -> Self {
        Self { name: name.into(), passed }
    }
}

fn decode_body(sample: &Sample) -> Result<Value, DomainError> {
    serde_json::from_str(&sample.body).map_err(|e| DomainError::MalformedInput(e.to_string()))
}

pub fn evaluate(sample: &Sample, expected: &Value, cfg: &HarnessConfig) -> Vec<CheckOutcome> {
    let label = sample.phase.label();
    let mut outcomes = vec![
        CheckOutcome::new(format!("statuscode 200 - {label}"), sample.status == 200),
        CheckOutcome::new(format!("max duration - {label}"), sample.duration_ms < cfg.max_duration_ms),
    ];
    match sample.phase {
        Phase::Create => {
            let passed = match decode_body(sample).and_then(|body| parse_module_id(&body)) {
                Ok(id) => {
                    debug!("created {}", cfg.module_url(id));
                    true
                }
                Err(e) => {
                    warn!("create sample without module id: {e}");
                    false
                }
            };
            outcomes.push(CheckOutcome::new(format!("module id - {label}"), passed));
        }
        Phase::Read => {
            let passed = match decode_body(sample).and_then(|body| check_wasm(&body, expected)) {
                Ok(verdict) => verdict,
                Err(e) => {
                    warn!("read sample not comparable: {e}");
                    false
                }
            };
            outcomes.push(CheckOutcome::new(ROUND_TRIP_CHECK, passed));
        }
    }
    outcomes
}

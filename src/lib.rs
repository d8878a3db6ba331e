//! WESS harness library
//!
//! Este crate agrupa lo que el harness de carga necesita alrededor del comparador:
//! - `errors`: error del harness y reexport de `DomainError`.
//! - `hashing`: serialización canónica y huellas (reexport de `wess-core`).
//! - `config`: configuración por variables de entorno.
//! - `checks` / `tally`: checks sobre muestras grabadas y tasas de éxito.

pub mod checks;
pub mod config;
pub mod errors;
pub mod files;
pub mod hashing;
pub mod tally;

pub use checks::{evaluate, CheckOutcome, Phase, Sample};
pub use config::HarnessConfig;
pub use errors::{DomainError, HarnessError};
pub use tally::{run_samples, CheckTally, Counts};

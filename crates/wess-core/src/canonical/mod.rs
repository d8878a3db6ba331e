//! Forma canónica de un `serde_json::Value` y comparación estructural.
//!
//! - Los objetos se comparan sin importar el orden de sus claves.
//! - Los arrays conservan el orden (es significativo).
//! - Una clave ausente y una clave con `null` son distintas.

pub mod mismatch;
pub mod value;

pub use mismatch::{first_difference, Mismatch, MismatchKind};
pub use value::{canonicalize, equivalent, CanonicalNumber, CanonicalValue};

//! wess-core: comparador estructural de árboles JSON independiente del orden de claves.
pub mod canonical;
pub mod hashing;

pub use canonical::{canonicalize, equivalent, first_difference, CanonicalNumber, CanonicalValue, Mismatch, MismatchKind};
pub use hashing::{hash_str, hash_value, to_canonical_json};

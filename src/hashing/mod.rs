//! Serialización canónica y huellas que usa `wess-check` (`canonical`, `fingerprint`).

pub use wess_core::hashing::{canonical_json, hash_str, hash_value, to_canonical_json};

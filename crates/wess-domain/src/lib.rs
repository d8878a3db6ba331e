// wess-domain library entry point
pub mod error;
pub mod module_id;
pub mod response;
pub mod wasm;

pub use error::DomainError;
pub use module_id::parse_module_id;
pub use response::{check_wasm, expected_shape, explain_wasm};
pub use wasm::{default_payload, FnTypeArg, Wasm, WasmFn, WasmMetadata, WasmPayload};

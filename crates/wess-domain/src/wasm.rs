//! Modelos del módulo Wasm tal como los expone el servicio.
//!
//! - [`WasmPayload`]: cuerpo plano que se envía al crear un módulo.
//! - [`WasmFn`]: forma almacenada (`wasm` + `metadata`) que devuelve la lectura.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::DomainError;

/// Bytecode WebAssembly.
pub type Wasm = Vec<u8>;

/// Argumento declarado de la función exportada.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct FnTypeArg {
    pub name: String,
    #[serde(rename = "type")]
    pub arg_type: String,
}

impl FnTypeArg {
    pub fn new(name: impl Into<String>, arg_type: impl Into<String>) -> Self {
        Self { name: name.into(), arg_type: arg_type.into() }
    }
}

/// Metadatos asociados a un módulo almacenado.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct WasmMetadata {
    pub func: String,
    pub return_type: String,
    pub args: Vec<Option<FnTypeArg>>,
}

/// Módulo almacenado: bytecode + metadatos.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct WasmFn {
    pub wasm: Wasm,
    pub metadata: WasmMetadata,
}

impl WasmFn {
    pub fn new(wasm: Wasm, metadata: WasmMetadata) -> Self {
        Self { wasm, metadata }
    }

    /// Decodifica el módulo desde una respuesta de lectura (`message.Success`).
    pub fn from_response(response: &Value) -> Result<Self, DomainError> {
        let success = crate::response::success_payload(response)?;
        Ok(serde_json::from_value(success.clone())?)
    }

    /// Forma plana equivalente al payload de creación.
    pub fn to_payload(&self) -> WasmPayload {
        WasmPayload {
            func: self.metadata.func.clone(),
            return_type: self.metadata.return_type.clone(),
            args: self.metadata.args.clone(),
            wasm: self.wasm.clone(),
        }
    }
}

/// Cuerpo de la petición de creación.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct WasmPayload {
    pub func: String,
    pub return_type: String,
    pub args: Vec<Option<FnTypeArg>>,
    pub wasm: Wasm,
}

impl WasmPayload {
    pub fn into_wasm_fn(self) -> WasmFn {
        WasmFn::new(
            self.wasm,
            WasmMetadata { func: self.func, return_type: self.return_type, args: self.args },
        )
    }

    pub fn to_value(&self) -> Result<Value, DomainError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Payload usado por el escenario de carga: `sum` con retorno `u8`.
pub fn default_payload() -> WasmPayload {
    WasmPayload {
        func: "sum".to_string(),
        return_type: "u8".to_string(),
        args: vec![Some(FnTypeArg::new("", ""))],
        wasm: vec![121],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wess_core::equivalent;

    #[test]
    fn default_payload_serializes_like_the_scenario_body() {
        let v = default_payload().to_value().unwrap();
        let expected = json!({
            "func": "sum",
            "return_type": "u8",
            "args": [{"type": "", "name": ""}],
            "wasm": [121]
        });
        assert!(equivalent(&v, &expected));
    }

    #[test]
    fn payload_and_wasm_fn_convert_both_ways() {
        let payload = default_payload();
        let stored = payload.clone().into_wasm_fn();
        assert_eq!(stored.metadata.func, "sum");
        assert_eq!(stored.to_payload(), payload);
    }

    #[test]
    fn null_args_are_kept() {
        let p: WasmPayload = serde_json::from_value(json!({
            "func": "f", "return_type": "i32", "args": [null], "wasm": []
        }))
        .unwrap();
        assert_eq!(p.args, vec![None]);
    }
}

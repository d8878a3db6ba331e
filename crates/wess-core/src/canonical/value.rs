use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// 2^127: todo f64 entero por debajo de este valor cabe exacto en un i128.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Número normalizado: `1` y `1.0` son el mismo número canónico.
#[derive(Debug, Clone, Copy)]
pub enum CanonicalNumber {
    Integer(i128),
    Float(f64),
}

impl CanonicalNumber {
    pub fn from_number(n: &Number) -> Self {
        if let Some(i) = n.as_i64() {
            return Self::Integer(i128::from(i));
        }
        if let Some(u) = n.as_u64() {
            return Self::Integer(i128::from(u));
        }
        // as_f64 solo devuelve None con `arbitrary_precision`, que no usamos.
        match n.as_f64() {
            Some(f) => Self::from_f64(f),
            None => Self::Float(f64::NAN),
        }
    }

    pub fn from_f64(f: f64) -> Self {
        if f.is_finite() && f.fract() == 0.0 && f.abs() < I128_LIMIT {
            Self::Integer(f as i128)
        } else {
            Self::Float(f)
        }
    }

    fn to_number(self) -> Option<Number> {
        match self {
            Self::Integer(i) => i64::try_from(i)
                .map(Number::from)
                .or_else(|_| u64::try_from(i).map(Number::from))
                .ok()
                // fuera de u64 solo llegan enteros que vinieron de un f64, así que la vuelta es exacta
                .or_else(|| Number::from_f64(i as f64)),
            Self::Float(f) => Number::from_f64(f),
        }
    }
}

// Igualdad por bits en los flotantes: mantiene la reflexividad incluso con NaN.
impl PartialEq for CanonicalNumber {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for CanonicalNumber {}

impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            // serde_json serializa flotantes no finitos como null
            Self::Float(x) => match Number::from_f64(*x) {
                Some(n) => write!(f, "{n}"),
                None => f.write_str("null"),
            },
        }
    }
}

/// Árbol JSON en forma canónica: claves de objeto ordenadas (BTreeMap),
/// arrays en su orden original y números normalizados.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalValue {
    Null,
    Bool(bool),
    Number(CanonicalNumber),
    String(String),
    Array(Vec<CanonicalValue>),
    Object(BTreeMap<String, CanonicalValue>),
}

impl CanonicalValue {
    /// Nombre del tipo JSON del nodo (para diagnósticos).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Convierte de vuelta a `serde_json::Value`; las claves quedan en orden ascendente.
    pub fn into_value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(b),
            Self::Number(n) => n.to_number().map(Value::Number).unwrap_or(Value::Null),
            Self::String(s) => Value::String(s),
            Self::Array(items) => Value::Array(items.into_iter().map(Self::into_value).collect()),
            Self::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (k, v) in map {
                    out.insert(k, v.into_value());
                }
                Value::Object(out)
            }
        }
    }
}

impl From<&Value> for CanonicalValue {
    fn from(value: &Value) -> Self {
        canonicalize(value)
    }
}

/// Calcula la forma canónica de un valor. Función total: no hay errores posibles.
pub fn canonicalize(value: &Value) -> CanonicalValue {
    match value {
        Value::Null => CanonicalValue::Null,
        Value::Bool(b) => CanonicalValue::Bool(*b),
        Value::Number(n) => CanonicalValue::Number(CanonicalNumber::from_number(n)),
        Value::String(s) => CanonicalValue::String(s.clone()),
        Value::Array(arr) => CanonicalValue::Array(arr.iter().map(canonicalize).collect()),
        Value::Object(map) => {
            let mut tree = BTreeMap::new();
            for (k, v) in map {
                tree.insert(k.clone(), canonicalize(v));
            }
            CanonicalValue::Object(tree)
        }
    }
}

/// `true` si ambos valores representan los mismos datos sin importar el orden de claves.
///
/// Compara las formas canónicas directamente en vez de sus serializaciones.
pub fn equivalent(a: &Value, b: &Value) -> bool {
    canonicalize(a) == canonicalize(b)
}

fn write_json_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}

/// Serialización canónica: sin espacios y con claves ordenadas.
impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write_json_string(f, s),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_json_string(f, k)?;
                    write!(f, ":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_are_unchanged() {
        assert_eq!(canonicalize(&json!(null)), CanonicalValue::Null);
        assert_eq!(canonicalize(&json!(true)), CanonicalValue::Bool(true));
        assert_eq!(canonicalize(&json!("sum")), CanonicalValue::String("sum".into()));
        assert_eq!(canonicalize(&json!(7)), CanonicalValue::Number(CanonicalNumber::Integer(7)));
    }

    #[test]
    fn object_keys_come_out_sorted() {
        let c = canonicalize(&json!({"y": 2, "x": 1, "a": {"d": 0, "b": 1}}));
        let CanonicalValue::Object(map) = &c else { panic!("expected object, got {c:?}") };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "x", "y"]);
        assert_eq!(c.to_string(), r#"{"a":{"b":1,"d":0},"x":1,"y":2}"#);
    }

    #[test]
    fn into_value_keeps_sorted_order() {
        let v = canonicalize(&json!({"b": [3, {"z": 1, "m": 2}], "a": null})).into_value();
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"a":null,"b":[3,{"m":2,"z":1}]}"#);
    }

    #[test]
    fn scenario_key_order_is_irrelevant() {
        assert!(equivalent(&json!({"x": 1, "y": 2}), &json!({"y": 2, "x": 1})));
        assert!(equivalent(&json!({"wasm": [121], "func": "sum"}), &json!({"func": "sum", "wasm": [121]})));
    }

    #[test]
    fn scenario_array_length_differs() {
        assert!(!equivalent(&json!({"wasm": [121]}), &json!({"wasm": [121, 0]})));
    }

    #[test]
    fn scenario_nested_objects_inside_arrays() {
        assert!(equivalent(
            &json!({"args": [{"type": "", "name": ""}]}),
            &json!({"args": [{"name": "", "type": ""}]})
        ));
    }

    #[test]
    fn scenario_null_is_not_absence() {
        assert!(!equivalent(&json!({"value": null}), &json!({})));
    }

    #[test]
    fn array_order_matters() {
        assert!(!equivalent(&json!([1, 2]), &json!([2, 1])));
    }

    #[test]
    fn type_mismatch_is_not_equivalent() {
        assert!(!equivalent(&json!(1), &json!("1")));
        assert!(!equivalent(&json!({"a": 0}), &json!({"a": false})));
        assert!(!equivalent(&json!([]), &json!({})));
    }

    #[test]
    fn integral_floats_match_integers() {
        assert!(equivalent(&json!(1), &json!(1.0)));
        assert!(equivalent(&json!(-0.0), &json!(0)));
        assert!(!equivalent(&json!(1), &json!(1.5)));
        assert_eq!(canonicalize(&json!(2.5)).to_string(), "2.5");
    }

    #[test]
    fn integral_floats_beyond_u64_survive_into_value() {
        let big = canonicalize(&json!(1e30));
        assert_eq!(big, CanonicalValue::Number(CanonicalNumber::Integer(1e30_f64 as i128)));
        assert_eq!(canonicalize(&big.clone().into_value()), big);
        assert_eq!(canonicalize(&json!(1e300)), CanonicalValue::Number(CanonicalNumber::Float(1e300)));
    }
}

//! Localiza la primera diferencia entre dos árboles no equivalentes.
//! El recorrido sigue el orden canónico: claves ascendentes e índices ascendentes.

use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;

use super::value::{canonicalize, CanonicalValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchKind {
    /// Tipos JSON distintos en la misma posición.
    TypeMismatch { left: &'static str, right: &'static str },
    /// Mismo tipo escalar, distinto valor (serializaciones canónicas).
    ValueMismatch { left: String, right: String },
    LengthMismatch { left: usize, right: usize },
    /// Clave presente solo en el lado derecho.
    MissingKey { key: String },
    /// Clave presente solo en el lado izquierdo.
    UnexpectedKey { key: String },
}

/// Primera diferencia encontrada, con ruta en formato JSON Pointer (RFC 6901).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub path: String,
    pub kind: MismatchKind,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { self.path.as_str() };
        match &self.kind {
            MismatchKind::TypeMismatch { left, right } => write!(f, "{path}: type {left} != {right}"),
            MismatchKind::ValueMismatch { left, right } => write!(f, "{path}: value {left} != {right}"),
            MismatchKind::LengthMismatch { left, right } => write!(f, "{path}: length {left} != {right}"),
            MismatchKind::MissingKey { key } => write!(f, "{path}: missing key {key:?}"),
            MismatchKind::UnexpectedKey { key } => write!(f, "{path}: unexpected key {key:?}"),
        }
    }
}

/// `None` si y solo si `equivalent(a, b)`.
pub fn first_difference(a: &Value, b: &Value) -> Option<Mismatch> {
    let mut path = String::new();
    locate(&canonicalize(a), &canonicalize(b), &mut path)
}

fn push_segment(path: &mut String, segment: &str) {
    path.push('/');
    for c in segment.chars() {
        match c {
            '~' => path.push_str("~0"),
            '/' => path.push_str("~1"),
            other => path.push(other),
        }
    }
}

fn at(path: &str, kind: MismatchKind) -> Option<Mismatch> {
    Some(Mismatch { path: path.to_string(), kind })
}

fn locate(left: &CanonicalValue, right: &CanonicalValue, path: &mut String) -> Option<Mismatch> {
    use CanonicalValue as C;
    match (left, right) {
        (C::Array(l), C::Array(r)) => {
            for (i, (li, ri)) in l.iter().zip(r.iter()).enumerate() {
                let mark = path.len();
                push_segment(path, &i.to_string());
                let found = locate(li, ri, path);
                path.truncate(mark);
                if found.is_some() {
                    return found;
                }
            }
            if l.len() != r.len() {
                return at(path, MismatchKind::LengthMismatch { left: l.len(), right: r.len() });
            }
            None
        }
        (C::Object(l), C::Object(r)) => {
            let keys: BTreeSet<&String> = l.keys().chain(r.keys()).collect();
            for key in keys {
                match (l.get(key), r.get(key)) {
                    (Some(lv), Some(rv)) => {
                        let mark = path.len();
                        push_segment(path, key);
                        let found = locate(lv, rv, path);
                        path.truncate(mark);
                        if found.is_some() {
                            return found;
                        }
                    }
                    (Some(_), None) => return at(path, MismatchKind::UnexpectedKey { key: key.clone() }),
                    (None, Some(_)) => return at(path, MismatchKind::MissingKey { key: key.clone() }),
                    (None, None) => {}
                }
            }
            None
        }
        _ if left.kind_name() != right.kind_name() => at(
            path,
            MismatchKind::TypeMismatch { left: left.kind_name(), right: right.kind_name() },
        ),
        _ if left != right => at(
            path,
            MismatchKind::ValueMismatch { left: left.to_string(), right: right.to_string() },
        ),
        _ => None,
    }
}

use serde::{Deserialize, Serialize};

/// A typed SQL value carried inside expression trees and extracted as a
/// bind parameter by the parameterized renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// UTF-8 text (WKT payloads, plain strings)
    Text(String),
    /// Raw bytes (WKB payloads)
    Bytes(Vec<u8>),
    /// 64-bit integer (SRIDs)
    Int(i64),
    /// 64-bit float (distance thresholds)
    Float(f64),
    Bool(bool),
    /// A dialect-native geometry literal. Tagged separately from `Text` so
    /// parameter binding keeps the geometry semantic type.
    Geometry(String),
    Null,
}

impl Value {
    /// Short label for error messages.
    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Geometry(_) => "geometry",
            Self::Null => "null",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

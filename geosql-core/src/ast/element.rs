use serde::{Deserialize, Serialize};

use crate::ast::Value;

/// SRID sentinel for geometries whose spatial reference system is
/// unspecified.
pub const UNKNOWN_SRID: i32 = -1;

/// A geometry operand that carries its own serialization tag.
///
/// The resolver unwraps [`SpatialElement::Wrapped`] exactly one level,
/// feeding the inner payload through the binary constructor. Deeper nesting
/// is rejected, never silently truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpatialElement {
    /// Well-known text and its SRID.
    Wkt { text: String, srid: i32 },
    /// Well-known binary and its SRID.
    Wkb { bytes: Vec<u8>, srid: i32 },
    /// A once-wrapped element.
    Wrapped {
        inner: Box<SpatialElement>,
        srid: i32,
    },
}

impl SpatialElement {
    /// WKT element with [`UNKNOWN_SRID`].
    pub fn wkt(text: impl Into<String>) -> Self {
        Self::Wkt {
            text: text.into(),
            srid: UNKNOWN_SRID,
        }
    }

    /// WKT element with an explicit SRID.
    pub fn wkt_srid(text: impl Into<String>, srid: i32) -> Self {
        Self::Wkt {
            text: text.into(),
            srid,
        }
    }

    /// WKB element with [`UNKNOWN_SRID`].
    pub fn wkb(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Wkb {
            bytes: bytes.into(),
            srid: UNKNOWN_SRID,
        }
    }

    /// WKB element with an explicit SRID.
    pub fn wkb_srid(bytes: impl Into<Vec<u8>>, srid: i32) -> Self {
        Self::Wkb {
            bytes: bytes.into(),
            srid,
        }
    }

    /// Wrap an element one level deeper.
    pub fn wrapped(inner: SpatialElement, srid: i32) -> Self {
        Self::Wrapped {
            inner: Box::new(inner),
            srid,
        }
    }

    /// Shape label for error messages, e.g. `wrapped(wkt)`.
    pub(crate) fn shape(&self) -> String {
        match self {
            Self::Wkt { .. } => "wkt".to_string(),
            Self::Wkb { .. } => "wkb".to_string(),
            Self::Wrapped { inner, .. } => format!("wrapped({})", inner.shape()),
        }
    }

    /// Number of consecutive wrapping levels at the root.
    pub(crate) fn wrap_depth(&self) -> usize {
        let mut depth = 0;
        let mut element = self;
        while let Self::Wrapped { inner, .. } = element {
            depth += 1;
            element = inner.as_ref();
        }
        depth
    }
}

/// The full operand universe accepted by predicate methods.
///
/// Construction goes through `From` impls, so each concrete input type maps
/// onto exactly one resolution rule at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeomOperand {
    /// A tagged spatial element (WKT, WKB, or once-wrapped).
    Element(SpatialElement),
    /// A plain string, treated as WKT with [`UNKNOWN_SRID`].
    Text(String),
    /// A value that is already a dialect-native geometry literal.
    Raw(Value),
}

impl GeomOperand {
    /// Shape label for error messages.
    pub(crate) fn shape(&self) -> String {
        match self {
            Self::Element(element) => element.shape(),
            Self::Text(_) => "text".to_string(),
            Self::Raw(value) => format!("raw({})", value.kind()),
        }
    }
}

impl From<SpatialElement> for GeomOperand {
    fn from(element: SpatialElement) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for GeomOperand {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for GeomOperand {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Value> for GeomOperand {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wkt_defaults_to_unknown_srid() {
        let element = SpatialElement::wkt("POINT(1 2)");
        assert_eq!(
            element,
            SpatialElement::Wkt {
                text: "POINT(1 2)".to_string(),
                srid: UNKNOWN_SRID
            }
        );
    }

    #[test]
    fn wrap_depth_counts_nesting() {
        let wkb = SpatialElement::wkb_srid(vec![1u8, 2], 4326);
        assert_eq!(wkb.wrap_depth(), 0);

        let once = SpatialElement::wrapped(wkb.clone(), 0);
        assert_eq!(once.wrap_depth(), 1);

        let twice = SpatialElement::wrapped(once, 0);
        assert_eq!(twice.wrap_depth(), 2);
        assert_eq!(twice.shape(), "wrapped(wrapped(wkb))");
    }

    #[test]
    fn operand_from_str_is_text() {
        let operand: GeomOperand = "POINT(0 0)".into();
        assert_eq!(operand, GeomOperand::Text("POINT(0 0)".to_string()));
    }
}

//! Geometry operand resolution.
//!
//! Normalizes every accepted operand shape into a [`CanonicalLiteral`]
//! before the predicate call is assembled. Resolution is pure
//! classification; WKT grammar, WKB framing and SRID values are never
//! validated here.

use crate::ast::{Expr, GeomOperand, SpatialElement, Value, UNKNOWN_SRID};
use crate::error::GeoSqlError;
use crate::transpiler::dialect::SqlGenerator;

/// Constructor family for a resolved geometry literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomConstructor {
    /// `GeomFromText` / `ST_GeomFromText`
    FromText,
    /// `GeomFromWKB` / `ST_GeomFromWKB`
    FromWkb,
    /// Already a dialect-native literal; rendered bare.
    Passthrough,
}

/// A geometry operand normalized to one constructor form.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalLiteral {
    pub constructor: GeomConstructor,
    pub payload: Value,
    pub srid: i32,
}

impl CanonicalLiteral {
    /// Build the constructor call (or bare literal) in the generator's
    /// dialect.
    pub fn into_expr(self, generator: &dyn SqlGenerator) -> Expr {
        match generator.geometry_constructor(self.constructor) {
            Some(name) => Expr::func(
                name,
                vec![
                    Expr::Literal(self.payload),
                    Expr::literal(i64::from(self.srid)),
                ],
            ),
            None => Expr::Literal(self.payload),
        }
    }
}

/// Classify `operand` into the constructor expression that reproduces it on
/// the database side.
///
/// Dispatch is a fixed ladder over the closed operand type, each input class
/// hitting exactly one rule:
/// 1. tagged WKT: text constructor
/// 2. tagged WKB: binary constructor
/// 3. a single level of generic wrapping: binary constructor over the inner
///    payload and inner SRID, whatever the inner tag
/// 4. plain text: text constructor with [`UNKNOWN_SRID`]
/// 5. anything else: passthrough, unchanged
///
/// Wrapping nested more than one level fails with
/// [`GeoSqlError::NestedElement`].
pub fn resolve(operand: &GeomOperand) -> Result<CanonicalLiteral, GeoSqlError> {
    match operand {
        GeomOperand::Element(SpatialElement::Wkt { text, srid }) => Ok(CanonicalLiteral {
            constructor: GeomConstructor::FromText,
            payload: Value::Text(text.clone()),
            srid: *srid,
        }),
        GeomOperand::Element(SpatialElement::Wkb { bytes, srid }) => Ok(CanonicalLiteral {
            constructor: GeomConstructor::FromWkb,
            payload: Value::Bytes(bytes.clone()),
            srid: *srid,
        }),
        GeomOperand::Element(element @ SpatialElement::Wrapped { inner, .. }) => {
            match inner.as_ref() {
                SpatialElement::Wkt { text, srid } => Ok(CanonicalLiteral {
                    constructor: GeomConstructor::FromWkb,
                    payload: Value::Text(text.clone()),
                    srid: *srid,
                }),
                SpatialElement::Wkb { bytes, srid } => Ok(CanonicalLiteral {
                    constructor: GeomConstructor::FromWkb,
                    payload: Value::Bytes(bytes.clone()),
                    srid: *srid,
                }),
                SpatialElement::Wrapped { .. } => Err(GeoSqlError::NestedElement {
                    depth: element.wrap_depth(),
                }),
            }
        }
        GeomOperand::Text(text) => Ok(CanonicalLiteral {
            constructor: GeomConstructor::FromText,
            payload: Value::Text(text.clone()),
            srid: UNKNOWN_SRID,
        }),
        GeomOperand::Raw(value) => Ok(CanonicalLiteral {
            constructor: GeomConstructor::Passthrough,
            payload: value.clone(),
            srid: UNKNOWN_SRID,
        }),
    }
}

//! Ergonomic builder functions for geosql AST nodes.
//!
//! # Example
//! ```
//! use geosql_core::ast::builders::{col, wkt_srid};
//! use geosql_core::comparator::Comparator;
//! use geosql_core::transpiler::ToSql;
//!
//! let geom = Comparator::sql_mm(col("towns.geom"));
//! let filter = geom.within(wkt_srid("POLYGON((0 0, 0 1, 1 1, 0 0))", 4326)).unwrap();
//! assert!(filter.to_sql().starts_with("ST_Within"));
//! ```

use crate::ast::{Expr, GeomOperand, SpatialElement, Value};

/// Create a column reference expression.
pub fn col(name: &str) -> Expr {
    Expr::Column(name.to_string())
}

/// WKT element with the unknown-SRID sentinel.
pub fn wkt(text: &str) -> SpatialElement {
    SpatialElement::wkt(text)
}

/// WKT element with an explicit SRID.
pub fn wkt_srid(text: &str, srid: i32) -> SpatialElement {
    SpatialElement::wkt_srid(text, srid)
}

/// WKB element with the unknown-SRID sentinel.
pub fn wkb(bytes: impl Into<Vec<u8>>) -> SpatialElement {
    SpatialElement::wkb(bytes)
}

/// WKB element with an explicit SRID.
pub fn wkb_srid(bytes: impl Into<Vec<u8>>, srid: i32) -> SpatialElement {
    SpatialElement::wkb_srid(bytes, srid)
}

/// A dialect-native geometry literal, passed through unresolved.
pub fn raw_geometry(literal: &str) -> GeomOperand {
    GeomOperand::Raw(Value::Geometry(literal.to_string()))
}

//! Spatial predicate expressions for SQL databases.
//!
//! Builds `Equals`/`ST_Equals`-style spatial function calls against a
//! geometry column, normalizing WKT, WKB and raw operands into the
//! dialect's literal constructors. Expressions are returned unexecuted;
//! render them with [`transpiler::ToSql`] or hand the parameterized form to
//! a driver.
//!
//! # Example
//! ```
//! use geosql_core::prelude::*;
//!
//! let geom = Comparator::new(col("towns.geom"), Dialect::SqlMm);
//! let expr = geom.intersects(wkt("POINT(1 2)")).unwrap();
//! assert_eq!(
//!     expr.to_sql_with_dialect(Dialect::SqlMm),
//!     r#"ST_Intersects("towns"."geom", ST_GeomFromText('POINT(1 2)', -1))"#
//! );
//! ```

pub mod ast;
pub mod comparator;
pub mod error;
pub mod transpiler;

pub use ast::{Expr, GeomOperand, SpatialElement, Value, UNKNOWN_SRID};
pub use comparator::Comparator;
pub use error::GeoSqlError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ast::builders::{col, raw_geometry, wkb, wkb_srid, wkt, wkt_srid};
    pub use crate::ast::{Expr, GeomOperand, SpatialElement, Value, UNKNOWN_SRID};
    pub use crate::comparator::Comparator;
    pub use crate::error::GeoSqlError;
    pub use crate::transpiler::{Dialect, ToSql, ToSqlParameterized};
}

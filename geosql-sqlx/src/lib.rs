//! SQLx integration for geosql.
//!
//! Renders predicate expressions with typed parameter extraction and binds
//! the extracted values onto SQLx queries.
//!
//! # Example
//! ```no_run
//! use geosql_core::prelude::*;
//! use geosql_sqlx::prelude::*;
//! use sqlx::sqlite::SqlitePool;
//!
//! async fn example(pool: &SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//!     let geom = Comparator::sfs(col("geom"));
//!     let expr = geom.intersects(wkt("POINT(1 2)"))?;
//!     let filter = predicate_to_sql_parameterized_with_dialect(&expr, Dialect::Sfs);
//!     let sql = format!("SELECT name FROM towns WHERE {}", filter.sql);
//!     let rows = bind_params(sqlx::query(&sql), &filter.params)
//!         .fetch_all(pool)
//!         .await?;
//!     let _ = rows;
//!     Ok(())
//! }
//! ```

use geosql_core::ast::Expr;
use geosql_core::transpiler::{Dialect, ToSql, ToSqlParameterized, TranspileResult};

pub mod params;

pub use params::bind_params;

/// Render a predicate expression with the default dialect.
pub fn predicate_to_sql(expr: &Expr) -> String {
    expr.to_sql()
}

/// Render a predicate expression with a specific dialect.
pub fn predicate_to_sql_with_dialect(expr: &Expr, dialect: Dialect) -> String {
    expr.to_sql_with_dialect(dialect)
}

/// Render a predicate expression with extracted parameters.
pub fn predicate_to_sql_parameterized(expr: &Expr) -> TranspileResult {
    expr.to_sql_parameterized()
}

/// Render a predicate expression with extracted parameters for a specific
/// dialect.
pub fn predicate_to_sql_parameterized_with_dialect(
    expr: &Expr,
    dialect: Dialect,
) -> TranspileResult {
    expr.to_sql_parameterized_with_dialect(dialect)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        bind_params, predicate_to_sql, predicate_to_sql_parameterized,
        predicate_to_sql_parameterized_with_dialect, predicate_to_sql_with_dialect,
    };
    pub use geosql_core::transpiler::{Dialect, ToSql, ToSqlParameterized, TranspileResult};
}

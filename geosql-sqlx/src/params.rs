//! Parameter binding for geosql values.
//!
//! Pushes the `Value`s extracted by the parameterized renderer onto an SQLx
//! query in placeholder order. Geometry-tagged text binds as text and WKB
//! payloads bind as blobs; the database-side constructor call in the SQL
//! template reassembles the geometry.

use geosql_core::ast::Value;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;

/// Bind extracted parameter values onto `query`, in order.
pub fn bind_params<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &'q [Value],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for value in params {
        query = match value {
            Value::Text(s) => query.bind(s.as_str()),
            Value::Geometry(s) => query.bind(s.as_str()),
            Value::Bytes(bytes) => query.bind(bytes.as_slice()),
            Value::Int(n) => query.bind(*n),
            Value::Float(n) => query.bind(*n),
            Value::Bool(b) => query.bind(*b),
            Value::Null => query.bind(Option::<String>::None),
        };
    }
    query
}

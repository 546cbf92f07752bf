//! Error types for geosql.

use thiserror::Error;

/// Errors produced while building spatial predicate expressions.
///
/// Nothing here covers database-side failures: malformed WKT/WKB payloads,
/// SRID mismatches, and unknown function names surface from the executing
/// database, not from this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoSqlError {
    /// The predicate has no function in the target dialect's table.
    #[error("predicate `{predicate}` is not supported by the {dialect} dialect")]
    UnsupportedPredicate {
        predicate: &'static str,
        dialect: &'static str,
    },

    /// A wrapped spatial element nested deeper than the single level the
    /// resolver unwraps.
    #[error(
        "wrapped spatial element nested {depth} levels deep; only one level of wrapping is resolved"
    )]
    NestedElement { depth: usize },

    /// The operand failed every resolution rule for the named predicate.
    #[error("predicate `{predicate}` cannot resolve an operand of shape `{shape}`")]
    InvalidOperand {
        predicate: &'static str,
        shape: String,
    },
}

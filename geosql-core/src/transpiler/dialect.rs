//! Dialect selection and the shared predicate table.
//!
//! Both dialect surfaces are views over the single [`PREDICATES`] array;
//! neither carries hand-written per-predicate logic. A `None` entry in a
//! dialect column means the predicate is unsupported there and errors at
//! call time.

use serde::{Deserialize, Serialize};

use crate::ast::{Expr, GeomOperand, Value};
use crate::error::GeoSqlError;
use crate::transpiler::geometry::{resolve, GeomConstructor};

/// Target spatial SQL convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Dialect {
    /// OGC Simple Feature Specification: unprefixed function names, as
    /// implemented by MySQL.
    Sfs,
    /// SQL/MM: `ST_`-prefixed function names, as implemented by PostGIS and
    /// SpatiaLite.
    #[default]
    SqlMm,
}

impl Dialect {
    /// The SQL generator for this dialect.
    pub fn generator(self) -> Box<dyn SqlGenerator> {
        match self {
            Self::Sfs => Box::new(SfsGenerator),
            Self::SqlMm => Box::new(SqlMmGenerator),
        }
    }

    /// Dialect name as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sfs => "SFS",
            Self::SqlMm => "SQL/MM",
        }
    }
}

/// Logical spatial predicates exposed by the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    Equals,
    Distance,
    Disjoint,
    Intersects,
    Touches,
    Crosses,
    Within,
    Overlaps,
    Contains,
    MbrEquals,
    MbrDistance,
    MbrDisjoint,
    MbrIntersects,
    MbrTouches,
    MbrWithin,
    MbrOverlaps,
    MbrContains,
    Covers,
    CoveredBy,
    Intersection,
    WithinDistance,
}

impl Predicate {
    /// Predicate name as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::Distance => "distance",
            Self::Disjoint => "disjoint",
            Self::Intersects => "intersects",
            Self::Touches => "touches",
            Self::Crosses => "crosses",
            Self::Within => "within",
            Self::Overlaps => "overlaps",
            Self::Contains => "contains",
            Self::MbrEquals => "mbr_equals",
            Self::MbrDistance => "mbr_distance",
            Self::MbrDisjoint => "mbr_disjoint",
            Self::MbrIntersects => "mbr_intersects",
            Self::MbrTouches => "mbr_touches",
            Self::MbrWithin => "mbr_within",
            Self::MbrOverlaps => "mbr_overlaps",
            Self::MbrContains => "mbr_contains",
            Self::Covers => "covers",
            Self::CoveredBy => "covered_by",
            Self::Intersection => "intersection",
            Self::WithinDistance => "within_distance",
        }
    }
}

/// Number of arguments beyond the two geometry operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// `f(column, other)`
    Binary,
    /// `f(column, other, scalar)`
    BinaryScalar,
}

/// SQL type produced by the predicate call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    Boolean,
    Scalar,
    Geometry,
}

/// One row of the shared predicate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredicateSpec {
    pub predicate: Predicate,
    /// SFS function name, `None` when the dialect lacks the predicate.
    pub sfs: Option<&'static str>,
    /// SQL/MM function name, `None` when the dialect lacks the predicate.
    pub sql_mm: Option<&'static str>,
    pub arity: Arity,
    pub returns: ReturnKind,
}

/// The predicate table. Single source of truth for both dialect surfaces.
pub const PREDICATES: &[PredicateSpec] = &[
    PredicateSpec {
        predicate: Predicate::Equals,
        sfs: Some("Equals"),
        sql_mm: Some("ST_Equals"),
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::Distance,
        sfs: Some("Distance"),
        sql_mm: Some("ST_Distance"),
        arity: Arity::Binary,
        returns: ReturnKind::Scalar,
    },
    PredicateSpec {
        predicate: Predicate::Disjoint,
        sfs: Some("Disjoint"),
        sql_mm: Some("ST_Disjoint"),
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::Intersects,
        sfs: Some("Intersects"),
        sql_mm: Some("ST_Intersects"),
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::Touches,
        sfs: Some("Touches"),
        sql_mm: Some("ST_Touches"),
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::Crosses,
        sfs: Some("Crosses"),
        sql_mm: Some("ST_Crosses"),
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::Within,
        sfs: Some("Within"),
        sql_mm: Some("ST_Within"),
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::Overlaps,
        sfs: Some("Overlaps"),
        sql_mm: Some("ST_Overlaps"),
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::Contains,
        sfs: Some("Contains"),
        sql_mm: Some("ST_Contains"),
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    // Minimum-bounding-rectangle variants: index-grade comparisons, SFS only.
    // There is no MBRCrosses.
    PredicateSpec {
        predicate: Predicate::MbrEquals,
        sfs: Some("MBREquals"),
        sql_mm: None,
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::MbrDistance,
        sfs: Some("MBRDistance"),
        sql_mm: None,
        arity: Arity::Binary,
        returns: ReturnKind::Scalar,
    },
    PredicateSpec {
        predicate: Predicate::MbrDisjoint,
        sfs: Some("MBRDisjoint"),
        sql_mm: None,
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::MbrIntersects,
        sfs: Some("MBRIntersects"),
        sql_mm: None,
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::MbrTouches,
        sfs: Some("MBRTouches"),
        sql_mm: None,
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::MbrWithin,
        sfs: Some("MBRWithin"),
        sql_mm: None,
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::MbrOverlaps,
        sfs: Some("MBROverlaps"),
        sql_mm: None,
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::MbrContains,
        sfs: Some("MBRContains"),
        sql_mm: None,
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    // SQL/MM extensions.
    PredicateSpec {
        predicate: Predicate::Covers,
        sfs: None,
        sql_mm: Some("ST_Covers"),
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::CoveredBy,
        sfs: None,
        sql_mm: Some("ST_CoveredBy"),
        arity: Arity::Binary,
        returns: ReturnKind::Boolean,
    },
    PredicateSpec {
        predicate: Predicate::Intersection,
        sfs: None,
        sql_mm: Some("ST_Intersection"),
        arity: Arity::Binary,
        returns: ReturnKind::Geometry,
    },
    PredicateSpec {
        predicate: Predicate::WithinDistance,
        sfs: None,
        sql_mm: Some("ST_DWithin"),
        arity: Arity::BinaryScalar,
        returns: ReturnKind::Boolean,
    },
];

/// Per-dialect SQL conventions: function names, identifier quoting and
/// placeholder syntax.
pub trait SqlGenerator {
    /// Dialect name used in error messages.
    fn dialect_name(&self) -> &'static str;

    /// SQL function implementing `predicate`, if the dialect has one.
    fn spatial_function(&self, predicate: Predicate) -> Option<&'static str>;

    /// SQL constructor for a resolved geometry literal. `None` for
    /// passthrough literals, which render bare.
    fn geometry_constructor(&self, constructor: GeomConstructor) -> Option<&'static str>;

    /// Quote a single identifier part.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Placeholder for the 1-based parameter `n`.
    fn placeholder(&self, n: usize) -> String;
}

/// MySQL-flavored SFS conventions.
pub struct SfsGenerator;

impl SqlGenerator for SfsGenerator {
    fn dialect_name(&self) -> &'static str {
        Dialect::Sfs.name()
    }

    fn spatial_function(&self, predicate: Predicate) -> Option<&'static str> {
        PREDICATES
            .iter()
            .find(|spec| spec.predicate == predicate)
            .and_then(|spec| spec.sfs)
    }

    fn geometry_constructor(&self, constructor: GeomConstructor) -> Option<&'static str> {
        match constructor {
            GeomConstructor::FromText => Some("GeomFromText"),
            GeomConstructor::FromWkb => Some("GeomFromWKB"),
            GeomConstructor::Passthrough => None,
        }
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn placeholder(&self, _n: usize) -> String {
        "?".to_string()
    }
}

/// PostGIS-flavored SQL/MM conventions.
pub struct SqlMmGenerator;

impl SqlGenerator for SqlMmGenerator {
    fn dialect_name(&self) -> &'static str {
        Dialect::SqlMm.name()
    }

    fn spatial_function(&self, predicate: Predicate) -> Option<&'static str> {
        PREDICATES
            .iter()
            .find(|spec| spec.predicate == predicate)
            .and_then(|spec| spec.sql_mm)
    }

    fn geometry_constructor(&self, constructor: GeomConstructor) -> Option<&'static str> {
        match constructor {
            GeomConstructor::FromText => Some("ST_GeomFromText"),
            GeomConstructor::FromWkb => Some("ST_GeomFromWKB"),
            GeomConstructor::Passthrough => None,
        }
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!("\"{}\"", ident.replace('"', "\"\""))
    }

    fn placeholder(&self, n: usize) -> String {
        format!("${n}")
    }
}

/// Build the dialect's function call for `predicate` over `column` and a
/// resolved `other` operand, appending `extra` scalar arguments
/// positionally.
pub fn build_predicate(
    dialect: Dialect,
    predicate: Predicate,
    column: &Expr,
    other: &GeomOperand,
    extra: &[Value],
) -> Result<Expr, GeoSqlError> {
    let generator = dialect.generator();
    let name = generator.spatial_function(predicate).ok_or_else(|| {
        GeoSqlError::UnsupportedPredicate {
            predicate: predicate.name(),
            dialect: generator.dialect_name(),
        }
    })?;

    let literal = resolve(other).map_err(|err| match err {
        GeoSqlError::NestedElement { .. } => GeoSqlError::InvalidOperand {
            predicate: predicate.name(),
            shape: other.shape(),
        },
        other_err => other_err,
    })?;

    let mut args = Vec::with_capacity(2 + extra.len());
    args.push(column.clone());
    args.push(literal.into_expr(generator.as_ref()));
    args.extend(extra.iter().cloned().map(Expr::Literal));

    Ok(Expr::func(name, args))
}

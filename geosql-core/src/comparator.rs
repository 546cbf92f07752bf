//! Per-column spatial predicate facade.

use crate::ast::{Expr, GeomOperand, Value};
use crate::error::GeoSqlError;
use crate::transpiler::dialect::{build_predicate, Dialect, Predicate};

/// Spatial predicate methods bound to a column expression and a dialect.
///
/// Every method is a thin delegation into the shared predicate table; the
/// comparator holds no state beyond the bound column and dialect, so a
/// single instance can serve any number of concurrent callers.
///
/// # Example
/// ```
/// use geosql_core::ast::builders::{col, wkt};
/// use geosql_core::comparator::Comparator;
/// use geosql_core::transpiler::{Dialect, ToSql};
///
/// let geom = Comparator::sql_mm(col("geom"));
/// let expr = geom.intersects(wkt("POINT(1 2)")).unwrap();
/// assert_eq!(
///     expr.to_sql_with_dialect(Dialect::SqlMm),
///     r#"ST_Intersects("geom", ST_GeomFromText('POINT(1 2)', -1))"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Comparator {
    column: Expr,
    dialect: Dialect,
}

impl Comparator {
    /// Bind `column` to the given dialect's predicate table.
    pub fn new(column: Expr, dialect: Dialect) -> Self {
        Self { column, dialect }
    }

    /// Comparator over the SFS (unprefixed) function set.
    pub fn sfs(column: Expr) -> Self {
        Self::new(column, Dialect::Sfs)
    }

    /// Comparator over the SQL/MM (`ST_`-prefixed) function set.
    pub fn sql_mm(column: Expr) -> Self {
        Self::new(column, Dialect::SqlMm)
    }

    /// The bound column expression.
    pub fn column(&self) -> &Expr {
        &self.column
    }

    /// The bound dialect.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn call(
        &self,
        predicate: Predicate,
        other: GeomOperand,
        extra: Vec<Value>,
    ) -> Result<Expr, GeoSqlError> {
        build_predicate(self.dialect, predicate, &self.column, &other, &extra)
    }

    // Exact-geometry relations.

    /// `Equals` / `ST_Equals`
    pub fn equals(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::Equals, other.into(), vec![])
    }

    /// `Distance` / `ST_Distance`. Returns a scalar, not a boolean.
    pub fn distance(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::Distance, other.into(), vec![])
    }

    /// `Disjoint` / `ST_Disjoint`
    pub fn disjoint(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::Disjoint, other.into(), vec![])
    }

    /// `Intersects` / `ST_Intersects`
    pub fn intersects(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::Intersects, other.into(), vec![])
    }

    /// `Touches` / `ST_Touches`
    pub fn touches(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::Touches, other.into(), vec![])
    }

    /// `Crosses` / `ST_Crosses`
    pub fn crosses(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::Crosses, other.into(), vec![])
    }

    /// `Within` / `ST_Within`
    pub fn within(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::Within, other.into(), vec![])
    }

    /// `Overlaps` / `ST_Overlaps`
    pub fn overlaps(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::Overlaps, other.into(), vec![])
    }

    /// `Contains` / `ST_Contains`
    pub fn contains(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::Contains, other.into(), vec![])
    }

    // Minimum-bounding-rectangle relations (SFS only).

    /// `MBREquals`; SFS only.
    pub fn mbr_equals(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::MbrEquals, other.into(), vec![])
    }

    /// `MBRDistance`; SFS only.
    pub fn mbr_distance(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::MbrDistance, other.into(), vec![])
    }

    /// `MBRDisjoint`; SFS only.
    pub fn mbr_disjoint(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::MbrDisjoint, other.into(), vec![])
    }

    /// `MBRIntersects`; SFS only.
    pub fn mbr_intersects(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::MbrIntersects, other.into(), vec![])
    }

    /// `MBRTouches`; SFS only.
    pub fn mbr_touches(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::MbrTouches, other.into(), vec![])
    }

    /// `MBRWithin`; SFS only.
    pub fn mbr_within(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::MbrWithin, other.into(), vec![])
    }

    /// `MBROverlaps`; SFS only.
    pub fn mbr_overlaps(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::MbrOverlaps, other.into(), vec![])
    }

    /// `MBRContains`; SFS only.
    pub fn mbr_contains(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::MbrContains, other.into(), vec![])
    }

    // SQL/MM extensions.

    /// `ST_Covers`; SQL/MM only.
    pub fn covers(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::Covers, other.into(), vec![])
    }

    /// `ST_CoveredBy`; SQL/MM only.
    pub fn covered_by(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::CoveredBy, other.into(), vec![])
    }

    /// `ST_Intersection`; SQL/MM only. Returns a geometry, not a boolean.
    pub fn intersection(&self, other: impl Into<GeomOperand>) -> Result<Expr, GeoSqlError> {
        self.call(Predicate::Intersection, other.into(), vec![])
    }

    /// `ST_DWithin(column, other, distance)`; SQL/MM only. The threshold is
    /// appended positionally after the two geometry operands.
    pub fn within_distance(
        &self,
        other: impl Into<GeomOperand>,
        distance: f64,
    ) -> Result<Expr, GeoSqlError> {
        self.call(
            Predicate::WithinDistance,
            other.into(),
            vec![Value::Float(distance)],
        )
    }
}

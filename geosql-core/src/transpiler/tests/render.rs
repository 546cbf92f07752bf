use pretty_assertions::assert_eq;

use crate::ast::builders::{col, raw_geometry, wkb_srid, wkt};
use crate::ast::Value;
use crate::comparator::Comparator;
use crate::transpiler::{Dialect, ToSql, ToSqlParameterized};

#[test]
fn sfs_rendering_uses_backticks_and_bare_names() {
    let geom = Comparator::sfs(col("towns.geom"));
    let expr = geom.equals(wkt("POINT(1 2)")).unwrap();
    assert_eq!(
        expr.to_sql_with_dialect(Dialect::Sfs),
        "Equals(`towns`.`geom`, GeomFromText('POINT(1 2)', -1))"
    );
}

#[test]
fn sql_mm_rendering_uses_double_quotes_and_st_prefix() {
    let geom = Comparator::sql_mm(col("towns.geom"));
    let expr = geom.equals(wkt("POINT(1 2)")).unwrap();
    assert_eq!(
        expr.to_sql_with_dialect(Dialect::SqlMm),
        r#"ST_Equals("towns"."geom", ST_GeomFromText('POINT(1 2)', -1))"#
    );
}

#[test]
fn wkb_payload_renders_as_hex_literal() {
    let geom = Comparator::sql_mm(col("geom"));
    let expr = geom.within(wkb_srid(vec![0x01, 0xAB], 4326)).unwrap();
    assert_eq!(
        expr.to_sql_with_dialect(Dialect::SqlMm),
        r#"ST_Within("geom", ST_GeomFromWKB(X'01AB', 4326))"#
    );
}

#[test]
fn quotes_in_wkt_text_are_escaped() {
    let geom = Comparator::sfs(col("geom"));
    let expr = geom.equals("POINT('bad)").unwrap();
    assert_eq!(
        expr.to_sql_with_dialect(Dialect::Sfs),
        "Equals(`geom`, GeomFromText('POINT(''bad)', -1))"
    );
}

#[test]
fn passthrough_literal_renders_verbatim() {
    let geom = Comparator::sfs(col("geom"));
    let expr = geom
        .intersects(raw_geometry("GeomFromText('POINT(9 9)')"))
        .unwrap();
    assert_eq!(
        expr.to_sql_with_dialect(Dialect::Sfs),
        "Intersects(`geom`, GeomFromText('POINT(9 9)'))"
    );
}

#[test]
fn default_dialect_is_sql_mm() {
    let geom = Comparator::sql_mm(col("geom"));
    let expr = geom.equals(wkt("POINT(0 0)")).unwrap();
    assert_eq!(expr.to_sql(), expr.to_sql_with_dialect(Dialect::SqlMm));
}

#[test]
fn predicates_nest_as_operands() {
    // ST_Intersection returns a geometry; feed it back through a predicate.
    let geom = Comparator::sql_mm(col("a.geom"));
    let overlap = geom.intersection(wkt("POLYGON((0 0, 0 1, 1 1, 0 0))")).unwrap();
    let outer = Comparator::sql_mm(col("b.geom"))
        .contains(Value::Geometry(overlap.to_sql_with_dialect(Dialect::SqlMm)))
        .unwrap();
    assert_eq!(
        outer.to_sql_with_dialect(Dialect::SqlMm),
        r#"ST_Contains("b"."geom", ST_Intersection("a"."geom", ST_GeomFromText('POLYGON((0 0, 0 1, 1 1, 0 0))', -1)))"#
    );
}

#[test]
fn parameterized_sql_mm_extracts_payloads_and_keeps_srid_inline() {
    let geom = Comparator::sql_mm(col("geom"));
    let expr = geom.within(wkb_srid(vec![0x0F], 4326)).unwrap();
    let result = expr.to_sql_parameterized_with_dialect(Dialect::SqlMm);
    assert_eq!(result.sql, r#"ST_Within("geom", ST_GeomFromWKB($1, 4326))"#);
    assert_eq!(result.params, vec![Value::Bytes(vec![0x0F])]);
}

#[test]
fn parameterized_sfs_uses_question_marks() {
    let geom = Comparator::sfs(col("geom"));
    let expr = geom.equals(wkt("POINT(1 2)")).unwrap();
    let result = expr.to_sql_parameterized_with_dialect(Dialect::Sfs);
    assert_eq!(result.sql, "Equals(`geom`, GeomFromText(?, -1))");
    assert_eq!(result.params, vec![Value::Text("POINT(1 2)".to_string())]);
}

#[test]
fn parameterized_within_distance_extracts_threshold() {
    let geom = Comparator::sql_mm(col("geom"));
    let expr = geom.within_distance(wkt("POINT(1 2)"), 10.0).unwrap();

    assert_eq!(
        expr.to_sql_with_dialect(Dialect::SqlMm),
        r#"ST_DWithin("geom", ST_GeomFromText('POINT(1 2)', -1), 10)"#
    );

    let result = expr.to_sql_parameterized_with_dialect(Dialect::SqlMm);
    assert_eq!(
        result.sql,
        r#"ST_DWithin("geom", ST_GeomFromText($1, -1), $2)"#
    );
    assert_eq!(
        result.params,
        vec![
            Value::Text("POINT(1 2)".to_string()),
            Value::Float(10.0),
        ]
    );
}

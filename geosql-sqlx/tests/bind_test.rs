//! Binding round-trip tests against in-memory SQLite.
//!
//! SQLite has no spatial functions, so these tests echo the bound values
//! back through plain placeholders instead of executing predicate calls;
//! what is under test is the placeholder/parameter contract, not the
//! spatial SQL itself.

use geosql_core::prelude::*;
use geosql_sqlx::prelude::*;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;

#[tokio::test]
async fn wkt_payload_binds_as_text() {
    let pool = SqlitePool::connect(":memory:").await.unwrap();

    let geom = Comparator::sfs(col("geom"));
    let expr = geom.equals(wkt("POINT(1 2)")).unwrap();
    let result = predicate_to_sql_parameterized_with_dialect(&expr, Dialect::Sfs);

    assert_eq!(result.sql, "Equals(`geom`, GeomFromText(?, -1))");
    assert_eq!(result.params.len(), 1);

    let row = bind_params(sqlx::query("SELECT ?1"), &result.params)
        .fetch_one(&pool)
        .await
        .unwrap();
    let echoed: String = row.get(0);
    assert_eq!(echoed, "POINT(1 2)");
}

#[tokio::test]
async fn wkb_payload_binds_as_blob() {
    let pool = SqlitePool::connect(":memory:").await.unwrap();

    let geom = Comparator::sfs(col("geom"));
    let expr = geom.within(wkb_srid(vec![0x01, 0xAB, 0xFF], 4326)).unwrap();
    let result = predicate_to_sql_parameterized_with_dialect(&expr, Dialect::Sfs);

    assert_eq!(result.sql, "Within(`geom`, GeomFromWKB(?, 4326))");

    let row = bind_params(sqlx::query("SELECT ?1"), &result.params)
        .fetch_one(&pool)
        .await
        .unwrap();
    let echoed: Vec<u8> = row.get(0);
    assert_eq!(echoed, vec![0x01, 0xAB, 0xFF]);
}

#[tokio::test]
async fn threshold_binds_after_the_payload() {
    let pool = SqlitePool::connect(":memory:").await.unwrap();

    let geom = Comparator::sql_mm(col("geom"));
    let expr = geom.within_distance(wkt("POINT(1 2)"), 10.5).unwrap();
    // Function names were fixed when the expression was built; rendering
    // with the SFS generator here only switches to the `?` placeholder
    // style SQLite prepares. Parameter order is what is under test.
    let result = predicate_to_sql_parameterized_with_dialect(&expr, Dialect::Sfs);
    assert_eq!(result.params.len(), 2);

    let row = bind_params(sqlx::query("SELECT ?1, ?2"), &result.params)
        .fetch_one(&pool)
        .await
        .unwrap();
    let payload: String = row.get(0);
    let threshold: f64 = row.get(1);
    assert_eq!(payload, "POINT(1 2)");
    assert!((threshold - 10.5).abs() < f64::EPSILON);
}

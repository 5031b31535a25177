//! Schema statement checks
//!
//! The schema is applied as ordered, idempotent statements; these tests pin
//! the pieces the data layer depends on (unique slug, text search index,
//! geospatial index, review join key) without needing a live database.

use storefront::migration::SCHEMA_STATEMENTS;

fn statement_containing(fragment: &str) -> Option<&'static str> {
    SCHEMA_STATEMENTS
        .iter()
        .copied()
        .find(|sql| sql.contains(fragment))
}

#[test]
fn test_every_statement_is_idempotent() {
    for sql in SCHEMA_STATEMENTS {
        assert!(
            sql.contains("IF NOT EXISTS"),
            "statement is not idempotent: {}",
            sql
        );
    }
}

#[test]
fn test_slug_has_unique_index() {
    let sql = statement_containing("stores_slug_key").expect("slug index statement");
    assert!(sql.contains("UNIQUE INDEX"));
    assert!(sql.contains("ON stores (slug)"));
}

#[test]
fn test_text_search_index_covers_name_and_description() {
    let sql = statement_containing("stores_search_idx").expect("search index statement");
    assert!(sql.contains("GIN"));
    assert!(sql.contains("to_tsvector('english', name || ' ' || coalesce(description, ''))"));
}

#[test]
fn test_location_index_is_gist_point() {
    let sql = statement_containing("stores_location_idx").expect("location index statement");
    assert!(sql.contains("GIST"));
    assert!(sql.contains("point(longitude, latitude)"));
}

#[test]
fn test_reviews_reference_stores_with_cascade() {
    let sql = statement_containing("CREATE TABLE IF NOT EXISTS reviews").expect("reviews table");
    assert!(sql.contains("REFERENCES stores(id) ON DELETE CASCADE"));
    assert!(sql.contains("rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5)"));
}

#[test]
fn test_reviews_join_key_indexed() {
    let sql = statement_containing("reviews_store_idx").expect("review index statement");
    assert!(sql.contains("ON reviews (store_id)"));
}

#[test]
fn test_stores_table_required_columns() {
    let sql = statement_containing("CREATE TABLE IF NOT EXISTS stores").expect("stores table");
    for column in [
        "name TEXT NOT NULL",
        "slug TEXT NOT NULL",
        "tags TEXT[] NOT NULL DEFAULT '{}'",
        "address TEXT NOT NULL",
        "longitude DOUBLE PRECISION NOT NULL",
        "latitude DOUBLE PRECISION NOT NULL",
        "author UUID NOT NULL",
    ] {
        assert!(sql.contains(column), "missing column definition: {}", column);
    }
}

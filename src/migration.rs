//! Database schema setup
//!
//! One-shot, idempotent creation of the `stores` and `reviews` tables and
//! their indexes. This is not a versioned migration engine; every statement
//! uses `IF NOT EXISTS` and can be re-run safely.

use crate::core::Storefront;
use crate::errors::StorefrontError;

/// Statements executed in order by [`Storefront::setup_schema`]
pub const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS stores (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        slug TEXT NOT NULL,
        description TEXT,
        tags TEXT[] NOT NULL DEFAULT '{}',
        created TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        address TEXT NOT NULL,
        longitude DOUBLE PRECISION NOT NULL,
        latitude DOUBLE PRECISION NOT NULL,
        photo TEXT,
        author UUID NOT NULL
    )",
    // Closes the slug read-then-write race; writers retry on conflict
    "CREATE UNIQUE INDEX IF NOT EXISTS stores_slug_key ON stores (slug)",
    // Full-text search over name and description
    "CREATE INDEX IF NOT EXISTS stores_search_idx ON stores \
     USING GIN (to_tsvector('english', name || ' ' || coalesce(description, '')))",
    // Geospatial lookups over the stored point
    "CREATE INDEX IF NOT EXISTS stores_location_idx ON stores \
     USING GIST (point(longitude, latitude))",
    "CREATE TABLE IF NOT EXISTS reviews (
        id UUID PRIMARY KEY,
        store_id UUID NOT NULL REFERENCES stores(id) ON DELETE CASCADE,
        author UUID NOT NULL,
        rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
        text TEXT NOT NULL DEFAULT '',
        created TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE INDEX IF NOT EXISTS reviews_store_idx ON reviews (store_id)",
];

const DROP_STATEMENTS: &[&str] = &[
    "DROP TABLE IF EXISTS reviews CASCADE",
    "DROP TABLE IF EXISTS stores CASCADE",
];

impl Storefront {
    /// Create tables and indexes for the store directory
    /// If recreate is true, drops existing tables first
    pub async fn setup_schema(&self, recreate: bool) -> Result<(), StorefrontError> {
        if recreate {
            for sql in DROP_STATEMENTS {
                tracing::debug!(%sql, "dropping schema object");
                sqlx::query(sql).execute(self.pool()).await?;
            }
        }

        for sql in SCHEMA_STATEMENTS {
            tracing::debug!(%sql, "applying schema statement");
            sqlx::query(sql).execute(self.pool()).await?;
        }

        tracing::info!("schema setup complete");
        Ok(())
    }
}

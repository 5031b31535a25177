//! Aggregate views over the store collection
//!
//! Both views are single explicit grouping queries executed by Postgres;
//! ties are broken by a deterministic secondary sort.

use sqlx::FromRow;
use uuid::Uuid;

use super::core::StoreRepository;
use crate::errors::StoreModelError;
use crate::record::{TagCount, TopStore};

const TAGS_LIST_SQL: &str = "\
SELECT t.tag AS tag, COUNT(*) AS count \
FROM stores \
CROSS JOIN UNNEST(stores.tags) AS t(tag) \
GROUP BY t.tag \
ORDER BY count DESC, tag ASC";

// Stores qualify with two or more reviews; the review rows themselves are
// attached afterwards so the projection carries them alongside the mean.
const TOP_STORES_SQL: &str = "\
SELECT s.id, s.photo, s.name, s.slug, \
       AVG(r.rating)::DOUBLE PRECISION AS average_rating \
FROM stores s \
JOIN reviews r ON r.store_id = s.id \
GROUP BY s.id, s.photo, s.name, s.slug \
HAVING COUNT(r.id) >= 2 \
ORDER BY average_rating DESC, s.id ASC \
LIMIT 10";

#[derive(Debug, FromRow)]
struct TopStoreRow {
    id: Uuid,
    photo: Option<String>,
    name: String,
    slug: String,
    average_rating: f64,
}

impl StoreRepository {
    /// Tag frequency across all stores, most used first
    ///
    /// Each record contributes one row per tag; records without tags
    /// contribute nothing. The full result set is returned unpaginated.
    pub async fn tags_list(&self) -> Result<Vec<TagCount>, StoreModelError> {
        sqlx::query_as::<_, TagCount>(TAGS_LIST_SQL)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database(Self::TABLE, "tags_list", e))
    }

    /// Up to 10 stores with at least 2 reviews, best average rating first
    ///
    /// Stores with zero or one review are excluded entirely rather than
    /// ranked at zero.
    pub async fn top_stores(&self) -> Result<Vec<TopStore>, StoreModelError> {
        let rows: Vec<TopStoreRow> = sqlx::query_as(TOP_STORES_SQL)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database(Self::TABLE, "top_stores", e))?;

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut by_store = self.reviews_for(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| TopStore {
                reviews: by_store.remove(&row.id).unwrap_or_default(),
                id: row.id,
                photo: row.photo,
                name: row.name,
                slug: row.slug,
                average_rating: row.average_rating,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_list_explodes_and_sorts() {
        assert!(TAGS_LIST_SQL.contains("UNNEST(stores.tags)"));
        assert!(TAGS_LIST_SQL.contains("GROUP BY t.tag"));
        assert!(TAGS_LIST_SQL.contains("ORDER BY count DESC, tag ASC"));
    }

    #[test]
    fn test_top_stores_requires_two_reviews() {
        assert!(TOP_STORES_SQL.contains("HAVING COUNT(r.id) >= 2"));
    }

    #[test]
    fn test_top_stores_sorts_and_limits() {
        assert!(TOP_STORES_SQL.contains("ORDER BY average_rating DESC, s.id ASC"));
        assert!(TOP_STORES_SQL.contains("LIMIT 10"));
    }

    #[test]
    fn test_top_stores_projects_mean_rating() {
        assert!(TOP_STORES_SQL.contains("AVG(r.rating)::DOUBLE PRECISION AS average_rating"));
    }
}

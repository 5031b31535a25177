//! Read paths for store records
//!
//! Every public read returns [`StoreWithReviews`]: the related review rows
//! are fetched in one batched query and attached after the store fetch, on
//! every call. The relation is never cached and never stored on the row.

use std::collections::HashMap;

use uuid::Uuid;

use super::core::StoreRepository;
use crate::errors::StoreModelError;
use crate::record::{Review, Store, StoreWithReviews};

const GET_BY_ID_SQL: &str = "\
SELECT id, name, slug, description, tags, created, address, longitude, latitude, photo, author \
FROM stores WHERE id = $1";

const GET_BY_SLUG_SQL: &str = "\
SELECT id, name, slug, description, tags, created, address, longitude, latitude, photo, author \
FROM stores WHERE slug = $1";

const LIST_SQL: &str = "\
SELECT id, name, slug, description, tags, created, address, longitude, latitude, photo, author \
FROM stores ORDER BY created DESC";

const LIST_PAGE_SQL: &str = "\
SELECT id, name, slug, description, tags, created, address, longitude, latitude, photo, author \
FROM stores ORDER BY created DESC LIMIT $1 OFFSET $2";

// Matches the expression the GIN index is built over
const SEARCH_SQL: &str = "\
SELECT id, name, slug, description, tags, created, address, longitude, latitude, photo, author \
FROM stores \
WHERE to_tsvector('english', name || ' ' || coalesce(description, '')) @@ plainto_tsquery('english', $1) \
ORDER BY ts_rank(to_tsvector('english', name || ' ' || coalesce(description, '')), plainto_tsquery('english', $1)) DESC";

// Haversine over the stored point; $1 longitude, $2 latitude, $3 radius in meters
const NEAR_SQL: &str = "\
SELECT id, name, slug, description, tags, created, address, longitude, latitude, photo, author \
FROM ( \
    SELECT s.*, \
           6371000 * acos(least(1.0, \
               cos(radians($2)) * cos(radians(s.latitude)) * cos(radians(s.longitude) - radians($1)) \
               + sin(radians($2)) * sin(radians(s.latitude)))) AS distance \
    FROM stores s \
) nearby \
WHERE distance <= $3 \
ORDER BY distance ASC \
LIMIT 10";

const REVIEWS_FOR_STORES_SQL: &str = "\
SELECT id, store_id, author, rating, text, created \
FROM reviews WHERE store_id = ANY($1) ORDER BY created DESC";

impl StoreRepository {
    /// Get a store by id, with its reviews attached
    pub async fn get(&self, id: &Uuid) -> Result<Option<StoreWithReviews>, StoreModelError> {
        match self.fetch_by_id(id).await? {
            Some(store) => Ok(self.with_reviews(vec![store]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Get a store by slug, with its reviews attached
    pub async fn get_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<StoreWithReviews>, StoreModelError> {
        let store = sqlx::query_as::<_, Store>(GET_BY_SLUG_SQL)
            .bind(slug)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database(Self::TABLE, "get_by_slug", e))?;

        match store {
            Some(store) => Ok(self.with_reviews(vec![store]).await?.pop()),
            None => Ok(None),
        }
    }

    /// List all stores, newest first, with reviews attached
    pub async fn list(&self) -> Result<Vec<StoreWithReviews>, StoreModelError> {
        let stores = sqlx::query_as::<_, Store>(LIST_SQL)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database(Self::TABLE, "list", e))?;
        self.with_reviews(stores).await
    }

    /// List one page of stores (1-based page number), newest first
    pub async fn list_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<StoreWithReviews>, StoreModelError> {
        let offset = i64::from(page.max(1) - 1) * i64::from(per_page);
        let stores = sqlx::query_as::<_, Store>(LIST_PAGE_SQL)
            .bind(i64::from(per_page))
            .bind(offset)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database(Self::TABLE, "list_page", e))?;
        self.with_reviews(stores).await
    }

    /// Full-text search over name and description, best match first
    pub async fn search(&self, terms: &str) -> Result<Vec<StoreWithReviews>, StoreModelError> {
        let stores = sqlx::query_as::<_, Store>(SEARCH_SQL)
            .bind(terms)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database(Self::TABLE, "search", e))?;
        self.with_reviews(stores).await
    }

    /// Stores within `radius_meters` of the point, nearest first, capped at 10
    pub async fn near(
        &self,
        longitude: f64,
        latitude: f64,
        radius_meters: f64,
    ) -> Result<Vec<StoreWithReviews>, StoreModelError> {
        let stores = sqlx::query_as::<_, Store>(NEAR_SQL)
            .bind(longitude)
            .bind(latitude)
            .bind(radius_meters)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database(Self::TABLE, "near", e))?;
        self.with_reviews(stores).await
    }

    /// Raw row fetch without the review join; used by the write pipeline
    pub(crate) async fn fetch_by_id(&self, id: &Uuid) -> Result<Option<Store>, StoreModelError> {
        sqlx::query_as::<_, Store>(GET_BY_ID_SQL)
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database(Self::TABLE, "get_by_id", e))
    }

    /// Batched review fetch for a set of store ids, grouped by store
    pub(crate) async fn reviews_for(
        &self,
        ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Review>>, StoreModelError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let reviews: Vec<Review> = sqlx::query_as(REVIEWS_FOR_STORES_SQL)
            .bind(ids)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database("reviews", "reviews_for", e))?;

        let mut by_store: HashMap<Uuid, Vec<Review>> = HashMap::new();
        for review in reviews {
            by_store.entry(review.store_id).or_default().push(review);
        }
        Ok(by_store)
    }

    /// Attach reviews to fetched stores; runs on every read path
    async fn with_reviews(
        &self,
        stores: Vec<Store>,
    ) -> Result<Vec<StoreWithReviews>, StoreModelError> {
        let ids: Vec<Uuid> = stores.iter().map(|s| s.id).collect();
        let mut by_store = self.reviews_for(&ids).await?;

        Ok(stores
            .into_iter()
            .map(|store| {
                let reviews = by_store.remove(&store.id).unwrap_or_default();
                StoreWithReviews { store, reviews }
            })
            .collect())
    }
}

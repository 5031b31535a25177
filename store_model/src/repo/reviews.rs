//! Review collaborator store
//!
//! Reviews are owned by an external Review entity; this repository carries
//! just enough of it to feed the read-time join and the top-rated
//! aggregate: validated inserts and per-store listing.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use signal_system::{EventType, SignalManager, StoreEvent};

use crate::errors::StoreModelError;
use crate::record::{Review, ReviewDraft};
use crate::traits::Repository;
use crate::validation::validate_review_draft;
use crate::DbPool;

const INSERT_REVIEW_SQL: &str = "\
INSERT INTO reviews (id, store_id, author, rating, text) \
VALUES ($1, $2, $3, $4, $5) \
RETURNING id, store_id, author, rating, text, created";

const LIST_FOR_STORE_SQL: &str = "\
SELECT id, store_id, author, rating, text, created \
FROM reviews WHERE store_id = $1 ORDER BY created DESC";

/// Database repository for the `reviews` table
#[derive(Clone)]
pub struct ReviewRepository {
    db_pool: DbPool,
    signal_manager: Option<Arc<SignalManager>>,
}

impl std::fmt::Debug for ReviewRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewRepository")
            .field("has_signals", &self.signal_manager.is_some())
            .finish()
    }
}

impl ReviewRepository {
    const TABLE: &'static str = "reviews";

    pub fn new(db_pool: DbPool, signal_manager: Option<Arc<SignalManager>>) -> Self {
        Self {
            db_pool,
            signal_manager,
        }
    }

    /// Add a review to a store
    pub async fn add(&self, draft: ReviewDraft) -> Result<Review, StoreModelError> {
        let valid = validate_review_draft(&draft).map_err(StoreModelError::Validation)?;

        let review = sqlx::query_as::<_, Review>(INSERT_REVIEW_SQL)
            .bind(Uuid::new_v4())
            .bind(valid.store_id)
            .bind(valid.author)
            .bind(valid.rating)
            .bind(&valid.text)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database(Self::TABLE, "add", e))?;

        tracing::debug!(id = %review.id, store_id = %review.store_id, "review added");
        if let Some(signal_manager) = &self.signal_manager {
            let event = StoreEvent::new(EventType::Created, Self::TABLE.to_string())
                .with_record_id(review.id.to_string())
                .with_payload(
                    "store_id".to_string(),
                    serde_json::Value::String(review.store_id.to_string()),
                );
            signal_manager.emit(event).await;
        }
        Ok(review)
    }

    /// All reviews for one store, newest first
    pub async fn list_for_store(&self, store_id: &Uuid) -> Result<Vec<Review>, StoreModelError> {
        sqlx::query_as::<_, Review>(LIST_FOR_STORE_SQL)
            .bind(store_id)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database(Self::TABLE, "list_for_store", e))
    }
}

#[async_trait]
impl Repository for ReviewRepository {
    fn table_name(&self) -> &'static str {
        Self::TABLE
    }

    async fn count(&self) -> Result<i64, StoreModelError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database(Self::TABLE, "count", e))
    }
}

//! Write pipeline for store records
//!
//! Saves run as an explicit sequence: required-field validation, slug
//! assignment (only when the name changed), then the write. The slug rule
//! counts existing matches and appends `-<count+1>`; the unique index on
//! `slug` closes the read-then-write race, with a bounded retry that adds
//! the attempt number to the suffix on conflict.

use uuid::Uuid;

use signal_system::{EventType, StoreEvent};

use super::core::StoreRepository;
use crate::errors::StoreModelError;
use crate::record::{Store, StoreDraft};
use crate::slug;
use crate::validation::validate_store_draft;

/// Attempts before giving up on a unique slug
const SLUG_RETRY_LIMIT: u32 = 5;

const INSERT_STORE_SQL: &str = "\
INSERT INTO stores (id, name, slug, description, tags, address, longitude, latitude, photo, author) \
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
RETURNING id, name, slug, description, tags, created, address, longitude, latitude, photo, author";

const UPDATE_STORE_SQL: &str = "\
UPDATE stores \
SET name = $2, slug = $3, description = $4, tags = $5, address = $6, longitude = $7, latitude = $8, photo = $9, author = $10 \
WHERE id = $1 \
RETURNING id, name, slug, description, tags, created, address, longitude, latitude, photo, author";

const DELETE_STORE_SQL: &str = "DELETE FROM stores WHERE id = $1";

const SLUG_LOOKUP_SQL: &str = "SELECT slug FROM stores WHERE slug ~* $1";

fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(e) if e.is_unique_violation())
}

impl StoreRepository {
    /// Create a store
    ///
    /// Validation failures block the write and report every missing field;
    /// slug assignment runs only after validation passes.
    pub async fn create(&self, draft: StoreDraft) -> Result<Store, StoreModelError> {
        let valid = validate_store_draft(&draft).map_err(StoreModelError::Validation)?;
        let base = slug::slugify(&valid.name);

        let mut attempt: u32 = 0;
        let store = loop {
            let slug = self.assign_slug(&base, attempt).await?;
            let result = sqlx::query_as::<_, Store>(INSERT_STORE_SQL)
                .bind(Uuid::new_v4())
                .bind(&valid.name)
                .bind(&slug)
                .bind(&valid.description)
                .bind(&valid.tags)
                .bind(&valid.address)
                .bind(valid.longitude)
                .bind(valid.latitude)
                .bind(&valid.photo)
                .bind(valid.author)
                .fetch_one(&self.db_pool)
                .await;

            match result {
                Ok(store) => break store,
                Err(error) if is_unique_violation(&error) => {
                    attempt += 1;
                    if attempt >= SLUG_RETRY_LIMIT {
                        return Err(StoreModelError::SlugExhausted {
                            base,
                            attempts: attempt,
                        });
                    }
                    tracing::debug!(slug = %slug, attempt, "slug already taken, retrying");
                }
                Err(error) => {
                    return Err(StoreModelError::database(Self::TABLE, "create", error))
                }
            }
        };

        tracing::debug!(id = %store.id, slug = %store.slug, "store created");
        self.emit_write_event(EventType::Created, &store).await;
        Ok(store)
    }

    /// Update a store
    ///
    /// The slug is recomputed only when the draft's name differs from the
    /// stored one; otherwise the existing slug is kept untouched.
    pub async fn update(&self, id: &Uuid, draft: StoreDraft) -> Result<Store, StoreModelError> {
        let current = self
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| StoreModelError::NotFound(format!("store {}", id)))?;

        let valid = validate_store_draft(&draft).map_err(StoreModelError::Validation)?;
        let name_changed = valid.name != current.name;
        let base = slug::slugify(&valid.name);

        let mut attempt: u32 = 0;
        let store = loop {
            let slug = if name_changed {
                self.assign_slug(&base, attempt).await?
            } else {
                current.slug.clone()
            };

            let result = sqlx::query_as::<_, Store>(UPDATE_STORE_SQL)
                .bind(id)
                .bind(&valid.name)
                .bind(&slug)
                .bind(&valid.description)
                .bind(&valid.tags)
                .bind(&valid.address)
                .bind(valid.longitude)
                .bind(valid.latitude)
                .bind(&valid.photo)
                .bind(valid.author)
                .fetch_one(&self.db_pool)
                .await;

            match result {
                Ok(store) => break store,
                Err(error) if name_changed && is_unique_violation(&error) => {
                    attempt += 1;
                    if attempt >= SLUG_RETRY_LIMIT {
                        return Err(StoreModelError::SlugExhausted {
                            base,
                            attempts: attempt,
                        });
                    }
                    tracing::debug!(slug = %slug, attempt, "slug already taken, retrying");
                }
                Err(error) => {
                    return Err(StoreModelError::database(Self::TABLE, "update", error))
                }
            }
        };

        tracing::debug!(id = %store.id, slug = %store.slug, "store updated");
        self.emit_write_event(EventType::Updated, &store).await;
        Ok(store)
    }

    /// Delete a store; returns whether a row was removed
    pub async fn delete(&self, id: &Uuid) -> Result<bool, StoreModelError> {
        let result = sqlx::query(DELETE_STORE_SQL)
            .bind(id)
            .execute(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database(Self::TABLE, "delete", e))?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            let event = StoreEvent::new(EventType::Deleted, Self::TABLE.to_string())
                .with_record_id(id.to_string());
            self.emit_signal(event).await;
        }
        Ok(deleted)
    }

    /// Slug for this write attempt: count the colliding slugs currently
    /// stored and append `-<count+1>`, shifted by the retry attempt
    async fn assign_slug(&self, base: &str, attempt: u32) -> Result<String, StoreModelError> {
        let existing: Vec<String> = sqlx::query_scalar(SLUG_LOOKUP_SQL)
            .bind(slug::match_pattern(base))
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database(Self::TABLE, "slug_lookup", e))?;

        let taken = slug::matching_count(base, &existing) + attempt as usize;
        Ok(slug::candidate(base, taken))
    }

    async fn emit_write_event(&self, event_type: EventType, store: &Store) {
        if !self.has_signals() {
            return;
        }
        let event = StoreEvent::new(event_type, Self::TABLE.to_string())
            .with_record_id(store.id.to_string())
            .with_payload(
                "slug".to_string(),
                serde_json::Value::String(store.slug.clone()),
            )
            .with_payload(
                "record".to_string(),
                serde_json::to_value(store).unwrap_or_default(),
            );
        self.emit_signal(event).await;
    }
}

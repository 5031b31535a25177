//! Convenience re-exports for common store-model usage

// Record types
pub use crate::record::{
    Location, LocationInput, Review, ReviewDraft, Store, StoreDraft, StoreWithReviews, TagCount,
    TopStore,
};

// Repositories
pub use crate::repo::{ReviewRepository, StoreRepository};

// Core traits
pub use crate::traits::Repository;

// Error types
pub use crate::errors::StoreModelError;

// Validation
pub use crate::validation::{
    validate_review_draft, validate_store_draft, FieldError, ValidReview, ValidStore,
};

// Slug assignment
pub use crate::slug::{next_slug, slugify};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool};
pub use uuid::Uuid;

//! Store Model - Entity layer for the Storefront data layer
//!
//! This crate owns the `Store` record and its collaborator `Review`: record
//! types, required-field validation, slug assignment with duplicate
//! disambiguation, the review-enriched read paths, and the aggregate views
//! (tag frequency, top-rated stores).

pub mod errors;
pub mod prelude;
pub mod record;
pub mod repo;
pub mod slug;
pub mod traits;
pub mod validation;

pub use errors::StoreModelError;
pub use record::{
    Location, LocationInput, Review, ReviewDraft, Store, StoreDraft, StoreWithReviews, TagCount,
    TopStore,
};
pub use repo::{ReviewRepository, StoreRepository};
pub use slug::slugify;
pub use traits::Repository;
pub use validation::FieldError;

use sqlx::PgPool;

pub type DbPool = PgPool;

//! Record types for the store directory
//!
//! The `Store` row is an explicit struct mapped 1:1 onto the `stores` table;
//! the write side goes through `StoreDraft`, which carries every field a
//! caller may supply and leaves required-field enforcement to
//! [`crate::validation`]. `reviews` is never a stored column: read paths
//! return [`StoreWithReviews`] with the relation attached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Geographic point plus street address, flattened into the `stores` row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Location {
    pub address: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl Location {
    /// Coordinates in (longitude, latitude) order
    pub fn coordinates(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

/// A persisted store record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub created: DateTime<Utc>,
    #[sqlx(flatten)]
    pub location: Location,
    pub photo: Option<String>,
    /// Reference to the owning User entity; not managed by this crate
    pub author: Uuid,
}

/// Location as supplied on a write, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInput {
    pub address: String,
    /// Two-element sequence: longitude, latitude
    pub coordinates: Vec<f64>,
}

/// Write-side input for creating or updating a store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDraft {
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub location: Option<LocationInput>,
    pub photo: Option<String>,
    pub author: Option<Uuid>,
}

impl StoreDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_location(
        mut self,
        address: impl Into<String>,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        self.location = Some(LocationInput {
            address: address.into(),
            coordinates: vec![longitude, latitude],
        });
        self
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    pub fn with_author(mut self, author: Uuid) -> Self {
        self.author = Some(author);
        self
    }
}

/// A review left on a store; consumed by the read-time join and the
/// top-rated aggregate, owned by an external Review collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: Uuid,
    pub store_id: Uuid,
    pub author: Uuid,
    pub rating: i32,
    pub text: String,
    pub created: DateTime<Utc>,
}

/// Write-side input for adding a review
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub store_id: Option<Uuid>,
    pub author: Option<Uuid>,
    pub rating: i32,
    pub text: String,
}

/// A store with its related reviews attached at read time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreWithReviews {
    #[serde(flatten)]
    pub store: Store,
    pub reviews: Vec<Review>,
}

/// One row of the tag-frequency aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TagCount {
    pub tag: String,
    pub count: i64,
}

/// One row of the top-rated aggregate: the projected store fields, the
/// joined reviews, and their mean rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopStore {
    pub id: Uuid,
    pub photo: Option<String>,
    pub name: String,
    pub slug: String,
    pub reviews: Vec<Review>,
    pub average_rating: f64,
}

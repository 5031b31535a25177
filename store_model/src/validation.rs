//! Validation module
//!
//! Required-field checks for write operations. Every missing field produces
//! its own [`FieldError`]; a failed validation reports all of them at once
//! and blocks the write entirely.

use std::fmt;

use uuid::Uuid;

use crate::record::{ReviewDraft, StoreDraft};

/// A single failed required-field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path of the offending field, e.g. `location.address`
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// A store draft that passed every required-field check
///
/// Text fields are trimmed; `location` and `author` are no longer optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidStore {
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub address: String,
    pub longitude: f64,
    pub latitude: f64,
    pub photo: Option<String>,
    pub author: Uuid,
}

/// A review draft that passed every required-field check
#[derive(Debug, Clone, PartialEq)]
pub struct ValidReview {
    pub store_id: Uuid,
    pub author: Uuid,
    pub rating: i32,
    pub text: String,
}

/// Validate a store draft, collecting one error per missing field
pub fn validate_store_draft(draft: &StoreDraft) -> Result<ValidStore, Vec<FieldError>> {
    let mut errors = Vec::new();

    let trimmed = draft.name.trim();
    let name = if trimmed.is_empty() {
        errors.push(FieldError::new("name", "Please enter a store name!"));
        None
    } else {
        Some(trimmed.to_string())
    };

    let mut address = None;
    let mut coordinates = None;
    match &draft.location {
        Some(location) => {
            let trimmed = location.address.trim();
            if trimmed.is_empty() {
                errors.push(FieldError::new(
                    "location.address",
                    "You must supply an address",
                ));
            } else {
                address = Some(trimmed.to_string());
            }
            if location.coordinates.len() == 2 {
                coordinates = Some((location.coordinates[0], location.coordinates[1]));
            } else {
                errors.push(FieldError::new(
                    "location.coordinates",
                    "You must supply coordinates",
                ));
            }
        }
        None => {
            errors.push(FieldError::new(
                "location.address",
                "You must supply an address",
            ));
            errors.push(FieldError::new(
                "location.coordinates",
                "You must supply coordinates",
            ));
        }
    }

    if draft.author.is_none() {
        errors.push(FieldError::new("author", "You must supply an author"));
    }

    // Each arm below is Some exactly when its check above pushed no error
    match (name, address, coordinates, draft.author) {
        (Some(name), Some(address), Some((longitude, latitude)), Some(author)) => Ok(ValidStore {
            name,
            description: draft
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            tags: draft.tags.clone(),
            address,
            longitude,
            latitude,
            photo: draft.photo.clone(),
            author,
        }),
        _ => Err(errors),
    }
}

/// Validate a review draft, collecting one error per missing field
pub fn validate_review_draft(draft: &ReviewDraft) -> Result<ValidReview, Vec<FieldError>> {
    let mut errors = Vec::new();

    if draft.store_id.is_none() {
        errors.push(FieldError::new("store_id", "You must supply a store!"));
    }
    if draft.author.is_none() {
        errors.push(FieldError::new("author", "You must supply an author!"));
    }
    if !(1..=5).contains(&draft.rating) {
        errors.push(FieldError::new(
            "rating",
            "Your rating must be between 1 and 5!",
        ));
    }
    let text = draft.text.trim();
    if text.is_empty() {
        errors.push(FieldError::new("text", "Your review must have text!"));
    }

    match (draft.store_id, draft.author, errors.is_empty()) {
        (Some(store_id), Some(author), true) => Ok(ValidReview {
            store_id,
            author,
            rating: draft.rating,
            text: text.to_string(),
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::StoreDraft;

    fn complete_draft() -> StoreDraft {
        StoreDraft::new("Clean Bean")
            .with_location("123 Bean St", -122.4194, 37.7749)
            .with_author(Uuid::new_v4())
    }

    #[test]
    fn test_complete_draft_passes() {
        let valid = validate_store_draft(&complete_draft()).expect("valid draft");
        assert_eq!(valid.name, "Clean Bean");
        assert_eq!(valid.address, "123 Bean St");
        assert_eq!(valid.longitude, -122.4194);
        assert_eq!(valid.latitude, 37.7749);
    }

    #[test]
    fn test_missing_name_reported() {
        let mut draft = complete_draft();
        draft.name = "   ".to_string();

        let errors = validate_store_draft(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "Please enter a store name!");
    }

    #[test]
    fn test_missing_location_reports_address_and_coordinates() {
        let mut draft = complete_draft();
        draft.location = None;

        let errors = validate_store_draft(&draft).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["location.address", "location.coordinates"]);
    }

    #[test]
    fn test_one_element_coordinates_rejected() {
        let mut draft = complete_draft();
        draft.location.as_mut().expect("location set").coordinates = vec![-122.4194];

        let errors = validate_store_draft(&draft).unwrap_err();
        assert_eq!(errors[0].field, "location.coordinates");
    }

    #[test]
    fn test_missing_author_reported() {
        let mut draft = complete_draft();
        draft.author = None;

        let errors = validate_store_draft(&draft).unwrap_err();
        assert_eq!(errors[0].field, "author");
        assert_eq!(errors[0].message, "You must supply an author");
    }

    #[test]
    fn test_every_missing_field_collected() {
        let draft = StoreDraft::default();

        let errors = validate_store_draft(&draft).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["name", "location.address", "location.coordinates", "author"]
        );
    }

    #[test]
    fn test_name_and_description_trimmed() {
        let mut draft = complete_draft();
        draft.name = "  Clean Bean  ".to_string();
        draft.description = Some("  smooth roasts  ".to_string());

        let valid = validate_store_draft(&draft).expect("valid draft");
        assert_eq!(valid.name, "Clean Bean");
        assert_eq!(valid.description.as_deref(), Some("smooth roasts"));
    }

    #[test]
    fn test_review_draft_requires_all_fields() {
        let errors = validate_review_draft(&ReviewDraft::default()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["store_id", "author", "rating", "text"]);
    }

    #[test]
    fn test_review_rating_bounds() {
        let base = ReviewDraft {
            store_id: Some(Uuid::new_v4()),
            author: Some(Uuid::new_v4()),
            rating: 0,
            text: "too watery".to_string(),
        };

        assert!(validate_review_draft(&base).is_err());
        assert!(validate_review_draft(&ReviewDraft { rating: 6, ..base.clone() }).is_err());
        assert!(validate_review_draft(&ReviewDraft { rating: 1, ..base.clone() }).is_ok());
        assert!(validate_review_draft(&ReviewDraft { rating: 5, ..base }).is_ok());
    }
}

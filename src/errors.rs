//! Error types for the Storefront crate
//!
//! This module contains all error types that can be returned by Storefront
//! coordinator operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    #[error("Repository already registered: {0}")]
    RepositoryAlreadyRegistered(String),
}

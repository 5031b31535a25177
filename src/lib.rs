//! # Storefront
//!
//! PostgreSQL data layer for a store directory: store records with slug
//! assignment, review joins, and aggregate views over tags and ratings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use storefront::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "storefront".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let mut storefront = Storefront::new(config).await?;
//!     storefront.setup_schema(false).await?;
//!
//!     let store_repo = StoreRepository::new(
//!         storefront.pool().clone(),
//!         None, // no signals
//!     );
//!     storefront.register_repository("stores".to_string(), store_repo)?;
//!     let store_repo = storefront.get_repository::<StoreRepository>("stores")?;
//!
//!     let draft = StoreDraft::new("Clean Bean")
//!         .with_tags(vec!["coffee".to_string()])
//!         .with_location("123 Bean St", -122.4194, 37.7749)
//!         .with_author(Uuid::new_v4());
//!
//!     let created = store_repo.create(draft).await?;
//!     println!("Created store: {} ({})", created.name, created.slug);
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod migration;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::Storefront;
pub use errors::StorefrontError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, SignalConfig};

// Re-export internal crates used by the public API
pub use signal_system;
pub use store_model;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;

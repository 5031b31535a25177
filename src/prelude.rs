//! Convenience re-exports for common Storefront usage
//!
//! This prelude module re-exports the most commonly used items from the
//! Storefront ecosystem, making it easier to import everything you need with
//! a single use statement.
//!
//! # Example
//!
//! ```rust
//! use storefront::prelude::*;
//!
//! // Now you have access to all the common Storefront types and traits
//! ```

// Core Storefront components
pub use crate::core::Storefront;
pub use crate::errors::StorefrontError;
pub use crate::migration;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, SignalConfig};

// Re-export commonly used store-model types for convenience
pub use store_model::prelude::*;

// Re-export signal system for event handling
pub use signal_system::prelude::*;

// Common external dependencies
pub use async_trait;
pub use sqlx;
pub use tokio;

// Commonly used sqlx types
pub use sqlx::{FromRow, PgPool, Row};

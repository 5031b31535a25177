//! Trait definitions
//!
//! The seam shared by the concrete repositories; the coordinator's registry
//! is bounded on it.

use async_trait::async_trait;

use crate::errors::StoreModelError;

/// Common surface of every table-backed repository
#[async_trait]
pub trait Repository: Send + Sync {
    /// Name of the backing table
    fn table_name(&self) -> &'static str;

    /// Count total records in the backing table
    async fn count(&self) -> Result<i64, StoreModelError>;
}

use std::sync::Arc;

use async_trait::async_trait;
use signal_system::{SignalManager, StoreEvent};

use crate::errors::StoreModelError;
use crate::traits::Repository;
use crate::DbPool;

/// Database repository for the `stores` table
#[derive(Clone)]
pub struct StoreRepository {
    pub(crate) db_pool: DbPool,
    pub(crate) signal_manager: Option<Arc<SignalManager>>,
}

impl std::fmt::Debug for StoreRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreRepository")
            .field("has_signals", &self.has_signals())
            .finish()
    }
}

impl StoreRepository {
    pub(crate) const TABLE: &'static str = "stores";

    pub fn new(db_pool: DbPool, signal_manager: Option<Arc<SignalManager>>) -> Self {
        Self {
            db_pool,
            signal_manager,
        }
    }

    /// Set signal manager for this repository
    pub fn set_signal_manager(&mut self, signal_manager: Arc<SignalManager>) {
        self.signal_manager = Some(signal_manager);
    }

    /// Remove signal manager from this repository
    pub fn remove_signal_manager(&mut self) {
        self.signal_manager = None;
    }

    /// Check if signal manager is set
    pub fn has_signals(&self) -> bool {
        self.signal_manager.is_some()
    }

    pub(crate) async fn emit_signal(&self, event: StoreEvent) {
        if let Some(signal_manager) = &self.signal_manager {
            signal_manager.emit(event).await;
        }
    }
}

#[async_trait]
impl Repository for StoreRepository {
    fn table_name(&self) -> &'static str {
        Self::TABLE
    }

    async fn count(&self) -> Result<i64, StoreModelError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM stores")
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| StoreModelError::database(Self::TABLE, "count", e))
    }
}

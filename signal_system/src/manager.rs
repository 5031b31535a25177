use std::sync::Arc;
use std::time::Duration;

use config::SignalConfig;
use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::event::StoreEvent;
use crate::types::EventCallback;

/// Signal manager for database event notifications
///
/// Callbacks are awaited in registration order under a per-callback timeout.
/// A failing or slow callback is logged and never aborts event delivery.
pub struct SignalManager {
    callbacks: RwLock<Vec<EventCallback>>,
    config: SignalConfig,
}

impl std::fmt::Debug for SignalManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalManager")
            .field("max_callbacks", &self.config.max_callbacks)
            .finish()
    }
}

impl SignalManager {
    pub fn new(config: SignalConfig) -> Self {
        Self {
            callbacks: RwLock::new(Vec::new()),
            config,
        }
    }

    /// Add event callback
    ///
    /// Returns false when the configured callback cap is reached.
    pub async fn add_callback<F>(&self, callback: F) -> bool
    where
        F: Fn(StoreEvent) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync + 'static,
    {
        let mut callbacks = self.callbacks.write().await;
        if callbacks.len() >= self.config.max_callbacks {
            tracing::warn!(
                max_callbacks = self.config.max_callbacks,
                "signal callback cap reached, callback not registered"
            );
            return false;
        }
        callbacks.push(Arc::new(callback));
        true
    }

    /// Emit event to all subscribers
    pub async fn emit(&self, event: StoreEvent) {
        let callbacks = self.callbacks.read().await;
        let timeout = Duration::from_secs(self.config.callback_timeout_seconds);

        for (index, callback) in callbacks.iter().enumerate() {
            match tokio::time::timeout(timeout, callback(event.clone())).await {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    tracing::warn!(index, %error, table = %event.table_name, "signal callback failed");
                }
                Err(_) => {
                    tracing::warn!(index, table = %event.table_name, "signal callback timed out");
                }
            }
        }
    }

    /// Clear all callbacks
    pub async fn clear_callbacks(&self) {
        self.callbacks.write().await.clear();
    }

    /// Get number of registered callbacks
    pub async fn callback_count(&self) -> usize {
        self.callbacks.read().await.len()
    }
}

impl Default for SignalManager {
    fn default() -> Self {
        Self::new(SignalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_callback(
        counter: Arc<AtomicUsize>,
    ) -> impl Fn(StoreEvent) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync + 'static {
        move |_event| {
            let counter = counter.clone();
            Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        }
    }

    #[tokio::test]
    async fn test_emit_delivers_to_all_callbacks() {
        let manager = SignalManager::default();
        let counter = Arc::new(AtomicUsize::new(0));

        assert!(manager.add_callback(counting_callback(counter.clone())).await);
        assert!(manager.add_callback(counting_callback(counter.clone())).await);
        assert_eq!(manager.callback_count().await, 2);

        manager
            .emit(StoreEvent::new(EventType::Created, "stores".to_string()))
            .await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_callback_cap_enforced() {
        let manager = SignalManager::new(SignalConfig::new(30, 1));
        let counter = Arc::new(AtomicUsize::new(0));

        assert!(manager.add_callback(counting_callback(counter.clone())).await);
        assert!(!manager.add_callback(counting_callback(counter.clone())).await);
        assert_eq!(manager.callback_count().await, 1);
    }

    #[tokio::test]
    async fn test_failing_callback_does_not_block_others() {
        let manager = SignalManager::default();
        let counter = Arc::new(AtomicUsize::new(0));

        manager
            .add_callback(|_event| -> BoxFuture<'static, anyhow::Result<()>> {
                Box::pin(async { anyhow::bail!("boom") })
            })
            .await;
        manager.add_callback(counting_callback(counter.clone())).await;

        manager
            .emit(StoreEvent::new(EventType::Updated, "stores".to_string()))
            .await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_clear_callbacks() {
        let manager = SignalManager::default();
        let counter = Arc::new(AtomicUsize::new(0));

        manager.add_callback(counting_callback(counter.clone())).await;
        manager.clear_callbacks().await;
        assert_eq!(manager.callback_count().await, 0);

        manager
            .emit(StoreEvent::new(EventType::Deleted, "stores".to_string()))
            .await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}

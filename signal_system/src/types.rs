//! Type definitions for signal system
//!
//! This module contains the callback types used by the signal manager.

use crate::event::StoreEvent;
use futures::future::BoxFuture;
use std::sync::Arc;

/// Async event callback type that returns a Result
pub type EventCallback =
    Arc<dyn Fn(StoreEvent) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

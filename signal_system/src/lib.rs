//! Signal system for database event handling
//!
//! This crate provides async signal handling and event processing
//! for database operations in the Storefront ecosystem.

pub mod event;
pub mod manager;
pub mod prelude;
pub mod types;

pub use event::{EventType, StoreEvent};
pub use manager::SignalManager;
pub use types::EventCallback;

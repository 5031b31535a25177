//! Database event types and definitions
//!
//! This module defines the structure of database events
//! that flow through the signal system.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Database event type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    Created,
    Updated,
    Deleted,
}

/// Database event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreEvent {
    /// Event type
    pub event_type: EventType,
    /// Table name
    pub table_name: String,
    /// Record ID (if available)
    pub record_id: Option<String>,
    /// Additional data
    pub payload: HashMap<String, serde_json::Value>,
    /// Event timestamp (UTC)
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl StoreEvent {
    pub fn new(event_type: EventType, table_name: String) -> Self {
        Self {
            event_type,
            table_name,
            record_id: None,
            payload: HashMap::new(),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn with_record_id(mut self, record_id: String) -> Self {
        self.record_id = Some(record_id);
        self
    }

    pub fn with_payload(mut self, key: String, value: serde_json::Value) -> Self {
        self.payload.insert(key, value);
        self
    }

    pub fn add_payload(&mut self, key: String, value: serde_json::Value) {
        self.payload.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_builder() {
        let event = StoreEvent::new(EventType::Created, "stores".to_string())
            .with_record_id("abc".to_string())
            .with_payload("slug".to_string(), json!("clean-bean"));

        assert_eq!(event.event_type, EventType::Created);
        assert_eq!(event.table_name, "stores");
        assert_eq!(event.record_id.as_deref(), Some("abc"));
        assert_eq!(event.payload.get("slug"), Some(&json!("clean-bean")));
    }

    #[test]
    fn test_event_serializes() {
        let event = StoreEvent::new(EventType::Deleted, "reviews".to_string());
        let value = serde_json::to_value(&event).expect("serialize event");
        assert_eq!(value["table_name"], "reviews");
    }
}

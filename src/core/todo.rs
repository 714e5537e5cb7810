//! # Todo Record
//!
//! The one persisted type. Stored as JSON under the decimal string of its ID:
//!
//! ```text
//! "2" → {"ID":2,"Text":"buy eggs","Completed":false}
//! ```
//!
//! Field names are kept capitalized so databases written by older builds
//! still decode.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Completed", default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Storage key for this record.
    pub fn key(&self) -> String {
        key_for(self.id)
    }
}

/// Decimal string key for an ID. Not zero-padded, so keys sort "1", "10", "2".
pub fn key_for(id: u64) -> String {
    id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_is_not_completed() {
        let todo = Todo::new(7, "water the plants");
        assert_eq!(todo.id, 7);
        assert_eq!(todo.text, "water the plants");
        assert!(!todo.completed);
    }

    #[test]
    fn test_json_uses_capitalized_field_names() {
        let todo = Todo::new(1, "buy milk");
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"ID":1,"Text":"buy milk","Completed":false}"#);
    }

    #[test]
    fn test_json_round_trip() {
        let todo = Todo {
            id: 42,
            text: "ünïcödé ✓".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn test_missing_completed_defaults_to_false() {
        let todo: Todo = serde_json::from_str(r#"{"ID":3,"Text":"x"}"#).unwrap();
        assert!(!todo.completed);
    }

    #[test]
    fn test_keys_are_plain_decimal() {
        assert_eq!(key_for(1), "1");
        assert_eq!(key_for(10), "10");
        assert_eq!(Todo::new(250, "").key(), "250");
    }
}

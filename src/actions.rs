//! Actions and action creators.
//!
//! Actions are a closed tagged-variant enum rather than open records: the
//! compiler enforces the required fields per tag, and reducers can match
//! exhaustively. The wire encoding (`tag = "type"`) matches the original
//! action-record shape, so the only place a malformed action can appear is
//! the JSON boundary, where it fails fast.

use crate::error::{Result, StoreError};
use crate::types::{Filter, ItemId};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// An intent to change state. Immutable; reducers only read it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Append a fresh item. Ignored by the collection when `text` is empty.
    #[serde(rename = "ADD_ITEM")]
    AddItem { id: ItemId, text: String },

    /// Flip `completed` on the item with matching `id`.
    #[serde(rename = "TOGGLE_ITEM")]
    ToggleItem { id: ItemId },

    /// Replace the visibility filter.
    #[serde(rename = "SET_FILTER")]
    SetFilter { filter: Filter },

    /// Dispatched once by the store at construction so every slice reducer's
    /// default applies uniformly. No reducer recognizes it.
    #[serde(rename = "INIT")]
    Init,
}

impl Action {
    /// Decode an action record from JSON.
    ///
    /// A missing field or unknown tag is caller misuse and surfaces
    /// immediately instead of flowing into the reducers.
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| StoreError::MalformedAction(e.to_string()))
    }

    /// Encode this action as a JSON record.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| StoreError::MalformedAction(e.to_string()))
    }
}

/// Process-wide monotonically increasing identifier source, starting at 0.
///
/// Owned by the action-creator layer and passed explicitly so tests can pin
/// the sequence; there is no ambient global counter.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Start at 0.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Start at an arbitrary value (for tests and restored sessions).
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Take the next identifier.
    pub fn next_id(&self) -> ItemId {
        ItemId(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Factory for well-formed actions.
///
/// Holds the [`IdGenerator`] so creation actions get their ids assigned in
/// one place.
#[derive(Debug, Default)]
pub struct ActionFactory {
    ids: IdGenerator,
}

impl ActionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a factory around an existing generator (deterministic tests).
    pub fn with_ids(ids: IdGenerator) -> Self {
        Self { ids }
    }

    /// Creation action with the next monotonic id.
    pub fn add_item(&self, text: impl Into<String>) -> Action {
        Action::AddItem {
            id: self.ids.next_id(),
            text: text.into(),
        }
    }

    pub fn toggle_item(&self, id: ItemId) -> Action {
        Action::ToggleItem { id }
    }

    pub fn set_filter(&self, filter: Filter) -> Action {
        Action::SetFilter { filter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generator_monotonic() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_id(), ItemId(0));
        assert_eq!(ids.next_id(), ItemId(1));
        assert_eq!(ids.next_id(), ItemId(2));
    }

    #[test]
    fn test_factory_assigns_sequential_ids() {
        let factory = ActionFactory::new();
        let a = factory.add_item("one");
        let b = factory.add_item("two");

        assert_eq!(
            a,
            Action::AddItem {
                id: ItemId(0),
                text: "one".to_string()
            }
        );
        assert_eq!(
            b,
            Action::AddItem {
                id: ItemId(1),
                text: "two".to_string()
            }
        );
    }

    #[test]
    fn test_factory_starting_at() {
        let factory = ActionFactory::with_ids(IdGenerator::starting_at(40));
        assert_eq!(
            factory.add_item("x"),
            Action::AddItem {
                id: ItemId(40),
                text: "x".to_string()
            }
        );
    }

    #[test]
    fn test_action_json_round_trip() {
        let action = Action::AddItem {
            id: ItemId(7),
            text: "learn".to_string(),
        };
        let json = action.to_json().unwrap();
        assert_eq!(Action::from_json(&json).unwrap(), action);
    }

    #[test]
    fn test_action_wire_shape() {
        let json = Action::ToggleItem { id: ItemId(3) }.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "TOGGLE_ITEM");
        assert_eq!(value["id"], 3);
    }

    #[test]
    fn test_malformed_action_missing_field() {
        let result = Action::from_json(r#"{"type": "ADD_ITEM", "id": 0}"#);
        assert!(matches!(result, Err(StoreError::MalformedAction(_))));
    }

    #[test]
    fn test_malformed_action_unknown_tag() {
        let result = Action::from_json(r#"{"type": "REMOVE_EVERYTHING"}"#);
        assert!(matches!(result, Err(StoreError::MalformedAction(_))));
    }
}

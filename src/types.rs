//! Core types for the state container.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Unique identifier for an item.
///
/// Assigned at creation by an [`crate::actions::IdGenerator`] and stable for
/// the lifetime of the item.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position in the total dispatch order. The first dispatch is `Sequence(1)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Sequence(pub u64);

impl Sequence {
    pub fn next(self) -> Self {
        Sequence(self.0 + 1)
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seq({})", self.0)
    }
}

/// A single item of collection state.
///
/// `text` is immutable after creation; only `completed` ever changes, and a
/// change produces a fresh value rather than mutating in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl Item {
    /// Build a fresh, not-yet-completed item.
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Ordered collection state. Insertion order is display order.
///
/// Elements are `Arc`-shared so a transition that leaves an item untouched
/// hands the same allocation to the next state; callers can detect "nothing
/// changed here" with [`Arc::ptr_eq`].
pub type ItemList = Vec<Arc<Item>>;

/// Visibility filter over collection state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    #[serde(rename = "SHOW_ALL")]
    All,
    #[serde(rename = "SHOW_ACTIVE")]
    Active,
    #[serde(rename = "SHOW_COMPLETED")]
    Completed,
}

/// Composite application state.
///
/// Each field is owned and produced exclusively by its slice reducer; the
/// root combinator in [`crate::app`] is the only place they meet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub items: ItemList,
    pub filter: Filter,
}

/// Select the items visible under `filter`, preserving relative order.
///
/// Filtering never consumes the underlying list; hidden items stay in the
/// collection state and only `Arc` handles are cloned here.
pub fn visible_items(items: &[Arc<Item>], filter: Filter) -> ItemList {
    match filter {
        Filter::All => items.to_vec(),
        Filter::Active => items.iter().filter(|i| !i.completed).cloned().collect(),
        Filter::Completed => items.iter().filter(|i| i.completed).cloned().collect(),
    }
}

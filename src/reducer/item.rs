//! Leaf reducer for a single item.

use crate::actions::Action;
use crate::types::Item;
use std::sync::Arc;

/// Reduce one item slot.
///
/// `state` is `None` exactly when the caller is creating a fresh element
/// (the collection reducer passes the absent prior state on a creation
/// action). For a toggle whose target id does not match, the same `Arc` is
/// handed back, so "nothing happened here" stays pointer-observable.
pub fn reduce(state: Option<&Arc<Item>>, action: &Action) -> Option<Arc<Item>> {
    match action {
        Action::AddItem { id, text } => Some(Arc::new(Item::new(*id, text.clone()))),

        Action::ToggleItem { id } => state.map(|item| {
            if item.id != *id {
                return Arc::clone(item);
            }
            Arc::new(Item {
                completed: !item.completed,
                ..(**item).clone()
            })
        }),

        _ => state.map(Arc::clone),
    }
}

//! Collection reducer over the ordered item list.

use super::item;
use crate::actions::Action;
use crate::list;
use crate::types::ItemList;
use std::sync::Arc;

/// Reduce the whole collection.
///
/// Creation appends at the end; mutation delegates to the leaf reducer for
/// every element, so non-targets come back pointer-equal and relative order
/// is preserved. An empty creation text is an expected no-op, not an error.
pub fn reduce(state: &ItemList, action: &Action) -> ItemList {
    match action {
        Action::AddItem { text, .. } => {
            if text.is_empty() {
                return state.clone();
            }
            match item::reduce(None, action) {
                Some(created) => list::append(state, created),
                None => state.clone(),
            }
        }

        Action::ToggleItem { .. } => state
            .iter()
            .map(|slot| item::reduce(Some(slot), action).unwrap_or_else(|| Arc::clone(slot)))
            .collect(),

        _ => state.clone(),
    }
}

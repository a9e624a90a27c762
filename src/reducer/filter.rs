//! Filter slice reducer.

use crate::actions::Action;
use crate::types::Filter;

/// Replace the filter on a set-filter action, no-op otherwise.
pub fn reduce(state: &Filter, action: &Action) -> Filter {
    match action {
        Action::SetFilter { filter } => *filter,
        _ => *state,
    }
}

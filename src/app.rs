//! The root reducer for [`AppState`].

use crate::combine_reducers;
use crate::reducer::{filter, items};
use crate::types::AppState;

combine_reducers! {
    /// Root reducer over the composite application state.
    ///
    /// `items` and `filter` are reduced independently; neither slice can see
    /// the other's field.
    pub struct AppReducer for AppState {
        items: items::reduce,
        filter: filter::reduce,
    }
}

//! # Undertow
//!
//! A minimal unidirectional state container: pure state-transition functions
//! (reducers) composed into a single application state, driven by a
//! dispatch/subscribe store, plus small immutable-list utilities.
//!
//! ## Core Concepts
//!
//! - **Actions**: Closed tagged-variant records describing intent
//! - **Reducers**: Pure `(prior, action) -> next` transition functions
//! - **Combinator**: [`combine_reducers!`] composes slice reducers into one
//! - **Store**: Holds current state; dispatch replaces it and notifies
//! - **Sharing**: Untouched sub-trees stay `Arc`-pointer-equal across
//!   transitions for cheap change detection
//!
//! ## Example
//!
//! ```
//! use undertow::{ActionFactory, AppReducer, Filter, Store};
//!
//! let store = Store::new(AppReducer);
//! let actions = ActionFactory::new();
//!
//! store.subscribe(|| { /* re-render from store.state() */ });
//!
//! store.dispatch(actions.add_item("learn reducers"))?;
//! store.dispatch(actions.set_filter(Filter::Active))?;
//!
//! assert_eq!(store.state().items.len(), 1);
//! # Ok::<(), undertow::StoreError>(())
//! ```

pub mod actions;
pub mod app;
pub mod counters;
pub mod error;
pub mod list;
pub mod reducer;
pub mod store;
pub mod subscriptions;
pub mod types;

// Re-exports
pub use actions::{Action, ActionFactory, IdGenerator};
pub use app::AppReducer;
pub use error::{Result, StoreError};
pub use reducer::Reducer;
pub use store::Store;
pub use subscriptions::{DropReason, SubscriberId, WatchEvent, WatchHandle};
pub use types::{visible_items, AppState, Filter, Item, ItemId, ItemList, Sequence};

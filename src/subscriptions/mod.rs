//! Change notification: synchronous callbacks and bounded watch channels.

mod registry;
mod types;

pub use registry::{Callback, SubscriberRegistry};
pub use types::{DropReason, SubscriberId, WatchEvent, WatchHandle};

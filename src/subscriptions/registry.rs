//! Subscriber registry: callback fan-out plus watch channels.

use crate::types::Sequence;
use crossbeam_channel::{bounded, Sender};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

use super::types::{DropReason, SubscriberId, WatchEvent, WatchHandle};

/// A registered notification callback. Invoked with no payload; the
/// subscriber pulls state from the store.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Holds all live subscribers and delivers post-dispatch notifications.
///
/// Callbacks are invoked synchronously in subscription order. Watch channels
/// get a best-effort `try_send`; a full buffer drops the watcher, the same
/// discipline a slow consumer gets from any bounded fan-out.
pub struct SubscriberRegistry {
    /// Synchronous callbacks, in subscription order.
    callbacks: RwLock<Vec<(SubscriberId, Callback)>>,
    /// Channel-based watchers.
    watchers: RwLock<Vec<(SubscriberId, Sender<WatchEvent>)>>,
    /// Counter for generating subscriber IDs.
    next_id: AtomicU64,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self {
            callbacks: RwLock::new(Vec::new()),
            watchers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn next_id(&self) -> SubscriberId {
        SubscriberId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Register a callback for every future dispatch.
    pub fn subscribe(&self, callback: Callback) -> SubscriberId {
        let id = self.next_id();
        self.callbacks.write().push((id, callback));
        trace!(?id, "subscriber registered");
        id
    }

    /// Open a bounded watch channel.
    pub fn watch(&self, buffer: usize) -> WatchHandle {
        let id = self.next_id();
        let (sender, receiver) = bounded(buffer);
        self.watchers.write().push((id, sender));
        trace!(?id, buffer, "watcher registered");
        WatchHandle { id, receiver }
    }

    /// Remove a subscriber. Idempotent: unknown ids are a no-op.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.callbacks.write().retain(|(sid, _)| *sid != id);

        let mut watchers = self.watchers.write();
        if let Some(pos) = watchers.iter().position(|(sid, _)| *sid == id) {
            let (_, sender) = watchers.remove(pos);
            // Best effort; the receiver may already be gone
            let _ = sender.try_send(WatchEvent::Dropped {
                reason: DropReason::Unsubscribed,
            });
        }
    }

    /// Number of registered callbacks.
    pub fn subscriber_count(&self) -> usize {
        self.callbacks.read().len()
    }

    /// Number of open watch channels.
    pub fn watcher_count(&self) -> usize {
        self.watchers.read().len()
    }

    /// Notify everyone that dispatch `sequence` replaced the state.
    ///
    /// The callback list is snapshotted first, so a callback that subscribes
    /// or unsubscribes during notification affects the NEXT dispatch, never
    /// the round in flight.
    pub fn notify_all(&self, sequence: Sequence) {
        let snapshot: Vec<Callback> = {
            let callbacks = self.callbacks.read();
            callbacks.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };
        for callback in &snapshot {
            callback();
        }

        let event = WatchEvent::Dispatched { sequence };
        let mut overflowed = Vec::new();
        {
            let watchers = self.watchers.read();
            for (id, sender) in watchers.iter() {
                if sender.try_send(event.clone()).is_err() {
                    overflowed.push(*id);
                }
            }
        }

        if !overflowed.is_empty() {
            let mut watchers = self.watchers.write();
            for id in overflowed {
                debug!(?id, "dropping overflowed watcher");
                if let Some(pos) = watchers.iter().position(|(sid, _)| *sid == id) {
                    let (_, sender) = watchers.remove(pos);
                    let _ = sender.try_send(WatchEvent::Dropped {
                        reason: DropReason::BufferOverflow,
                    });
                }
            }
        }
    }
}

impl Default for SubscriberRegistry {
    fn default() -> Self {
        Self::new()
    }
}

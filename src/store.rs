//! The store: current state plus dispatch/subscribe mechanics.

use crate::actions::Action;
use crate::error::{Result, StoreError};
use crate::reducer::Reducer;
use crate::subscriptions::{SubscriberId, SubscriberRegistry, WatchHandle};
use crate::types::Sequence;
use parking_lot::{ReentrantMutex, RwLock};
use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Default buffer size for [`Store::watch`] channels.
const DEFAULT_WATCH_BUFFER: usize = 1024;

/// A unidirectional state container.
///
/// Holds the current state and replaces it, atomically from an observer's
/// viewpoint, on every [`dispatch`](Store::dispatch). Dispatches are totally
/// ordered: a mutual-exclusion discipline serializes concurrent callers so
/// no two root-reducer runs ever overlap. All reducer work and subscriber
/// notification happen inline in the dispatching call; the store never does
/// background work.
pub struct Store<S, R: Reducer<S>> {
    /// The root reducer.
    reducer: R,

    /// Current composite state.
    state: RwLock<S>,

    /// Callback and watch-channel subscribers.
    subscribers: SubscriberRegistry,

    /// Serializes dispatches across threads; the inner flag detects
    /// same-thread re-entry (a reducer or subscriber dispatching).
    dispatching: ReentrantMutex<Cell<bool>>,

    /// Total successful dispatches.
    dispatches: AtomicU64,
}

impl<S, R> Store<S, R>
where
    S: Clone + Default,
    R: Reducer<S>,
{
    /// Create a store seeded from the reducer's defaults.
    ///
    /// Seeding dispatches [`Action::Init`] through the reducer once, so every
    /// slice reducer's declared default applies uniformly at startup.
    pub fn new(reducer: R) -> Self {
        Self::with_state(reducer, S::default())
    }
}

impl<S, R> Store<S, R>
where
    S: Clone,
    R: Reducer<S>,
{
    /// Create a store seeded from an explicit initial state.
    pub fn with_state(reducer: R, initial: S) -> Self {
        let state = reducer.reduce(&initial, &Action::Init);
        Self {
            reducer,
            state: RwLock::new(state),
            subscribers: SubscriberRegistry::new(),
            dispatching: ReentrantMutex::new(Cell::new(false)),
            dispatches: AtomicU64::new(0),
        }
    }

    /// Current state. Never runs reducers; the cost is cloning the
    /// composite value, which for `Arc`-shared slices is handle bumps.
    pub fn state(&self) -> S {
        self.state.read().clone()
    }

    /// Run `action` through the root reducer, replace state, notify.
    ///
    /// Subscribers are invoked synchronously in subscription order after
    /// state has been replaced, and always fire, even when no slice reacted
    /// to the action. A subscriber dispatching from inside its callback (or
    /// a reducer dispatching, if it breaks the purity contract) fails with
    /// [`StoreError::ReentrantDispatch`] instead of corrupting state.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        let guard = self.dispatching.lock();
        if guard.get() {
            return Err(StoreError::ReentrantDispatch);
        }
        guard.set(true);
        let _reset = ResetOnDrop(&guard);

        trace!(?action, "dispatching");

        let next = {
            let current = self.state.read();
            self.reducer.reduce(&current, &action)
        };
        *self.state.write() = next;

        let sequence = Sequence(self.dispatches.fetch_add(1, Ordering::SeqCst) + 1);

        debug!(
            ?sequence,
            subscribers = self.subscribers.subscriber_count(),
            watchers = self.subscribers.watcher_count(),
            "state replaced"
        );

        // State lock is released; subscribers may call `state()` freely.
        self.subscribers.notify_all(sequence);
        Ok(())
    }

    /// Register a callback invoked with no payload after every future
    /// dispatch. Callbacks registered during a notification round are first
    /// invoked on the NEXT dispatch.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> SubscriberId {
        self.subscribers.subscribe(Arc::new(callback))
    }

    /// Remove a subscriber or watcher. Idempotent.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.unsubscribe(id);
    }

    /// Open a bounded watch channel that receives one
    /// [`WatchEvent::Dispatched`](crate::subscriptions::WatchEvent) per
    /// dispatch. A watcher that lets its buffer fill is dropped.
    pub fn watch(&self) -> WatchHandle {
        self.subscribers.watch(DEFAULT_WATCH_BUFFER)
    }

    /// [`Store::watch`] with an explicit buffer size.
    pub fn watch_with_buffer(&self, buffer: usize) -> WatchHandle {
        self.subscribers.watch(buffer)
    }

    /// Number of registered callbacks.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.subscriber_count()
    }

    /// Sequence of the most recent dispatch (`Sequence(0)` before any).
    pub fn dispatch_count(&self) -> Sequence {
        Sequence(self.dispatches.load(Ordering::SeqCst))
    }
}

/// Clears the in-dispatch flag when the dispatch scope unwinds.
struct ResetOnDrop<'a>(&'a Cell<bool>);

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

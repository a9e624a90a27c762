//! Subscription types for change notification.

use crate::types::Sequence;

/// Unique identifier for a subscriber (callback or watch channel).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

/// Events delivered to watch channels.
///
/// Notifications deliberately carry no state: subscribers pull the current
/// state from the store after waking. This keeps the store decoupled from
/// what its consumers actually read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WatchEvent {
    /// A dispatch completed and state was replaced.
    Dispatched { sequence: Sequence },

    /// The watch was dropped and will receive nothing further.
    Dropped { reason: DropReason },
}

/// Why a watch channel was dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// Send buffer overflowed (slow consumer).
    BufferOverflow,
    /// Explicitly unsubscribed.
    Unsubscribed,
}

/// Handle to a channel-based subscription.
pub struct WatchHandle {
    pub id: SubscriberId,
    /// Channel to receive events.
    pub receiver: crossbeam_channel::Receiver<WatchEvent>,
}

impl WatchHandle {
    /// Receive the next event (blocking).
    pub fn recv(&self) -> Result<WatchEvent, crossbeam_channel::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive an event (non-blocking).
    pub fn try_recv(&self) -> Result<WatchEvent, crossbeam_channel::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Receive with timeout.
    pub fn recv_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Result<WatchEvent, crossbeam_channel::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

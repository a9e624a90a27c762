//! Error types for the state container.

use thiserror::Error;

/// Main error type for store operations.
///
/// Only caller misuse surfaces here. Expected no-ops (an action tag a reducer
/// does not recognize, an empty item text, a toggle target that no longer
/// exists) return unchanged state and are never errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Dispatch called while a dispatch is already in progress")]
    ReentrantDispatch,

    #[error("Malformed action record: {0}")]
    MalformedAction(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

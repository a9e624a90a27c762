//! Counter-list utilities.
//!
//! A counter list is an ordered sequence of integers with positional
//! identity: the index IS the identity, so removing a counter shifts the
//! identities after it. All operations are built on [`crate::list`] and
//! return fresh lists.

use crate::error::{Result, StoreError};
use crate::list::{append, remove_at, replace_at};

/// New list with an extra counter at 0 appended.
pub fn add_counter(list: &[i64]) -> Vec<i64> {
    append(list, 0)
}

/// New list with the counter at `index` removed.
pub fn remove_counter(list: &[i64], index: usize) -> Result<Vec<i64>> {
    remove_at(list, index)
}

/// New list with the counter at `index` incremented by one.
pub fn increment_counter(list: &[i64], index: usize) -> Result<Vec<i64>> {
    let current = counter_at(list, index)?;
    replace_at(list, index, current + 1)
}

/// New list with the counter at `index` decremented by one.
pub fn decrement_counter(list: &[i64], index: usize) -> Result<Vec<i64>> {
    let current = counter_at(list, index)?;
    replace_at(list, index, current - 1)
}

fn counter_at(list: &[i64], index: usize) -> Result<i64> {
    list.get(index)
        .copied()
        .ok_or(StoreError::IndexOutOfRange {
            index,
            len: list.len(),
        })
}

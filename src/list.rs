//! Immutable list operations.
//!
//! Every function borrows the input and returns a fresh `Vec`; the input is
//! never altered. These are the substrate for the counter-list utilities and
//! the collection reducer.

use crate::error::{Result, StoreError};

/// New list with `value` at the end. Always succeeds.
pub fn append<T: Clone>(list: &[T], value: T) -> Vec<T> {
    let mut next = Vec::with_capacity(list.len() + 1);
    next.extend_from_slice(list);
    next.push(value);
    next
}

/// New list with the element at `index` excluded, relative order preserved.
///
/// An out-of-range index is caller misuse and fails fast.
pub fn remove_at<T: Clone>(list: &[T], index: usize) -> Result<Vec<T>> {
    check_bounds(list, index)?;
    let mut next = Vec::with_capacity(list.len() - 1);
    next.extend_from_slice(&list[..index]);
    next.extend_from_slice(&list[index + 1..]);
    Ok(next)
}

/// New list identical except position `index` holds `value`.
pub fn replace_at<T: Clone>(list: &[T], index: usize, value: T) -> Result<Vec<T>> {
    check_bounds(list, index)?;
    let mut next = list.to_vec();
    next[index] = value;
    Ok(next)
}

fn check_bounds<T>(list: &[T], index: usize) -> Result<()> {
    if index < list.len() {
        Ok(())
    } else {
        Err(StoreError::IndexOutOfRange {
            index,
            len: list.len(),
        })
    }
}

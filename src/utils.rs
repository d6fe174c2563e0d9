//! This module provides a set of shared, low-level guard functions used
//! throughout the arraykit kernels.
//!
//! Every public kernel validates its preconditions up front through these
//! helpers, so that an invalid call fails before the input is touched.

use crate::error::ArrayKitError;

//==================================================================================
// 1. Core Guards
//==================================================================================

/// Checks that `index` addresses an element of a sequence of length `len`.
///
/// # Errors
/// Returns `ArrayKitError::InvalidIndex` when `index >= len`.
pub fn check_index(index: usize, len: usize) -> Result<(), ArrayKitError> {
    if index >= len {
        return Err(ArrayKitError::InvalidIndex { index, len });
    }
    Ok(())
}

/// Checks that a 1-based rank `k` lies within `[1, len]`.
///
/// # Errors
/// Returns `ArrayKitError::InvalidRank` otherwise, including for any `k` on an
/// empty sequence.
pub fn check_rank(k: usize, len: usize) -> Result<(), ArrayKitError> {
    if k == 0 || k > len {
        return Err(ArrayKitError::InvalidRank { k, len });
    }
    Ok(())
}

/// Checks that `data` holds at least one element. `op` names the caller in the error.
pub fn ensure_non_empty<T>(op: &str, data: &[T]) -> Result<(), ArrayKitError> {
    if data.is_empty() {
        return Err(ArrayKitError::EmptyInput(op.to_string()));
    }
    Ok(())
}

/// Checks that `data` holds at least `needed` elements.
pub fn ensure_min_len<T>(data: &[T], needed: usize) -> Result<(), ArrayKitError> {
    if data.len() < needed {
        return Err(ArrayKitError::InsufficientLength {
            needed,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Unwraps a checked arithmetic result, naming `op` when it overflowed.
#[inline]
pub fn checked<T>(op: &str, value: Option<T>) -> Result<T, ArrayKitError> {
    value.ok_or_else(|| ArrayKitError::ArithmeticOverflow { op: op.to_string() })
}

//! The swap primitive every in-place kernel is built on.

use crate::error::ArrayKitError;
use crate::utils::check_index;

/// Exchanges the elements at `first` and `second` **in-place**.
///
/// Both indices are bounds-checked before the slice is touched; swapping an
/// index with itself is a no-op.
///
/// # Errors
/// Returns `ArrayKitError::InvalidIndex` for the first index that falls outside
/// the slice.
pub fn swap<T>(data: &mut [T], first: usize, second: usize) -> Result<(), ArrayKitError> {
    check_index(first, data.len())?;
    check_index(second, data.len())?;
    swap_in_bounds(data, first, second);
    Ok(())
}

/// The unchecked form used by the sorting and shape kernels, whose loop bounds
/// already guarantee valid indices.
#[inline]
pub(crate) fn swap_in_bounds<T>(data: &mut [T], first: usize, second: usize) {
    debug_assert!(first < data.len() && second < data.len());
    data.swap(first, second);
}

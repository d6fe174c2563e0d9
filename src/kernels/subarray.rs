//! This module contains the single-pass analysis kernels over contiguous runs.
//!
//! Every kernel here reads its input through a shared slice, so none of them can
//! mutate the caller's data. Each runs in O(n) time and O(1) extra space.
//!
//! All arithmetic is checked: an intermediate result that leaves the element
//! type's range is reported as `ArrayKitError::ArithmeticOverflow` rather than
//! wrapping or panicking.

use crate::config::ProductSemantics;
use crate::error::ArrayKitError;
use crate::traits::{partial_max, partial_min, Scalar};
use crate::utils::{checked, ensure_non_empty};

//==================================================================================
// 1. Maximum Subarray Sum / Product
//==================================================================================

/// Returns the largest sum of a non-empty contiguous subarray.
///
/// A running total restarts from the current element whenever it has gone
/// strictly negative, and the best total seen is reported. Because the first
/// element is always admitted, an all-negative input yields its least negative
/// element (e.g. `[-3, -1, -2]` gives `-1`).
///
/// # Errors
/// `ArrayKitError::EmptyInput` for an empty sequence, and
/// `ArrayKitError::ArithmeticOverflow` if the running total overflows.
pub fn max_subarray_sum<T: Scalar>(data: &[T]) -> Result<T, ArrayKitError> {
    const OP: &str = "max_subarray_sum";
    ensure_non_empty(OP, data)?;

    let zero = T::zero();
    let mut running = zero;
    let mut best = data[0];
    for &value in data {
        running = if running < zero {
            value
        } else {
            checked(OP, running.try_add(value))?
        };
        if running > best {
            best = running;
        }
    }
    Ok(best)
}

/// Returns the largest product of a non-empty contiguous subarray.
///
/// Tracks the largest and smallest products ending at each position; a negative
/// element exchanges the two before they are extended.
///
/// # Errors
/// `ArrayKitError::EmptyInput` for an empty sequence, and
/// `ArrayKitError::ArithmeticOverflow` if either running product overflows.
pub fn max_subarray_product<T: Scalar>(data: &[T]) -> Result<T, ArrayKitError> {
    const OP: &str = "max_subarray_product";
    ensure_non_empty(OP, data)?;

    let zero = T::zero();
    let mut max_here = data[0];
    let mut min_here = data[0];
    let mut best = data[0];
    for &value in &data[1..] {
        if value < zero {
            std::mem::swap(&mut max_here, &mut min_here);
        }
        max_here = partial_max(value, checked(OP, max_here.try_mul(value))?);
        min_here = partial_min(value, checked(OP, min_here.try_mul(value))?);
        best = partial_max(best, max_here);
    }
    Ok(best)
}

/// The legacy clamped variant of [`max_subarray_product`].
///
/// Running extremes start at 1, the running min is capped at 1 after a positive
/// element, the running max is floored at 1 after a negative element, a zero
/// resets both to 1, and the result starts at 0. Consequently `[-3]` yields `1`
/// and no result is ever below 0.
pub fn max_subarray_product_clamped<T: Scalar>(data: &[T]) -> Result<T, ArrayKitError> {
    const OP: &str = "max_subarray_product";
    ensure_non_empty(OP, data)?;

    let zero = T::zero();
    let one = T::one();
    let mut max_so_far = one;
    let mut min_so_far = one;
    let mut result = zero;
    for &value in data {
        if value > zero {
            max_so_far = checked(OP, max_so_far.try_mul(value))?;
            min_so_far = partial_min(checked(OP, min_so_far.try_mul(value))?, one);
        } else if value == zero {
            max_so_far = one;
            min_so_far = one;
        } else {
            let previous_max = max_so_far;
            max_so_far = partial_max(checked(OP, min_so_far.try_mul(value))?, one);
            min_so_far = checked(OP, previous_max.try_mul(value))?;
        }
        if result < max_so_far {
            result = max_so_far;
        }
    }
    Ok(result)
}

/// Dispatches to the product kernel selected by `semantics`.
pub fn max_subarray_product_with<T: Scalar>(
    data: &[T],
    semantics: ProductSemantics,
) -> Result<T, ArrayKitError> {
    match semantics {
        ProductSemantics::Standard => max_subarray_product(data),
        ProductSemantics::Clamped => max_subarray_product_clamped(data),
    }
}

//==================================================================================
// 2. Price / Height Scans
//==================================================================================

/// Best profit from one buy followed by one later sell. Never negative; zero for
/// empty or monotonically falling prices.
pub fn max_profit<T: Scalar>(prices: &[T]) -> Result<T, ArrayKitError> {
    const OP: &str = "max_profit";
    let mut profit = T::zero();
    let Some(&first) = prices.first() else {
        return Ok(profit);
    };

    let mut cheapest = first;
    for &price in prices {
        cheapest = partial_min(cheapest, price);
        profit = partial_max(profit, checked(OP, price.try_sub(cheapest))?);
    }
    Ok(profit)
}

/// Volume of water trapped between the bars of a height map, computed with two
/// pointers closing in from both ends.
pub fn trapped_water<T: Scalar>(heights: &[T]) -> Result<T, ArrayKitError> {
    const OP: &str = "trapped_water";
    let mut water = T::zero();
    if heights.len() < 3 {
        return Ok(water);
    }

    let mut left = 0;
    let mut right = heights.len() - 1;
    let mut left_max = heights[left];
    let mut right_max = heights[right];
    while left < right {
        let depth = if left_max < right_max {
            left += 1;
            left_max = partial_max(left_max, heights[left]);
            left_max.try_sub(heights[left])
        } else {
            right -= 1;
            right_max = partial_max(right_max, heights[right]);
            right_max.try_sub(heights[right])
        };
        water = checked(OP, water.try_add(checked(OP, depth)?))?;
    }
    Ok(water)
}

//! This module defines shared traits used across different kernels.

use num_traits::Num;
use std::fmt::Debug;

/// The element bound for every arithmetic kernel: a small, copyable, ordered
/// number. Sorting-only kernels ask for `PartialOrd` alone.
///
/// The `try_*` methods return `None` when the result leaves the type's range.
/// Integers delegate to their `checked_*` methods; floats follow IEEE 754 and
/// never report overflow.
pub trait Scalar: Copy + PartialOrd + Num + Debug {
    fn try_add(self, rhs: Self) -> Option<Self>;
    fn try_sub(self, rhs: Self) -> Option<Self>;
    fn try_mul(self, rhs: Self) -> Option<Self>;
}

// Implement `Scalar` for all primitive integer types.
macro_rules! impl_scalar_int {
    ($($T:ty),*) => {
        $(
            impl Scalar for $T {
                #[inline]
                fn try_add(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
                #[inline]
                fn try_sub(self, rhs: Self) -> Option<Self> {
                    self.checked_sub(rhs)
                }
                #[inline]
                fn try_mul(self, rhs: Self) -> Option<Self> {
                    self.checked_mul(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($T:ty),*) => {
        $(
            impl Scalar for $T {
                #[inline]
                fn try_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
                #[inline]
                fn try_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }
                #[inline]
                fn try_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);

/// Returns the larger of two partially ordered values, preferring `a` on ties.
#[inline]
pub(crate) fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// Returns the smaller of two partially ordered values, preferring `a` on ties.
#[inline]
pub(crate) fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

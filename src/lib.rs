//! This file is the root of the `arraykit` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`kernels`, `pipeline`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the kernels and types most callers need, so that
//!     `use arraykit::{bubble_sort, ArrayKitError};` just works.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod observability;

pub mod config;
pub mod error;
pub mod kernels;
pub mod pipeline;
pub mod traits;
pub mod utils;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use config::{KernelConfig, ProductSemantics, SortAlgorithm};
pub use error::ArrayKitError;
pub use observability::init_logging;
pub use pipeline::{execute_plan, execute_plan_json, KernelOutput, Operation, Plan};
pub use traits::Scalar;

pub use kernels::dispatch;
pub use kernels::order_stats::{kth_smallest, kth_smallest_with, min_max, second_largest};
pub use kernels::set_ops::{duplicates, frequency, intersection, missing_numbers, two_sum, union};
pub use kernels::shape::{chunk, duplicate_zeros, interleave, partition_012, reverse};
pub use kernels::sorting::{bubble_sort, insertion_sort, selection_sort, sort_with};
pub use kernels::subarray::{
    max_profit, max_subarray_product, max_subarray_product_clamped, max_subarray_product_with,
    max_subarray_sum, trapped_water,
};
pub use kernels::swap::swap;

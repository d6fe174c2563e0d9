//! The operation layer: serializable plans and the executor that runs them.
//!
//! A `Plan` is an ordered list of `Operation`s applied to one `i64` sequence.
//! The executor hands each step to `kernels::dispatch` and collects the outputs.

pub mod executor;
pub mod models;


pub use executor::{execute_plan, execute_plan_json};
pub use models::{KernelOutput, Operation, Plan};

//! This module is the pure, stateless engine for executing a `Plan`.
//!
//! It walks the plan in order against a single sequence. In-place steps rewrite
//! the sequence, so later steps observe their effect; every other step only
//! contributes its output. The first failing step aborts the plan.

use std::time::Instant;

use crate::config::KernelConfig;
use crate::error::ArrayKitError;
use crate::kernels;
use crate::log_metric;
use crate::pipeline::models::{KernelOutput, Plan};

/// Executes every operation of `plan` against `data`, returning one output per step.
///
/// # Errors
/// A failing step is reported as `ArrayKitError::PipelineError`, naming the
/// step and wrapping the kernel's own error. Steps that already ran keep their
/// effect on `data`.
pub fn execute_plan(
    data: &mut [i64],
    plan: &Plan,
    config: &KernelConfig,
) -> Result<Vec<KernelOutput>, ArrayKitError> {
    let start_overall = Instant::now();
    let mut outputs = Vec::with_capacity(plan.operations.len());

    for (step, op) in plan.operations.iter().enumerate() {
        let start_step = Instant::now();
        let output = kernels::dispatch(op, data, config).map_err(|e| {
            log::debug!("  - Step {} '{}' FAILED: {}", step, op.name(), e);
            ArrayKitError::PipelineError {
                stage: format!("{}#{}", op.name(), step),
                source: Box::new(e),
            }
        })?;

        if config.log_steps {
            log::info!(
                "  - Step {:>3} | {:<22} | in_place: {:<5} | len: {} | Time: {:.2?}",
                step,
                op.name(),
                op.is_in_place(),
                data.len(),
                start_step.elapsed(),
            );
        }
        log_metric!("event" = "dispatch", "op" = op.name(), "len" = data.len());
        outputs.push(output);
    }

    if config.log_steps {
        log::info!(
            "--- Plan of {} step(s) finished in {:.2?} ---",
            plan.operations.len(),
            start_overall.elapsed()
        );
    }
    Ok(outputs)
}

/// Parses `plan_json` and executes it. See [`execute_plan`].
pub fn execute_plan_json(
    data: &mut [i64],
    plan_json: &str,
    config: &KernelConfig,
) -> Result<Vec<KernelOutput>, ArrayKitError> {
    let plan = Plan::from_json(plan_json)?;
    execute_plan(data, &plan, config)
}

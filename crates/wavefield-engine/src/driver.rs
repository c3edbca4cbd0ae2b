//! Simulation driver.
//!
//! Validates a run, resolves its [`RunPlan`], hands the arena to the
//! configured executor and times the step loop. All argument checks
//! happen here, before any buffer is touched.

use std::time::Instant;

use tracing::{debug, info};
use wavefield_arena::{GenerationArena, GenerationTriple};
use wavefield_core::RunConfig;

use crate::error::SimError;
use crate::executor::executor_for;
use crate::plan::RunPlan;
use crate::report::RunReport;

/// Run `config.t_max` steps over `triple` and report the outcome.
///
/// The returned [`RunReport::output`] is the physical buffer written
/// during the final step.
///
/// # Errors
///
/// - [`SimError::InvalidArgument`] if `config` fails validation.
/// - [`SimError::InvalidBuffers`] if the buffers are not `i_max` long.
/// - [`SimError::WorkerSpawn`], [`SimError::WorkerPanicked`] or
///   [`SimError::ThreadPool`] if execution fails.
pub fn run(config: &RunConfig, mut triple: GenerationTriple) -> Result<RunReport, SimError> {
    config.validate()?;
    triple.expect_len(config.i_max)?;

    let plan = RunPlan::new(config);
    let executor = executor_for(config.strategy);
    info!(
        i_max = config.i_max,
        t_max = config.t_max,
        workers = config.num_workers,
        strategy = %config.strategy,
        "starting run"
    );
    debug!(partitions = ?plan.partitions.as_slice(), "partition layout");

    let rotations_before = triple.rotation().count();
    let started = Instant::now();
    executor.execute(&mut triple, &plan)?;
    let elapsed = started.elapsed();
    let rotations = triple.rotation().count() - rotations_before;

    info!(
        elapsed_secs = elapsed.as_secs_f64(),
        rotations, "run complete"
    );

    Ok(RunReport {
        output: triple.into_current(),
        strategy: config.strategy,
        i_max: config.i_max,
        t_max: config.t_max,
        num_workers: config.num_workers,
        rotations,
        elapsed,
    })
}

/// Validate `config`, build the arena from three buffers and [`run()`].
pub fn run_triple(
    config: &RunConfig,
    previous: Vec<f64>,
    current: Vec<f64>,
    next: Vec<f64>,
) -> Result<RunReport, SimError> {
    config.validate()?;
    let triple = GenerationArena::new(previous, current, next)?;
    run(config, triple)
}

/// Advance the wave field `t_max` steps with the default strategy.
///
/// Convenience wrapper over [`run_triple()`] that returns only the
/// output buffer.
pub fn simulate(
    i_max: usize,
    t_max: usize,
    num_workers: usize,
    old: Vec<f64>,
    current: Vec<f64>,
    next: Vec<f64>,
) -> Result<Vec<f64>, SimError> {
    let config = RunConfig::new(i_max, t_max, num_workers);
    run_triple(&config, old, current, next).map(RunReport::into_output)
}

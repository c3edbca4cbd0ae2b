//! Thread-per-step executor.
//!
//! Each step spawns one scoped thread per partition, joins them all, and
//! only then rotates. The join is the step boundary: it orders every
//! write to "next" before the rotation and before any read in the
//! following step, so no barrier is needed. The price is paying thread
//! creation `t_max * num_workers` times.

use std::thread;

use smallvec::SmallVec;
use tracing::trace;
use wavefield_arena::{GenerationArena, StepViews};
use wavefield_core::{split_windows, update_window, Strategy};

use crate::error::SimError;
use crate::executor::Executor;
use crate::plan::RunPlan;

/// Spawns fresh workers every step; the driver rotates between steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransientExecutor;

impl Executor for TransientExecutor {
    fn strategy(&self) -> Strategy {
        Strategy::Transient
    }

    fn execute(&self, arena: &mut GenerationArena, plan: &RunPlan) -> Result<(), SimError> {
        let coupling = plan.coupling;
        for step in 0..plan.t_max {
            let StepViews {
                previous,
                current,
                next,
            } = arena.step_views();
            let windows = split_windows(&plan.partitions, next);

            thread::scope(|s| -> Result<(), SimError> {
                let mut handles = SmallVec::<[_; 8]>::new();
                for (worker, window) in windows.into_iter().enumerate() {
                    let handle = thread::Builder::new()
                        .name(format!("wavefield-step-{worker}"))
                        .spawn_scoped(s, move || {
                            update_window(previous, current, window.cells, window.start, coupling);
                        })
                        .map_err(|source| SimError::WorkerSpawn { worker, source })?;
                    handles.push((worker, handle));
                }

                let mut outcome = Ok(());
                for (worker, handle) in handles {
                    if handle.join().is_err() && outcome.is_ok() {
                        outcome = Err(SimError::WorkerPanicked { worker });
                    }
                }
                outcome
            })?;

            arena.rotate();
            trace!(step, "transient step complete");
        }
        Ok(())
    }
}

//! Fork-join executor on a dedicated rayon pool.

use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, trace};
use wavefield_arena::GenerationArena;
use wavefield_core::{split_windows, update_window, Strategy};

use crate::error::SimError;
use crate::executor::Executor;
use crate::plan::RunPlan;

/// Data-parallel step loop over a rayon pool sized to the plan.
///
/// Each step fans the run's windows out to the pool and rotates once the
/// parallel region has returned. A panicking window aborts the run with
/// [`SimError::WorkerPanicked`]. The pool is built per run so the worker
/// count is exactly `num_workers` rather than rayon's global default.
#[derive(Clone, Copy, Debug, Default)]
pub struct RayonExecutor;

impl Executor for RayonExecutor {
    fn strategy(&self) -> Strategy {
        Strategy::Rayon
    }

    fn execute(&self, arena: &mut GenerationArena, plan: &RunPlan) -> Result<(), SimError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(plan.num_workers())
            .thread_name(|i| format!("wavefield-rayon-{i}"))
            .build()
            .map_err(|e| SimError::ThreadPool {
                reason: e.to_string(),
            })?;
        debug!(threads = pool.current_num_threads(), "rayon pool ready");

        let coupling = plan.coupling;
        pool.install(|| {
            for step in 0..plan.t_max {
                let views = arena.step_views();
                let (previous, current) = (views.previous, views.current);
                split_windows(&plan.partitions, views.next)
                    .par_iter_mut()
                    .enumerate()
                    .try_for_each(|(worker, w)| {
                        panic::catch_unwind(AssertUnwindSafe(|| {
                            update_window(previous, current, w.cells, w.start, coupling);
                        }))
                        .map_err(|_| SimError::WorkerPanicked { worker })
                    })?;
                arena.rotate();
                trace!(step, "rayon step complete");
            }
            Ok(())
        })
    }
}

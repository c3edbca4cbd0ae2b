//! Single-threaded reference executor.

use wavefield_arena::GenerationArena;
use wavefield_core::{update, Strategy};

use crate::error::SimError;
use crate::executor::Executor;
use crate::plan::RunPlan;

/// Updates the whole interior on the calling thread, then rotates.
///
/// The baseline every parallel strategy is checked against. Ignores the
/// plan's partitions.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn strategy(&self) -> Strategy {
        Strategy::Sequential
    }

    fn execute(&self, arena: &mut GenerationArena, plan: &RunPlan) -> Result<(), SimError> {
        let end = arena.len() - 1;
        for _ in 0..plan.t_max {
            let views = arena.step_views();
            update(views.previous, views.current, views.next, 1, end, plan.coupling);
            arena.rotate();
        }
        Ok(())
    }
}

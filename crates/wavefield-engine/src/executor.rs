//! The seam between the driver and the execution strategies.

use wavefield_arena::GenerationArena;
use wavefield_core::Strategy;

use crate::barrier::BarrierExecutor;
use crate::error::SimError;
use crate::fork_join::RayonExecutor;
use crate::plan::RunPlan;
use crate::sequential::SequentialExecutor;
use crate::transient::TransientExecutor;

/// Runs all `t_max` steps of a plan against an arena.
///
/// On success the arena has been rotated exactly `plan.t_max` times, so
/// its "current" buffer holds the final generation.
pub trait Executor: Send + Sync {
    /// The strategy this executor implements.
    fn strategy(&self) -> Strategy;

    /// Execute every step of `plan`.
    fn execute(&self, arena: &mut GenerationArena, plan: &RunPlan) -> Result<(), SimError>;
}

/// The executor for `strategy`.
pub fn executor_for(strategy: Strategy) -> Box<dyn Executor> {
    match strategy {
        Strategy::Sequential => Box::new(SequentialExecutor),
        Strategy::Transient => Box::new(TransientExecutor),
        Strategy::Barrier => Box::new(BarrierExecutor),
        Strategy::Rayon => Box::new(RayonExecutor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executor_matches_requested_strategy() {
        for strategy in Strategy::ALL {
            assert_eq!(executor_for(strategy).strategy(), strategy);
        }
    }
}

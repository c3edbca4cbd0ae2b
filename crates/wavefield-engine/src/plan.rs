//! Per-run execution plan.

use wavefield_core::{partition, Partitions, RunConfig};

/// What every executor needs to know, resolved once per run.
///
/// The partition layout depends only on `i_max` and `num_workers`, both
/// fixed for the run, so it is computed here and reused every step.
#[derive(Clone, Debug, PartialEq)]
pub struct RunPlan {
    /// Number of time steps.
    pub t_max: usize,
    /// Stencil coupling coefficient.
    pub coupling: f64,
    /// One partition per worker, in index order.
    pub partitions: Partitions,
}

impl RunPlan {
    /// Build the plan for a validated config.
    pub fn new(config: &RunConfig) -> Self {
        Self {
            t_max: config.t_max,
            coupling: config.coupling,
            partitions: partition(config.i_max, config.num_workers),
        }
    }

    /// Number of workers, one per partition.
    pub fn num_workers(&self) -> usize {
        self.partitions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_carries_partition_per_worker() {
        let plan = RunPlan::new(&RunConfig::new(100, 10, 3));
        assert_eq!(plan.num_workers(), 3);
        assert_eq!(plan.t_max, 10);
        assert_eq!(plan.coupling, 0.15);
        assert_eq!(plan.partitions[0].start, 1);
        assert_eq!(plan.partitions[2].end, 99);
    }
}

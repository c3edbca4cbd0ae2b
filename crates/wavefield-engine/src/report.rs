//! Result of a completed run.

use std::time::Duration;

use wavefield_core::Strategy;

/// Output buffer plus the measurements taken while producing it.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// The buffer labelled "current" after the last step.
    pub output: Vec<f64>,
    /// Strategy that executed the run.
    pub strategy: Strategy,
    /// Samples per buffer.
    pub i_max: usize,
    /// Steps executed.
    pub t_max: usize,
    /// Workers requested.
    pub num_workers: usize,
    /// Rotations performed during this run.
    pub rotations: u64,
    /// Wall time of the step loop, excluding validation.
    pub elapsed: Duration,
}

impl RunReport {
    /// Wall time per point-update, `elapsed / (i_max * t_max)`, in seconds.
    pub fn normalized_secs(&self) -> f64 {
        let updates = self.i_max as f64 * self.t_max as f64;
        if updates == 0.0 {
            0.0
        } else {
            self.elapsed.as_secs_f64() / updates
        }
    }

    /// Consume the report, keeping only the output buffer.
    pub fn into_output(self) -> Vec<f64> {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(elapsed: Duration) -> RunReport {
        RunReport {
            output: vec![0.0; 4],
            strategy: Strategy::Barrier,
            i_max: 1000,
            t_max: 500,
            num_workers: 2,
            rotations: 500,
            elapsed,
        }
    }

    #[test]
    fn normalized_divides_by_point_updates() {
        let r = report(Duration::from_secs(1));
        assert!((r.normalized_secs() - 2e-6).abs() < 1e-15);
    }

    #[test]
    fn normalized_of_instant_run_is_zero() {
        assert_eq!(report(Duration::ZERO).normalized_secs(), 0.0);
    }
}

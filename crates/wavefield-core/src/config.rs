//! Run configuration and validation.
//!
//! [`RunConfig`] carries the four run parameters (`i_max`, `t_max`,
//! `num_workers`, coupling) plus the execution [`Strategy`].
//! [`validate()`](RunConfig::validate) is re-run by the engine even when a
//! caller (the CLI) has already checked its arguments.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, ParseStrategyError};

/// Coupling coefficient `c` used by the reference behaviour.
pub const DEFAULT_COUPLING: f64 = 0.15;

// ── Strategy ───────────────────────────────────────────────────────

/// How the interior update is spread across workers.
///
/// All strategies produce bit-identical output for the same inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Single-threaded reference loop. Ignores `num_workers`.
    Sequential,
    /// Fresh threads spawned every step; the driver joins them and rotates.
    Transient,
    /// Persistent workers synchronised by a three-phase barrier per step.
    #[default]
    Barrier,
    /// Fork-join over a dedicated rayon pool sized to `num_workers`.
    Rayon,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Sequential,
        Strategy::Transient,
        Strategy::Barrier,
        Strategy::Rayon,
    ];

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Transient => "transient",
            Self::Barrier => "barrier",
            Self::Rayon => "rayon",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(Self::Sequential),
            "transient" => Ok(Self::Transient),
            "barrier" => Ok(Self::Barrier),
            "rayon" => Ok(Self::Rayon),
            _ => Err(ParseStrategyError { name: s.to_string() }),
        }
    }
}

// ── RunConfig ──────────────────────────────────────────────────────

/// Parameters of a single simulation run.
///
/// Immutable for the duration of a run: the partition layout is derived
/// from `i_max` and `num_workers` once and reused every step.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Number of samples per buffer, boundaries included. Must be >= 3.
    pub i_max: usize,
    /// Number of time steps to execute. Must be >= 1.
    pub t_max: usize,
    /// Number of parallel workers. Must be >= 1.
    pub num_workers: usize,
    /// Coupling coefficient `c` of the stencil. Default: 0.15.
    pub coupling: f64,
    /// Execution strategy. Default: [`Strategy::Barrier`].
    pub strategy: Strategy,
}

impl RunConfig {
    /// Create a config with the default coupling and strategy.
    pub fn new(i_max: usize, t_max: usize, num_workers: usize) -> Self {
        Self {
            i_max,
            t_max,
            num_workers,
            coupling: DEFAULT_COUPLING,
            strategy: Strategy::default(),
        }
    }

    /// Override the coupling coefficient.
    pub fn with_coupling(mut self, coupling: f64) -> Self {
        self.coupling = coupling;
        self
    }

    /// Override the execution strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Number of interior (writable) points, `i_max - 2`.
    pub fn interior_len(&self) -> usize {
        self.i_max.saturating_sub(2)
    }

    /// Check every parameter range.
    ///
    /// Checks run in argument order, so the first offending parameter is
    /// the one reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.i_max < 3 {
            return Err(ConfigError::GridTooSmall { i_max: self.i_max });
        }
        if self.t_max < 1 {
            return Err(ConfigError::NoSteps { t_max: self.t_max });
        }
        if self.num_workers < 1 {
            return Err(ConfigError::NoWorkers {
                num_workers: self.num_workers,
            });
        }
        if !self.coupling.is_finite() {
            return Err(ConfigError::InvalidCoupling {
                value: self.coupling,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference() {
        let config = RunConfig::new(1000, 100, 4);
        assert_eq!(config.coupling, 0.15);
        assert_eq!(config.strategy, Strategy::Barrier);
        assert_eq!(config.interior_len(), 998);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_short_grid() {
        let err = RunConfig::new(2, 1, 1).validate().unwrap_err();
        assert_eq!(err, ConfigError::GridTooSmall { i_max: 2 });
    }

    #[test]
    fn rejects_zero_steps() {
        let err = RunConfig::new(3, 0, 1).validate().unwrap_err();
        assert_eq!(err, ConfigError::NoSteps { t_max: 0 });
    }

    #[test]
    fn rejects_zero_workers() {
        let err = RunConfig::new(3, 1, 0).validate().unwrap_err();
        assert_eq!(err, ConfigError::NoWorkers { num_workers: 0 });
    }

    #[test]
    fn first_bad_argument_wins() {
        let err = RunConfig::new(0, 0, 0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::GridTooSmall { .. }));
    }

    #[test]
    fn rejects_nan_coupling() {
        let err = RunConfig::new(10, 1, 1)
            .with_coupling(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCoupling { .. }));
    }

    #[test]
    fn minimal_run_is_valid() {
        assert!(RunConfig::new(3, 1, 1).validate().is_ok());
    }

    #[test]
    fn strategy_round_trips_through_display() {
        for strategy in Strategy::ALL {
            let parsed: Strategy = strategy.to_string().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
    }

    #[test]
    fn strategy_parse_is_case_insensitive() {
        assert_eq!("Barrier".parse::<Strategy>().unwrap(), Strategy::Barrier);
        assert_eq!("seq".parse::<Strategy>().unwrap(), Strategy::Sequential);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = "openmp".parse::<Strategy>().unwrap_err();
        assert_eq!(err.name, "openmp");
    }
}

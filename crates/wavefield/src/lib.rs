//! Wavefield: a one-dimensional wave-equation simulator with parallel
//! execution strategies.
//!
//! This is the facade crate that re-exports the public API of the
//! Wavefield sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use wavefield::prelude::*;
//!
//! let i_max = 64;
//! let mut previous = vec![0.0; i_max];
//! let mut current = vec![0.0; i_max];
//! previous[32] = 1.0;
//! current[32] = 1.0;
//!
//! let config = RunConfig::new(i_max, 100, 4).with_strategy(Strategy::Barrier);
//! let triple = GenerationTriple::new(previous, current, vec![0.0; i_max]).unwrap();
//! let report = run(&config, triple).unwrap();
//!
//! assert_eq!(report.output.len(), i_max);
//! assert_eq!(report.rotations, 100);
//! assert_eq!(report.output[0], 0.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wavefield-core` | `RunConfig`, `Strategy`, partitioner, stencil kernel |
//! | [`arena`] | `wavefield-arena` | Three-slot generation arena and rotation |
//! | [`engine`] | `wavefield-engine` | Executors, driver, `RunReport` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Configuration, partitioning and the stencil kernel (`wavefield-core`).
pub use wavefield_core as types;

/// Generation storage and role rotation (`wavefield-arena`).
///
/// [`arena::GenerationArena`] owns the three buffers of a run;
/// [`arena::SharedArena`] lends them to persistent workers.
pub use wavefield_arena as arena;

/// Execution strategies and the simulation driver (`wavefield-engine`).
pub use wavefield_engine as engine;

/// Common imports for typical Wavefield usage.
pub mod prelude {
    pub use wavefield_arena::{GenerationArena, GenerationTriple, Role};
    pub use wavefield_core::{ConfigError, RunConfig, Strategy, DEFAULT_COUPLING};
    pub use wavefield_engine::{run, run_triple, simulate, RunReport, SimError};
}

//! Simulation engine for Wavefield runs.
//!
//! Provides the [`run()`] / [`simulate()`] driver and the execution
//! strategies it dispatches to:
//!
//! - [`SequentialExecutor`]: single-threaded reference.
//! - [`TransientExecutor`]: fresh threads every step, joined by the driver.
//! - [`BarrierExecutor`]: persistent workers and a three-barrier step protocol.
//! - [`RayonExecutor`]: fork-join over a dedicated rayon pool.
//!
//! Every strategy evaluates the same stencil kernel over the same disjoint
//! partitions, so their outputs are bit-identical.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod barrier;
pub mod driver;
pub mod error;
pub mod executor;
pub mod fork_join;
pub mod plan;
pub mod report;
pub mod sequential;
pub mod transient;

pub use barrier::BarrierExecutor;
pub use driver::{run, run_triple, simulate};
pub use error::SimError;
pub use executor::{executor_for, Executor};
pub use fork_join::RayonExecutor;
pub use plan::RunPlan;
pub use report::RunReport;
pub use sequential::SequentialExecutor;
pub use transient::TransientExecutor;

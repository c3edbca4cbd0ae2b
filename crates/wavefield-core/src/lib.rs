//! Core types for Wavefield simulations.
//!
//! This crate is the leaf of the dependency DAG. It defines the run
//! configuration, the work partitioner, and the finite-difference stencil
//! kernel that every execution strategy shares. Keeping the kernel in one
//! place is what makes all strategies bit-identical to each other.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod partition;
pub mod stencil;

pub use config::{RunConfig, Strategy, DEFAULT_COUPLING};
pub use error::{ConfigError, ParseStrategyError};
pub use partition::{partition, split_windows, Partition, Partitions, Window};
pub use stencil::{update, update_window};

//! Test fixtures for Wavefield development.
//!
//! Deterministic initial fields for unit tests, integration tests and
//! benchmarks, plus a naive reference loop that owns its own buffers and
//! copies data between steps. Executors are checked against it.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    five_point, gaussian_pulse, reference_run, seeded_arena, sine_pair, FivePoint, Field,
};

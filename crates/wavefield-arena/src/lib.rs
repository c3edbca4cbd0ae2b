//! Three-slot generation storage for Wavefield simulations.
//!
//! A run owns exactly three `f64` buffers for its whole lifetime. Their
//! physical storage never moves; only the role labels rotate after each
//! time step.
//!
//! # Architecture
//!
//! ```text
//! GenerationArena (owner)
//! ├── slots: [Vec<f64>; 3]    ←─── fixed storage, never reallocated
//! └── Rotation                ←─── role → slot mapping + rotation count
//!
//! SharedArena<'a> (borrowed from the arena for a persistent-worker run)
//! ├── raw slot pointers       ←─── read views + disjoint write windows
//! └── Mutex<Rotation>         ←─── single-writer rotation, read per step
//! ```
//!
//! # Rotation
//!
//! After each step the roles shift cyclically:
//!
//! ```text
//! previous ← current ← next ← previous
//! ```
//!
//! so the buffer written this step becomes "current", and the old
//! "previous" is reused as the next write target.
//!
//! # Unsafe code
//!
//! Only [`SharedArena`] contains `unsafe`, confined to the `raw` module.
//! Everything reachable through [`GenerationArena`] is safe.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod error;
mod raw;
pub mod rotation;

pub use arena::{GenerationArena, GenerationTriple, StepViews};
pub use error::ArenaError;
pub use raw::{SharedArena, WorkerViews};
pub use rotation::{Role, Rotation};

//! Shared arena access for persistent, barrier-synchronised workers.
//!
//! Persistent workers outlive a single step, so they cannot hold the
//! `&mut` borrow that [`GenerationArena::step_views`] hands out: the write
//! target changes every step. [`SharedArena`] instead keeps raw pointers to
//! the three slots and lets each worker materialise, once per step, read
//! views of "previous" and "current" plus a `&mut` window over its own
//! partition of "next".
//!
//! Soundness rests on the caller's phase discipline, enforced in the
//! engine by barriers:
//!
//! - views are only created and used between the arrival and completion
//!   barriers of a step,
//! - windows handed to different workers never overlap,
//! - [`rotate()`](SharedArena::rotate) runs only while no views are live.
//!
//! [`GenerationArena::step_views`]: crate::GenerationArena::step_views

#![allow(unsafe_code)]

use std::marker::PhantomData;

use parking_lot::Mutex;
use wavefield_core::Partition;

use crate::rotation::{Role, Rotation};

/// Buffers lent to a worker for one step.
#[derive(Debug)]
pub struct WorkerViews<'s> {
    /// State at `t - 1`, full length.
    pub previous: &'s [f64],
    /// State at `t`, full length.
    pub current: &'s [f64],
    /// This worker's slice of "next"; `window[k]` is global index `start + k`.
    pub window: &'s mut [f64],
    /// Global index of `window[0]`.
    pub start: usize,
}

/// Arena buffers shared by reference across a scoped worker pool.
///
/// Created by [`GenerationArena::with_shared`](crate::GenerationArena::with_shared).
/// Holds the exclusive borrow of the arena's storage for `'a`.
pub struct SharedArena<'a> {
    slots: [*mut f64; 3],
    len: usize,
    rotation: Mutex<Rotation>,
    _storage: PhantomData<&'a mut [f64]>,
}

// SAFETY: the pointers come from an exclusive borrow of three live
// `Vec<f64>` held for `'a`. Concurrent access goes through `worker_views`,
// whose contract rules out overlapping writes and write/read overlap, and
// the rotation state is behind a mutex.
unsafe impl Send for SharedArena<'_> {}
unsafe impl Sync for SharedArena<'_> {}

impl<'a> SharedArena<'a> {
    pub(crate) fn new(slots: &'a mut [Vec<f64>; 3], rotation: Rotation) -> Self {
        let len = slots[0].len();
        let [a, b, c] = slots;
        Self {
            slots: [a.as_mut_ptr(), b.as_mut_ptr(), c.as_mut_ptr()],
            len,
            rotation: Mutex::new(rotation),
            _storage: PhantomData,
        }
    }

    /// Samples per buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: arenas reject buffers shorter than 3.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Snapshot of the role mapping.
    pub fn rotation(&self) -> Rotation {
        *self.rotation.lock()
    }

    /// Advance the role labels by one step and return the new mapping.
    pub fn rotate(&self) -> Rotation {
        let mut rotation = self.rotation.lock();
        rotation.rotate();
        *rotation
    }

    /// Resolve one worker's views for the step described by `rotation`.
    ///
    /// # Panics
    ///
    /// If `part` reaches a boundary sample (`start == 0` or
    /// `end >= len`) while non-empty.
    ///
    /// # Safety
    ///
    /// Until the returned views are dropped:
    /// - `rotation` must be the mapping every other live view was built
    ///   from, and no call to [`rotate()`](Self::rotate) may happen,
    /// - no other live window may overlap `part`.
    pub unsafe fn worker_views(&self, rotation: &Rotation, part: Partition) -> WorkerViews<'_> {
        assert!(
            part.is_empty() || (part.start >= 1 && part.end < self.len),
            "partition {part:?} touches a boundary of a {}-sample field",
            self.len,
        );
        let start = part.start.min(self.len);

        let previous = self.slots[rotation.slot(Role::Previous)];
        let current = self.slots[rotation.slot(Role::Current)];
        let next = self.slots[rotation.slot(Role::Next)];

        // SAFETY: each pointer addresses `self.len` initialised samples
        // borrowed for 'a. `next` is a different slot from `previous` and
        // `current` because a rotation is a permutation, and the caller
        // guarantees the window is the only live reference into its range.
        unsafe {
            WorkerViews {
                previous: std::slice::from_raw_parts(previous, self.len),
                current: std::slice::from_raw_parts(current, self.len),
                window: std::slice::from_raw_parts_mut(next.add(start), part.len()),
                start,
            }
        }
    }

    pub(crate) fn into_rotation(self) -> Rotation {
        self.rotation.into_inner()
    }
}

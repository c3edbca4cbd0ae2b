//! The owning three-slot arena.
//!
//! [`GenerationArena`] takes ownership of the caller's three buffers and
//! keeps them in fixed slots for the whole run. A step borrows them as
//! [`StepViews`]: two shared read views plus one exclusive write view,
//! resolved through the current [`Rotation`].

use crate::error::ArenaError;
use crate::raw::SharedArena;
use crate::rotation::{Role, Rotation};

/// Borrowed buffers for one time step.
///
/// `next` is guaranteed distinct storage from `previous` and `current`.
pub struct StepViews<'a> {
    /// State at `t - 1`.
    pub previous: &'a [f64],
    /// State at `t`.
    pub current: &'a [f64],
    /// Write target for `t + 1`.
    pub next: &'a mut [f64],
}

/// Fixed pool of three equal-length buffers with rotating role labels.
#[derive(Debug)]
pub struct GenerationArena {
    slots: [Vec<f64>; 3],
    rotation: Rotation,
}

impl GenerationArena {
    /// Take ownership of an initial generation triple.
    ///
    /// `current` defines the run length; the other two buffers must match
    /// it. Buffers are moved in, never copied or reallocated.
    pub fn new(previous: Vec<f64>, current: Vec<f64>, next: Vec<f64>) -> Result<Self, ArenaError> {
        let len = current.len();
        if len < 3 {
            return Err(ArenaError::TooShort { len });
        }
        for (role, buf) in [(Role::Previous, &previous), (Role::Next, &next)] {
            if buf.len() != len {
                return Err(ArenaError::LengthMismatch {
                    role,
                    expected: len,
                    actual: buf.len(),
                });
            }
        }

        Ok(Self {
            slots: [previous, current, next],
            rotation: Rotation::new(),
        })
    }

    /// Allocate three zero-filled buffers of `len` samples.
    pub fn zeroed(len: usize) -> Result<Self, ArenaError> {
        Self::new(vec![0.0; len], vec![0.0; len], vec![0.0; len])
    }

    /// Samples per buffer.
    pub fn len(&self) -> usize {
        self.slots[0].len()
    }

    /// Always `false`: construction rejects buffers shorter than 3.
    pub fn is_empty(&self) -> bool {
        self.slots[0].is_empty()
    }

    /// Check that the buffers hold exactly `expected` samples.
    pub fn expect_len(&self, expected: usize) -> Result<(), ArenaError> {
        if self.len() == expected {
            Ok(())
        } else {
            Err(ArenaError::LengthMismatch {
                role: Role::Current,
                expected,
                actual: self.len(),
            })
        }
    }

    /// Current role mapping and rotation count.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Advance the role labels by one step.
    pub fn rotate(&mut self) {
        self.rotation.rotate();
    }

    /// Read the buffer currently labelled `role`.
    pub fn buffer(&self, role: Role) -> &[f64] {
        &self.slots[self.rotation.slot(role)]
    }

    /// Mutable access to the buffer currently labelled `role`, e.g. for
    /// filling initial conditions.
    pub fn buffer_mut(&mut self, role: Role) -> &mut [f64] {
        &mut self.slots[self.rotation.slot(role)]
    }

    /// Split the arena into the views for one step.
    pub fn step_views(&mut self) -> StepViews<'_> {
        let [a, b, c] = &mut self.slots;
        let (previous, current, next) = match self.rotation.slots() {
            [0, 1, 2] => (a, b, c),
            [1, 2, 0] => (b, c, a),
            [2, 0, 1] => (c, a, b),
            other => unreachable!("rotation {other:?} is not a cyclic shift"),
        };
        StepViews {
            previous: previous.as_slice(),
            current: current.as_slice(),
            next: next.as_mut_slice(),
        }
    }

    /// Lend the buffers to persistent workers for the duration of `f`.
    ///
    /// Rotations performed through the [`SharedArena`] are written back
    /// into this arena when `f` returns.
    pub fn with_shared<R>(&mut self, f: impl FnOnce(&SharedArena<'_>) -> R) -> R {
        let shared = SharedArena::new(&mut self.slots, self.rotation);
        let result = f(&shared);
        self.rotation = shared.into_rotation();
        result
    }

    /// Consume the arena, returning the buffer labelled "current".
    ///
    /// After a run this is the physical buffer written during the final
    /// step.
    pub fn into_current(self) -> Vec<f64> {
        let slot = self.rotation.slot(Role::Current);
        let [a, b, c] = self.slots;
        match slot {
            0 => a,
            1 => b,
            _ => c,
        }
    }
}

/// The initial `(previous, current, next)` buffers handed to a run.
///
/// Validated on construction; a run takes it over as its arena.
pub type GenerationTriple = GenerationArena;

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(len: usize) -> GenerationArena {
        GenerationArena::new(vec![0.0; len], vec![1.0; len], vec![2.0; len]).unwrap()
    }

    #[test]
    fn rejects_short_buffers() {
        let err = GenerationArena::new(vec![0.0; 2], vec![0.0; 2], vec![0.0; 2]).unwrap_err();
        assert_eq!(err, ArenaError::TooShort { len: 2 });
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = GenerationArena::new(vec![0.0; 5], vec![0.0; 4], vec![0.0; 4]).unwrap_err();
        assert_eq!(
            err,
            ArenaError::LengthMismatch {
                role: Role::Previous,
                expected: 4,
                actual: 5,
            }
        );

        let err = GenerationArena::new(vec![0.0; 4], vec![0.0; 4], vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, ArenaError::LengthMismatch { role: Role::Next, .. }));
    }

    #[test]
    fn expect_len_reports_mismatch() {
        let arena = GenerationArena::zeroed(8).unwrap();
        assert!(arena.expect_len(8).is_ok());
        assert!(arena.expect_len(9).is_err());
    }

    #[test]
    fn views_follow_rotation() {
        let mut arena = tagged(4);
        {
            let v = arena.step_views();
            assert_eq!(v.previous[0], 0.0);
            assert_eq!(v.current[0], 1.0);
            assert_eq!(v.next[0], 2.0);
        }
        arena.rotate();
        let v = arena.step_views();
        assert_eq!(v.previous[0], 1.0);
        assert_eq!(v.current[0], 2.0);
        assert_eq!(v.next[0], 0.0);
    }

    #[test]
    fn written_buffer_becomes_current() {
        let mut arena = GenerationArena::zeroed(5).unwrap();
        arena.step_views().next.fill(7.0);
        arena.rotate();
        assert!(arena.buffer(Role::Current).iter().all(|&v| v == 7.0));
    }

    #[test]
    fn storage_never_moves() {
        let prev = vec![0.0; 6];
        let cur = vec![0.0; 6];
        let next = vec![0.0; 6];
        let ptrs = [prev.as_ptr(), cur.as_ptr(), next.as_ptr()];

        let mut arena = GenerationArena::new(prev, cur, next).unwrap();
        for _ in 0..5 {
            arena.rotate();
        }
        // 5 rotations: current sits in slot (1 + 5) % 3 == 0.
        let out = arena.into_current();
        assert_eq!(out.as_ptr(), ptrs[0]);
    }

    #[test]
    fn buffer_mut_targets_labelled_slot() {
        let mut arena = GenerationArena::zeroed(4).unwrap();
        arena.buffer_mut(Role::Previous)[1] = 3.0;
        arena.rotate();
        assert_eq!(arena.buffer(Role::Next)[1], 3.0);
    }

    #[test]
    fn shared_rotations_are_written_back() {
        let mut arena = GenerationArena::zeroed(4).unwrap();
        arena.with_shared(|shared| {
            shared.rotate();
            shared.rotate();
        });
        assert_eq!(arena.rotation().count(), 2);
        assert_eq!(arena.rotation().slot(Role::Current), 0);
    }
}

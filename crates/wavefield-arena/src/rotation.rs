//! Role labels and their cyclic rotation over the three arena slots.

use std::fmt;

/// Temporal role of a buffer within a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// State at `t - 1`.
    Previous,
    /// State at `t`.
    Current,
    /// State at `t + 1`, written during the step.
    Next,
}

impl Role {
    fn index(self) -> usize {
        match self {
            Self::Previous => 0,
            Self::Current => 1,
            Self::Next => 2,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Previous => "previous",
            Self::Current => "current",
            Self::Next => "next",
        })
    }
}

/// Mapping from [`Role`] to physical slot, plus the number of rotations
/// applied so far.
///
/// Starts as `previous → 0, current → 1, next → 2`. Each
/// [`rotate()`](Rotation::rotate) relabels without touching storage:
///
/// ```text
/// step 0:  prev=0 cur=1 next=2
/// step 1:  prev=1 cur=2 next=0
/// step 2:  prev=2 cur=0 next=1
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    slots: [usize; 3],
    count: u64,
}

impl Rotation {
    /// Identity labelling with zero rotations.
    pub const fn new() -> Self {
        Self {
            slots: [0, 1, 2],
            count: 0,
        }
    }

    /// Physical slot currently labelled `role`.
    pub fn slot(&self, role: Role) -> usize {
        self.slots[role.index()]
    }

    /// Slots indexed by role: `[previous, current, next]`.
    pub fn slots(&self) -> [usize; 3] {
        self.slots
    }

    /// Number of rotations applied since construction.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Relabel for the next step: next becomes current, current becomes
    /// previous, and previous is recycled as next.
    pub fn rotate(&mut self) {
        let [previous, current, next] = self.slots;
        self.slots = [current, next, previous];
        self.count += 1;
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new()
    }
}

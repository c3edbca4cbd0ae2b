//! Work partitioning of the interior index range across workers.
//!
//! The interior `[1, i_max - 1)` is cut into `num_workers` contiguous,
//! disjoint half-open ranges. With `n = i_max - 2`, `q = n / num_workers`
//! and `r = n % num_workers`, worker `k` owns `q + 1` points when `k < r`
//! and `q` points otherwise:
//!
//! ```text
//! i_max = 12, num_workers = 3  (n = 10, q = 3, r = 1)
//!
//!   0 | 1 2 3 4 | 5 6 7 | 8 9 10 | 11
//!   B |   w0    |  w1   |   w2   | B
//! ```
//!
//! When there are more workers than interior points the trailing workers
//! receive empty ranges (`start == end`). Their update is a no-op.

use std::ops::Range;

use smallvec::SmallVec;

/// Half-open index range `[start, end)` owned by one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Partition {
    /// First index written by the worker.
    pub start: usize,
    /// One past the last index written by the worker.
    pub end: usize,
}

impl Partition {
    /// Create a partition. `start` must not exceed `end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "partition start {start} > end {end}");
        Self { start, end }
    }

    /// Number of indices in the range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The range as a [`Range<usize>`].
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Partition list for one run. Inline for typical worker counts.
pub type Partitions = SmallVec<[Partition; 8]>;

/// Split `[1, i_max - 1)` into `num_workers` contiguous ranges.
///
/// The last range's `end` is pinned to exactly `i_max - 1`. Returns an
/// empty list for `num_workers == 0`; callers validate that case first.
pub fn partition(i_max: usize, num_workers: usize) -> Partitions {
    let mut parts = Partitions::with_capacity(num_workers);
    if num_workers == 0 {
        return parts;
    }

    let interior = i_max.saturating_sub(2);
    let chunk = interior / num_workers;
    let remainder = interior % num_workers;
    let last_end = i_max.saturating_sub(1).max(1);

    let mut start = 1;
    for k in 0..num_workers {
        let len = if k < remainder { chunk + 1 } else { chunk };
        let end = if k + 1 == num_workers {
            last_end
        } else {
            start + len
        };
        parts.push(Partition::new(start, end));
        start = end;
    }
    parts
}

/// Mutable view of one worker's slice of the "next" buffer.
///
/// `cells[k]` is the sample at global index `start + k`.
#[derive(Debug)]
pub struct Window<'a> {
    /// Global index of `cells[0]`.
    pub start: usize,
    /// The samples this worker writes.
    pub cells: &'a mut [f64],
}

/// Carve `next` into one disjoint [`Window`] per partition.
///
/// `partitions` must be contiguous and in index order, as returned by
/// [`partition()`]; `next` must cover the last `end`.
pub fn split_windows<'a>(
    partitions: &[Partition],
    next: &'a mut [f64],
) -> SmallVec<[Window<'a>; 8]> {
    let mut windows = SmallVec::with_capacity(partitions.len());
    let Some(first) = partitions.first() else {
        return windows;
    };

    let (_, mut rest) = next.split_at_mut(first.start);
    for part in partitions {
        let (cells, tail) = std::mem::take(&mut rest).split_at_mut(part.len());
        windows.push(Window {
            start: part.start,
            cells,
        });
        rest = tail;
    }
    windows
}

//! Explicit finite-difference stencil for the 1D wave equation.
//!
//! For every interior index `i`:
//!
//! ```text
//! next[i] = 2*current[i] - previous[i]
//!         + c * (current[i-1] - 2*current[i] + current[i+1])
//! ```
//!
//! Every execution strategy funnels through [`update_window`], so the
//! floating-point operation order is the same regardless of how the
//! interior is partitioned.

/// Write `next[start..end)` from `previous` and `current`.
///
/// Requires `1 <= start <= end <= len - 1` and all three buffers of equal
/// length. An empty range is a no-op. `next` must not alias the inputs,
/// which the borrow checker already guarantees here.
#[inline]
pub fn update(
    previous: &[f64],
    current: &[f64],
    next: &mut [f64],
    start: usize,
    end: usize,
    c: f64,
) {
    debug_assert_eq!(previous.len(), current.len());
    debug_assert_eq!(next.len(), current.len());
    update_window(previous, current, &mut next[start..end], start, c);
}

/// Write a window of the next generation whose first cell is global index
/// `start`.
///
/// This is the form workers use: each holds only its own slice of "next"
/// and full read views of "previous" and "current".
#[inline]
pub fn update_window(previous: &[f64], current: &[f64], window: &mut [f64], start: usize, c: f64) {
    if window.is_empty() {
        return;
    }
    debug_assert!(start >= 1, "stencil window starts on the left boundary");
    let end = start + window.len();
    debug_assert!(end < current.len(), "stencil window covers the right boundary");

    let prev = &previous[start..end];
    let cur = &current[start - 1..end + 1];
    for ((out, &p), w) in window.iter_mut().zip(prev).zip(cur.windows(3)) {
        *out = 2.0 * w[1] - p + c * (w[0] - 2.0 * w[1] + w[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: f64 = 0.15;

    fn formula(prev: &[f64], cur: &[f64], i: usize, c: f64) -> f64 {
        2.0 * cur[i] - prev[i] + c * (cur[i - 1] - 2.0 * cur[i] + cur[i + 1])
    }

    #[test]
    fn five_point_scenario() {
        let old = [0.0, 1.0, 0.0, 0.0, 0.0];
        let cur = [0.0, 0.0, 1.0, 0.0, 0.0];
        let mut next = [0.0; 5];
        update(&old, &cur, &mut next, 1, 4, C);

        for i in 1..4 {
            assert_eq!(next[i], formula(&old, &cur, i, C));
        }
        let expected = [0.0, -0.85, 1.7, 0.15, 0.0];
        for (got, want) in next.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
    }

    #[test]
    fn boundaries_untouched() {
        let old = [3.0, 1.0, 2.0, 3.0];
        let cur = [5.0, 4.0, 2.0, 7.0];
        let mut next = [-1.0, 0.0, 0.0, -2.0];
        update(&old, &cur, &mut next, 1, 3, C);
        assert_eq!(next[0], -1.0);
        assert_eq!(next[3], -2.0);
    }

    #[test]
    fn empty_range_is_noop() {
        let old = [1.0; 6];
        let cur = [2.0; 6];
        let mut next = [9.0; 6];
        update(&old, &cur, &mut next, 3, 3, C);
        assert_eq!(next, [9.0; 6]);
    }

    #[test]
    fn split_windows_match_full_update() {
        let old: Vec<f64> = (0..17).map(|i| (i as f64 * 0.37).sin()).collect();
        let cur: Vec<f64> = (0..17).map(|i| (i as f64 * 0.41).cos()).collect();

        let mut whole = vec![0.0; 17];
        update(&old, &cur, &mut whole, 1, 16, C);

        let mut pieces = vec![0.0; 17];
        let (left, right) = pieces.split_at_mut(7);
        update_window(&old, &cur, &mut left[1..], 1, C);
        update_window(&old, &cur, &mut right[..9], 7, C);

        assert_eq!(whole, pieces);
    }

    #[test]
    fn flat_field_at_rest_stays_flat() {
        let field = [0.5; 8];
        let mut next = [0.0; 8];
        update(&field, &field, &mut next, 1, 7, C);
        for v in &next[1..7] {
            assert!((v - 0.5).abs() < 1e-15);
        }
    }
}

//! Reusable initial-field fixtures.
//!
//! - [`sine_pair`]: two phase-shifted sine waves over the interior.
//! - [`gaussian_pulse`]: a pulse at rest, centred on the grid.
//! - [`five_point`]: the hand-checked single-step scenario.
//! - [`reference_run`]: a copy-based loop with no arena or rotation.

use wavefield_arena::GenerationArena;
use wavefield_core::update;

/// Initial `(previous, current)` generations. Boundaries are zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub previous: Vec<f64>,
    pub current: Vec<f64>,
}

impl Field {
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Move the field into an arena with a zeroed "next" buffer.
    pub fn into_arena(self) -> GenerationArena {
        let len = self.len();
        GenerationArena::new(self.previous, self.current, vec![0.0; len])
            .expect("fixture fields are at least 3 samples long")
    }
}

fn interior(len: usize, f: impl Fn(usize) -> f64) -> Vec<f64> {
    (0..len)
        .map(|i| if i == 0 || i + 1 == len { 0.0 } else { f(i) })
        .collect()
}

/// Sine waves with `periods` full cycles across the grid, the second
/// generation advanced by `phase` radians.
pub fn sine_pair(len: usize, periods: f64, phase: f64) -> Field {
    let k = std::f64::consts::TAU * periods / len as f64;
    Field {
        previous: interior(len, |i| (k * i as f64).sin()),
        current: interior(len, |i| (k * i as f64 + phase).sin()),
    }
}

/// Gaussian pulse of unit height and width `sigma` samples, identical in
/// both generations.
pub fn gaussian_pulse(len: usize, sigma: f64) -> Field {
    let centre = (len / 2) as f64;
    let g = interior(len, |i| {
        let x = (i as f64 - centre) / sigma;
        (-0.5 * x * x).exp()
    });
    Field {
        previous: g.clone(),
        current: g,
    }
}

/// Arena seeded with [`sine_pair`] at a fixed frequency and phase.
pub fn seeded_arena(len: usize) -> GenerationArena {
    sine_pair(len, 3.0, 0.05).into_arena()
}

/// A single-step scenario with a known answer.
#[derive(Clone, Debug)]
pub struct FivePoint {
    pub field: Field,
    pub coupling: f64,
    pub expected_next: [f64; 5],
}

/// `old = [0,1,0,0,0]`, `current = [0,0,1,0,0]`, `c = 0.15`.
pub fn five_point() -> FivePoint {
    FivePoint {
        field: Field {
            previous: vec![0.0, 1.0, 0.0, 0.0, 0.0],
            current: vec![0.0, 0.0, 1.0, 0.0, 0.0],
        },
        coupling: 0.15,
        expected_next: [0.0, -1.0 + 0.15, 2.0 - 2.0 * 0.15, 0.15, 0.0],
    }
}

/// Step `field` forward `t_max` times on one thread, shifting buffers by
/// copy instead of rotation.
pub fn reference_run(field: &Field, t_max: usize, coupling: f64) -> Vec<f64> {
    let len = field.len();
    let mut previous = field.previous.clone();
    let mut current = field.current.clone();
    let mut next = vec![0.0; len];
    for _ in 0..t_max {
        update(&previous, &current, &mut next, 1, len - 1, coupling);
        previous.copy_from_slice(&current);
        current.copy_from_slice(&next);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_have_zero_boundaries() {
        for field in [sine_pair(50, 2.0, 0.1), gaussian_pulse(50, 4.0)] {
            assert_eq!(field.previous[0], 0.0);
            assert_eq!(field.current[49], 0.0);
            assert_eq!(field.len(), 50);
        }
    }

    #[test]
    fn reference_matches_five_point() {
        let fp = five_point();
        let out = reference_run(&fp.field, 1, fp.coupling);
        assert_eq!(out.as_slice(), &fp.expected_next);
    }
}

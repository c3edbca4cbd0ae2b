//! Initial conditions for the first two generations.
//!
//! Sampling follows the classic assignment driver: `range` samples of `f`
//! are placed starting at `offset`, with the sample spacing held in single
//! precision. "current" is the same shape as "previous", shifted one
//! sample to the right.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use clap::ValueEnum;

use crate::error::{CliError, CliResult};

/// Approximation of π used by the sampling ranges.
const PI_APPROX: f64 = 3.14;

/// Shape of the initial wave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InitMode {
    /// One period of a sine at the start of the field.
    #[default]
    Sin,
    /// Five periods of a sine across the whole field.
    Sinfull,
    /// A single Gaussian at the start of the field.
    Gauss,
    /// Two files with one float per line, via `--old` and `--current`.
    File,
}

/// Sample `f` at `range` points over `[sample_start, sample_end)` into
/// `array[offset..]`.
///
/// Samples that would land past the end of `array` are dropped.
pub fn fill(
    array: &mut [f64],
    offset: usize,
    range: usize,
    sample_start: f64,
    sample_end: f64,
    f: impl Fn(f64) -> f64,
) {
    if range == 0 {
        return;
    }
    let dx = ((sample_end - sample_start) / range as f64) as f32;
    let slots = array.iter_mut().skip(offset).take(range);
    for (i, slot) in slots.enumerate() {
        let step = i as f32 * dx;
        *slot = f(sample_start + f64::from(step));
    }
}

/// Standard Gaussian shape with `mu = 0`, `sigma = 1`, unnormalised.
pub fn gauss(x: f64) -> f64 {
    (-x * x / 2.0).exp()
}

/// Populate `old` and `current` for `mode`.
///
/// Both buffers must already be zeroed and of equal length `i_max`.
/// `files` is required by [`InitMode::File`] and rejected by every other
/// mode.
pub fn populate(
    mode: InitMode,
    old: &mut [f64],
    current: &mut [f64],
    files: Option<(&Path, &Path)>,
) -> CliResult<()> {
    if mode != InitMode::File && files.is_some() {
        return Err(CliError::UnexpectedInputFiles);
    }
    let i_max = current.len();
    match mode {
        InitMode::Sin => {
            fill(old, 1, i_max / 4, 0.0, 2.0 * PI_APPROX, f64::sin);
            fill(current, 2, i_max / 4, 0.0, 2.0 * PI_APPROX, f64::sin);
        }
        InitMode::Sinfull => {
            fill(old, 1, i_max.saturating_sub(2), 0.0, 10.0 * PI_APPROX, f64::sin);
            fill(current, 2, i_max.saturating_sub(3), 0.0, 10.0 * PI_APPROX, f64::sin);
        }
        InitMode::Gauss => {
            fill(old, 1, i_max / 4, -3.0, 3.0, gauss);
            fill(current, 2, i_max / 4, -3.0, 3.0, gauss);
        }
        InitMode::File => {
            let (old_path, current_path) = files.ok_or(CliError::MissingInputFiles)?;
            read_file(old_path, old)?;
            read_file(current_path, current)?;
        }
    }
    Ok(())
}

fn read_file(path: &Path, into: &mut [f64]) -> CliResult<()> {
    let file = File::open(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    read_values(BufReader::new(file), path, into)
}

/// Parse one float per line into `into`, stopping once it is full.
///
/// Blank lines are skipped. A file shorter than `into` leaves the tail
/// untouched.
pub fn read_values(reader: impl BufRead, path: &Path, into: &mut [f64]) -> CliResult<()> {
    let mut slots = into.iter_mut();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let Some(slot) = slots.next() else {
            break;
        };
        *slot = text.parse().map_err(|_| CliError::ParseInput {
            path: path.to_path_buf(),
            line: idx + 1,
            text: text.to_string(),
        })?;
    }
    Ok(())
}

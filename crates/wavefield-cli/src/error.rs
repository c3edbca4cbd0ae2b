//! Error types for the wavesim CLI.

use std::path::PathBuf;

use thiserror::Error;
use wavefield::engine::SimError;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// The simulation rejected its arguments or failed while running.
    #[error(transparent)]
    Sim(#[from] SimError),

    /// `--init file` without both `--old` and `--current`.
    #[error("No files specified!")]
    MissingInputFiles,

    /// `--old` / `--current` given with an `--init` mode that ignores them.
    #[error("argument error: --old and --current require --init file")]
    UnexpectedInputFiles,

    /// Reading an initial-generation file failed.
    #[error("could not read {path}: {source}")]
    ReadInput {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line of an initial-generation file is not a number.
    #[error("{path}:{line}: '{text}' is not a number")]
    ParseInput {
        /// File being read.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Offending text.
        text: String,
    },

    /// Writing the result file failed.
    #[error("could not write {path}: {source}")]
    WriteOutput {
        /// Destination file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Whether this error is a rejected argument rather than a runtime failure.
    pub fn is_argument_error(&self) -> bool {
        match self {
            Self::Sim(e) => e.is_invalid_argument(),
            Self::MissingInputFiles | Self::UnexpectedInputFiles => true,
            _ => false,
        }
    }
}

//! wavesim: run a one-dimensional wave simulation from the command line.
//!
//! ```bash
//! # 1000 points, 500 steps, 4 workers, one sine period as the initial wave
//! wavesim 1000 500 4
//!
//! # Whole-field sine on a rayon pool, results to a custom file
//! wavesim 100000 1000 8 --init sinfull --strategy rayon --output wave.txt
//!
//! # Initial generations from files
//! wavesim 1000 100 --init file --old old.txt --current current.txt
//! ```
//!
//! Prints the wall time of the step loop and the time per point-update,
//! both to six significant digits, then writes the final generation one
//! value per line.

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wavefield::prelude::*;

mod error;
mod init;
mod output;

use error::CliResult;
use init::InitMode;

/// Simulate a vibrating string with parallel workers.
#[derive(Parser, Debug)]
#[command(name = "wavesim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of discrete amplitude points, should be >2
    i_max: usize,

    /// Number of discrete time steps, should be >=1
    t_max: usize,

    /// Number of workers (default: available parallelism)
    num_workers: Option<usize>,

    /// Initial data for the first two generations
    #[arg(long, value_enum, default_value_t = InitMode::Sin)]
    init: InitMode,

    /// File with the first generation, one float per line (only with `--init file`)
    #[arg(long, requires = "current")]
    old: Option<PathBuf>,

    /// File with the second generation, one float per line (only with `--init file`)
    #[arg(long, requires = "old")]
    current: Option<PathBuf>,

    /// Execution strategy: sequential, transient, barrier or rayon
    #[arg(short, long, default_value_t = Strategy::Barrier)]
    strategy: Strategy,

    /// Stencil coupling coefficient
    #[arg(short, long, default_value_t = DEFAULT_COUPLING)]
    coupling: f64,

    /// Where to write the final generation
    #[arg(short, long, default_value = "result.txt")]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn default_workers() -> usize {
    thread::available_parallelism().map_or(1, |n| n.get())
}

fn execute(cli: &Cli) -> CliResult<()> {
    let num_workers = cli.num_workers.unwrap_or_else(default_workers);
    let config = RunConfig::new(cli.i_max, cli.t_max, num_workers)
        .with_coupling(cli.coupling)
        .with_strategy(cli.strategy);
    config.validate().map_err(SimError::from)?;
    debug!(?config, init = ?cli.init, "resolved configuration");

    let (mut old, mut current) = (vec![0.0; cli.i_max], vec![0.0; cli.i_max]);
    let files = cli.old.as_deref().zip(cli.current.as_deref());
    init::populate(cli.init, &mut old, &mut current, files)?;

    let report = run_triple(&config, old, current, vec![0.0; cli.i_max])?;

    if !cli.quiet {
        let took = output::format_general(report.elapsed.as_secs_f64());
        println!("Took {took} seconds");
        let per_point = output::format_general(report.normalized_secs());
        println!("Normalized: {per_point} seconds");
    }

    output::write_result(&cli.output, &report.output)?;
    info!(path = %cli.output.display(), "result written");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_argument_error() {
                println!("{e}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

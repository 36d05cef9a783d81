//! Wavefront - 1-D FDTD Wave Propagation
//!
//! Runs the solver and streams field frames to stdout for a plotter.
//!
//! # Usage
//!
//! ```bash
//! wavefront --config run.json --format raw | plot-frames --width 350
//! ```

use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::info;
use wavefront_core::{
    error::Result,
    output::{process_frames, FrameFormat},
    FieldSolver, SimulationConfig,
};

/// One-dimensional FDTD wave propagation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file (missing fields use the reference setup)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Number of steps to run (overrides the configuration)
    #[arg(short, long)]
    iterations: Option<u64>,

    /// Emit every N-th frame
    #[arg(short, long, default_value_t = 1)]
    every: u64,

    /// Frame encoding on stdout
    #[arg(short, long, value_enum, default_value_t = FrameFormat::Raw)]
    format: FrameFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, frames to stdout
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Load the configuration
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            SimulationConfig::from_file(path)?
        }
        None => SimulationConfig::default(),
    };
    if let Some(iterations) = args.iterations {
        config = config.with_max_iterations(iterations);
    }
    let iterations = config.max_iterations;

    // Create solver
    let mut solver = FieldSolver::from_config(&config)?;
    info!(
        "Starting wavefront v{}: {} steps on {}",
        wavefront_core::VERSION,
        iterations,
        solver.grid()
    );

    // Stream frames
    process_frames(&mut solver, iterations, args.every, args.format)?;

    Ok(())
}

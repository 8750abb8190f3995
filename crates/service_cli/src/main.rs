//! Lattice CLI - Random Grids, Modulo Bias and Spin-Lattice Sweeps
//!
//! Operational entry point for the `lattice_core` teaching library.
//!
//! # Commands
//!
//! - `lattice seeds` - Reproducible and time-seeded draws from the classic generator
//! - `lattice arrays` - Fill a unit-interval array and a cubic grid, averaging the negatives
//! - `lattice pointers` - Walk a contiguous array by checked offsets
//! - `lattice bias` - Compare exact and sampled modulo-bias tables
//! - `lattice relax` - Relaxation times across a temperature sweep

use std::io::{self, Write};
use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use config::LatticeConfig;
pub use error::{CliError, Result};

/// Lattice teaching library CLI
#[derive(Parser)]
#[command(name = "lattice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "lattice.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show reproducible and time-seeded draws from the classic generator
    Seeds,

    /// Fill a unit-interval array and a cubic grid in [-5, 5]
    Arrays {
        /// Fixed seed (overrides configuration)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Linear size of the cubic grid (overrides configuration)
        #[arg(long)]
        size: Option<usize>,
    },

    /// Walk a contiguous array by checked offsets
    Pointers,

    /// Compare the exact modulo-bias table with a sampled histogram
    Bias {
        /// Modulus applied to each draw
        #[arg(long, default_value = "5")]
        span: u64,

        /// Largest raw draw
        #[arg(long, default_value = "10")]
        max: u64,

        /// Number of sampled draws
        #[arg(short = 'n', long, default_value = "110000")]
        samples: u64,

        /// Fixed seed (overrides configuration)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Measure relaxation times across the configured temperature sweep
    Relax {
        /// Linear size of the lattice; read from stdin when omitted
        #[arg(long)]
        size: Option<usize>,

        /// Print the final lattice after the sweep
        #[arg(long)]
        show_lattice: bool,
    },
}

fn init_tracing(verbose: bool, config: &LatticeConfig) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = LatticeConfig::resolve(Path::new(&cli.config))?;

    init_tracing(cli.verbose, &config);
    debug!(config = ?config, "configuration resolved");

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Seeds => commands::seeds::run(&config, &mut out),
        Commands::Arrays { seed, size } => {
            config.seed = seed.or(config.seed);
            let size = size.unwrap_or(config.grid_size);
            commands::arrays::run(&config, size, &mut out)
        }
        Commands::Pointers => commands::pointers::run(&mut out),
        Commands::Bias {
            span,
            max,
            samples,
            seed,
        } => {
            let seed = seed.unwrap_or_else(|| config.seed_or_time());
            commands::bias::run(span, max, samples, seed, &mut out)
        }
        Commands::Relax { size, show_lattice } => {
            let stdin = io::stdin();
            commands::relax::run(&config, size, show_lattice, &mut stdin.lock(), &mut out)
        }
    };

    out.flush()?;
    result
}

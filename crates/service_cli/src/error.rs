//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `lattice` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Library rejected a grid, mapping or sweep
    #[error("Lattice error: {0}")]
    Lattice(#[from] lattice_core::LatticeError),

    /// Invalid command-line or interactive input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading stdin or writing stdout failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

//! CLI configuration management.
//!
//! Loads `lattice.toml` (or the `--config` path) when present, falls back
//! to defaults otherwise, then applies environment overrides:
//!
//! - `LATTICE_SEED`: fixed seed for every generator
//! - `LATTICE_GRID_SIZE`: linear size of the cubic grid in `arrays`
//! - `LATTICE_LOG_LEVEL`: default tracing level

use std::path::Path;

use lattice_core::ising::{MetropolisConfig, TemperatureSweep};
use lattice_core::rng::time_seed;
use serde::Deserialize;
use thiserror::Error;

/// Largest accepted `grid_size`; a cubic grid of this size holds 10^6 cells.
pub const MAX_GRID_SIZE: usize = 100;

/// Largest linear size accepted by `relax`; the square lattice holds 10^6
/// spins.
pub const MAX_LATTICE_SIZE: usize = 1000;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Temperature sweep settings.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct SweepSection {
    /// First temperature
    pub start: f64,
    /// Exclusive lower bound
    pub stop: f64,
    /// Decrement per step
    pub step: f64,
}

impl Default for SweepSection {
    fn default() -> Self {
        let sweep = TemperatureSweep::default();
        Self {
            start: sweep.start(),
            stop: sweep.stop(),
            step: sweep.step(),
        }
    }
}

/// Relaxation stopping rule settings.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct RelaxationSection {
    /// Allowed excess of |m| over equilibrium
    pub tolerance: f64,
    /// Sweep budget per temperature
    pub max_sweeps: u64,
}

impl Default for RelaxationSection {
    fn default() -> Self {
        let config = MetropolisConfig::default();
        Self {
            tolerance: config.tolerance(),
            max_sweeps: config.max_sweeps(),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LatticeConfig {
    /// Fixed seed; a time-derived seed is used when absent
    pub seed: Option<u64>,

    /// Linear size of the cubic grid filled by `arrays`
    pub grid_size: usize,

    /// Log level
    pub log_level: String,

    /// Temperature sweep for `relax`
    pub sweep: SweepSection,

    /// Stopping rule for `relax`
    pub relaxation: RelaxationSection,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            grid_size: 10,
            log_level: "info".to_string(),
            sweep: SweepSection::default(),
            relaxation: RelaxationSection::default(),
        }
    }
}

impl LatticeConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, defaults otherwise; then environment
    /// overrides and validation.
    pub fn resolve(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        let config = config.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(seed) = lookup("LATTICE_SEED") {
            let seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("LATTICE_SEED '{}' is not a u64", seed)))?;
            self.seed = Some(seed);
        }

        if let Some(size) = lookup("LATTICE_GRID_SIZE") {
            self.grid_size = size.trim().parse().map_err(|_| {
                ConfigError::Parse(format!("LATTICE_GRID_SIZE '{}' is not an integer", size))
            })?;
        }

        if let Some(log_level) = lookup("LATTICE_LOG_LEVEL") {
            self.log_level = log_level;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.grid_size == 0 {
            errors.push("grid_size must be greater than 0".to_string());
        }
        if self.grid_size > MAX_GRID_SIZE {
            errors.push(format!(
                "grid_size {} exceeds maximum allowed ({})",
                self.grid_size, MAX_GRID_SIZE
            ));
        }

        if let Err(e) = self.temperature_sweep() {
            errors.push(format!("sweep: {}", e));
        }
        if let Err(e) = self.metropolis() {
            errors.push(format!("relaxation: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// The configured seed, or a fresh time-derived one.
    pub fn seed_or_time(&self) -> u64 {
        self.seed.unwrap_or_else(time_seed)
    }

    /// Sweep built from the `[sweep]` section.
    pub fn temperature_sweep(&self) -> lattice_core::Result<TemperatureSweep> {
        TemperatureSweep::new(self.sweep.start, self.sweep.stop, self.sweep.step)
    }

    /// Stopping rule built from the `[relaxation]` section.
    pub fn metropolis(&self) -> lattice_core::Result<MetropolisConfig> {
        MetropolisConfig::new(self.relaxation.tolerance, self.relaxation.max_sweeps)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file or environment
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

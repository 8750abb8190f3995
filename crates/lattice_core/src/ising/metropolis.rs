//! Single-spin-flip Metropolis dynamics.
//!
//! Relaxation is measured from the ordered state: the model performs
//! lattice sweeps until the absolute magnetisation falls to the equilibrium
//! value plus a tolerance, or until the sweep budget runs out.
//!
//! ```text
//! m_eq(T) = (1 - sinh(2/T)^-4)^(1/8)   for T < T_c
//! m_eq(T) = 0                          for T >= T_c
//! T_c     = 2 / ln(1 + sqrt(2))
//! ```

use rand_distr::{Distribution, Uniform};
use tracing::debug;

use super::lattice::SpinLattice;
use super::sweep::RelaxationModel;
use crate::error::{LatticeError, Result};
use crate::rng::LatticeRng;

/// Critical temperature of the square-lattice model, `2 / ln(1 + sqrt 2)`.
pub const CRITICAL_TEMPERATURE: f64 = 2.269_185_314_213_022;

/// Onsager's spontaneous magnetisation per spin at `temperature`.
pub fn spontaneous_magnetisation(temperature: f64) -> f64 {
    if temperature <= 0.0 {
        return 1.0;
    }
    if temperature >= CRITICAL_TEMPERATURE {
        return 0.0;
    }
    let sinh = (2.0 / temperature).sinh();
    (1.0 - sinh.powi(-4)).powf(0.125)
}

/// Stopping rule for [`MetropolisModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetropolisConfig {
    tolerance: f64,
    max_sweeps: u64,
}

impl MetropolisConfig {
    /// Builds a stopping rule.
    ///
    /// # Errors
    ///
    /// [`LatticeError::InvalidParameter`] if `tolerance` is not in `(0, 1)`
    /// or `max_sweeps` is zero.
    pub fn new(tolerance: f64, max_sweeps: u64) -> Result<Self> {
        if !(tolerance > 0.0 && tolerance < 1.0) {
            return Err(LatticeError::InvalidParameter {
                name: "tolerance",
                value: format!("{} is not in (0, 1)", tolerance),
            });
        }
        if max_sweeps == 0 {
            return Err(LatticeError::InvalidParameter {
                name: "max_sweeps",
                value: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            tolerance,
            max_sweeps,
        })
    }

    /// Allowed excess of `|m|` over the equilibrium value.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Sweep budget per measurement.
    pub fn max_sweeps(&self) -> u64 {
        self.max_sweeps
    }
}

impl Default for MetropolisConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.1,
            max_sweeps: 10_000,
        }
    }
}

/// Metropolis relaxation model driven by a [`LatticeRng`].
#[derive(Debug, Clone)]
pub struct MetropolisModel {
    rng: LatticeRng,
    config: MetropolisConfig,
}

impl MetropolisModel {
    /// Model drawing from `rng`.
    pub fn new(rng: LatticeRng, config: MetropolisConfig) -> Self {
        Self { rng, config }
    }

    /// Seed of the underlying generator.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Stopping rule in use.
    pub fn config(&self) -> &MetropolisConfig {
        &self.config
    }

    /// One sweep: as many flip attempts as there are spins, at random sites.
    pub fn sweep(&mut self, lattice: &mut SpinLattice, temperature: f64) {
        let n = lattice.linear_size();
        let beta = 1.0 / temperature;
        // Only energy changes of +4 and +8 need a random acceptance.
        let accept = [(-4.0 * beta).exp(), (-8.0 * beta).exp()];
        let site = Uniform::new(0, n);
        let unit = Uniform::new(0.0, 1.0);
        let rng = self.rng.inner_mut();

        for _ in 0..lattice.spins_number() {
            let row = site.sample(rng);
            let col = site.sample(rng);
            let delta = 2 * i32::from(lattice.spin(row, col)) * lattice.neighbour_sum(row, col);
            let flip = match delta {
                d if d <= 0 => true,
                4 => unit.sample(rng) < accept[0],
                _ => unit.sample(rng) < accept[1],
            };
            if flip {
                lattice.flip(row, col);
            }
        }
    }
}

impl RelaxationModel for MetropolisModel {
    fn relaxation_time(&mut self, lattice: &mut SpinLattice, temperature: f64) -> u64 {
        let target = spontaneous_magnetisation(temperature) + self.config.tolerance;
        let mut sweeps = 0;
        while lattice.magnetisation().abs() > target && sweeps < self.config.max_sweeps {
            self.sweep(lattice, temperature);
            sweeps += 1;
        }
        if lattice.magnetisation().abs() > target {
            debug!(temperature, sweeps, "sweep budget exhausted");
        }
        sweeps
    }
}

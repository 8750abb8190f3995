//! # Two-Dimensional Spin Lattice
//!
//! A square lattice of ±1 spins and the driver that measures relaxation
//! times across a descending temperature sweep.
//!
//! ## Module Structure
//!
//! - [`SpinLattice`]: the spin configuration, one contiguous allocation
//! - [`RelaxationModel`]: black-box collaborator returning a relaxation time
//!   for a lattice at a temperature
//! - [`TemperatureSweep`] and [`run_sweep`]: the measurement loop, resetting
//!   the lattice to the ordered state before every temperature
//! - [`MetropolisModel`]: single-spin-flip Metropolis implementation of
//!   [`RelaxationModel`] so the sweep can run end to end
//!
//! ## Usage Example
//!
//! ```rust
//! use lattice_core::ising::{
//!     run_sweep, MetropolisConfig, MetropolisModel, SpinLattice, TemperatureSweep,
//! };
//! use lattice_core::rng::LatticeRng;
//!
//! let mut lattice = SpinLattice::ordered(8).unwrap();
//! let mut model = MetropolisModel::new(LatticeRng::from_seed(1), MetropolisConfig::default());
//! let sweep = TemperatureSweep::new(3.5, 2.25, 0.2).unwrap();
//!
//! let points = run_sweep(&mut lattice, &mut model, &sweep);
//! assert_eq!(points.len(), 7);
//! ```

mod lattice;
mod metropolis;
mod sweep;

pub use lattice::SpinLattice;
pub use metropolis::{
    spontaneous_magnetisation, MetropolisConfig, MetropolisModel, CRITICAL_TEMPERATURE,
};
pub use sweep::{
    run_sweep, RelaxationModel, RelaxationPoint, TemperatureSweep, MAX_SWEEP_STEPS,
};

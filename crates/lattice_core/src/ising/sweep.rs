//! Relaxation-time measurement over a descending temperature sweep.

use tracing::info;

use super::lattice::SpinLattice;
use crate::error::{LatticeError, Result};

/// Most temperatures a single sweep may visit.
pub const MAX_SWEEP_STEPS: u32 = 1 << 20;

/// Anything that can report how long a lattice takes to relax at a given
/// temperature.
///
/// The lattice is handed over in the ordered state and may be left in any
/// state afterwards.
pub trait RelaxationModel {
    /// Relaxation time in lattice sweeps.
    fn relaxation_time(&mut self, lattice: &mut SpinLattice, temperature: f64) -> u64;
}

impl<M: RelaxationModel + ?Sized> RelaxationModel for &mut M {
    fn relaxation_time(&mut self, lattice: &mut SpinLattice, temperature: f64) -> u64 {
        (**self).relaxation_time(lattice, temperature)
    }
}

/// Temperatures `start, start - step, start - 2 * step, ...` strictly above
/// `stop`.
///
/// # Examples
///
/// ```rust
/// use lattice_core::ising::TemperatureSweep;
///
/// let sweep = TemperatureSweep::new(3.5, 2.25, 0.2).unwrap();
/// let temps: Vec<f64> = sweep.temperatures().collect();
/// assert_eq!(temps.len(), 7);
/// assert_eq!(temps[0], 3.5);
/// assert!((temps[6] - 2.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSweep {
    start: f64,
    stop: f64,
    step: f64,
}

impl TemperatureSweep {
    /// Validates and builds a sweep.
    ///
    /// # Errors
    ///
    /// [`LatticeError::InvalidSweep`] if any value is not finite, `step` is
    /// not positive, `stop` is negative, `start <= stop`, or the sweep would
    /// visit more than [`MAX_SWEEP_STEPS`] temperatures.
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self> {
        if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
            return Err(LatticeError::InvalidSweep(
                "start, stop and step must be finite".to_string(),
            ));
        }
        if step <= 0.0 {
            return Err(LatticeError::InvalidSweep(format!(
                "step {} must be positive",
                step
            )));
        }
        if stop < 0.0 {
            return Err(LatticeError::InvalidSweep(format!(
                "stop {} must be non-negative",
                stop
            )));
        }
        if start <= stop {
            return Err(LatticeError::InvalidSweep(format!(
                "start {} must exceed stop {}",
                start, stop
            )));
        }
        if (start - stop) / step >= f64::from(MAX_SWEEP_STEPS) {
            return Err(LatticeError::InvalidSweep(format!(
                "step {} visits more than {} temperatures",
                step, MAX_SWEEP_STEPS
            )));
        }
        Ok(Self { start, stop, step })
    }

    /// First temperature.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Exclusive lower bound.
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Decrement between temperatures.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Temperatures in sweep order.
    pub fn temperatures(&self) -> impl Iterator<Item = f64> {
        let Self { start, stop, step } = *self;
        (0u32..)
            .map(move |k| start - f64::from(k) * step)
            .take_while(move |&t| t > stop)
    }
}

impl Default for TemperatureSweep {
    /// 3.5 down to (but excluding) 2.25 in steps of 0.2.
    fn default() -> Self {
        Self {
            start: 3.5,
            stop: 2.25,
            step: 0.2,
        }
    }
}

/// One measured point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxationPoint {
    /// Temperature in units of J / k_B.
    pub temperature: f64,
    /// Relaxation time in sweeps.
    pub relaxation_time: u64,
}

/// Measures the relaxation time at every temperature of `sweep`, starting
/// each measurement from the ordered state.
pub fn run_sweep<M>(
    lattice: &mut SpinLattice,
    model: &mut M,
    sweep: &TemperatureSweep,
) -> Vec<RelaxationPoint>
where
    M: RelaxationModel + ?Sized,
{
    sweep
        .temperatures()
        .map(|temperature| {
            lattice.reset_ordered();
            let relaxation_time = model.relaxation_time(lattice, temperature);
            info!(
                temperature,
                relaxation_time,
                linear_size = lattice.linear_size(),
                "relaxation measured"
            );
            RelaxationPoint {
                temperature,
                relaxation_time,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Records what it was asked and answers with the call number.
    struct Recorder {
        calls: Vec<(f64, f64)>,
    }

    impl RelaxationModel for Recorder {
        fn relaxation_time(&mut self, lattice: &mut SpinLattice, temperature: f64) -> u64 {
            self.calls.push((temperature, lattice.magnetisation()));
            // Disorder the lattice so the next reset is observable.
            lattice.flip(0, 0);
            self.calls.len() as u64
        }
    }

    #[test]
    fn test_default_matches_reference_sweep() {
        let temps: Vec<f64> = TemperatureSweep::default().temperatures().collect();
        let expected = [3.5, 3.3, 3.1, 2.9, 2.7, 2.5, 2.3];
        assert_eq!(temps.len(), expected.len());
        for (t, e) in temps.iter().zip(expected.iter()) {
            assert_relative_eq!(*t, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_invalid_sweeps_rejected() {
        assert!(TemperatureSweep::new(3.5, 2.25, 0.0).is_err());
        assert!(TemperatureSweep::new(3.5, 2.25, -0.2).is_err());
        assert!(TemperatureSweep::new(2.0, 2.25, 0.2).is_err());
        assert!(TemperatureSweep::new(3.5, -1.0, 0.2).is_err());
        assert!(TemperatureSweep::new(f64::INFINITY, 2.25, 0.2).is_err());
    }

    #[test]
    fn test_sweep_length_is_capped() {
        assert!(matches!(
            TemperatureSweep::new(1e12, 0.0, 1e-6),
            Err(LatticeError::InvalidSweep(_))
        ));
        assert!(TemperatureSweep::new(1e300, 0.0, f64::MIN_POSITIVE).is_err());

        let longest = TemperatureSweep::new(f64::from(MAX_SWEEP_STEPS) - 1.0, 0.0, 1.0).unwrap();
        assert_eq!(longest.temperatures().count(), MAX_SWEEP_STEPS as usize - 1);
    }

    #[test]
    fn test_run_sweep_resets_between_temperatures() {
        let mut lattice = SpinLattice::ordered(3).unwrap();
        let mut model = Recorder { calls: Vec::new() };
        let sweep = TemperatureSweep::new(3.0, 2.0, 0.5).unwrap();

        let points = run_sweep(&mut lattice, &mut model, &sweep);

        assert_eq!(points.len(), 2);
        assert_eq!(points[1].relaxation_time, 2);
        assert_relative_eq!(points[1].temperature, 2.5);
        for &(_, magnetisation) in &model.calls {
            assert_relative_eq!(magnetisation, 1.0);
        }
    }
}

//! 64-bit pseudo-random generator wrapper.
//!
//! This module provides [`LatticeRng`], a seeded PRNG wrapper used as the
//! default [`RandomSource`] for grid fills and lattice simulations.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::source::RandomSource;

/// Returns a seed derived from the wall clock (nanoseconds since the Unix
/// epoch, truncated to 64 bits).
///
/// Successive program runs get different sequences. A clock set before the
/// epoch yields seed 0.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

/// Seeded random source for grid fills and Monte Carlo sweeps.
///
/// By default draws cover the full `u64` range, like a 64-bit Mersenne
/// Twister. [`with_max`](LatticeRng::with_max) narrows the output to
/// `[0, max]`, which makes modulo bias large enough to observe.
///
/// # Examples
///
/// ```rust
/// use lattice_core::rng::{LatticeRng, RandomSource};
///
/// let mut rng = LatticeRng::from_seed(42);
/// let u = rng.gen_unit();
/// assert!((0.0..=1.0).contains(&u));
///
/// let mut small = LatticeRng::with_max(42, 10);
/// assert!(small.next_draw() <= 10);
/// ```
#[derive(Debug, Clone)]
pub struct LatticeRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
    /// Inclusive upper bound of every draw.
    max: u64,
}

impl LatticeRng {
    /// Creates a full-range source initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence.
    ///
    /// ```rust
    /// use lattice_core::rng::{LatticeRng, RandomSource};
    ///
    /// let mut rng1 = LatticeRng::from_seed(12345);
    /// let mut rng2 = LatticeRng::from_seed(12345);
    /// assert_eq!(rng1.next_draw(), rng2.next_draw());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_max(seed, u64::MAX)
    }

    /// Creates a source whose draws lie in `[0, max]`.
    #[inline]
    pub fn with_max(seed: u64, max: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
            max,
        }
    }

    /// Creates a full-range source seeded from [`time_seed`].
    pub fn from_time() -> Self {
        Self::from_seed(time_seed())
    }

    /// Returns the seed used for initialisation.
    ///
    /// Useful for logging so a time-seeded run can be replayed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws once and scales to the closed unit interval, `draw / max`.
    ///
    /// A source with `max == 0` always yields 0.
    #[inline]
    pub fn gen_unit(&mut self) -> f64 {
        let draw = self.next_draw();
        if self.max == 0 {
            return 0.0;
        }
        draw as f64 / self.max as f64
    }

    /// Direct access to the underlying generator, for consumers that sample
    /// `rand_distr` distributions.
    #[inline]
    pub(crate) fn inner_mut(&mut self) -> &mut StdRng {
        &mut self.inner
    }
}

impl RandomSource for LatticeRng {
    #[inline]
    fn next_draw(&mut self) -> u64 {
        if self.max == u64::MAX {
            self.inner.gen()
        } else {
            self.inner.gen_range(0..=self.max)
        }
    }

    #[inline]
    fn max(&self) -> u64 {
        self.max
    }
}

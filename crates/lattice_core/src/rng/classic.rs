//! The classic C library `rand()` generator.

use super::source::RandomSource;

/// Largest value returned by [`ClassicRand`], the minimum `RAND_MAX` the C
/// standard allows.
pub const CLASSIC_RAND_MAX: u64 = 32_767;

const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;

/// Linear congruential generator with the textbook `rand()` recurrence.
///
/// `next = next * 1103515245 + 12345` (mod 2^32), returning bits 16..31
/// reduced to `[0, 32767]`. Its small output range is what makes `% n`
/// visibly biased.
///
/// # Examples
///
/// ```rust
/// use lattice_core::rng::{ClassicRand, RandomSource};
///
/// let mut rng = ClassicRand::from_seed(1);
/// assert_eq!(rng.next_draw(), 16838);
/// assert_eq!(rng.next_draw(), 5758);
/// ```
#[derive(Debug, Clone)]
pub struct ClassicRand {
    state: u32,
    seed: u32,
}

impl ClassicRand {
    /// Seeds the generator, the equivalent of `srand(seed)`.
    pub fn from_seed(seed: u32) -> Self {
        Self { state: seed, seed }
    }

    /// Seed passed at construction.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for ClassicRand {
    /// An unseeded `rand()` behaves as if seeded with 1.
    fn default() -> Self {
        Self::from_seed(1)
    }
}

impl RandomSource for ClassicRand {
    #[inline]
    fn next_draw(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        u64::from(self.state / 65_536) % (CLASSIC_RAND_MAX + 1)
    }

    #[inline]
    fn max(&self) -> u64 {
        CLASSIC_RAND_MAX
    }
}

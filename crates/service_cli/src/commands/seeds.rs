//! Seeds command implementation
//!
//! Shows that a fixed seed reproduces the classic generator's sequence, then
//! draws a few values from the process-wide default source.

use std::io::Write;

use lattice_core::mapping::{ModuloMapping, RangeMapping, UnitIntervalMapping};
use lattice_core::rng::{default, ClassicRand, RandomSource};
use lattice_core::LatticeError;
use tracing::{debug, info};

use crate::config::LatticeConfig;
use crate::Result;

/// Seeds whose first draws are printed.
pub const REFERENCE_SEEDS: [u32; 2] = [123, 8872];

/// Draws shown per reference seed.
const DRAWS_PER_SEED: usize = 3;

/// Run the seeds command
pub fn run<W: Write + ?Sized>(config: &LatticeConfig, out: &mut W) -> Result<()> {
    for seed in REFERENCE_SEEDS {
        let mut rng = ClassicRand::from_seed(seed);
        writeln!(out, "Seed {}:", seed)?;
        for _ in 0..DRAWS_PER_SEED {
            writeln!(out, "{}", rng.next_draw())?;
        }
    }

    let seed = config.seed_or_time();
    match default::init_default(seed) {
        Ok(()) => info!(seed, "default source seeded"),
        Err(LatticeError::DefaultSourceAlreadySeeded(existing)) => {
            debug!(existing, "default source already seeded; continuing its sequence")
        }
        Err(e) => return Err(e.into()),
    }

    let below_21 = ModuloMapping::new(0, 21)?;
    let around_zero = ModuloMapping::new(-5, 10)?;

    let (a, b, c) = default::with_default(|rng| {
        let max = rng.max();
        let a = below_21.map(rng.next_draw(), max);
        let b = around_zero.map(rng.next_draw(), max);
        let c = UnitIntervalMapping.map(rng.next_draw(), max);
        (a, b, c)
    })?;

    writeln!(out, "Random number in [0, 20]: {}", a)?;
    writeln!(out, "Random number in [-5, 4]: {}", b)?;
    writeln!(out, "Random number in [0, 1]: {}", c)?;
    Ok(())
}

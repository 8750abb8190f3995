//! Process-wide default random source.
//!
//! Replaces the hidden global state behind `srand`/`rand` with an explicit
//! source that is seeded exactly once, normally at program start:
//!
//! ```rust
//! use lattice_core::rng::default::{init_default, with_default};
//! use lattice_core::rng::RandomSource;
//!
//! init_default(2024).unwrap();
//! let draw = with_default(|rng| rng.next_draw()).unwrap();
//! # let _ = draw;
//!
//! // No implicit re-seeding.
//! assert!(init_default(7).is_err());
//! ```

use std::sync::{Mutex, OnceLock};

use tracing::debug;

use super::prng::LatticeRng;
use crate::error::{LatticeError, Result};

static DEFAULT_SOURCE: OnceLock<Mutex<LatticeRng>> = OnceLock::new();

/// Seeds the default source.
///
/// # Errors
///
/// [`LatticeError::DefaultSourceAlreadySeeded`] if it was seeded before; the
/// existing sequence is left untouched.
pub fn init_default(seed: u64) -> Result<()> {
    let mut seeded_now = false;
    let cell = DEFAULT_SOURCE.get_or_init(|| {
        seeded_now = true;
        Mutex::new(LatticeRng::from_seed(seed))
    });

    if seeded_now {
        debug!(seed, "default random source seeded");
        return Ok(());
    }

    let existing = cell.lock().unwrap_or_else(|p| p.into_inner()).seed();
    Err(LatticeError::DefaultSourceAlreadySeeded(existing))
}

/// Returns `true` once [`init_default`] has succeeded.
pub fn is_seeded() -> bool {
    DEFAULT_SOURCE.get().is_some()
}

/// Runs `f` with exclusive access to the default source.
///
/// # Errors
///
/// [`LatticeError::DefaultSourceUnseeded`] if [`init_default`] was never
/// called.
pub fn with_default<R>(f: impl FnOnce(&mut LatticeRng) -> R) -> Result<R> {
    let cell = DEFAULT_SOURCE
        .get()
        .ok_or(LatticeError::DefaultSourceUnseeded)?;
    let mut rng = cell.lock().unwrap_or_else(|p| p.into_inner());
    Ok(f(&mut rng))
}

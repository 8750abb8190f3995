//! # Random Sources
//!
//! Uniform integer generators that the grid fillers draw from. Every source
//! exposes its output range `[0, max]` so mappings can reduce draws without
//! knowing which generator produced them.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: the same seed always yields the same sequence
//! - **Exclusive ownership**: sources are `&mut` borrowed by one traversal at
//!   a time; nothing here is meant to be shared between threads
//! - **Explicit defaults**: the process-wide source in [`default`] must be
//!   seeded once at startup and is never re-seeded implicitly
//!
//! ## Module Structure
//!
//! - [`RandomSource`]: the trait every generator implements
//! - [`LatticeRng`]: 64-bit generator wrapping `rand::StdRng`
//! - [`ClassicRand`]: the C library style LCG with `RAND_MAX = 32767`
//! - [`CountingSource`]: adaptor that counts draws
//! - [`default`]: seed-once process-wide source
//!
//! ## Usage Example
//!
//! ```rust
//! use lattice_core::rng::{ClassicRand, LatticeRng, RandomSource};
//!
//! let mut classic = ClassicRand::from_seed(123);
//! assert_eq!(classic.max(), 32767);
//!
//! let mut rng = LatticeRng::from_seed(123);
//! let draw = rng.next_draw();
//! assert!(draw <= rng.max());
//! # let _ = classic.next_draw();
//! ```

mod classic;
pub mod default;
mod prng;
mod source;

pub use classic::{ClassicRand, CLASSIC_RAND_MAX};
pub use prng::{time_seed, LatticeRng};
pub use source::{CountingSource, RandomSource};

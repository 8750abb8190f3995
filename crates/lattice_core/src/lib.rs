//! # lattice_core: Bounded Random Grids and Spin-Lattice Sweeps
//!
//! Teaching library for introductory systems programming. It covers:
//!
//! - Seeded pseudo-random sources and the process-wide default (`rng`)
//! - Contiguous row-major multi-dimensional grids (`grid`)
//! - Mapping raw draws into target ranges, bias included (`mapping`)
//! - Single-pass fill with predicate-filtered reduction (`generator`)
//! - Checked offset navigation over contiguous memory (`cursor`)
//! - Exact and sampled modulo-bias analysis (`bias`)
//! - Square spin lattices driven through a temperature sweep (`ising`)
//! - Row-major text dumps of filled grids (`display`)
//!
//! ## Usage Example
//!
//! ```rust
//! use lattice_core::generator::fill_and_reduce;
//! use lattice_core::grid::NumericGrid;
//! use lattice_core::mapping::ModuloMapping;
//! use lattice_core::rng::LatticeRng;
//!
//! let mut grid = NumericGrid::<i64, 3>::cubic(10, 0).unwrap();
//! let mut rng = LatticeRng::from_seed(42);
//! let mapping = ModuloMapping::new(-5, 11).unwrap();
//!
//! let negatives = fill_and_reduce(&mut grid, &mut rng, &mapping, |v: &i64| *v < 0);
//! match negatives.average() {
//!     Some(avg) => assert!((-5.0..0.0).contains(&avg)),
//!     None => println!("no negative elements"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **Reproducibility**: every source is deterministic for a fixed seed, and a
//!   fill consumes exactly one draw per cell
//! - **Fail fast**: invalid extents, spans and intervals are rejected at
//!   construction; filling never fails
//! - **Static dispatch**: sources, mappings and predicates are generic

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bias;
pub mod cursor;
pub mod display;
mod error;
pub mod generator;
pub mod grid;
pub mod ising;
pub mod mapping;
pub mod rng;

pub use error::{LatticeError, Result};

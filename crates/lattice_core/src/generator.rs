//! Single-pass grid filling with a predicate-filtered reduction.
//!
//! [`BoundedArrayGenerator`] walks a [`NumericGrid`] in lexicographic order,
//! gives each cell one mapped draw and, in the same step, folds cells that
//! satisfy a predicate into a [`ReductionAccumulator`].
//!
//! # Guarantees
//!
//! - Every cell is visited exactly once, outermost axis slowest
//! - Exactly one draw is taken per cell, so a fixed seed reproduces the fill
//! - The predicate sees the post-mapping value
//! - No division happens here; the caller decides what an empty reduction
//!   means
//!
//! # Example
//!
//! ```rust
//! use lattice_core::generator::BoundedArrayGenerator;
//! use lattice_core::grid::NumericGrid;
//! use lattice_core::mapping::ModuloMapping;
//! use lattice_core::rng::LatticeRng;
//!
//! let mut grid = NumericGrid::<i64, 3>::cubic(2, 0).unwrap();
//! let mut rng = LatticeRng::from_seed(2024);
//! let mut generator =
//!     BoundedArrayGenerator::new(ModuloMapping::new(-5, 11).unwrap(), |v: &i64| *v < 0);
//!
//! let negatives = generator.fill_and_reduce(&mut grid, &mut rng);
//! assert!(negatives.count() <= grid.len());
//! ```

use std::ops::AddAssign;

use num_traits::ToPrimitive;
use tracing::debug;

use crate::grid::{unravel, NumericGrid};
use crate::mapping::RangeMapping;
use crate::rng::RandomSource;

/// Running `(count, sum)` over cells that satisfied a predicate.
///
/// Created fresh by each fill pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReductionAccumulator<T> {
    count: usize,
    sum: T,
}

impl<T: Copy + Default + AddAssign> ReductionAccumulator<T> {
    /// Empty accumulator: count 0, sum `T::default()`.
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: T::default(),
        }
    }

    /// Folds one qualifying value in.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.count += 1;
        self.sum += value;
    }
}

impl<T: Copy + Default + AddAssign> Default for ReductionAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> ReductionAccumulator<T> {
    /// Number of qualifying cells.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sum of qualifying values.
    #[inline]
    pub fn sum(&self) -> T {
        self.sum
    }

    /// `true` when no cell qualified.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl<T: Copy + ToPrimitive> ReductionAccumulator<T> {
    /// Mean of the qualifying values, or `None` when there were none.
    ///
    /// The `None` case must be reported by the caller, not divided through.
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        self.sum.to_f64().map(|sum| sum / self.count as f64)
    }
}

/// Fills grids from a random source through a mapping, reducing the cells a
/// predicate selects.
///
/// The generator owns the mapping and predicate; grid and source are
/// borrowed per call.
#[derive(Debug, Clone)]
pub struct BoundedArrayGenerator<M, P> {
    mapping: M,
    predicate: P,
}

impl<M, P> BoundedArrayGenerator<M, P>
where
    M: RangeMapping,
    M::Output: Copy + Default + AddAssign,
    P: FnMut(&M::Output) -> bool,
{
    /// Pairs a mapping with a predicate.
    pub fn new(mapping: M, predicate: P) -> Self {
        Self { mapping, predicate }
    }

    /// The mapping applied to each draw.
    pub fn mapping(&self) -> &M {
        &self.mapping
    }

    /// Fills every cell and returns the reduction over cells satisfying the
    /// predicate.
    pub fn fill_and_reduce<S, const D: usize>(
        &mut self,
        grid: &mut NumericGrid<M::Output, D>,
        source: &mut S,
    ) -> ReductionAccumulator<M::Output>
    where
        S: RandomSource + ?Sized,
    {
        self.fill_and_reduce_with(grid, source, |_, _| {})
    }

    /// Like [`fill_and_reduce`](Self::fill_and_reduce), calling `observer`
    /// with each cell's index and value right after the cell is written.
    ///
    /// Lets callers print or tag cells during the same traversal.
    pub fn fill_and_reduce_with<S, F, const D: usize>(
        &mut self,
        grid: &mut NumericGrid<M::Output, D>,
        source: &mut S,
        mut observer: F,
    ) -> ReductionAccumulator<M::Output>
    where
        S: RandomSource + ?Sized,
        F: FnMut(&[usize; D], &M::Output),
    {
        let extents = grid.extents();
        let max = source.max();
        let mut acc = ReductionAccumulator::new();

        for (offset, cell) in grid.as_mut_slice().iter_mut().enumerate() {
            let value = self.mapping.map(source.next_draw(), max);
            *cell = value;
            if (self.predicate)(&value) {
                acc.push(value);
            }
            observer(&unravel(offset, &extents), &value);
        }

        debug!(
            cells = grid.len(),
            qualifying = acc.count(),
            "grid filled"
        );
        acc
    }
}

/// One-shot form of [`BoundedArrayGenerator::fill_and_reduce`].
pub fn fill_and_reduce<T, S, M, P, const D: usize>(
    grid: &mut NumericGrid<T, D>,
    source: &mut S,
    mapping: &M,
    predicate: P,
) -> ReductionAccumulator<T>
where
    T: Copy + Default + AddAssign,
    S: RandomSource + ?Sized,
    M: RangeMapping<Output = T>,
    P: FnMut(&T) -> bool,
{
    BoundedArrayGenerator::new(mapping, predicate).fill_and_reduce(grid, source)
}

//! Square lattice of ±1 spins with periodic boundaries.

use crate::error::Result;
use crate::grid::NumericGrid;

/// Square spin configuration.
///
/// The spins live in a single row-major [`NumericGrid`], released when the
/// lattice is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinLattice {
    spins: NumericGrid<i8, 2>,
}

impl SpinLattice {
    /// Lattice of `linear_size x linear_size` spins, all up.
    ///
    /// # Errors
    ///
    /// [`LatticeError::InvalidDimensions`](crate::LatticeError::InvalidDimensions)
    /// if `linear_size` is zero.
    pub fn ordered(linear_size: usize) -> Result<Self> {
        Ok(Self {
            spins: NumericGrid::cubic(linear_size, 1)?,
        })
    }

    /// Spins along one side.
    #[inline]
    pub fn linear_size(&self) -> usize {
        self.spins.extents()[0]
    }

    /// Total number of spins.
    #[inline]
    pub fn spins_number(&self) -> usize {
        self.spins.len()
    }

    /// Sets every spin up.
    pub fn reset_ordered(&mut self) {
        self.spins.fill(1);
    }

    /// Spin at `(row, col)`.
    ///
    /// # Panics
    ///
    /// If the site is outside the lattice.
    #[inline]
    pub fn spin(&self, row: usize, col: usize) -> i8 {
        self.spins[[row, col]]
    }

    /// Reverses the spin at `(row, col)`.
    #[inline]
    pub fn flip(&mut self, row: usize, col: usize) {
        let spin = &mut self.spins[[row, col]];
        *spin = -*spin;
    }

    /// Sum of the four nearest neighbours, wrapping at the edges.
    pub fn neighbour_sum(&self, row: usize, col: usize) -> i32 {
        let n = self.linear_size();
        let up = (row + n - 1) % n;
        let down = (row + 1) % n;
        let left = (col + n - 1) % n;
        let right = (col + 1) % n;
        i32::from(self.spin(up, col))
            + i32::from(self.spin(down, col))
            + i32::from(self.spin(row, left))
            + i32::from(self.spin(row, right))
    }

    /// Mean spin, in `[-1, 1]`.
    pub fn magnetisation(&self) -> f64 {
        let total: i64 = self.spins.as_slice().iter().map(|&s| i64::from(s)).sum();
        total as f64 / self.spins_number() as f64
    }

    /// Nearest-neighbour energy with unit coupling, each bond counted once.
    pub fn energy(&self) -> f64 {
        let n = self.linear_size();
        let mut energy = 0i64;
        for row in 0..n {
            for col in 0..n {
                let s = i64::from(self.spin(row, col));
                let right = i64::from(self.spin(row, (col + 1) % n));
                let down = i64::from(self.spin((row + 1) % n, col));
                energy -= s * (right + down);
            }
        }
        energy as f64
    }

    /// Underlying spin grid.
    pub fn spins(&self) -> &NumericGrid<i8, 2> {
        &self.spins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LatticeError;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            SpinLattice::ordered(0),
            Err(LatticeError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_ordered_state() {
        let lattice = SpinLattice::ordered(4).unwrap();
        assert_eq!(lattice.linear_size(), 4);
        assert_eq!(lattice.spins_number(), 16);
        assert_relative_eq!(lattice.magnetisation(), 1.0);
        // Two bonds per spin.
        assert_relative_eq!(lattice.energy(), -32.0);
    }

    #[test]
    fn test_flip_and_reset() {
        let mut lattice = SpinLattice::ordered(4).unwrap();
        lattice.flip(0, 0);
        assert_eq!(lattice.spin(0, 0), -1);
        assert_relative_eq!(lattice.magnetisation(), 14.0 / 16.0);
        // One flipped spin breaks four bonds: +2 each.
        assert_relative_eq!(lattice.energy(), -24.0);

        lattice.reset_ordered();
        assert_relative_eq!(lattice.magnetisation(), 1.0);
    }

    #[test]
    fn test_neighbour_sum_wraps() {
        let mut lattice = SpinLattice::ordered(3).unwrap();
        assert_eq!(lattice.neighbour_sum(0, 0), 4);

        lattice.flip(2, 0); // above (0, 0) through the boundary
        lattice.flip(0, 2); // left of (0, 0) through the boundary
        assert_eq!(lattice.neighbour_sum(0, 0), 0);
    }

    #[test]
    fn test_single_site_lattice() {
        let lattice = SpinLattice::ordered(1).unwrap();
        assert_eq!(lattice.neighbour_sum(0, 0), 4);
        assert_relative_eq!(lattice.energy(), -2.0);
    }
}

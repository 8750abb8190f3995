//! Fixed-extent multi-dimensional grids over one contiguous buffer.
//!
//! A `NumericGrid<T, D>` stores `extents[0] * ... * extents[D-1]` cells in
//! row-major order: the last index varies fastest, so walking the buffer
//! front to back visits cells in lexicographic index order. This is the
//! layout of a static `int a[N][N][N]`, with the extents carried alongside
//! the data instead of being passed separately.

use std::ops::{Index, IndexMut};

use crate::error::{LatticeError, Result};

/// Rectangular D-dimensional grid with fixed extents.
///
/// Construction validates extents once; afterwards every index inside the
/// extents is addressable. [`get`](NumericGrid::get) reports out-of-range
/// indices with `None`, while `grid[idx]` panics, as a bounds violation is
/// the caller's error.
///
/// # Examples
///
/// ```rust
/// use lattice_core::grid::NumericGrid;
///
/// let mut grid = NumericGrid::<i64, 2>::new([2, 3], 0).unwrap();
/// grid[[1, 2]] = 7;
/// assert_eq!(grid.as_slice(), &[0, 0, 0, 0, 0, 7]);
/// assert_eq!(grid.get([2, 0]), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumericGrid<T, const D: usize> {
    extents: [usize; D],
    cells: Vec<T>,
}

impl<T: Clone, const D: usize> NumericGrid<T, D> {
    /// Allocates a grid with the given per-axis extents, every cell set to
    /// `fill`.
    ///
    /// # Errors
    ///
    /// [`LatticeError::InvalidDimensions`] when `D == 0`, any extent is zero
    /// or the total cell count overflows `usize`.
    pub fn new(extents: [usize; D], fill: T) -> Result<Self> {
        let len = checked_cell_count(&extents)?;
        Ok(Self {
            extents,
            cells: vec![fill; len],
        })
    }

    /// Allocates a cubic grid: every axis has length `n`.
    pub fn cubic(n: usize, fill: T) -> Result<Self> {
        Self::new([n; D], fill)
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T, const D: usize> NumericGrid<T, D> {
    /// Per-axis lengths.
    #[inline]
    pub fn extents(&self) -> [usize; D] {
        self.extents
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a valid grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major buffer offset of `index`, or `None` if any component is
    /// outside its extent.
    pub fn offset_of(&self, index: [usize; D]) -> Option<usize> {
        let mut offset = 0;
        for (axis, (&i, &extent)) in index.iter().zip(self.extents.iter()).enumerate() {
            if i >= extent {
                return None;
            }
            offset = if axis == 0 { i } else { offset * extent + i };
        }
        Some(offset)
    }

    /// Inverse of [`offset_of`](NumericGrid::offset_of).
    pub fn index_of(&self, offset: usize) -> Option<[usize; D]> {
        if offset >= self.cells.len() {
            return None;
        }
        Some(unravel(offset, &self.extents))
    }

    /// Shared access to a cell.
    #[inline]
    pub fn get(&self, index: [usize; D]) -> Option<&T> {
        self.offset_of(index).map(|offset| &self.cells[offset])
    }

    /// Exclusive access to a cell.
    #[inline]
    pub fn get_mut(&mut self, index: [usize; D]) -> Option<&mut T> {
        self.offset_of(index).map(move |offset| &mut self.cells[offset])
    }

    /// Cells in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Mutable cells in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Runs of cells along the last axis, in row-major order.
    ///
    /// For a 3D grid of extents `[a, b, c]` this yields `a * b` rows of `c`
    /// cells each; for a 1D grid, the single row is the whole grid.
    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        let row_len = self.extents.last().copied().unwrap_or(1);
        self.cells.chunks(row_len)
    }

    /// Cells paired with their index, in lexicographic order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = ([usize; D], &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(offset, cell)| (unravel(offset, &self.extents), cell))
    }
}

impl<T, const D: usize> Index<[usize; D]> for NumericGrid<T, D> {
    type Output = T;

    fn index(&self, index: [usize; D]) -> &T {
        match self.offset_of(index) {
            Some(offset) => &self.cells[offset],
            None => panic!(
                "index {:?} out of bounds for extents {:?}",
                index, self.extents
            ),
        }
    }
}

impl<T, const D: usize> IndexMut<[usize; D]> for NumericGrid<T, D> {
    fn index_mut(&mut self, index: [usize; D]) -> &mut T {
        match self.offset_of(index) {
            Some(offset) => &mut self.cells[offset],
            None => panic!(
                "index {:?} out of bounds for extents {:?}",
                index, self.extents
            ),
        }
    }
}

/// Product of the extents, rejecting rank 0, zero extents and overflow.
fn checked_cell_count(extents: &[usize]) -> Result<usize> {
    if extents.is_empty() {
        return Err(LatticeError::InvalidDimensions(
            "grid must have at least one axis".to_string(),
        ));
    }
    extents.iter().enumerate().try_fold(1usize, |len, (axis, &extent)| {
        if extent == 0 {
            return Err(LatticeError::InvalidDimensions(format!(
                "extent of axis {} is zero",
                axis
            )));
        }
        len.checked_mul(extent).ok_or_else(|| {
            LatticeError::InvalidDimensions(format!("cell count of {:?} overflows", extents))
        })
    })
}

/// Row-major offset to index, assuming `offset` is in range.
pub(crate) fn unravel<const D: usize>(mut offset: usize, extents: &[usize; D]) -> [usize; D] {
    let mut index = [0; D];
    for axis in (0..D).rev() {
        index[axis] = offset % extents[axis];
        offset /= extents[axis];
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_extent() {
        let err = NumericGrid::<i32, 3>::new([2, 0, 2], 0).unwrap_err();
        assert!(matches!(err, LatticeError::InvalidDimensions(_)));
        assert!(err.to_string().contains("axis 1"));
    }

    #[test]
    fn test_new_rejects_rank_zero() {
        let result = NumericGrid::<i32, 0>::new([], 0);
        assert!(matches!(result, Err(LatticeError::InvalidDimensions(_))));
    }

    #[test]
    fn test_new_rejects_overflow() {
        let result = NumericGrid::<u8, 2>::new([usize::MAX, 2], 0);
        assert!(matches!(result, Err(LatticeError::InvalidDimensions(_))));
    }

    #[test]
    fn test_cubic_extents() {
        let grid = NumericGrid::<f64, 3>::cubic(10, 0.0).unwrap();
        assert_eq!(grid.extents(), [10, 10, 10]);
        assert_eq!(grid.len(), 1000);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_row_major_offsets() {
        let grid = NumericGrid::<i32, 3>::new([2, 3, 4], 0).unwrap();
        assert_eq!(grid.offset_of([0, 0, 0]), Some(0));
        assert_eq!(grid.offset_of([0, 0, 3]), Some(3));
        assert_eq!(grid.offset_of([0, 1, 0]), Some(4));
        assert_eq!(grid.offset_of([1, 0, 0]), Some(12));
        assert_eq!(grid.offset_of([1, 2, 3]), Some(23));
        assert_eq!(grid.offset_of([2, 0, 0]), None);
        assert_eq!(grid.offset_of([0, 3, 0]), None);
    }

    #[test]
    fn test_index_of_inverts_offset_of() {
        let grid = NumericGrid::<i32, 3>::new([2, 3, 4], 0).unwrap();
        for offset in 0..grid.len() {
            let index = grid.index_of(offset).unwrap();
            assert_eq!(grid.offset_of(index), Some(offset));
        }
        assert_eq!(grid.index_of(24), None);
    }

    #[test]
    fn test_get_and_index() {
        let mut grid = NumericGrid::<i32, 2>::new([3, 3], 0).unwrap();
        grid[[1, 1]] = 5;
        *grid.get_mut([2, 0]).unwrap() = -1;

        assert_eq!(grid.get([1, 1]), Some(&5));
        assert_eq!(grid[[2, 0]], -1);
        assert_eq!(grid.get([3, 0]), None);
        assert!(grid.get_mut([0, 3]).is_none());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let grid = NumericGrid::<i32, 2>::new([2, 2], 0).unwrap();
        let _ = grid[[0, 2]];
    }

    #[test]
    fn test_rows_follow_last_axis() {
        let mut grid = NumericGrid::<usize, 3>::new([2, 2, 3], 0).unwrap();
        for (offset, cell) in grid.as_mut_slice().iter_mut().enumerate() {
            *cell = offset;
        }

        let rows: Vec<&[usize]> = grid.rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], &[0, 1, 2]);
        assert_eq!(rows[3], &[9, 10, 11]);
    }

    #[test]
    fn test_iter_indexed_is_lexicographic() {
        let grid = NumericGrid::<u8, 2>::new([2, 2], 1).unwrap();
        let indices: Vec<[usize; 2]> = grid.iter_indexed().map(|(idx, _)| idx).collect();
        assert_eq!(indices, vec![[0, 0], [0, 1], [1, 0], [1, 1]]);
    }

    #[test]
    fn test_fill_resets_cells() {
        let mut grid = NumericGrid::<i8, 2>::cubic(4, -1).unwrap();
        grid.fill(1);
        assert!(grid.as_slice().iter().all(|&s| s == 1));
    }
}

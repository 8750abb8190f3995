//! Row-major text dumps of grids.
//!
//! One line per row (last axis), cells separated by single spaces. For grids
//! of rank three or more a separator line follows every 2D slab.

use std::fmt::Display;
use std::io::{self, Write};

use crate::grid::NumericGrid;

/// Printed after each 2D slab of a grid with rank >= 3.
pub const SLAB_SEPARATOR: &str = "----------------";

/// Writes `grid` to `out` as rows of space-separated values.
///
/// # Examples
///
/// ```rust
/// use lattice_core::display::write_grid;
/// use lattice_core::grid::NumericGrid;
///
/// let mut grid = NumericGrid::<i32, 2>::new([2, 2], 0).unwrap();
/// grid[[1, 0]] = -3;
///
/// let mut out = Vec::new();
/// write_grid(&mut out, &grid).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "0 0\n-3 0\n");
/// ```
pub fn write_grid<W, T, const D: usize>(out: &mut W, grid: &NumericGrid<T, D>) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Display,
{
    let extents = grid.extents();
    let rows_per_slab = match D.checked_sub(2) {
        Some(axis) if D >= 3 => Some(extents[axis]),
        _ => None,
    };

    for (row_index, row) in grid.rows().enumerate() {
        write_row(out, row)?;
        if let Some(rows) = rows_per_slab {
            if (row_index + 1) % rows == 0 {
                writeln!(out, "{}", SLAB_SEPARATOR)?;
            }
        }
    }
    Ok(())
}

/// Writes one row of values, space-separated, followed by a newline.
pub fn write_row<W, T>(out: &mut W, row: &[T]) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Display,
{
    for (i, value) in row.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        write!(out, "{}", value)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_dimensional_is_single_row() {
        let grid = NumericGrid::<u8, 1>::new([4], 7).unwrap();
        let mut out = Vec::new();
        write_grid(&mut out, &grid).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "7 7 7 7\n");
    }

    #[test]
    fn test_three_dimensional_slabs() {
        let mut grid = NumericGrid::<usize, 3>::new([2, 2, 2], 0).unwrap();
        for (offset, cell) in grid.as_mut_slice().iter_mut().enumerate() {
            *cell = offset;
        }

        let mut out = Vec::new();
        write_grid(&mut out, &grid).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = format!("0 1\n2 3\n{0}\n4 5\n6 7\n{0}\n", SLAB_SEPARATOR);
        assert_eq!(text, expected);
    }
}

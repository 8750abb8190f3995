//! Arrays command implementation
//!
//! Fills a one-dimensional array with unit-interval values, then a cubic
//! grid with integers in [-5, 5], printing each cell as it is written and
//! averaging the negative ones.

use std::io::{self, Write};

use lattice_core::display::{write_row, SLAB_SEPARATOR};
use lattice_core::generator::BoundedArrayGenerator;
use lattice_core::grid::NumericGrid;
use lattice_core::mapping::{ModuloMapping, UnitIntervalMapping};
use lattice_core::rng::LatticeRng;
use tracing::info;

use crate::config::{LatticeConfig, MAX_GRID_SIZE};
use crate::{CliError, Result};

/// Length of the unit-interval array.
pub const UNIT_ARRAY_LEN: usize = 20;

/// Run the arrays command
pub fn run<W: Write + ?Sized>(config: &LatticeConfig, size: usize, out: &mut W) -> Result<()> {
    validate_size(size)?;
    let seed = config.seed_or_time();
    info!(seed, size, "filling arrays");
    let mut rng = LatticeRng::from_seed(seed);

    write_unit_array(&mut rng, out)?;
    writeln!(out)?;
    write_cubic_grid(&mut rng, size, out)?;
    writeln!(out)?;
    write_int_arrays(out)?;
    Ok(())
}

fn validate_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(CliError::InvalidArgument(
            "grid size must be greater than 0".to_string(),
        ));
    }
    if size > MAX_GRID_SIZE {
        return Err(CliError::InvalidArgument(format!(
            "grid size {} exceeds maximum allowed ({})",
            size, MAX_GRID_SIZE
        )));
    }
    Ok(())
}

fn write_unit_array<W: Write + ?Sized>(rng: &mut LatticeRng, out: &mut W) -> Result<()> {
    let mut array = NumericGrid::<f64, 1>::new([UNIT_ARRAY_LEN], 0.0)?;
    let mut generator = BoundedArrayGenerator::new(UnitIntervalMapping, |_: &f64| true);

    let mut written = Ok(());
    let acc = generator.fill_and_reduce_with(&mut array, rng, |[i], value| {
        if written.is_ok() {
            written = writeln!(out, "The element {} is equal to {}", i + 1, value);
        }
    });
    written?;

    writeln!(out, "The sum of the elements is {}", acc.sum())?;
    Ok(())
}

fn write_cubic_grid<W: Write + ?Sized>(
    rng: &mut LatticeRng,
    size: usize,
    out: &mut W,
) -> Result<()> {
    let mut grid = NumericGrid::<i64, 3>::cubic(size, 0)?;
    let mapping = ModuloMapping::new(-5, 11)?;
    let mut generator = BoundedArrayGenerator::new(mapping, |v: &i64| *v < 0);

    let mut written = Ok(());
    let acc = generator.fill_and_reduce_with(&mut grid, rng, |index, value| {
        if written.is_ok() {
            written = write_cell(&mut *out, index, *value, size);
        }
    });
    written?;

    match acc.average() {
        Some(average) => writeln!(
            out,
            "The average of the {} negative elements is {}",
            acc.count(),
            average
        )?,
        None => writeln!(out, "There are no negative elements")?,
    }
    Ok(())
}

/// Writes one cell, ending the line after the last column and adding the
/// slab separator after the last row of each slab.
fn write_cell<W: Write + ?Sized>(
    out: &mut W,
    [_, row, col]: &[usize; 3],
    value: i64,
    size: usize,
) -> io::Result<()> {
    let last = size - 1;
    if *col == last {
        writeln!(out, "{}", value)?;
        if *row == last {
            writeln!(out, "{}", SLAB_SEPARATOR)?;
        }
        Ok(())
    } else {
        write!(out, "{} ", value)
    }
}

fn write_int_arrays<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let short = [3, 5, 1, -23];
    writeln!(out, "Printing array of {} elements:", short.len())?;
    write_row(out, &short)?;

    // Trailing cells default to zero.
    let mut padded = [0; 8];
    padded[..2].copy_from_slice(&[1, -7]);
    writeln!(out, "Printing array of {} elements:", padded.len())?;
    write_row(out, &padded)?;
    Ok(())
}

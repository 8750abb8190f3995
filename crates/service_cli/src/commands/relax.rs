//! Relax command implementation
//!
//! Runs the configured temperature sweep on an `n x n` spin lattice and
//! prints the relaxation time measured at each temperature.

use std::io::{BufRead, Write};

use lattice_core::display::write_grid;
use lattice_core::ising::{run_sweep, MetropolisModel, SpinLattice};
use lattice_core::rng::LatticeRng;
use tracing::info;

use crate::config::{LatticeConfig, MAX_LATTICE_SIZE};
use crate::{CliError, Result};

/// Run the relax command
///
/// When `size` is `None` the linear size is read from `input` after a
/// prompt on `out`.
pub fn run<R, W>(
    config: &LatticeConfig,
    size: Option<usize>,
    show_lattice: bool,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let size = match size {
        Some(size) => size,
        None => prompt_size(input, out)?,
    };
    validate_size(size)?;

    let sweep = config.temperature_sweep()?;
    let seed = config.seed_or_time();
    let mut lattice = SpinLattice::ordered(size)?;
    let mut model = MetropolisModel::new(LatticeRng::from_seed(seed), config.metropolis()?);

    info!(size, seed, "starting relaxation sweep");
    for point in run_sweep(&mut lattice, &mut model, &sweep) {
        writeln!(
            out,
            "For temperature {:.2} the relaxation time is: {}",
            point.temperature, point.relaxation_time
        )?;
    }

    if show_lattice {
        writeln!(out, "Final lattice:")?;
        write_grid(out, lattice.spins())?;
    }
    Ok(())
}

fn prompt_size<R, W>(input: &mut R, out: &mut W) -> Result<usize>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "Enter linear size of system: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::InvalidArgument(
            "no linear size given on stdin".to_string(),
        ));
    }
    let line = line.trim();
    line.parse().map_err(|_| {
        CliError::InvalidArgument(format!("linear size '{}' is not a non-negative integer", line))
    })
}

fn validate_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(CliError::InvalidArgument(
            "linear size must be greater than 0".to_string(),
        ));
    }
    if size > MAX_LATTICE_SIZE {
        return Err(CliError::InvalidArgument(format!(
            "linear size {} exceeds maximum allowed ({})",
            size, MAX_LATTICE_SIZE
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn seeded_config() -> LatticeConfig {
        let mut config = LatticeConfig::default();
        config.seed = Some(99);
        config.relaxation.max_sweeps = 200;
        config
    }

    fn run_with_input(size: Option<usize>, input: &str) -> Result<String> {
        let mut out = Vec::new();
        run(
            &seeded_config(),
            size,
            false,
            &mut Cursor::new(input.as_bytes()),
            &mut out,
        )?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_one_line_per_temperature() {
        let output = run_with_input(Some(4), "").unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("For temperature 3.50 the relaxation time is: "));
        assert!(lines[6].starts_with("For temperature 2.30 the relaxation time is: "));
    }

    #[test]
    fn test_size_from_input_is_reproducible() {
        let first = run_with_input(None, "4\n").unwrap();
        let second = run_with_input(Some(4), "").unwrap();
        let first = first.strip_prefix("Enter linear size of system: ").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_sizes() {
        for input in ["0\n", "-3\n", "ten\n", ""] {
            assert!(
                matches!(run_with_input(None, input), Err(CliError::InvalidArgument(_))),
                "input {:?} should be rejected",
                input
            );
        }
        assert!(matches!(
            run_with_input(Some(MAX_LATTICE_SIZE + 1), ""),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_show_lattice() {
        let mut out = Vec::new();
        run(
            &seeded_config(),
            Some(3),
            true,
            &mut Cursor::new(Vec::new()),
            &mut out,
        )
        .unwrap();
        let output = String::from_utf8(out).unwrap();
        let grid: Vec<&str> = output
            .lines()
            .skip_while(|l| *l != "Final lattice:")
            .skip(1)
            .collect();
        assert_eq!(grid.len(), 3);
        for row in grid {
            assert!(row.split(' ').all(|s| s == "1" || s == "-1"));
        }
    }
}

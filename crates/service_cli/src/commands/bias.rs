//! Bias command implementation
//!
//! Reducing draws in `0..=max` modulo `span` favours the low residues when
//! `span` does not divide `max + 1`. The command prints the exact preimage
//! table beside a sampled histogram.

use std::io::Write;

use lattice_core::bias::{histogram, preimage_counts, BiasReport};
use lattice_core::mapping::ModuloMapping;
use lattice_core::rng::LatticeRng;
use tracing::info;

use crate::{CliError, Result};

/// Largest span the table is printed for.
pub const MAX_SPAN: u64 = 1 << 16;

/// Run the bias command
pub fn run<W: Write + ?Sized>(
    span: u64,
    max: u64,
    samples: u64,
    seed: u64,
    out: &mut W,
) -> Result<()> {
    if span > MAX_SPAN {
        return Err(CliError::InvalidArgument(format!(
            "span {} exceeds maximum allowed ({})",
            span, MAX_SPAN
        )));
    }
    let mapping = ModuloMapping::new(0, span)?;
    let cardinality = u128::from(max) + 1;

    info!(span, max, samples, seed, "sampling modulo bias");
    let exact = preimage_counts(cardinality, span);
    let mut rng = LatticeRng::with_max(seed, max);
    let sampled = histogram(&mut rng, &mapping, samples);

    writeln!(
        out,
        "Draws in [0, {}] reduced modulo {} ({} samples, seed {})",
        max, span, samples, seed
    )?;
    writeln!(out, "residue  preimages  exact share  sampled share")?;
    for (residue, (&preimages, &count)) in exact.iter().zip(&sampled).enumerate() {
        let exact_share = preimages as f64 / cardinality as f64;
        let sampled_share = if samples == 0 {
            0.0
        } else {
            count as f64 / samples as f64
        };
        writeln!(
            out,
            "{:>7}  {:>9}  {:>11.4}  {:>13.4}",
            residue, preimages, exact_share, sampled_share
        )?;
    }

    if let Some(report) = BiasReport::from_counts(&exact) {
        if report.is_uniform() {
            writeln!(out, "{} divides {}: no bias", span, cardinality)?;
        } else {
            writeln!(
                out,
                "Residue {} is favoured over residue {} by {:.1}%",
                report.most_frequent,
                report.least_frequent,
                report.relative_spread * 100.0
            )?;
        }
    }
    if let Some(report) = BiasReport::from_counts(&sampled) {
        writeln!(
            out,
            "Sampled spread between residues {} and {}: {:.1}%",
            report.most_frequent,
            report.least_frequent,
            report.relative_spread * 100.0
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(span: u64, max: u64, samples: u64) -> String {
        let mut out = Vec::new();
        run(span, max, samples, 2024, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_biased_table() {
        // 11 draws modulo 5: residue 0 has three preimages, the others two.
        let output = run_to_string(5, 10, 10_000);
        assert_eq!(output.lines().filter(|l| l.ends_with("%")).count(), 2);
        assert!(output.contains("Residue 0 is favoured over residue 1 by 50.0%"));
    }

    #[test]
    fn test_uniform_table() {
        let output = run_to_string(4, 15, 1_000);
        assert!(output.contains("4 divides 16: no bias"));
    }

    #[test]
    fn test_invalid_spans() {
        let mut out = Vec::new();
        assert!(matches!(
            run(0, 10, 10, 1, &mut out),
            Err(CliError::Lattice(_))
        ));
        assert!(matches!(
            run(MAX_SPAN + 1, 10, 10, 1, &mut out),
            Err(CliError::InvalidArgument(_))
        ));
    }
}

//! Modulo-bias analysis.
//!
//! Reducing `cardinality` equally likely draws modulo `span` gives each
//! residue either `cardinality / span` or `cardinality / span + 1`
//! preimages. The first `cardinality % span` residues get the extra one.
//! This module computes that table exactly and compares it with a sampled
//! histogram.

use num_traits::ToPrimitive;

use crate::mapping::{ModuloMapping, RangeMapping};
use crate::rng::RandomSource;

/// Exact number of draws in `[0, cardinality)` landing on each residue
/// `0..span`.
///
/// # Panics
///
/// If `span` is zero.
///
/// # Examples
///
/// ```rust
/// use lattice_core::bias::preimage_counts;
///
/// // Draws 0..=10 reduced mod 5: 0 1 2 3 4 0 1 2 3 4 0
/// assert_eq!(preimage_counts(11, 5), vec![3, 2, 2, 2, 2]);
/// ```
pub fn preimage_counts(cardinality: u128, span: u64) -> Vec<u128> {
    assert!(span > 0, "span must be at least 1");
    let span_wide = u128::from(span);
    let base = cardinality / span_wide;
    let surplus = cardinality % span_wide;
    (0..span_wide)
        .map(|residue| base + u128::from(residue < surplus))
        .collect()
}

/// Tallies `samples` mapped draws by offset from `mapping.low()`.
///
/// Takes exactly `samples` draws from `source`.
pub fn histogram<S>(source: &mut S, mapping: &ModuloMapping, samples: u64) -> Vec<u64>
where
    S: RandomSource + ?Sized,
{
    let max = source.max();
    let mut counts = vec![0u64; mapping.span() as usize];
    for _ in 0..samples {
        let value = mapping.map(source.next_draw(), max);
        counts[(i128::from(value) - i128::from(mapping.low())) as usize] += 1;
    }
    counts
}

/// Summary of how uneven a set of residue counts is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasReport {
    /// Residue with the highest count (lowest residue on ties).
    pub most_frequent: usize,
    /// Residue with the lowest count (lowest residue on ties).
    pub least_frequent: usize,
    /// `(max_count - min_count) / min_count`; infinite if some residue never
    /// occurred.
    pub relative_spread: f64,
}

impl BiasReport {
    /// Builds a report from per-residue counts. Returns `None` for an empty
    /// slice.
    ///
    /// ```rust
    /// use lattice_core::bias::BiasReport;
    ///
    /// let report = BiasReport::from_counts(&[3, 2, 2, 2, 2]).unwrap();
    /// assert_eq!(report.most_frequent, 0);
    /// assert_eq!(report.least_frequent, 1);
    /// assert_eq!(report.relative_spread, 0.5);
    /// ```
    pub fn from_counts<C: ToPrimitive>(counts: &[C]) -> Option<Self> {
        let values: Vec<f64> = counts
            .iter()
            .map(|c| c.to_f64().unwrap_or(f64::NAN))
            .collect();
        let (mut most, mut least) = (0usize, 0usize);
        for (residue, &count) in values.iter().enumerate().skip(1) {
            if count > values[most] {
                most = residue;
            }
            if count < values[least] {
                least = residue;
            }
        }
        let max = *values.get(most)?;
        let min = values[least];
        let relative_spread = if min == 0.0 {
            if max == 0.0 {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            (max - min) / min
        };
        Some(Self {
            most_frequent: most,
            least_frequent: least,
            relative_spread,
        })
    }

    /// `true` when every residue has the same count.
    pub fn is_uniform(&self) -> bool {
        self.relative_spread == 0.0
    }
}

//! Mapping raw draws into target ranges.
//!
//! A [`RangeMapping`] is a pure function of a draw and the source's maximum.
//! It holds no state, so the same mapping can be reused across passes and
//! sources.
//!
//! Two techniques are covered:
//!
//! - **Modulo reduction** ([`ModuloMapping`]): `low + draw % span`. Simple,
//!   but when `span` does not divide the number of possible draws the low end
//!   of the range is favoured. The bias is kept on purpose.
//! - **Unit-interval scaling** ([`UnitIntervalMapping`], [`IntervalMapping`],
//!   [`ScaledIntMapping`]): divide by `max` first, then stretch to `[a, b]`.
//!   Preferable for numerical work.

use crate::error::{LatticeError, Result};

/// Maps one raw draw in `[0, max]` to an output value.
///
/// Implementations must be total over `[0, max]`.
pub trait RangeMapping {
    /// Produced value type.
    type Output;

    /// Maps `draw`, taken from a source whose largest value is `max`.
    fn map(&self, draw: u64, max: u64) -> Self::Output;
}

impl<M: RangeMapping + ?Sized> RangeMapping for &M {
    type Output = M::Output;

    #[inline]
    fn map(&self, draw: u64, max: u64) -> M::Output {
        (**self).map(draw, max)
    }
}

/// Integer range `[low, low + span)` by `low + (draw mod span)`.
///
/// # Bias
///
/// If `span` does not evenly divide `max + 1`, residues below
/// `(max + 1) % span` have one extra preimage each and are strictly more
/// likely. Drawing from `[0, 10]` with span 5 gives residue 0 three chances
/// in eleven and residue 4 only two.
///
/// # Examples
///
/// ```rust
/// use lattice_core::mapping::{ModuloMapping, RangeMapping};
///
/// let mapping = ModuloMapping::new(-5, 11).unwrap();
/// assert_eq!(mapping.map(0, 32767), -5);
/// assert_eq!(mapping.map(10, 32767), 5);
/// assert_eq!(mapping.map(11, 32767), -5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuloMapping {
    low: i64,
    span: u64,
}

impl ModuloMapping {
    /// Builds the mapping onto `[low, low + span)`.
    ///
    /// # Errors
    ///
    /// [`LatticeError::InvalidSpan`] if `span` is zero,
    /// [`LatticeError::InvalidInterval`] if `low + span - 1` exceeds
    /// `i64::MAX`.
    pub fn new(low: i64, span: u64) -> Result<Self> {
        if span == 0 {
            return Err(LatticeError::InvalidSpan(span));
        }
        if i128::from(low) + i128::from(span) - 1 > i128::from(i64::MAX) {
            return Err(LatticeError::InvalidInterval(format!(
                "[{}, {} + {}) does not fit in i64",
                low, low, span
            )));
        }
        Ok(Self { low, span })
    }

    /// Smallest producible value.
    #[inline]
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Number of distinct producible values.
    #[inline]
    pub fn span(&self) -> u64 {
        self.span
    }

    /// Largest producible value, `low + span - 1`.
    #[inline]
    pub fn high(&self) -> i64 {
        (i128::from(self.low) + i128::from(self.span) - 1) as i64
    }
}

impl RangeMapping for ModuloMapping {
    type Output = i64;

    #[inline]
    fn map(&self, draw: u64, _max: u64) -> i64 {
        (i128::from(self.low) + i128::from(draw % self.span)) as i64
    }
}

/// Real value `draw / max` in the closed interval `[0, 1]`.
///
/// Reaches 1 only when `draw == max`. A source with `max == 0` maps to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitIntervalMapping;

impl RangeMapping for UnitIntervalMapping {
    type Output = f64;

    #[inline]
    fn map(&self, draw: u64, max: u64) -> f64 {
        unit(draw, max)
    }
}

/// Real value `a + (b - a) * (draw / max)` in `[a, b]`.
///
/// # Examples
///
/// ```rust
/// use lattice_core::mapping::{IntervalMapping, RangeMapping};
///
/// let mapping = IntervalMapping::new(-1.0, 3.0).unwrap();
/// assert_eq!(mapping.map(0, 4), -1.0);
/// assert_eq!(mapping.map(2, 4), 1.0);
/// assert_eq!(mapping.map(4, 4), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalMapping {
    a: f64,
    b: f64,
}

impl IntervalMapping {
    /// Builds the mapping onto `[a, b]`.
    ///
    /// # Errors
    ///
    /// [`LatticeError::InvalidInterval`] if either bound is not finite,
    /// `a > b`, or the width `b - a` overflows.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(LatticeError::InvalidInterval(format!(
                "bounds [{}, {}] must be finite",
                a, b
            )));
        }
        if a > b {
            return Err(LatticeError::InvalidInterval(format!(
                "lower bound {} exceeds upper bound {}",
                a, b
            )));
        }
        if !(b - a).is_finite() {
            return Err(LatticeError::InvalidInterval(format!(
                "width of [{}, {}] is not representable",
                a, b
            )));
        }
        Ok(Self { a, b })
    }

    /// Interval bounds `(a, b)`.
    pub fn bounds(&self) -> (f64, f64) {
        (self.a, self.b)
    }
}

impl RangeMapping for IntervalMapping {
    type Output = f64;

    #[inline]
    fn map(&self, draw: u64, max: u64) -> f64 {
        // Clamp guards the rounding of a + (b - a) * 1.0 past b.
        (self.a + (self.b - self.a) * unit(draw, max)).min(self.b)
    }
}

/// Integer range `[low, high]` reached by scaling rather than by remainder.
///
/// Computes `low + floor(k * draw / (max + 1))` with `k = high - low + 1` in
/// unsigned 128-bit arithmetic, where `k <= 2^64` and `draw < 2^64` keep the
/// product in range. Each value's preimage count differs from any other's
/// by at most one, and the values with the extra preimage are spread across
/// the range instead of clustered at `low`.
///
/// # Examples
///
/// ```rust
/// use lattice_core::mapping::{RangeMapping, ScaledIntMapping};
///
/// let mapping = ScaledIntMapping::new(0, 4).unwrap();
/// let mapped: Vec<i64> = (0..=10).map(|d| mapping.map(d, 10)).collect();
/// assert_eq!(mapped, vec![0, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledIntMapping {
    low: i64,
    high: i64,
}

impl ScaledIntMapping {
    /// Builds the mapping onto `[low, high]`.
    ///
    /// # Errors
    ///
    /// [`LatticeError::InvalidInterval`] if `low > high`.
    pub fn new(low: i64, high: i64) -> Result<Self> {
        if low > high {
            return Err(LatticeError::InvalidInterval(format!(
                "lower bound {} exceeds upper bound {}",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    /// Interval bounds `(low, high)`.
    pub fn bounds(&self) -> (i64, i64) {
        (self.low, self.high)
    }
}

impl RangeMapping for ScaledIntMapping {
    type Output = i64;

    #[inline]
    fn map(&self, draw: u64, max: u64) -> i64 {
        let width = (i128::from(self.high) - i128::from(self.low) + 1) as u128;
        let cardinality = u128::from(max) + 1;
        let step = width * u128::from(draw) / cardinality;
        (i128::from(self.low) + step as i128) as i64
    }
}

#[inline]
fn unit(draw: u64, max: u64) -> f64 {
    if max == 0 {
        0.0
    } else {
        draw as f64 / max as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_modulo_rejects_zero_span() {
        assert_eq!(ModuloMapping::new(3, 0), Err(LatticeError::InvalidSpan(0)));
    }

    #[test]
    fn test_modulo_bounds() {
        let mapping = ModuloMapping::new(-5, 11).unwrap();
        assert_eq!(mapping.low(), -5);
        assert_eq!(mapping.high(), 5);
        assert_eq!(mapping.span(), 11);
    }

    /// The eleven-draw table: 0..=10 reduced mod 5.
    #[test]
    fn test_modulo_wraps_residues() {
        let mapping = ModuloMapping::new(0, 5).unwrap();
        let mapped: Vec<i64> = (0..=10).map(|d| mapping.map(d, 10)).collect();
        assert_eq!(mapped, vec![0, 1, 2, 3, 4, 0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_modulo_rejects_range_past_i64_max() {
        assert!(matches!(
            ModuloMapping::new(i64::MAX, 2),
            Err(LatticeError::InvalidInterval(_))
        ));
        assert!(ModuloMapping::new(i64::MIN, u64::MAX).is_ok());

        let top = ModuloMapping::new(i64::MAX, 1).unwrap();
        assert_eq!(top.high(), i64::MAX);
        assert_eq!(top.map(u64::MAX, u64::MAX), i64::MAX);

        let near_top = ModuloMapping::new(i64::MAX - 9, 10).unwrap();
        assert_eq!(near_top.high(), i64::MAX);
        for draw in [0, 9, 10, u64::MAX] {
            assert!(near_top.map(draw, u64::MAX) >= near_top.low());
        }
    }

    #[test]
    fn test_modulo_full_range_draw() {
        let mapping = ModuloMapping::new(i64::MIN, u64::MAX).unwrap();
        assert_eq!(mapping.map(u64::MAX - 1, u64::MAX), i64::MAX - 1);
    }

    #[test]
    fn test_unit_interval_endpoints() {
        let mapping = UnitIntervalMapping;
        assert_eq!(mapping.map(0, 32767), 0.0);
        assert_eq!(mapping.map(32767, 32767), 1.0);
        assert_relative_eq!(mapping.map(16383, 32766), 0.5, epsilon = 1e-12);
        assert_eq!(mapping.map(0, 0), 0.0);
    }

    #[test]
    fn test_interval_rejects_bad_bounds() {
        assert!(matches!(
            IntervalMapping::new(2.0, 1.0),
            Err(LatticeError::InvalidInterval(_))
        ));
        assert!(matches!(
            IntervalMapping::new(f64::NAN, 1.0),
            Err(LatticeError::InvalidInterval(_))
        ));
        assert!(IntervalMapping::new(1.0, 1.0).is_ok());
    }

    #[test]
    fn test_interval_rejects_overflowing_width() {
        assert!(matches!(
            IntervalMapping::new(-1e308, 1e308),
            Err(LatticeError::InvalidInterval(_))
        ));
        let wide = IntervalMapping::new(-8e307, 8e307).unwrap();
        assert_eq!(wide.map(0, u64::MAX), -8e307);
        assert_eq!(wide.map(u64::MAX, u64::MAX), 8e307);
    }

    #[test]
    fn test_scaled_int_rejects_reversed() {
        assert!(ScaledIntMapping::new(5, -5).is_err());
    }

    #[test]
    fn test_scaled_int_spreads_surplus() {
        // 11 draws onto 5 values: counts differ by at most one.
        let mapping = ScaledIntMapping::new(0, 4).unwrap();
        let mut counts = [0u32; 5];
        for draw in 0..=10 {
            counts[mapping.map(draw, 10) as usize] += 1;
        }
        let most = *counts.iter().max().unwrap();
        let least = *counts.iter().min().unwrap();
        assert!(most - least <= 1);
    }

    #[test]
    fn test_scaled_int_widest_range() {
        let mapping = ScaledIntMapping::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(mapping.map(0, u64::MAX), i64::MIN);
        assert_eq!(mapping.map(u64::MAX, u64::MAX), i64::MAX);
        assert_eq!(mapping.map(1 << 63, u64::MAX), 0);
    }

    #[test]
    fn test_scaled_int_full_range() {
        let mapping = ScaledIntMapping::new(-5, 5).unwrap();
        assert_eq!(mapping.map(0, u64::MAX), -5);
        assert_eq!(mapping.map(u64::MAX, u64::MAX), 5);
    }

    proptest! {
        #[test]
        fn prop_modulo_in_range(low in -1000i64..1000, span in 1u64..500, draw in any::<u64>()) {
            let mapping = ModuloMapping::new(low, span).unwrap();
            let value = mapping.map(draw, u64::MAX);
            prop_assert!(value >= low && value < low + span as i64);
        }

        #[test]
        fn prop_unit_in_closed_interval(max in 1u64.., frac in 0.0f64..=1.0) {
            let draw = ((max as f64) * frac) as u64;
            let value = UnitIntervalMapping.map(draw.min(max), max);
            prop_assert!((0.0..=1.0).contains(&value));
        }

        #[test]
        fn prop_interval_in_range(a in -1e6f64..1e6, width in 0.0f64..1e6, draw in any::<u64>()) {
            let mapping = IntervalMapping::new(a, a + width).unwrap();
            let value = mapping.map(draw, u64::MAX);
            prop_assert!(value >= a && value <= a + width);
        }

        #[test]
        fn prop_scaled_int_in_range(low in -1000i64..1000, width in 0i64..1000, max in 0u64..100_000, draw in any::<u64>()) {
            let mapping = ScaledIntMapping::new(low, low + width).unwrap();
            let value = mapping.map(draw % (max + 1), max);
            prop_assert!(value >= low && value <= low + width);
        }
    }
}

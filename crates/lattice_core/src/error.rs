//! Error types for grid construction and random-source management.
//!
//! Only construction-time misconfiguration is reported here. Filling a grid
//! never fails once the grid, source and mapping exist.

use thiserror::Error;

/// Errors raised while building grids, mappings, cursors and sweeps.
///
/// # Examples
/// ```
/// use lattice_core::LatticeError;
///
/// let err = LatticeError::InvalidDimensions("extent 1 is zero".to_string());
/// assert_eq!(err.to_string(), "Invalid dimensions: extent 1 is zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatticeError {
    /// Zero-rank grid, zero extent or a cell count that overflows `usize`.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Modulo span of zero.
    #[error("Invalid span {0}: must be at least 1")]
    InvalidSpan(u64),

    /// Interval bounds that are reversed or not finite.
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// Temperature sweep that would never terminate or has bad bounds.
    #[error("Invalid temperature sweep: {0}")]
    InvalidSweep(String),

    /// Parameter outside its valid range.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Cursor moved outside the underlying buffer.
    #[error("Offset {offset} from position {position} leaves buffer of length {len}")]
    OffsetOutOfBounds {
        /// Position before the move.
        position: usize,
        /// Requested relative offset.
        offset: isize,
        /// Length of the buffer.
        len: usize,
    },

    /// The process-wide default source was seeded twice.
    #[error("Default random source already seeded with {0}")]
    DefaultSourceAlreadySeeded(u64),

    /// The process-wide default source was used before seeding.
    #[error("Default random source used before init_default")]
    DefaultSourceUnseeded,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LatticeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LatticeError::InvalidSpan(0);
        assert!(err.to_string().contains("Invalid span 0"));

        let err = LatticeError::OffsetOutOfBounds {
            position: 4,
            offset: 2,
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "Offset 2 from position 4 leaves buffer of length 5"
        );

        let err = LatticeError::DefaultSourceAlreadySeeded(123);
        assert!(err.to_string().contains("123"));
    }
}

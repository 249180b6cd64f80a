//! This module defines the error types used by the `lattice-grid` crate.

#![warn(missing_docs)]

use thiserror::Error;

/// Error type for point operations.
///
/// Dimensionality mistakes between two [`Point`](crate::Point) values are
/// rejected by the compiler; this enum covers the cases that can only be
/// detected at runtime, such as slices of the wrong length or a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PointError {
    /// Error for mismatched dimensionality.
    /// This variant is returned when runtime-shaped coordinates do not have
    /// the number of axes the point type expects.
    #[error("dimension mismatch: expected {expected} axes, found {found}")]
    DimensionMismatch {
        /// Number of axes of the point type.
        expected: usize,
        /// Number of axes actually supplied.
        found: usize,
    },
    /// Error for floor division by zero.
    /// This variant names the first axis whose divisor is zero.
    #[error("division by zero on axis {axis}")]
    DivisionByZero {
        /// Index of the offending axis (0 = x, 1 = y, 2 = z).
        axis: usize,
    },
    /// Error for a quotient that does not fit in `i64`.
    /// This variant is returned for `i64::MIN / -1` on some axis.
    #[error("arithmetic overflow on axis {axis}")]
    Overflow {
        /// Index of the offending axis (0 = x, 1 = y, 2 = z).
        axis: usize,
    },
}

/// Convenience type alias for results using [`PointError`].
pub type Result<T> = core::result::Result<T, PointError>;

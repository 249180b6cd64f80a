//! Axis access shared by points and plain coordinate buffers.

#![warn(missing_docs)]

/// Anything that can be read as a list of integer coordinates.
///
/// Points know their dimensionality at compile time, but coordinates coming
/// from configuration files or other runtime sources do not. This trait lets
/// both be compared through [`Point::try_eq`](crate::Point::try_eq), which
/// reports a dimension mismatch instead of silently answering `false`.
pub trait Coordinates {
    /// Number of axes.
    fn dimension(&self) -> usize;

    /// Value on `axis`, or `None` if the axis does not exist.
    fn coordinate(&self, axis: usize) -> Option<i64>;
}

impl<const N: usize> Coordinates for [i64; N] {
    fn dimension(&self) -> usize {
        N
    }

    fn coordinate(&self, axis: usize) -> Option<i64> {
        self.get(axis).copied()
    }
}

impl Coordinates for [i64] {
    fn dimension(&self) -> usize {
        self.len()
    }

    fn coordinate(&self, axis: usize) -> Option<i64> {
        self.get(axis).copied()
    }
}

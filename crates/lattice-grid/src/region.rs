//! Half-open boxes of integer points.

#![warn(missing_docs)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid_iterator::{AxisOrder, GridIterator};
use crate::point::Point;

/// The region `[start, end)` on every axis.
///
/// A region with `start[i] >= end[i]` on any axis is empty; this is not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region<const D: usize> {
    start: Point<D>,
    end: Point<D>,
}

impl<const D: usize> Region<D> {
    /// Creates a region from its inclusive lower and exclusive upper corner.
    #[must_use]
    pub const fn new(start: Point<D>, end: Point<D>) -> Self {
        Self { start, end }
    }

    /// Region `[0, end)`.
    #[must_use]
    pub const fn from_end(end: Point<D>) -> Self {
        Self::new(Point::zero(), end)
    }

    /// Inclusive lower corner.
    #[must_use]
    pub fn start(&self) -> Point<D> {
        self.start
    }

    /// Exclusive upper corner.
    #[must_use]
    pub fn end(&self) -> Point<D> {
        self.end
    }

    /// Whether `p` lies inside the region.
    #[must_use]
    pub fn contains(&self, p: &Point<D>) -> bool {
        p.is_within_bounds(&self.start, &self.end)
    }

    /// Whether the region holds no points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.contains(&self.start)
    }

    /// Number of cells along each axis, `max(0, end - start)`.
    /// Saturates at `i64::MAX` on axes wider than that.
    #[must_use]
    pub fn extent(&self) -> Point<D> {
        let widths: [i64; D] = core::array::from_fn(|i| {
            self.end.axis(i).saturating_sub(self.start.axis(i)).max(0)
        });
        Point::from_array(widths)
    }

    /// Total number of points, the product of the per-axis extents.
    /// Saturates at `u128::MAX`.
    #[must_use]
    pub fn point_count(&self) -> u128 {
        (0..D)
            .map(|i| {
                let width = i128::from(self.end.axis(i)) - i128::from(self.start.axis(i));
                width.max(0).unsigned_abs()
            })
            .fold(1u128, u128::saturating_mul)
    }

    /// Row-major walk over the region.
    #[must_use]
    pub fn iter(&self) -> GridIterator<D> {
        self.iter_with(AxisOrder::RowMajor)
    }

    /// Walk over the region visiting axes in `order`.
    #[must_use]
    pub fn iter_with(&self, order: AxisOrder) -> GridIterator<D> {
        GridIterator::with_order(self.end, self.start, order)
    }
}

impl<const D: usize> IntoIterator for Region<D> {
    type Item = Point<D>;
    type IntoIter = GridIterator<D>;

    fn into_iter(self) -> GridIterator<D> {
        self.iter()
    }
}

impl<const D: usize> IntoIterator for &Region<D> {
    type Item = Point<D>;
    type IntoIter = GridIterator<D>;

    fn into_iter(self) -> GridIterator<D> {
        self.iter()
    }
}

//! Lazy walks over every integer point of a half-open box.
//!
//! The walk is an explicit cursor-and-carry state machine: each pull emits
//! the cursor, bumps the fastest axis, and on reaching `end` on that axis
//! resets it to `start` and carries into the next axis. When the slowest
//! axis overflows the iterator is exhausted for good.

#![warn(missing_docs)]

use core::iter::FusedIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::point::Point;
use crate::region::Region;

/// Order in which a grid walk visits its axes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AxisOrder {
    /// Last axis varies fastest: `(0,0), (0,1), (0,2), (1,0), ...`
    #[default]
    RowMajor,
    /// First axis varies fastest: `(0,0), (1,0), (0,1), (1,1), ...`
    ColumnMajor,
}

impl AxisOrder {
    /// The axis that changes on every step of a `dim`-dimensional walk.
    ///
    /// # Panics
    /// Panics if `dim` is zero.
    #[must_use]
    pub fn fastest_axis(self, dim: usize) -> usize {
        self.carry_axis(0, dim)
    }

    /// Axis visited at position `step` of the carry chain (0 = fastest).
    fn carry_axis(self, step: usize, dim: usize) -> usize {
        match self {
            AxisOrder::RowMajor => dim - 1 - step,
            AxisOrder::ColumnMajor => step,
        }
    }
}

/// Iterator over all points `p` with `start <= p < end` on every axis.
///
/// Bounds are copied when the iterator is built, so later changes to the
/// caller's points have no effect on a walk in progress. Each emitted point
/// is an independent value. Once exhausted, the iterator keeps returning
/// `None`; build a new one to walk the region again.
#[derive(Debug, Clone)]
pub struct GridIterator<const D: usize> {
    start: Point<D>,
    end: Point<D>,
    order: AxisOrder,
    /// Next point to emit; `None` once the region is fully walked.
    cursor: Option<Point<D>>,
    remaining: u128,
}

/// Grid walk over a 2D rectangle.
pub type GridIterator2D = GridIterator<2>;

/// Grid walk over a 3D box.
pub type GridIterator3D = GridIterator<3>;

impl<const D: usize> GridIterator<D> {
    /// Walks `[0, end)` in row-major order.
    #[must_use]
    pub fn new(end: Point<D>) -> Self {
        Self::with_order(end, Point::zero(), AxisOrder::RowMajor)
    }

    /// Walks `[start, end)` in row-major order.
    ///
    /// No check is made that `start <= end`: an axis with
    /// `start[i] >= end[i]` makes the region empty.
    #[must_use]
    pub fn with_start(end: Point<D>, start: Point<D>) -> Self {
        Self::with_order(end, start, AxisOrder::RowMajor)
    }

    /// Walks `[start, end)` visiting axes in `order`.
    #[must_use]
    pub fn with_order(end: Point<D>, start: Point<D>, order: AxisOrder) -> Self {
        let cursor = start.is_within_bounds(&start, &end).then_some(start);
        let remaining = Region::new(start, end).point_count();
        trace!(%start, %end, ?order, remaining = %remaining, "grid iterator created");

        Self {
            start,
            end,
            order,
            cursor,
            remaining,
        }
    }

    /// Inclusive lower bound.
    #[must_use]
    pub fn start(&self) -> Point<D> {
        self.start
    }

    /// Exclusive upper bound.
    #[must_use]
    pub fn end(&self) -> Point<D> {
        self.end
    }

    /// Axis order of the walk.
    #[must_use]
    pub fn order(&self) -> AxisOrder {
        self.order
    }

    /// The region being walked.
    #[must_use]
    pub fn region(&self) -> Region<D> {
        Region::new(self.start, self.end)
    }

    /// Number of points still to be emitted (saturating at `u128::MAX`).
    #[must_use]
    pub fn remaining(&self) -> u128 {
        self.remaining
    }

    /// Whether the walk has finished.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_none()
    }

    /// Computes the point after `cursor`, or `None` when the slowest axis
    /// overflows.
    fn step(&self, mut cursor: Point<D>) -> Option<Point<D>> {
        for step in 0..D {
            let axis = self.order.carry_axis(step, D);
            // cursor[axis] < end[axis], so this cannot overflow.
            let next = cursor.axis(axis) + 1;
            if next < self.end.axis(axis) {
                return Some(cursor.with_axis(axis, next));
            }
            cursor = cursor.with_axis(axis, self.start.axis(axis));
        }
        None
    }
}

impl<const D: usize> Iterator for GridIterator<D> {
    type Item = Point<D>;

    fn next(&mut self) -> Option<Point<D>> {
        let current = self.cursor?;
        debug_assert!(current.is_within_bounds(&self.start, &self.end));

        self.cursor = self.step(current);
        self.remaining = self.remaining.saturating_sub(1);
        if self.cursor.is_none() {
            trace!(start = %self.start, end = %self.end, "grid iterator exhausted");
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<const D: usize> FusedIterator for GridIterator<D> {}

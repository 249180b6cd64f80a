//! Integer points in 2D and 3D discrete space.
//!
//! A single const-generic [`Point`] backs both dimensionalities; [`Point2D`]
//! and [`Point3D`] are the names callers normally use. Points are small
//! `Copy` values: "setting" a coordinate returns an updated copy, so a point
//! shared between several grid iterators can never change under them.

#![warn(missing_docs)]

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, Index, Mul, Neg, Sub, SubAssign};

use nalgebra::{ArrayStorage, SVector};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coords::Coordinates;
use crate::error::{PointError, Result};
use crate::grid_iterator::GridIterator;

/// A point with `D` integer coordinates.
///
/// Equality and hashing are by value. Ordering is the elementwise partial
/// order: `a < b` only when every axis of `a` is strictly below the same
/// axis of `b`, so `(1, 5)` and `(2, 3)` are incomparable.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<const D: usize> {
    coords: SVector<i64, D>,
}

/// A point in the discrete plane, `(x, y)`.
pub type Point2D = Point<2>;

/// A point in discrete space, `(x, y, z)`.
pub type Point3D = Point<3>;

impl<const D: usize> Point<D> {
    /// Number of axes.
    pub const DIM: usize = D;

    /// Creates a point from its coordinates, ordered x, y, z.
    #[must_use]
    pub const fn from_array(coords: [i64; D]) -> Self {
        Self {
            coords: SVector::from_array_storage(ArrayStorage([coords])),
        }
    }

    /// The all-zero point, used as the default lower bound everywhere.
    #[must_use]
    pub const fn zero() -> Self {
        Self::from_array([0; D])
    }

    /// Coordinates as an array, ordered x, y, z.
    #[must_use]
    pub fn to_array(&self) -> [i64; D] {
        core::array::from_fn(|i| self.coords[i])
    }

    /// Value on `axis` (0 = x, 1 = y, 2 = z).
    ///
    /// # Panics
    /// Panics if `axis >= D`.
    #[must_use]
    pub fn axis(&self, axis: usize) -> i64 {
        self.coords[axis]
    }

    /// Returns a copy of this point with `axis` replaced by `value`.
    ///
    /// # Panics
    /// Panics if `axis >= D`.
    #[must_use]
    pub fn with_axis(mut self, axis: usize, value: i64) -> Self {
        self.coords[axis] = value;
        self
    }

    /// Iterates over the coordinates in axis order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.coords.iter().copied()
    }

    /// Compares against coordinates whose dimensionality is only known at
    /// runtime.
    ///
    /// # Errors
    /// Returns [`PointError::DimensionMismatch`] when `other` does not have
    /// exactly `D` axes.
    pub fn try_eq<C: Coordinates + ?Sized>(&self, other: &C) -> Result<bool> {
        if other.dimension() != D {
            return Err(PointError::DimensionMismatch {
                expected: D,
                found: other.dimension(),
            });
        }
        Ok((0..D).all(|i| other.coordinate(i) == Some(self.coords[i])))
    }

    /// Floor division that reports failures instead of panicking.
    ///
    /// # Errors
    /// Returns [`PointError::DivisionByZero`] naming the first axis of `rhs`
    /// that is zero, or [`PointError::Overflow`] for the first axis where the
    /// quotient does not fit (`i64::MIN / -1`).
    pub fn checked_floor_div(&self, rhs: &Self) -> Result<Self> {
        if let Some(axis) = rhs.coords.iter().position(|&c| c == 0) {
            return Err(PointError::DivisionByZero { axis });
        }
        let mut out = [0; D];
        for (axis, slot) in out.iter_mut().enumerate() {
            *slot = floor_div_checked(self.coords[axis], rhs.coords[axis])
                .ok_or(PointError::Overflow { axis })?;
        }
        Ok(Self::from_array(out))
    }

    /// Squared Euclidean distance, exact. Saturates at `u128::MAX`.
    #[must_use]
    pub fn distance_squared(&self, other: &Self) -> u128 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(&a, &b)| {
                let d = (i128::from(a) - i128::from(b)).unsigned_abs();
                d.saturating_mul(d)
            })
            .fold(0u128, u128::saturating_add)
    }

    /// Euclidean distance to `other`. Never negative and symmetric.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(&a, &b)| {
                let d = a as f64 - b as f64;
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Checks whether the point lies in `[0, end)` on every axis.
    ///
    /// The lower bound is inclusive and the upper bound exclusive:
    /// with `end = (4, 5)`, `(0, 0)` is within but `(4, 3)` is not.
    #[must_use]
    pub fn is_within(&self, end: &Self) -> bool {
        self.is_within_bounds(&Self::zero(), end)
    }

    /// Checks whether `start[i] <= self[i] < end[i]` holds on every axis.
    #[must_use]
    pub fn is_within_bounds(&self, start: &Self, end: &Self) -> bool {
        (0..D).all(|i| start.coords[i] <= self.coords[i] && self.coords[i] < end.coords[i])
    }

    /// Grid iterator over `[0, self)` in row-major order.
    #[must_use]
    pub fn grid(self) -> GridIterator<D> {
        GridIterator::new(self)
    }

    fn zip_with(&self, rhs: &Self, f: impl FnMut(i64, i64) -> i64) -> Self {
        Self {
            coords: self.coords.zip_map(&rhs.coords, f),
        }
    }

    fn all_axes(&self, rhs: &Self, f: impl Fn(i64, i64) -> bool) -> bool {
        self.coords.iter().zip(rhs.coords.iter()).all(|(&a, &b)| f(a, b))
    }
}

impl Point<2> {
    /// Creates a new `Point2D`.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self::from_array([x, y])
    }

    /// The x-coordinate.
    #[must_use]
    pub fn x(&self) -> i64 {
        self.coords[0]
    }

    /// The y-coordinate.
    #[must_use]
    pub fn y(&self) -> i64 {
        self.coords[1]
    }

    /// Returns a copy with `x` replaced.
    #[must_use]
    pub fn with_x(self, x: i64) -> Self {
        self.with_axis(0, x)
    }

    /// Returns a copy with `y` replaced.
    #[must_use]
    pub fn with_y(self, y: i64) -> Self {
        self.with_axis(1, y)
    }
}

impl Point<3> {
    /// Creates a new `Point3D`.
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self::from_array([x, y, z])
    }

    /// The x-coordinate.
    #[must_use]
    pub fn x(&self) -> i64 {
        self.coords[0]
    }

    /// The y-coordinate.
    #[must_use]
    pub fn y(&self) -> i64 {
        self.coords[1]
    }

    /// The z-coordinate.
    #[must_use]
    pub fn z(&self) -> i64 {
        self.coords[2]
    }

    /// Returns a copy with `x` replaced.
    #[must_use]
    pub fn with_x(self, x: i64) -> Self {
        self.with_axis(0, x)
    }

    /// Returns a copy with `y` replaced.
    #[must_use]
    pub fn with_y(self, y: i64) -> Self {
        self.with_axis(1, y)
    }

    /// Returns a copy with `z` replaced.
    #[must_use]
    pub fn with_z(self, z: i64) -> Self {
        self.with_axis(2, z)
    }
}

/// Integer division rounding toward negative infinity, or `None` on a zero
/// divisor or overflow.
fn floor_div_checked(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    let r = a.checked_rem(b)?;
    // A nonzero remainder means |q| < |a|, so q - 1 stays in range.
    Some(if r != 0 && ((r < 0) != (b < 0)) { q - 1 } else { q })
}

/// Integer division rounding toward negative infinity.
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

impl<const D: usize> Default for Point<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const D: usize> Coordinates for Point<D> {
    fn dimension(&self) -> usize {
        D
    }

    fn coordinate(&self, axis: usize) -> Option<i64> {
        (axis < D).then(|| self.coords[axis])
    }
}

impl<const D: usize> From<[i64; D]> for Point<D> {
    fn from(coords: [i64; D]) -> Self {
        Self::from_array(coords)
    }
}

impl<const D: usize> From<Point<D>> for [i64; D] {
    fn from(p: Point<D>) -> Self {
        p.to_array()
    }
}

impl<const D: usize> TryFrom<&[i64]> for Point<D> {
    type Error = PointError;

    fn try_from(coords: &[i64]) -> Result<Self> {
        let array: [i64; D] = coords
            .try_into()
            .map_err(|_| PointError::DimensionMismatch {
                expected: D,
                found: coords.len(),
            })?;
        Ok(Self::from_array(array))
    }
}

impl<const D: usize> Index<usize> for Point<D> {
    type Output = i64;

    fn index(&self, axis: usize) -> &i64 {
        &self.coords[axis]
    }
}

/// Elementwise order. `partial_cmp` reports `Less` or `Greater` only when
/// the relation is strict on every axis, so it agrees with `<` and `>`.
///
/// `<=` and `>=` are not derived from `partial_cmp`: they hold when the
/// relation is non-strict on every axis. `(1, 3) <= (2, 3)` is true even
/// though the two points compare as `None`.
impl<const D: usize> PartialOrd for Point<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.lt(other) {
            Some(Ordering::Less)
        } else if self.gt(other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    // Strict relations must hold on every axis, not just one.
    fn lt(&self, other: &Self) -> bool {
        self.all_axes(other, |a, b| a < b)
    }

    fn le(&self, other: &Self) -> bool {
        self.all_axes(other, |a, b| a <= b)
    }

    fn gt(&self, other: &Self) -> bool {
        self.all_axes(other, |a, b| a > b)
    }

    fn ge(&self, other: &Self) -> bool {
        self.all_axes(other, |a, b| a >= b)
    }
}

impl<const D: usize> Add for Point<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<const D: usize> AddAssign for Point<D> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const D: usize> Sub for Point<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl<const D: usize> SubAssign for Point<D> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const D: usize> Mul for Point<D> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a * b)
    }
}

/// Elementwise floor division.
///
/// Panics on a zero divisor or on `i64::MIN / -1` like native integer
/// division; use
/// [`Point::checked_floor_div`] to get an error instead.
impl<const D: usize> Div for Point<D> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.zip_with(&rhs, floor_div)
    }
}

impl<const D: usize> Neg for Point<D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            coords: self.coords.map(|c| -c),
        }
    }
}

impl<const D: usize> fmt::Display for Point<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_coords(f, self)?;
        write!(f, ")")
    }
}

impl<const D: usize> fmt::Debug for Point<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point{D}D(")?;
        write_coords(f, self)?;
        write!(f, ")")
    }
}

fn write_coords<const D: usize>(f: &mut fmt::Formatter<'_>, p: &Point<D>) -> fmt::Result {
    for (i, c) in p.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{c}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::hash::{DefaultHasher, Hash, Hasher};

    const EPSILON: f64 = 1e-9;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_accessors() {
        let p = Point2D::new(3, 5);
        assert_eq!(p.x(), 3);
        assert_eq!(p.y(), 5);

        let q = Point3D::new(3, 5, 6);
        assert_eq!((q.x(), q.y(), q.z()), (3, 5, 6));
        assert_eq!(q.axis(2), 6);
        assert_eq!(q[1], 5);
        assert_eq!(q.to_array(), [3, 5, 6]);
    }

    #[test]
    fn test_with_axis_returns_updated_copy() {
        let p = Point2D::new(3, 5);
        let moved = p.with_x(4).with_y(6);
        assert_eq!(moved, Point2D::new(4, 6));
        // Original is untouched.
        assert_eq!(p, Point2D::new(3, 5));

        let q = Point3D::new(3, 5, 6).with_z(-1).with_axis(0, 9);
        assert_eq!(q, Point3D::new(9, 5, -1));
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(Point2D::new(3, 5).to_string(), "(3, 5)");
        assert_eq!(format!("{:?}", Point2D::new(3, 5)), "Point2D(3, 5)");
        assert_eq!(Point3D::new(3, -5, 7).to_string(), "(3, -5, 7)");
        assert_eq!(format!("{:?}", Point3D::new(3, -5, 7)), "Point3D(3, -5, 7)");
    }

    #[test]
    fn test_equality() {
        let p1 = Point2D::new(3, 4);
        assert_eq!(p1, Point2D::new(3, 4));
        assert_ne!(p1, Point2D::new(4, 5));
        assert_ne!(p1, Point2D::new(3, 5));

        let q = Point3D::new(3, 4, 5);
        assert_eq!(q, Point3D::new(3, 4, 5));
        assert_ne!(q, Point3D::new(3, 4, 4));
        assert_ne!(q, Point3D::new(3, 6, 5));
        assert_ne!(q, Point3D::new(4, 4, 5));
        assert_ne!(q, Point3D::new(3, -1, -2));
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let a = Point3D::new(3, 5, 7);
        let b = Point3D::from_array([3, 5, 7]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let mut seen = std::collections::HashSet::new();
        assert!(seen.insert(Point2D::new(1, 2)));
        assert!(!seen.insert(Point2D::new(1, 2)));
    }

    #[test]
    fn test_try_eq_dimension_mismatch() {
        let p = Point3D::new(1, 2, 3);
        assert_eq!(p.try_eq(&[1_i64, 2, 3]), Ok(true));
        assert_eq!(p.try_eq(&[1_i64, 2, 4]), Ok(false));
        assert_eq!(
            p.try_eq(&[1_i64, 2]),
            Err(PointError::DimensionMismatch { expected: 3, found: 2 })
        );
        assert_eq!(
            Point2D::new(1, 2).try_eq(&p),
            Err(PointError::DimensionMismatch { expected: 2, found: 3 })
        );
    }

    #[test]
    fn test_try_from_slice() {
        let data: Vec<i64> = vec![4, 5, 6];
        let p = Point3D::try_from(data.as_slice()).unwrap();
        assert_eq!(p, Point3D::new(4, 5, 6));

        let err = Point2D::try_from(data.as_slice()).unwrap_err();
        assert_eq!(err, PointError::DimensionMismatch { expected: 2, found: 3 });
    }

    #[test]
    fn test_partial_order() {
        let p = Point3D::new(3, 4, 5);
        assert!(Point3D::new(2, 3, 4) < p);
        assert!(!(Point3D::new(3, 3, 4) < p)); // x is equal, not strictly less
        assert!(Point3D::new(3, 3, 4) <= p);
        assert!(Point3D::new(4, 5, 6) > p);
        assert!(Point3D::new(3, 5, 6) >= p);
        assert!(!(Point3D::new(3, 5, 6) > p));

        let a = Point2D::new(1, 5);
        let b = Point2D::new(2, 3);
        assert!(!(a < b) && !(a > b) && !(a <= b) && !(a >= b));
        assert_eq!(a.partial_cmp(&b), None);
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
        assert_eq!(Point2D::new(1, 2).partial_cmp(&b), Some(Ordering::Less));
        assert_eq!(Point2D::new(3, 4).partial_cmp(&b), Some(Ordering::Greater));

        // One shared axis: `<=` holds but neither point is strictly smaller.
        let c = Point2D::new(1, 3);
        assert!(c <= b && !(c < b));
        assert_eq!(c.partial_cmp(&b), None);
        assert_eq!(Point2D::new(2, 4).partial_cmp(&b), None);
    }

    #[test]
    fn test_partial_cmp_agrees_with_strict_relations() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let a = Point3D::new(
                rng.random_range(-3..3),
                rng.random_range(-3..3),
                rng.random_range(-3..3),
            );
            let b = Point3D::new(
                rng.random_range(-3..3),
                rng.random_range(-3..3),
                rng.random_range(-3..3),
            );
            assert_eq!(a.partial_cmp(&b) == Some(Ordering::Less), a < b);
            assert_eq!(a.partial_cmp(&b) == Some(Ordering::Greater), a > b);
            assert_eq!(a.partial_cmp(&b) == Some(Ordering::Equal), a == b);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Point2D::new(3, 5);
        let b = Point2D::new(4, 6);
        assert_eq!(a + b, Point2D::new(7, 11));
        assert_eq!(a - b, Point2D::new(-1, -1));
        assert_eq!(a * b, Point2D::new(12, 30));
        assert_eq!(Point2D::new(6, 12) / Point2D::new(4, 6), Point2D::new(1, 2));
        assert_eq!(-a, Point2D::new(-3, -5));

        let mut c = a;
        c += b;
        assert_eq!(c, Point2D::new(7, 11));
        c -= b;
        assert_eq!(c, a);

        let p = Point3D::new(3, 5, 7);
        let q = Point3D::new(2, 2, 2);
        assert_eq!(p + q, Point3D::new(5, 7, 9));
        assert_eq!(p * q, Point3D::new(6, 10, 14));
        assert_eq!(p / q, Point3D::new(1, 2, 3));
    }

    #[test]
    fn test_arithmetic_laws_random() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let a = Point3D::new(
                rng.random_range(-1000..1000),
                rng.random_range(-1000..1000),
                rng.random_range(-1000..1000),
            );
            let b = Point3D::new(
                rng.random_range(-1000..1000),
                rng.random_range(-1000..1000),
                rng.random_range(-1000..1000),
            );
            assert_eq!((a + b) - b, a);
            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
        }
    }

    #[test]
    fn test_floor_division_rounds_down() {
        assert_eq!(Point2D::new(-7, 7) / Point2D::new(2, -2), Point2D::new(-4, -4));
        assert_eq!(Point2D::new(-8, 7) / Point2D::new(2, 2), Point2D::new(-4, 3));
        assert_eq!(Point2D::new(-7, -7) / Point2D::new(-2, 7), Point2D::new(3, -1));
    }

    #[test]
    fn test_checked_floor_div() {
        let p = Point3D::new(6, 12, 9);
        assert_eq!(
            p.checked_floor_div(&Point3D::new(4, 6, 3)),
            Ok(Point3D::new(1, 2, 3))
        );
        assert_eq!(
            p.checked_floor_div(&Point3D::new(1, 0, 0)),
            Err(PointError::DivisionByZero { axis: 1 })
        );
    }

    #[test]
    fn test_checked_floor_div_overflow() {
        assert_eq!(
            Point2D::new(i64::MIN, 1).checked_floor_div(&Point2D::new(-1, 1)),
            Err(PointError::Overflow { axis: 0 })
        );
        assert_eq!(
            Point3D::new(7, i64::MIN, 0).checked_floor_div(&Point3D::new(2, -1, 5)),
            Err(PointError::Overflow { axis: 1 })
        );
        // Extremes that do fit still round down.
        assert_eq!(
            Point2D::new(i64::MIN, i64::MAX).checked_floor_div(&Point2D::new(1, -2)),
            Ok(Point2D::new(i64::MIN, -(i64::MAX / 2) - 1))
        );
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn test_div_by_zero_panics() {
        let _ = Point2D::new(1, 1) / Point2D::new(1, 0);
    }

    #[test]
    fn test_distance() {
        let d = Point2D::new(0, 0).distance_to(&Point2D::new(3, 4));
        assert!((d - 5.0).abs() < EPSILON);

        let d3 = Point3D::new(0, 0, 0).distance_to(&Point3D::new(3, 4, 5));
        assert!((d3 - 50.0_f64.sqrt()).abs() < EPSILON);
        assert_eq!(Point3D::zero().distance_squared(&Point3D::new(3, 4, 5)), 50);
    }

    #[test]
    fn test_distance_symmetric_and_non_negative() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let a = Point2D::new(rng.random_range(-500..500), rng.random_range(-500..500));
            let b = Point2D::new(rng.random_range(-500..500), rng.random_range(-500..500));
            let ab = a.distance_to(&b);
            assert!(ab >= 0.0);
            assert!((ab - b.distance_to(&a)).abs() < EPSILON);
            assert!((ab * ab - a.distance_squared(&b) as f64).abs() < 1e-6);
        }
    }

    #[test]
    fn test_distance_symmetric_and_non_negative_3d() {
        let mut rng = StdRng::seed_from_u64(43);
        for _ in 0..200 {
            let a = Point3D::new(
                rng.random_range(-500..500),
                rng.random_range(-500..500),
                rng.random_range(-500..500),
            );
            let b = Point3D::new(
                rng.random_range(-500..500),
                rng.random_range(-500..500),
                rng.random_range(-500..500),
            );
            let ab = a.distance_to(&b);
            assert!(ab >= 0.0);
            assert!((ab - b.distance_to(&a)).abs() < EPSILON);
            assert_eq!(a.distance_squared(&b), b.distance_squared(&a));
            assert!((ab * ab - a.distance_squared(&b) as f64).abs() < 1e-6);
        }
        assert_eq!(Point3D::new(1, 2, 3).distance_to(&Point3D::new(1, 2, 3)), 0.0);
    }

    #[test]
    fn test_is_within_default_start() {
        let end = Point2D::new(4, 5);
        assert!(!Point2D::new(4, 3).is_within(&end));
        assert!(Point2D::new(0, 0).is_within(&end));
        assert!(!Point2D::new(-1, 3).is_within(&end));
        assert!(Point2D::new(3, 4).is_within(&end));
        assert!(!Point2D::new(3, 5).is_within(&end));
    }

    #[test]
    fn test_is_within_bounds() {
        let start = Point3D::new(1, 2, 3);
        let end = Point3D::new(4, 5, 6);

        // Lower corner is inside, upper corner is not.
        assert!(Point3D::new(1, 2, 3).is_within_bounds(&start, &end));
        assert!(Point3D::new(3, 4, 5).is_within_bounds(&start, &end));
        assert!(!Point3D::new(4, 4, 5).is_within_bounds(&start, &end));
        assert!(!Point3D::new(3, 5, 5).is_within_bounds(&start, &end));
        assert!(!Point3D::new(3, 4, 6).is_within_bounds(&start, &end));
        assert!(!Point3D::new(0, 4, 5).is_within_bounds(&start, &end));
        assert!(!Point3D::new(3, 4, 2).is_within_bounds(&start, &end));
    }

    #[test]
    fn test_conversions() {
        let p: Point2D = [7, -3].into();
        assert_eq!(p, Point2D::new(7, -3));
        let raw: [i64; 2] = p.into();
        assert_eq!(raw, [7, -3]);
        assert_eq!(Point3D::default(), Point3D::zero());
        assert_eq!(Point3D::DIM, 3);
    }
}

#![warn(missing_docs)]
#![doc = "Discrete 2D/3D integer points and row-major grid iterators."]
#![doc = ""]
#![doc = "This crate provides integer point types with elementwise arithmetic,"]
#![doc = "Euclidean distance and half-open bounds tests, plus lazy iterators that"]
#![doc = "walk every point of a box exactly once, last axis fastest."]

pub mod coords;
pub mod error;
pub mod grid_iterator;
pub mod point;
pub mod region;

pub use coords::Coordinates;
pub use error::{PointError, Result};
pub use grid_iterator::{AxisOrder, GridIterator, GridIterator2D, GridIterator3D};
pub use point::{Point, Point2D, Point3D};
pub use region::Region;

//! Integer 2D geometry primitives.
//!
//! - `Point`: `Copy` value with `i32` coordinates.
//! - `distance_squared`: exact squared Euclidean distance in `i64`.
//! - `by_x`/`by_y`: total orders used to build the sorted views.
//! - `Outcome`: a pair of points with their squared distance.
//!
//! Distances are never square-rooted inside the algorithms; `dsq` is exact and
//! orders pairs the same way the true distance does.

mod outcome;
mod point;

pub use outcome::Outcome;
pub use point::{by_x, by_y, compare_by_x, compare_by_y, distance_squared, Point};

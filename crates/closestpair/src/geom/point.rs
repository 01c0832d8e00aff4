use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cfg::COORD_MAX;

/// Point on the integer lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True if both coordinates satisfy `|c| <= COORD_MAX`.
    #[inline]
    pub fn in_range(&self) -> bool {
        (-COORD_MAX..=COORD_MAX).contains(&self.x) && (-COORD_MAX..=COORD_MAX).contains(&self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Squared Euclidean distance `(a.x-b.x)² + (a.y-b.y)²`.
///
/// Pre: both points are `in_range`, otherwise the sum may overflow.
#[inline]
pub fn distance_squared(a: &Point, b: &Point) -> i64 {
    debug_assert!(a.in_range() && b.in_range(), "coordinate out of range");
    let dx = a.x as i64 - b.x as i64;
    let dy = a.y as i64 - b.y as i64;
    dx * dx + dy * dy
}

/// x ascending, ties by y ascending.
#[inline]
pub fn by_x(a: &Point, b: &Point) -> Ordering {
    a.x.cmp(&b.x).then(a.y.cmp(&b.y))
}

/// y ascending, ties by x ascending.
#[inline]
pub fn by_y(a: &Point, b: &Point) -> Ordering {
    a.y.cmp(&b.y).then(a.x.cmp(&b.x))
}

/// Strict "less than" under `by_x`.
#[inline]
pub fn compare_by_x(a: &Point, b: &Point) -> bool {
    by_x(a, b) == Ordering::Less
}

/// Strict "less than" under `by_y`.
#[inline]
pub fn compare_by_y(a: &Point, b: &Point) -> bool {
    by_y(a, b) == Ordering::Less
}

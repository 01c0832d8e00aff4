//! Split and strip helpers.

use std::cmp::Ordering;

use crate::geom::{by_x, Point};

/// Stable partition of the y-sorted range against the left x-half.
///
/// The split point is the last point of `left_x`. Points strictly before it
/// in x-order go left, and so do as many copies of the split point as
/// `left_x` holds. Everything else goes right. Both outputs keep the relative
/// order of `by_y`.
///
/// Pre: `left_x` is non-empty, x-sorted, and a prefix of the x-order of `by_y`.
pub(crate) fn partition_y(by_y: &[Point], left_x: &[Point]) -> (Vec<Point>, Vec<Point>) {
    let split = left_x[left_x.len() - 1];
    let mut quota = left_x.iter().rev().take_while(|p| **p == split).count();
    let mut left = Vec::with_capacity(left_x.len());
    let mut right = Vec::with_capacity(by_y.len().saturating_sub(left_x.len()));
    for p in by_y {
        match by_x(p, &split) {
            Ordering::Less => left.push(*p),
            Ordering::Equal if quota > 0 => {
                quota -= 1;
                left.push(*p);
            }
            _ => right.push(*p),
        }
    }
    (left, right)
}

/// Points of `by_y` whose horizontal offset from `split_x` satisfies `dx² < delta`.
/// The result stays y-ordered.
pub(crate) fn strip(by_y: &[Point], split_x: i32, delta: i64) -> Vec<Point> {
    by_y.iter()
        .filter(|p| {
            let dx = p.x as i64 - split_x as i64;
            dx * dx < delta
        })
        .copied()
        .collect()
}

//! Quadratic baseline.
//!
//! Enumeration order is fixed: outer index `k` ascending, inner index `j`
//! ascending over `j < k`. The first pair reaching the minimum wins; equal
//! distances never replace the incumbent. The reported pair is
//! `(range[j], range[k])`.

use crate::geom::{distance_squared, Outcome, Point};

/// Closest pair over every unordered pair of `points`.
///
/// Returns `Outcome::EMPTY` for fewer than two points.
pub fn brute(points: &[Point]) -> Outcome {
    if points.len() < 2 {
        return Outcome::EMPTY;
    }
    brute_range(points)
}

/// Brute force on a contiguous range; used directly as the solver's base case.
///
/// Pre: `range.len() >= 2`.
pub fn brute_range(range: &[Point]) -> Outcome {
    debug_assert!(range.len() >= 2, "brute_range needs at least two points");
    let mut best = Outcome::new(range[0], range[1]);
    for (k, pk) in range.iter().enumerate() {
        for pj in &range[..k] {
            let d = distance_squared(pj, pk);
            if d < best.dsq {
                best = Outcome {
                    a: *pj,
                    b: *pk,
                    dsq: d,
                };
            }
        }
    }
    best
}

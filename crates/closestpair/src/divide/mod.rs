//! Divide-and-conquer closest pair.
//!
//! Purpose
//! - Sort the input once by x and once by y, then recurse on halves of the
//!   x-order while stably partitioning the y-order. No level re-sorts, which
//!   keeps the whole search at O(n log n).
//! - Merge the halves by scanning a y-ordered strip around the split line.
//!
//! Layout
//! - `split.rs`: y-partition against the split point and strip filter.
//! - `runner.rs`: recursion and strip scan, carrying counters.
//!
//! Tie-breaking
//! - Base cases follow `brute_range`'s enumeration order.
//! - Left beats right on equal `dsq`; strip candidates replace only on a
//!   strictly smaller `dsq`.

mod runner;
mod split;

use crate::cfg::SolverCfg;
use crate::geom::{by_x, by_y, Outcome, Point};

use runner::Solver;

/// Counters gathered during one `efficient_with` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SolveStats {
    /// Ranges handed to brute force.
    pub base_cases: usize,
    /// Deepest recursion level reached (top level is 0).
    pub max_depth: usize,
    /// Points admitted to strips, summed over all merges.
    pub strip_points: usize,
    /// Distance evaluations in strip scans.
    pub strip_comparisons: usize,
}

/// Closest pair in O(n log n) with the default cutoff.
///
/// Returns `Outcome::EMPTY` for fewer than two points. `points` is not mutated.
pub fn efficient(points: &[Point]) -> Outcome {
    efficient_with(points, SolverCfg::default()).0
}

/// Closest pair with explicit configuration; also returns search counters.
pub fn efficient_with(points: &[Point], cfg: SolverCfg) -> (Outcome, SolveStats) {
    if points.len() < 2 {
        return (Outcome::EMPTY, SolveStats::default());
    }
    let mut xs = points.to_vec();
    let mut ys = points.to_vec();
    // Both orders are total and equal keys are identical points.
    xs.sort_unstable_by(by_x);
    ys.sort_unstable_by(by_y);

    let mut solver = Solver::new(cfg);
    let best = solver.solve(&xs, &ys, 0);
    (best, solver.into_stats())
}

#[cfg(test)]
mod tests;

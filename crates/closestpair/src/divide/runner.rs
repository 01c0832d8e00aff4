//! Recursive search with strip merge.

use crate::brute::brute_range;
use crate::cfg::SolverCfg;
use crate::geom::{distance_squared, Outcome, Point};

use super::split::{partition_y, strip};
use super::SolveStats;

/// Recursion context: cutoff and counters.
pub(crate) struct Solver {
    cutoff: usize,
    stats: SolveStats,
}

impl Solver {
    pub(crate) fn new(cfg: SolverCfg) -> Self {
        Self {
            cutoff: cfg.effective_cutoff(),
            stats: SolveStats::default(),
        }
    }

    pub(crate) fn into_stats(self) -> SolveStats {
        self.stats
    }

    /// Closest pair of one range, given as x-sorted and y-sorted views of the
    /// same points.
    pub(crate) fn solve(&mut self, by_x: &[Point], by_y: &[Point], depth: usize) -> Outcome {
        debug_assert_eq!(by_x.len(), by_y.len());
        self.stats.max_depth = self.stats.max_depth.max(depth);
        let n = by_x.len();
        if n <= self.cutoff {
            self.stats.base_cases += 1;
            return brute_range(by_x);
        }

        let mid = n / 2;
        let (left_x, right_x) = by_x.split_at(mid);
        let split = left_x[mid - 1];
        let (left_y, right_y) = partition_y(by_y, left_x);

        let left = self.solve(left_x, &left_y, depth + 1);
        let right = self.solve(right_x, &right_y, depth + 1);
        let best = if left.dsq <= right.dsq { left } else { right };

        let band = strip(by_y, split.x, best.dsq);
        self.stats.strip_points += band.len();
        self.scan_strip(&band, best)
    }

    /// Compare each strip point with its successors while their y-gap is
    /// below the current best.
    fn scan_strip(&mut self, band: &[Point], mut best: Outcome) -> Outcome {
        for (i, p) in band.iter().enumerate() {
            for q in &band[i + 1..] {
                let dy = q.y as i64 - p.y as i64;
                if dy * dy >= best.dsq {
                    break;
                }
                self.stats.strip_comparisons += 1;
                let d = distance_squared(p, q);
                if d < best.dsq {
                    best = Outcome {
                        a: *p,
                        b: *q,
                        dsq: d,
                    };
                }
            }
        }
        best
    }
}

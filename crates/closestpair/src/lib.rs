//! Closest pair of 2-D integer points.
//!
//! Two algorithms answer the same question and are cross-validated:
//! - `brute`: every unordered pair, O(n²).
//! - `efficient`: divide and conquer over x/y-sorted views, O(n log n).
//!
//! API Policy
//! - This crate backs the `closestpair` CLI and its benches. There is no
//!   stable public API; prefer clarity over compatibility.

pub mod brute;
pub mod cfg;
pub mod cloud;
pub mod divide;
pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use brute::{brute, brute_range};
pub use cfg::{SolverCfg, COORD_MAX, CUTOFF};
pub use divide::{efficient, efficient_with, SolveStats};
pub use geom::{by_x, by_y, compare_by_x, compare_by_y, distance_squared, Outcome, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::brute::brute;
    pub use crate::cfg::{SolverCfg, CUTOFF};
    pub use crate::cloud::{draw_cloud, Bounds, CloudCfg, Layout, ReplayToken};
    pub use crate::divide::{efficient, efficient_with, SolveStats};
    pub use crate::geom::{distance_squared, Outcome, Point};
}

//! Solver configuration.
//!
//! Policy
//! - `CUTOFF` and `COORD_MAX` are fixed constants. `SolverCfg` exists so tests
//!   and benches can force deeper recursion without touching call sites.

/// Range size at or below which the divide-and-conquer solver falls back to
/// brute force.
pub const CUTOFF: usize = 15;

/// Largest admissible coordinate magnitude. For `|x|, |y| <= COORD_MAX` every
/// squared distance stays below `2^63`.
pub const COORD_MAX: i32 = (1 << 30) - 1;

/// Smallest cutoff the solver accepts. Below three points a split could leave
/// a half with a single point, which has no pair.
pub(crate) const MIN_CUTOFF: usize = 3;

/// Divide-and-conquer tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverCfg {
    /// Base-case threshold; clamped to at least 3 when used.
    pub cutoff: usize,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self { cutoff: CUTOFF }
    }
}

impl SolverCfg {
    #[inline]
    pub fn with_cutoff(cutoff: usize) -> Self {
        Self { cutoff }
    }

    #[inline]
    pub(crate) fn effective_cutoff(&self) -> usize {
        self.cutoff.max(MIN_CUTOFF)
    }
}

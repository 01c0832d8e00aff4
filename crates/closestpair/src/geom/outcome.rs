use serde::{Deserialize, Serialize};

use super::point::{distance_squared, Point};

/// Result of a closest-pair search: an unordered pair and its squared distance.
///
/// `Outcome::EMPTY` is returned for inputs with fewer than two points. Its
/// `dsq` is `i64::MAX`, which no in-range pair can reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub a: Point,
    pub b: Point,
    pub dsq: i64,
}

impl Outcome {
    pub const EMPTY: Outcome = Outcome {
        a: Point::new(0, 0),
        b: Point::new(0, 0),
        dsq: i64::MAX,
    };

    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            a,
            b,
            dsq: distance_squared(&a, &b),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dsq == i64::MAX
    }

    /// The pair, or `None` for the sentinel.
    #[inline]
    pub fn pair(&self) -> Option<(Point, Point)> {
        if self.is_empty() {
            None
        } else {
            Some((self.a, self.b))
        }
    }

    /// Unordered pair comparison.
    pub fn is_pair(&self, p: Point, q: Point) -> bool {
        !self.is_empty() && ((self.a == p && self.b == q) || (self.a == q && self.b == p))
    }

    /// Euclidean distance, for display only.
    pub fn distance(&self) -> Option<f64> {
        self.pair().map(|_| (self.dsq as f64).sqrt())
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::EMPTY
    }
}

//! Seeded random point clouds for benches, tests, and the CLI `gen` command.
//!
//! Model
//! - Points are drawn inside an axis-aligned box `[lo, hi]²` according to a
//!   `Layout`: uniform, clustered around random centres, or on a single
//!   vertical/horizontal line (degenerate splits).
//! - Determinism uses a replay token `(seed, index)` mixed into one `StdRng`,
//!   so the i-th cloud of a sweep can be regenerated on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::cfg::COORD_MAX;
use crate::geom::Point;

/// Inclusive coordinate bounds shared by both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub lo: i32,
    pub hi: i32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            lo: -10_000,
            hi: 10_000,
        }
    }
}

impl Bounds {
    /// Clamp into `[-COORD_MAX, COORD_MAX]` and order the ends.
    fn normalized(self) -> Self {
        let lo = self.lo.clamp(-COORD_MAX, COORD_MAX);
        let hi = self.hi.clamp(-COORD_MAX, COORD_MAX);
        Self {
            lo: lo.min(hi),
            hi: lo.max(hi),
        }
    }

    #[inline]
    fn mid(&self) -> i32 {
        ((self.lo as i64 + self.hi as i64) / 2) as i32
    }
}

/// Spatial arrangement of a cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    Uniform,
    /// `clusters` centres, each point within `spread` of its centre per axis.
    Clustered { clusters: usize, spread: i32 },
    /// All points share the box's middle x-coordinate.
    VerticalLine,
    /// All points share the box's middle y-coordinate.
    HorizontalLine,
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudCfg {
    pub count: usize,
    pub bounds: Bounds,
    pub layout: Layout,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            bounds: Bounds::default(),
            layout: Layout::Uniform,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points. Equal tokens give equal clouds.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let b = cfg.bounds.normalized();
    let (lo, hi) = (b.lo, b.hi);
    match cfg.layout {
        Layout::Uniform => (0..cfg.count)
            .map(|_| Point::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi)))
            .collect(),
        Layout::Clustered { clusters, spread } => {
            let centres: Vec<Point> = (0..clusters.max(1))
                .map(|_| Point::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi)))
                .collect();
            let spread = spread.max(0);
            (0..cfg.count)
                .map(|_| {
                    let c = centres[rng.gen_range(0..centres.len())];
                    let jitter = |rng: &mut StdRng, v: i32| {
                        let d = rng.gen_range(-spread..=spread) as i64;
                        (v as i64 + d).clamp(lo as i64, hi as i64) as i32
                    };
                    let x = jitter(&mut rng, c.x);
                    let y = jitter(&mut rng, c.y);
                    Point::new(x, y)
                })
                .collect()
        }
        Layout::VerticalLine => {
            let x = b.mid();
            (0..cfg.count)
                .map(|_| Point::new(x, rng.gen_range(lo..=hi)))
                .collect()
        }
        Layout::HorizontalLine => {
            let y = b.mid();
            (0..cfg.count)
                .map(|_| Point::new(rng.gen_range(lo..=hi), y))
                .collect()
        }
    }
}

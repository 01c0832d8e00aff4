//! Timing probe: brute force vs divide and conquer on one uniform cloud.
//!
//! Usage: `cargo run --release -p closestpair --example timing -- [count] [seed]`

use std::time::Instant;

use closestpair::cloud::{draw_cloud, CloudCfg, ReplayToken};
use closestpair::{brute, efficient_with, SolverCfg};

fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(5_000);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let cfg = CloudCfg {
        count,
        ..CloudCfg::default()
    };
    let pts = draw_cloud(cfg, ReplayToken::new(seed, 0));

    let t0 = Instant::now();
    let (fast, stats) = efficient_with(&pts, SolverCfg::default());
    let fast_ms = t0.elapsed().as_secs_f64() * 1e3;

    let t1 = Instant::now();
    let slow = brute(&pts);
    let slow_ms = t1.elapsed().as_secs_f64() * 1e3;

    assert_eq!(fast.dsq, slow.dsq, "algorithms disagree");
    println!("count={count} seed={seed} dsq={}", fast.dsq);
    println!(
        "pair=({}, {}) ({}, {})",
        fast.a.x, fast.a.y, fast.b.x, fast.b.y
    );
    println!("efficient_ms={fast_ms:.3} brute_ms={slow_ms:.3}");
    println!(
        "base_cases={} max_depth={} strip_points={} strip_comparisons={}",
        stats.base_cases, stats.max_depth, stats.strip_points, stats.strip_comparisons
    );
}

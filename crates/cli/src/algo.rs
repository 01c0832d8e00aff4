//! Timed execution of the two closest-pair algorithms.

use std::time::Instant;

use anyhow::{bail, Result};
use clap::ValueEnum;
use closestpair::{brute, efficient_with, Outcome, Point, SolveStats, SolverCfg};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algo {
    Brute,
    Efficient,
    Both,
}

/// One algorithm run: outcome, wall time and (for the solver) counters.
#[derive(Clone, Debug, Serialize)]
pub struct Timed {
    pub algo: &'static str,
    pub outcome: Outcome,
    /// Euclidean distance, for display.
    pub distance: Option<f64>,
    pub elapsed_ms: f64,
    pub stats: Option<SolveStats>,
}

/// Reject inputs with no defined closest pair or with overflowing coordinates.
pub fn validate(points: &[Point]) -> Result<()> {
    if points.len() < 2 {
        bail!("need at least 2 points, got {}", points.len());
    }
    if let Some((i, p)) = points.iter().enumerate().find(|(_, p)| !p.in_range()) {
        bail!(
            "point {i} ({}, {}) exceeds ±{}",
            p.x,
            p.y,
            closestpair::COORD_MAX
        );
    }
    Ok(())
}

pub fn run_brute(points: &[Point]) -> Timed {
    let t0 = Instant::now();
    let outcome = brute(points);
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
    tracing::info!(n = points.len(), dsq = outcome.dsq, elapsed_ms, "brute");
    Timed {
        algo: "brute",
        outcome,
        distance: outcome.distance(),
        elapsed_ms,
        stats: None,
    }
}

pub fn run_efficient(points: &[Point], cfg: SolverCfg) -> Timed {
    let t0 = Instant::now();
    let (outcome, stats) = efficient_with(points, cfg);
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
    tracing::info!(
        n = points.len(),
        dsq = outcome.dsq,
        elapsed_ms,
        cutoff = cfg.cutoff,
        base_cases = stats.base_cases,
        max_depth = stats.max_depth,
        strip_points = stats.strip_points,
        strip_comparisons = stats.strip_comparisons,
        "efficient"
    );
    Timed {
        algo: "efficient",
        outcome,
        distance: outcome.distance(),
        elapsed_ms,
        stats: Some(stats),
    }
}

/// Validate, run the selected algorithm(s), and cross-check when both ran.
pub fn execute(algo: Algo, points: &[Point], cfg: SolverCfg) -> Result<Vec<Timed>> {
    validate(points)?;
    let runs = match algo {
        Algo::Brute => vec![run_brute(points)],
        Algo::Efficient => vec![run_efficient(points, cfg)],
        Algo::Both => {
            let fast = run_efficient(points, cfg);
            let slow = run_brute(points);
            if fast.outcome.dsq != slow.outcome.dsq {
                bail!(
                    "algorithms disagree: efficient dsq={} brute dsq={}",
                    fast.outcome.dsq,
                    slow.outcome.dsq
                );
            }
            vec![fast, slow]
        }
    };
    Ok(runs)
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use closestpair::cloud::{draw_cloud, Bounds, CloudCfg, Layout, ReplayToken};
use closestpair::SolverCfg;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod algo;
mod io;
mod provenance;

use algo::{run_brute, run_efficient, Algo};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "closestpair")]
#[command(about = "Closest-pair generator, runner and benchmark")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    Uniform,
    Clustered,
    Vline,
    Hline,
}

#[derive(Subcommand)]
enum Action {
    /// Draw a seeded point cloud and write it as CSV (x,y)
    Gen {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = -10_000, allow_negative_numbers = true)]
        lo: i32,
        #[arg(long, default_value_t = 10_000, allow_negative_numbers = true)]
        hi: i32,
        #[arg(long, value_enum, default_value_t = LayoutArg::Uniform)]
        layout: LayoutArg,
        /// Cluster count for `--layout clustered`
        #[arg(long, default_value_t = 8)]
        clusters: usize,
        /// Per-axis cluster radius for `--layout clustered`
        #[arg(long, default_value_t = 100)]
        spread: i32,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run an algorithm on a CSV point set and write a JSON result
    Run {
        #[arg(long, value_enum, default_value_t = Algo::Both)]
        algo: Algo,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Override the brute-force cutoff of the divide-and-conquer solver
        #[arg(long)]
        cutoff: Option<usize>,
    },
    /// Time brute force against divide and conquer over a size sweep
    Bench {
        #[arg(long, value_delimiter = ',', default_values_t = [100usize, 1_000, 10_000])]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Skip brute force above this size
        #[arg(long, default_value_t = 20_000)]
        brute_max: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Gen {
            count,
            seed,
            index,
            lo,
            hi,
            layout,
            clusters,
            spread,
            out,
        } => {
            let layout = match layout {
                LayoutArg::Uniform => Layout::Uniform,
                LayoutArg::Clustered => Layout::Clustered { clusters, spread },
                LayoutArg::Vline => Layout::VerticalLine,
                LayoutArg::Hline => Layout::HorizontalLine,
            };
            let cfg = CloudCfg {
                count,
                bounds: Bounds { lo, hi },
                layout,
            };
            generate(cfg, ReplayToken::new(seed, index), &out, cmd.tag)
        }
        Action::Run {
            algo,
            input,
            out,
            cutoff,
        } => {
            let cfg = cutoff.map(SolverCfg::with_cutoff).unwrap_or_default();
            run(algo, &input, &out, cfg, cmd.tag)
        }
        Action::Bench {
            sizes,
            seed,
            brute_max,
            out,
        } => bench(&sizes, seed, brute_max, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn generate(cfg: CloudCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(count = cfg.count, seed = tok.seed, index = tok.index, out = %out.display(), tag = ?tag, "generate");
    let points = draw_cloud(cfg, tok);
    io::write_points(out, &points)?;
    write_sidecar(out, Payload::new(json!({ "cloud": cfg, "token": tok }), tag))?;
    Ok(())
}

fn run(algo: Algo, input: &Path, out: &Path, cfg: SolverCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(algo = ?algo, input = %input.display(), out = %out.display(), tag = ?tag, "run");
    let points = io::read_points(input)?;
    tracing::info!(n = points.len(), "input_points");
    let runs = algo::execute(algo, &points, cfg)?;

    let doc = json!({
        "input": input.to_string_lossy(),
        "n": points.len(),
        "runs": runs,
    });
    write_json(out, &doc)?;
    write_sidecar(
        out,
        Payload::new(
            json!({
                "algo": algo,
                "input": input.to_string_lossy(),
                "cutoff": cfg.cutoff,
            }),
            tag,
        ),
    )?;
    Ok(())
}

#[derive(Serialize)]
struct BenchRow {
    n: usize,
    dsq: i64,
    efficient_ms: f64,
    brute_ms: Option<f64>,
    strip_points: usize,
    strip_comparisons: usize,
}

fn bench(sizes: &[usize], seed: u64, brute_max: usize, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(sizes = ?sizes, seed, brute_max, tag = ?tag, "bench");
    let mut rows = Vec::with_capacity(sizes.len());
    for &n in sizes {
        if n < 2 {
            tracing::warn!(n, "skipping size below 2");
            continue;
        }
        let cfg = CloudCfg {
            count: n,
            ..CloudCfg::default()
        };
        let points = draw_cloud(cfg, ReplayToken::new(seed, n as u64));
        let fast = run_efficient(&points, SolverCfg::default());
        let brute_ms = if n <= brute_max {
            let slow = run_brute(&points);
            anyhow::ensure!(
                slow.outcome.dsq == fast.outcome.dsq,
                "n={n}: efficient dsq={} brute dsq={}",
                fast.outcome.dsq,
                slow.outcome.dsq
            );
            Some(slow.elapsed_ms)
        } else {
            None
        };
        let stats = fast.stats.unwrap_or_default();
        rows.push(BenchRow {
            n,
            dsq: fast.outcome.dsq,
            efficient_ms: fast.elapsed_ms,
            brute_ms,
            strip_points: stats.strip_points,
            strip_comparisons: stats.strip_comparisons,
        });
    }
    write_json(out, &json!({ "rows": rows }))?;
    write_sidecar(
        out,
        Payload::new(
            json!({ "sizes": sizes, "seed": seed, "brute_max": brute_max }),
            tag,
        ),
    )?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::summary(tag))?);
    Ok(())
}

fn write_json(out: &Path, doc: &serde_json::Value) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

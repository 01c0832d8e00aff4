//! Provenance sidecars: `<stem>.provenance.json` next to every artifact.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value, tag: Option<String>) -> Self {
        Self { params, tag }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    tag: Option<String>,
    params: Value,
    outputs: [&'a Path; 1],
}

/// Solver constants and revision printed by `report`.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub code_rev: String,
    pub version: &'static str,
    pub cutoff: usize,
    pub coord_max: i32,
    pub tag: Option<String>,
}

/// Record how `artifact` was produced. The artifact's directory must exist.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: code_rev(),
        version: closestpair::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        tag: payload.tag,
        params: payload.params,
        outputs: [artifact],
    };
    let path = sidecar_path(artifact);
    std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

pub fn summary(tag: Option<String>) -> Summary {
    Summary {
        code_rev: code_rev(),
        version: closestpair::VERSION,
        cutoff: closestpair::CUTOFF,
        coord_max: closestpair::COORD_MAX,
        tag,
    }
}

/// `dir/points.csv` -> `dir/points.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse HEAD`.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .filter(|s| !s.is_empty())
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned())
}

//! Provenance for written artifacts: `<stem>.provenance.json` next to each output.

use anyhow::{Context, Result};
use polyhit::GeomCfg;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

#[derive(Serialize)]
pub struct Tolerances {
    pub eps_convex: f64,
    pub eps_collinear: f64,
}

impl From<GeomCfg> for Tolerances {
    fn from(cfg: GeomCfg) -> Self {
        Self {
            eps_convex: cfg.eps_convex,
            eps_collinear: cfg.eps_collinear,
        }
    }
}

/// The document written to a sidecar (and printed by `report`).
#[derive(Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub polyhit_version: &'static str,
    pub command: String,
    pub callsite: Callsite,
    pub tolerances: Tolerances,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    #[track_caller]
    pub fn new(command: &str, cfg: GeomCfg, params: Value) -> Self {
        let at = Location::caller();
        Self {
            code_rev: current_git_rev(),
            polyhit_version: polyhit::VERSION,
            command: command.to_string(),
            callsite: Callsite {
                file: at.file(),
                line: at.line(),
            },
            tolerances: cfg.into(),
            params,
            outputs: Vec::new(),
        }
    }
}

/// Record `artifact` as the output and write the sidecar; returns its path.
pub fn write_sidecar(artifact: &Path, mut doc: Provenance) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    doc.outputs = vec![artifact.to_string_lossy().into_owned()];
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(sidecar = %path.display(), "provenance_written");
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "artifact".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    let build = option_env!("GIT_COMMIT").map(str::to_string);
    let run = std::env::var("GIT_COMMIT").ok();
    if let Some(rev) = build.into_iter().chain(run).find(|r| !r.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/out/hull.csv")),
            Path::new("/tmp/out/hull.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_output_and_tolerances() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("tri.json");
        fs::write(&artifact, "{}").unwrap();
        let cfg = GeomCfg {
            eps_convex: 1e-6,
            ..GeomCfg::default()
        };
        let doc = Provenance::new("triangulate", cfg, json!({"input": "in.json"}));
        let path = write_sidecar(&artifact, doc).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "triangulate");
        assert_eq!(parsed["tolerances"]["eps_convex"], 1e-6);
        assert_eq!(parsed["params"]["input"], "in.json");
        assert!(parsed["callsite"]["file"].as_str().unwrap().ends_with("provenance.rs"));
    }
}

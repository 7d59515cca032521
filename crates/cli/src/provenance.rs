//! `<stem>.provenance.json` sidecars for hull artifacts.
//!
//! A sidecar names the code revision, the command and callsite that wrote the
//! artifact, the input tables, and the hull it contains.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Size of the hull stored in an artifact.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct HullStats {
    pub points: usize,
    pub hull_size: usize,
}

/// What the caller knows about an artifact.
pub struct Payload {
    pub command: &'static str,
    pub inputs: Vec<String>,
    pub hull: Option<HullStats>,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            inputs: Vec::new(),
            hull: None,
            params: Value::Null,
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }

    pub fn with_hull(mut self, points: usize, hull_size: usize) -> Self {
        self.hull = Some(HullStats { points, hull_size });
        self
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = params;
        self
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
    dchull_version: &'static str,
    command: &'static str,
    callsite: Callsite,
    inputs: &'a [String],
    outputs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hull: Option<HullStats>,
    #[serde(skip_serializing_if = "is_null")]
    params: &'a Value,
}

fn is_null(v: &&Value) -> bool {
    v.is_null()
}

/// Write the sidecar next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let callsite = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        dchull_version: dchull::VERSION,
        command: payload.command,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        inputs: &payload.inputs,
        outputs: vec![artifact.to_string_lossy().into_owned()],
        hull: payload.hull,
        params: &payload.params,
    };

    let path = sidecar_path(artifact);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/hull.csv` → `out/hull.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit hash: build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then
/// `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
                .and_then(non_empty)
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/hull.csv")),
            Path::new("/tmp/output/hull.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("hull.parquet")),
            Path::new("hull.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_hull_and_inputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hull.csv");
        fs::write(&artifact, "x,y\n").unwrap();
        let payload = Payload::new("run")
            .with_input("points.csv")
            .with_hull(6, 4);
        let path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "run");
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["inputs"][0], "points.csv");
        assert_eq!(parsed["hull"], json!({"points": 6, "hull_size": 4}));
        assert_eq!(parsed["dchull_version"], dchull::VERSION);
        // unset params are left out
        assert!(parsed.get("params").is_none());
    }

    #[test]
    fn sidecar_keeps_extra_params() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hull.parquet");
        let payload = Payload::new("run").with_params(json!({"eps": 0.0}));
        let path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["params"]["eps"], 0.0);
        assert!(parsed.get("hull").is_none());
    }
}

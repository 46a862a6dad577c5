//! Provenance sidecars for edge files written by the CLI.
//!
//! Every artifact `<dir>/<stem>.<ext>` gets `<dir>/<stem>.provenance.json`
//! recording which operation produced it, from how many edges, and with which
//! sampler or run parameters.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Producing command of an edge artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Dedup,
    Sample,
}

/// What the caller knows about one written artifact.
#[derive(Debug)]
pub struct Payload {
    pub op: Op,
    /// Edges read from the input file; `None` for generated artifacts.
    pub edges_in: Option<usize>,
    pub edges_out: usize,
    pub params: Value,
    pub tags: Vec<String>,
}

impl Payload {
    pub fn new(op: Op, edges_out: usize, params: Value) -> Self {
        Self {
            op,
            edges_in: None,
            edges_out,
            params,
            tags: Vec::new(),
        }
    }

    pub fn with_input(mut self, edges_in: usize) -> Self {
        self.edges_in = Some(edges_in);
        self
    }

    pub fn with_tag(mut self, tag: Option<&str>) -> Self {
        self.tags.extend(tag.map(str::to_string));
        self
    }
}

#[derive(Serialize)]
struct Callsite<'a> {
    file: &'a str,
    line: u32,
}

/// On-disk sidecar document.
#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'a str,
    callsite: Callsite<'a>,
    op: Op,
    #[serde(skip_serializing_if = "Option::is_none")]
    edges_in: Option<usize>,
    edges_out: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    removed: Option<usize>,
    tags: &'a [String],
    params: &'a Value,
    artifact: String,
}

/// Write the sidecar next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    let callsite = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        version: visualaiz::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        op: payload.op,
        edges_in: payload.edges_in,
        edges_out: payload.edges_out,
        removed: payload
            .edges_in
            .map(|n| n.saturating_sub(payload.edges_out)),
        tags: &payload.tags,
        params: &payload.params,
        artifact: artifact.to_string_lossy().into_owned(),
    };
    // artifact was just written, so its directory exists
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("edges"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build time, then run time), else `git rev-parse`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
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
        let derived = sidecar_path(Path::new("/tmp/output/edges.csv"));
        assert_eq!(derived, Path::new("/tmp/output/edges.provenance.json"));
    }

    #[test]
    fn dedup_sidecar_records_counts_and_tags() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("unique.json");
        fs::write(&artifact, "[]").unwrap();
        let payload = Payload::new(Op::Dedup, 2, json!({"input": "in.json"}))
            .with_input(5)
            .with_tag(Some("smoke"));
        let path = write_sidecar(&artifact, payload).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["op"], "dedup");
        assert_eq!(doc["edges_in"], 5);
        assert_eq!(doc["edges_out"], 2);
        assert_eq!(doc["removed"], 3);
        assert_eq!(doc["tags"][0], "smoke");
        assert_eq!(doc["params"]["input"], "in.json");
        assert_eq!(doc["artifact"], artifact.to_string_lossy().as_ref());
    }

    #[test]
    fn sample_sidecar_omits_input_counts() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("soup.csv");
        fs::write(&artifact, "ax,ay,bx,by\n").unwrap();
        let path = write_sidecar(&artifact, Payload::new(Op::Sample, 0, json!({}))).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["op"], "sample");
        assert!(doc.get("edges_in").is_none());
        assert!(doc.get("removed").is_none());
        assert_eq!(doc["tags"], json!([]));
    }
}

//! Provenance sidecars for CLI artifacts.
//!
//! Every file the CLI writes (`pair.json`, `figure.svg`, `datos.txt`) gets a
//! sibling `<stem>.provenance.json` describing which command produced it, from
//! which input, and what the search found.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// What a command did, recorded next to its artifact.
#[derive(Debug, Default, Serialize)]
pub struct RunRecord {
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algo: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Number of points read or generated.
    pub n: usize,
    /// Closest-pair distance, when the command ran a search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud: Option<CloudRecord>,
}

/// Generator settings for `gen` outputs, enough to redraw the same cloud.
#[derive(Debug, Serialize)]
pub struct CloudRecord {
    pub seed: u64,
    pub index: u64,
    pub lo: f64,
    pub hi: f64,
    pub integer: bool,
}

#[derive(Debug, Serialize)]
pub struct Sidecar<'a> {
    pub code_rev: String,
    pub closest_version: &'static str,
    #[serde(flatten)]
    pub run: &'a RunRecord,
    pub outputs: Vec<String>,
}

impl<'a> Sidecar<'a> {
    pub fn new(run: &'a RunRecord, outputs: Vec<String>) -> Self {
        Self {
            code_rev: code_rev(),
            closest_version: closest::VERSION,
            run,
            outputs,
        }
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`.
pub fn write_sidecar(artifact: &Path, run: &RunRecord) -> Result<PathBuf> {
    let path = artifact.with_extension("provenance.json");
    let doc = Sidecar::new(run, vec![artifact.to_string_lossy().into_owned()]);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), command = run.command, "sidecar");
    Ok(path)
}

/// Commit id from `GIT_COMMIT` (build time, then run time), else `"unknown"`.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_owned())
}

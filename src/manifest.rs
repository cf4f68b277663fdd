//! Manifest builder.
//!
//! Lists the regular files of a directory that pass the configured extension filter
//! and writes their sorted names as a JSON array. The manifest is rebuilt from scratch
//! on every run and replaced atomically, so a failed run never leaves a partial file.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{Config, JsonStyle};
use crate::fs_ops::list_files;
use crate::output as out;
use crate::platform::atomic_write;

/// Outcome of one manifest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSummary {
    pub path: PathBuf,
    pub files: Vec<String>,
}

impl ManifestSummary {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

/// Where the manifest for `dir` lands: `output_path` itself if absolute, else joined onto `dir`.
pub fn manifest_path(dir: &Path, cfg: &Config) -> PathBuf {
    dir.join(&cfg.output_path)
}

/// Sorted, filtered names for the manifest. The manifest file itself is never listed.
pub fn collect(dir: &Path, cfg: &Config) -> Result<Vec<String>> {
    let mut names = list_files(dir, &cfg.extension_filter)?;
    if let Some(own) = own_entry_name(dir, &manifest_path(dir, cfg)) {
        names.retain(|n| *n != own);
    }
    Ok(names)
}

/// Name of `manifest` inside `dir`, if the manifest lives directly in that directory.
fn own_entry_name(dir: &Path, manifest: &Path) -> Option<String> {
    let name = manifest.file_name()?.to_str()?.to_string();
    let parent = crate::platform::parent_or_cwd(manifest);
    let same_dir = match (dunce::canonicalize(dir), dunce::canonicalize(parent)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };
    same_dir.then_some(name)
}

/// Serialize names as a JSON array. Non-ASCII characters are written as UTF-8, not escaped.
pub fn render(names: &[String], style: JsonStyle) -> Result<String> {
    let json = match style {
        JsonStyle::Compact => serde_json::to_string(names),
        JsonStyle::Pretty => serde_json::to_string_pretty(names),
    }
    .context("serialize manifest")?;
    Ok(json)
}

/// Atomically replace `path` with the JSON array of `names`.
pub fn write_manifest(path: &Path, names: &[String], style: JsonStyle) -> Result<()> {
    let json = render(names, style)?;
    atomic_write(path, json.as_bytes())
        .with_context(|| format!("Failed to write manifest '{}'", path.display()))?;
    debug!(path = %path.display(), count = names.len(), %style, "Manifest written");
    Ok(())
}

/// Load a manifest written by [`write_manifest`].
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest '{}'", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Manifest '{}' is not a JSON array of strings", path.display()))
}

/// List `dir`, write the manifest and print a count summary.
pub fn build_manifest(dir: &Path, cfg: &Config) -> Result<ManifestSummary> {
    let files = collect(dir, cfg)?;
    let path = manifest_path(dir, cfg);
    write_manifest(&path, &files, cfg.json_style)?;

    info!(path = %path.display(), count = files.len(), filter = %cfg.extension_filter, "Manifest built");
    out::print_success(&format!(
        "JSON written: {} files -> {}",
        files.len(),
        cfg.output_path.display()
    ));
    Ok(ManifestSummary { path, files })
}

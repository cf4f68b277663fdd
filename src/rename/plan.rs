//! Rename planning and preview.

use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::ExtensionFilter;
use crate::errors::MediaDirError;
use crate::fs_ops::{ensure_directory, list_files, resolve_unique};
use crate::output as out;

/// One file to rename: `original` becomes `resolved`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub original: String,
    pub resolved: String,
}

/// A prefixed file and the name left after stripping the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub original: String,
    pub stripped: String,
}

/// Files carrying the prefix, in name order, plus the ones that would end up nameless.
#[derive(Debug, Default)]
pub(crate) struct Candidates {
    pub renamable: Vec<Candidate>,
    pub skipped: Vec<String>,
}

/// Find the files in `dir` whose names start with `prefix`.
///
/// A file whose whole name is the prefix is skipped with a warning.
pub(crate) fn find_candidates(dir: &Path, prefix: &str) -> Result<Candidates> {
    if prefix.is_empty() {
        return Err(MediaDirError::EmptyPrefix.into());
    }
    ensure_directory(dir)?;

    let mut found = Candidates::default();
    for name in list_files(dir, &ExtensionFilter::any())? {
        let Some(stripped) = name.strip_prefix(prefix) else {
            continue;
        };
        if stripped.is_empty() {
            warn!(file = %name, "Name is empty after stripping the prefix; skipping");
            out::print_warn(&format!(
                "Name is empty after stripping the prefix, skipping '{name}'"
            ));
            found.skipped.push(name);
            continue;
        }
        let stripped = stripped.to_string();
        found.renamable.push(Candidate {
            original: name,
            stripped,
        });
    }
    debug!(
        dir = %dir.display(),
        prefix,
        renamable = found.renamable.len(),
        skipped = found.skipped.len(),
        "Collected rename candidates"
    );
    Ok(found)
}

/// The mapping a run would produce, resolved against names chosen in this run only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    pub prefix: String,
    pub entries: Vec<PlanEntry>,
    /// Files skipped because nothing remains after the prefix.
    pub skipped: Vec<String>,
}

impl RenamePlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Build the rename plan for `dir` without touching the filesystem.
///
/// Collisions are resolved only against names already assigned in this plan,
/// so the plan can differ from an applied run when unrelated files already use a name.
pub fn plan_renames(dir: &Path, prefix: &str) -> Result<RenamePlan> {
    let found = find_candidates(dir, prefix)?;
    let mut used: HashSet<String> = HashSet::with_capacity(found.renamable.len());
    let entries = found
        .renamable
        .into_iter()
        .map(|c| {
            let resolved = resolve_unique(&c.stripped, &used);
            used.insert(resolved.clone());
            PlanEntry {
                original: c.original,
                resolved,
            }
        })
        .collect();
    Ok(RenamePlan {
        prefix: prefix.to_string(),
        entries,
        skipped: found.skipped,
    })
}

/// Print the mapping and the total.
pub fn print_plan(plan: &RenamePlan) {
    if plan.is_empty() {
        out::print_info(&format!(
            "No files starting with '{}' were found.",
            plan.prefix
        ));
        return;
    }
    out::print_user("Planned renames:");
    out::print_rule();
    for e in &plan.entries {
        out::print_user(&format!("'{}' -> '{}'", e.original, e.resolved));
    }
    out::print_rule();
    out::print_user(&format!("{} files will be renamed", plan.len()));
}

/// Plan and print. Makes no filesystem changes.
pub fn preview(dir: &Path, prefix: &str) -> Result<RenamePlan> {
    let plan = plan_renames(dir, prefix)?;
    print_plan(&plan);
    Ok(plan)
}

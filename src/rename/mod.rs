//! Prefix renamer.
//!
//! Strips a fixed prefix from file names in one directory. Collisions get a `_N`
//! suffix before the extension (see [`crate::fs_ops::resolve_unique`]).
//!
//! Flow of an interactive session: ask for the prefix, preview, confirm, apply.
//! Every question goes through a [`Prompt`] so the flow is scriptable.

mod apply;
mod plan;

pub use apply::{RenameFailure, RenameReport, apply_renames};
pub use plan::{PlanEntry, RenamePlan, plan_renames, preview, print_plan};

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::fs_ops::ensure_directory;
use crate::output as out;
use crate::prompt::{Prompt, ask_prefix, confirm};
use crate::shutdown;

/// Knobs for a session that the CLI can set instead of asking.
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    /// Use this prefix instead of prompting for one.
    pub prefix: Option<String>,
    /// Skip the confirmation question.
    pub assume_yes: bool,
    /// Stop after printing the preview.
    pub preview_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    PreviewOnly,
    NothingToRename,
    Cancelled,
    Applied(RenameReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameSession {
    pub prefix: String,
    pub plan: RenamePlan,
    pub outcome: SessionOutcome,
}

/// Run the full prefix-stripping session against `dir`.
///
/// A missing target directory is returned as [`crate::MediaDirError::DirectoryNotFound`]
/// before anything is asked or changed.
pub fn run_session<P: Prompt + ?Sized>(
    dir: &Path,
    cfg: &Config,
    prompt: &mut P,
    opts: &RenameOptions,
) -> Result<RenameSession> {
    ensure_directory(dir)?;

    let prefix = match &opts.prefix {
        Some(p) => p.clone(),
        None => {
            out::print_info(&format!("Default prefix: {}", cfg.default_prefix));
            let answer =
                ask_prefix(prompt, &cfg.default_prefix).context("Failed to read the prefix")?;
            shutdown::check()?;
            answer
        }
    };
    out::print_info(&format!("Prefix to strip: '{prefix}'"));
    info!(dir = %dir.display(), prefix = %prefix, "Rename session started");

    out::print_user("");
    out::print_user("1. Previewing changes...");
    let plan = preview(dir, &prefix)?;

    let outcome = if opts.preview_only {
        SessionOutcome::PreviewOnly
    } else if plan.is_empty() {
        SessionOutcome::NothingToRename
    } else if !opts.assume_yes && !confirmed(prompt)? {
        out::print_user("Operation cancelled.");
        SessionOutcome::Cancelled
    } else {
        out::print_user("");
        out::print_user("2. Renaming...");
        SessionOutcome::Applied(apply_renames(dir, &prefix)?)
    };

    Ok(RenameSession {
        prefix,
        plan,
        outcome,
    })
}

/// Ask for confirmation; an interrupt while asking aborts the session.
fn confirmed<P: Prompt + ?Sized>(prompt: &mut P) -> Result<bool> {
    let yes = confirm(prompt, "\nProceed with renaming?").context("Failed to read confirmation")?;
    shutdown::check()?;
    Ok(yes)
}

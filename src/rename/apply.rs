//! Applying renames against the live directory.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

use crate::fs_ops::{DirNames, resolve_unique};
use crate::output as out;
use crate::shutdown;

use super::plan::{PlanEntry, find_candidates};

/// A rename that could not be performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameFailure {
    pub original: String,
    pub target: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub renamed: Vec<PlanEntry>,
    pub failures: Vec<RenameFailure>,
    pub skipped: Vec<String>,
    /// Set when Ctrl-C stopped the run; renames already done are kept.
    pub interrupted: bool,
}

impl RenameReport {
    pub fn renamed_count(&self) -> usize {
        self.renamed.len()
    }
}

/// Strip `prefix` from every matching file in `dir`, one file at a time.
///
/// Each target name is checked against the directory as it is at that moment, so a
/// file renamed earlier in the run takes its name away from later files. A failed
/// rename is reported and the run moves on.
pub fn apply_renames(dir: &Path, prefix: &str) -> Result<RenameReport> {
    let found = find_candidates(dir, prefix)?;
    let mut report = RenameReport {
        skipped: found.skipped,
        ..Default::default()
    };
    let names = DirNames::new(dir);

    for candidate in found.renamable {
        if let Err(e) = shutdown::check() {
            warn!(file = %candidate.original, error = %e, "Remaining files left untouched");
            out::print_warn("Interrupted; remaining files were left untouched.");
            report.interrupted = true;
            break;
        }

        let resolved = resolve_unique(&candidate.stripped, &names);
        match fs::rename(dir.join(&candidate.original), dir.join(&resolved)) {
            Ok(()) => {
                info!(from = %candidate.original, to = %resolved, "Renamed");
                out::print_success(&format!(
                    "Renamed '{}' -> '{}'",
                    candidate.original, resolved
                ));
                report.renamed.push(PlanEntry {
                    original: candidate.original,
                    resolved,
                });
            }
            Err(e) => {
                error!(file = %candidate.original, target = %resolved, error = %e, "Rename failed");
                out::print_error(&format!("Cannot rename '{}': {e}", candidate.original));
                report.failures.push(RenameFailure {
                    original: candidate.original,
                    target: resolved,
                    error: e.to_string(),
                });
            }
        }
    }

    out::print_user("");
    out::print_user(&format!("Done! Renamed {} files.", report.renamed_count()));
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use predicates::prelude::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn existing_target_gets_numbered_suffix() {
        shutdown::reset();
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("2-XP01-_2025-a.mp4").write_str("a").unwrap();
        dir.child("2-XP01-_2025-b.mp4").write_str("new b").unwrap();
        dir.child("b.mp4").write_str("old b").unwrap();

        let report = apply_renames(dir.path(), "2-XP01-_2025-").unwrap();
        assert_eq!(report.renamed_count(), 2);
        dir.child("a.mp4").assert("a");
        dir.child("b.mp4").assert("old b");
        dir.child("b_1.mp4").assert("new b");
        dir.child("2-XP01-_2025-a.mp4").assert(predicate::path::missing());
    }

    #[test]
    #[serial]
    fn targets_are_checked_against_live_directory() {
        shutdown::reset();
        let dir = assert_fs::TempDir::new().unwrap();
        // "x-a" moves away first, which frees its name for "xx-a".
        dir.child("x-a").write_str("1").unwrap();
        dir.child("xx-a").write_str("2").unwrap();
        dir.child("-a").write_str("0").unwrap();

        let report = apply_renames(dir.path(), "x").unwrap();
        let got: Vec<(String, String)> = report
            .renamed
            .iter()
            .map(|e| (e.original.clone(), e.resolved.clone()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("x-a".to_string(), "-a_1".to_string()),
                ("xx-a".to_string(), "x-a".to_string()),
            ]
        );
        dir.child("-a").assert("0");
        dir.child("-a_1").assert("1");
        dir.child("x-a").assert("2");
    }

    #[test]
    #[serial]
    fn interrupted_run_renames_nothing_further() {
        shutdown::reset();
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("p-one.mp4").touch().unwrap();
        shutdown::request();
        let report = apply_renames(dir.path(), "p-").unwrap();
        shutdown::reset();
        assert!(report.interrupted);
        assert!(report.renamed.is_empty());
        dir.child("p-one.mp4").assert(predicate::path::exists());
    }
}

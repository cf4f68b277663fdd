//! Batch publisher.
//!
//! Stages matching files in fixed-size batches and, per batch, runs
//! stage -> commit -> push against a [`VersionControl`] implementation.
//! A failing step abandons only its own batch; the run always continues with
//! the next batch and never retries.

mod batch;
mod vcs;

pub use batch::{Batch, batch_count, partition};
pub use vcs::{DryRunVcs, GitCli, VcsError, VcsStep, VersionControl};

use anyhow::Result;
use std::path::Path;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::fs_ops::list_files;
use crate::output as out;
use crate::shutdown;

/// What happened to one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Published,
    Failed { step: VcsStep, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub index: usize,
    pub files: usize,
    pub outcome: BatchOutcome,
}

/// Result of a publish run, one entry per attempted batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    pub total_files: usize,
    pub batches: Vec<BatchReport>,
    /// Set when Ctrl-C stopped the run before every batch was attempted.
    pub interrupted: bool,
}

impl PublishReport {
    pub fn published(&self) -> usize {
        self.batches
            .iter()
            .filter(|b| b.outcome == BatchOutcome::Published)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.batches.len() - self.published()
    }

    pub fn failed_indices(&self) -> Vec<usize> {
        self.batches
            .iter()
            .filter(|b| b.outcome != BatchOutcome::Published)
            .map(|b| b.index)
            .collect()
    }
}

/// Run the three steps for one batch, stopping at the first failure.
pub fn publish_batch<V: VersionControl + ?Sized>(
    vcs: &mut V,
    batch: &Batch<'_>,
    cfg: &Config,
) -> Result<(), VcsError> {
    vcs.stage(batch.files)?;
    vcs.commit(&cfg.commit_message(batch.index))?;
    vcs.push()
}

/// Publish an already-listed set of files. Failures are reported per batch, never raised.
pub fn publish_files<V: VersionControl + ?Sized>(
    vcs: &mut V,
    files: &[String],
    cfg: &Config,
) -> PublishReport {
    let mut report = PublishReport {
        total_files: files.len(),
        ..Default::default()
    };

    for batch in partition(files, cfg.batch_size) {
        if let Err(e) = shutdown::check() {
            warn!(batch = batch.index, error = %e, "Remaining batches not attempted");
            out::print_warn(&format!(
                "Interrupted before batch {}; remaining batches were not attempted.",
                batch.index
            ));
            report.interrupted = true;
            break;
        }

        out::print_user("");
        out::print_info(&format!(
            "Committing and pushing batch {} with {} files",
            batch.index,
            batch.len()
        ));

        let outcome = match publish_batch(vcs, &batch, cfg) {
            Ok(()) => {
                info!(batch = batch.index, files = batch.len(), "Batch published");
                BatchOutcome::Published
            }
            Err(e) => {
                error!(batch = batch.index, step = %e.step(), error = %e, "Batch failed");
                out::print_error(&format!("Error in batch {}, skipping... ({e})", batch.index));
                BatchOutcome::Failed {
                    step: e.step(),
                    error: e.to_string(),
                }
            }
        };
        report.batches.push(BatchReport {
            index: batch.index,
            files: batch.len(),
            outcome,
        });
    }

    print_summary(&report);
    report
}

fn print_summary(report: &PublishReport) {
    out::print_user("");
    if report.failed() == 0 && !report.interrupted {
        out::print_success("All batches committed and pushed.");
    } else {
        out::print_warn(&format!(
            "Finished: {} of {} batches published, {} failed (batches: {:?}).",
            report.published(),
            report.batches.len(),
            report.failed(),
            report.failed_indices()
        ));
    }
}

/// List `dir` with the publish extensions and publish the result.
/// An empty listing is reported and performs no version-control calls.
pub fn publish_dir<V: VersionControl + ?Sized>(
    dir: &Path,
    cfg: &Config,
    vcs: &mut V,
) -> Result<PublishReport> {
    let files = list_files(dir, &cfg.publish_extensions)?;
    out::print_info(&format!(
        "Found {} files matching {}",
        files.len(),
        cfg.publish_extensions
    ));

    if files.is_empty() {
        out::print_info("No matching files found.");
        return Ok(PublishReport::default());
    }

    info!(
        files = files.len(),
        batches = batch_count(files.len(), cfg.batch_size),
        batch_size = cfg.batch_size,
        "Publishing"
    );
    Ok(publish_files(vcs, &files, cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Records every call; fails `stage` for the listed batch numbers.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        fail_stage_on: Vec<usize>,
        stages: usize,
    }

    impl VersionControl for Recorder {
        fn stage(&mut self, files: &[String]) -> Result<(), VcsError> {
            self.stages += 1;
            self.calls.push(format!("stage {}", files.len()));
            if self.fail_stage_on.contains(&self.stages) {
                return Err(VcsError::Rejected {
                    step: VcsStep::Stage,
                    reason: "simulated".into(),
                });
            }
            Ok(())
        }

        fn commit(&mut self, message: &str) -> Result<(), VcsError> {
            self.calls.push(format!("commit {message}"));
            Ok(())
        }

        fn push(&mut self) -> Result<(), VcsError> {
            self.calls.push("push".into());
            Ok(())
        }
    }

    fn files(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{i:03}.mp4")).collect()
    }

    #[test]
    #[serial]
    fn steps_run_in_order_per_batch() {
        shutdown::reset();
        let cfg = Config {
            batch_size: 2,
            ..Default::default()
        };
        let mut rec = Recorder::default();
        let report = publish_files(&mut rec, &files(3), &cfg);
        assert_eq!(
            rec.calls,
            vec![
                "stage 2",
                "commit Add batch 1",
                "push",
                "stage 1",
                "commit Add batch 2",
                "push"
            ]
        );
        assert_eq!(report.published(), 2);
        assert!(!report.interrupted);
    }

    #[test]
    #[serial]
    fn failed_stage_skips_rest_of_that_batch_only() {
        shutdown::reset();
        let cfg = Config {
            batch_size: 1,
            ..Default::default()
        };
        let mut rec = Recorder {
            fail_stage_on: vec![2],
            ..Default::default()
        };
        let report = publish_files(&mut rec, &files(3), &cfg);
        assert_eq!(rec.stages, 3);
        assert!(!rec.calls.contains(&"commit Add batch 2".to_string()));
        assert!(rec.calls.contains(&"commit Add batch 3".to_string()));
        assert_eq!(report.failed_indices(), vec![2]);
        assert!(matches!(
            report.batches[1].outcome,
            BatchOutcome::Failed { step: VcsStep::Stage, .. }
        ));
    }

    #[test]
    #[serial]
    fn interrupt_stops_before_next_batch() {
        shutdown::reset();
        shutdown::request();
        let mut rec = Recorder::default();
        let report = publish_files(&mut rec, &files(5), &Config::default());
        shutdown::reset();
        assert!(rec.calls.is_empty());
        assert!(report.interrupted);
        assert!(report.batches.is_empty());
    }
}

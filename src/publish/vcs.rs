//! Version-control collaborator.
//!
//! The publisher only needs three operations: stage named files, commit, push.
//! `GitCli` shells out to `git` with inherited stdio so the user sees git's own output;
//! any non-zero exit is a failure of that step.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::debug;

use crate::output as out;

/// One step of the per-batch publish sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsStep {
    Stage,
    Commit,
    Push,
}

impl fmt::Display for VcsStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VcsStep::Stage => "stage",
            VcsStep::Commit => "commit",
            VcsStep::Push => "push",
        })
    }
}

#[derive(Debug, Error)]
pub enum VcsError {
    #[error("could not run {program} for {step}: {source}")]
    Spawn {
        step: VcsStep,
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} {step} failed with {status}")]
    Failed {
        step: VcsStep,
        program: String,
        status: ExitStatus,
    },

    #[error("{step} rejected: {reason}")]
    Rejected { step: VcsStep, reason: String },
}

impl VcsError {
    pub fn step(&self) -> VcsStep {
        match self {
            VcsError::Spawn { step, .. }
            | VcsError::Failed { step, .. }
            | VcsError::Rejected { step, .. } => *step,
        }
    }
}

/// Capability the publisher drives. Each call blocks until the step finishes.
pub trait VersionControl {
    fn stage(&mut self, files: &[String]) -> Result<(), VcsError>;
    fn commit(&mut self, message: &str) -> Result<(), VcsError>;
    fn push(&mut self) -> Result<(), VcsError>;
}

/// Runs the `git` executable inside a working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: OsString::from("git"),
            workdir: workdir.into(),
        }
    }

    /// Use a different executable (a wrapper script, an absolute path to git, ...).
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    fn run<I, S>(&self, step: VcsStep, args: I) -> Result<(), VcsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let program = self.program.to_string_lossy().into_owned();
        let mut cmd = Command::new(&self.program);
        cmd.args(args).current_dir(&self.workdir);
        debug!(%step, command = ?cmd, "Running version control step");

        let status = cmd.status().map_err(|source| VcsError::Spawn {
            step,
            program: program.clone(),
            source,
        })?;
        if status.success() {
            Ok(())
        } else {
            Err(VcsError::Failed {
                step,
                program,
                status,
            })
        }
    }
}

impl VersionControl for GitCli {
    fn stage(&mut self, files: &[String]) -> Result<(), VcsError> {
        let args = ["add", "--"]
            .into_iter()
            .map(String::from)
            .chain(files.iter().cloned());
        self.run(VcsStep::Stage, args)
    }

    fn commit(&mut self, message: &str) -> Result<(), VcsError> {
        self.run(VcsStep::Commit, ["commit", "-m", message])
    }

    fn push(&mut self) -> Result<(), VcsError> {
        self.run(VcsStep::Push, ["push"])
    }
}

/// Prints the git commands a real run would execute and always succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunVcs;

impl VersionControl for DryRunVcs {
    fn stage(&mut self, files: &[String]) -> Result<(), VcsError> {
        out::print_user(&format!("Dry-run: git add -- {}", files.join(" ")));
        Ok(())
    }

    fn commit(&mut self, message: &str) -> Result<(), VcsError> {
        out::print_user(&format!("Dry-run: git commit -m \"{message}\""));
        Ok(())
    }

    fn push(&mut self) -> Result<(), VcsError> {
        out::print_user("Dry-run: git push");
        Ok(())
    }
}

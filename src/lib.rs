//! Core library for `mediadir`.
//!
//! Three independent utilities for a directory of media files:
//! - [`manifest`]: write the sorted, filtered file names as a JSON array.
//! - [`publish`]: stage, commit and push files in fixed-size batches.
//! - [`rename`]: strip a prefix from file names, numbering collisions.
//!
//! They share only the ambient pieces: [`Config`], console output, logging helpers
//! and the shutdown flag.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod manifest;
pub mod output;
pub mod platform;
pub mod prompt;
pub mod publish;
pub mod rename;
pub mod shutdown;

pub use config::{
    Config, ExtensionFilter, JsonStyle, LogLevel, default_log_path, path_has_symlink_ancestor,
};
pub use errors::MediaDirError;
pub use manifest::{ManifestSummary, build_manifest, read_manifest, write_manifest};
pub use prompt::{Prompt, ScriptedPrompt, TerminalPrompt};
pub use publish::{GitCli, PublishReport, VersionControl, publish_dir, publish_files};
pub use rename::{RenameOptions, RenameSession, SessionOutcome, run_session};

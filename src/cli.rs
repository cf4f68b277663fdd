//! CLI definition and parsing.
//! Defines Args (global logging flags plus one subcommand per utility) and parse().
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug and wins over it.
//! - Flags left unset keep the defaults from `Config::default()`.
//! - An unrecognized log level is reported and ignored.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::default_log_path;
use crate::config::types::{Config, ExtensionFilter, JsonStyle, LogLevel};
use crate::output as out;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Manifest, publish and rename media files in a directory"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        global = true,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(
        long,
        global = true,
        env = "MEDIADIR_LOG_LEVEL",
        help = "Set log level: quiet, normal, info, debug"
    )]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Also append logs to a file; without a value the OS data directory is used.
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        help = "Append logs to a file (default location when no PATH is given)"
    )]
    pub log_file: Option<Option<PathBuf>>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write the sorted names of matching files in the current directory as a JSON array.
    Manifest(ManifestArgs),
    /// Stage, commit and push matching files of the current directory in batches.
    Publish(PublishArgs),
    /// Strip a prefix from file names, numbering any collisions.
    Rename(RenameArgs),
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ManifestArgs {
    /// Extension to include (repeatable); defaults to .mp4 and .mov.
    #[arg(long = "ext", value_name = "EXT", conflicts_with = "all")]
    pub extensions: Vec<String>,

    /// Include every regular file.
    #[arg(long)]
    pub all: bool,

    /// Match extensions ignoring ASCII case (.MOV matches .mov).
    #[arg(long)]
    pub ignore_case: bool,

    /// Manifest file to write.
    #[arg(
        short = 'o',
        long,
        env = "MEDIADIR_MANIFEST",
        value_hint = ValueHint::FilePath
    )]
    pub output: Option<PathBuf>,

    /// Indent the JSON with two spaces.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct PublishArgs {
    /// Extension to publish (repeatable); defaults to .mp4 and .mov.
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Match extensions ignoring ASCII case.
    #[arg(long)]
    pub ignore_case: bool,

    /// Maximum number of files per commit.
    #[arg(long, env = "MEDIADIR_BATCH_SIZE")]
    pub batch_size: Option<usize>,

    /// Commit message prefix; the batch number is appended.
    #[arg(long, env = "MEDIADIR_COMMIT_PREFIX")]
    pub commit_prefix: Option<String>,

    /// Print the git commands instead of running them.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RenameArgs {
    /// Directory holding the files to rename.
    #[arg(value_name = "DIR", default_value = ".", value_hint = ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Prefix to strip; asked interactively when omitted.
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Rename without asking for confirmation.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Print the planned renames and exit.
    #[arg(long, conflicts_with = "yes")]
    pub preview_only: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        } else if let Some(raw) = self.log_level.as_deref() {
            out::print_warn(&format!(
                "Unknown log level '{raw}' (expected quiet, normal, info or debug); keeping '{}'",
                cfg.log_level
            ));
        }
        match &self.log_file {
            Some(Some(path)) => cfg.log_file = Some(path.clone()),
            Some(None) => cfg.log_file = default_log_path().ok(),
            None => {}
        }

        match &self.command {
            Command::Manifest(m) => {
                if m.all {
                    cfg.extension_filter = ExtensionFilter::any();
                } else if !m.extensions.is_empty() {
                    cfg.extension_filter = ExtensionFilter::new(&m.extensions);
                }
                cfg.extension_filter = cfg.extension_filter.clone().with_ignore_case(m.ignore_case);
                if let Some(o) = &m.output {
                    cfg.output_path = o.clone();
                }
                if m.pretty {
                    cfg.json_style = JsonStyle::Pretty;
                }
            }
            Command::Publish(p) => {
                if !p.extensions.is_empty() {
                    cfg.publish_extensions = ExtensionFilter::new(&p.extensions);
                }
                cfg.publish_extensions =
                    cfg.publish_extensions.clone().with_ignore_case(p.ignore_case);
                if let Some(n) = p.batch_size {
                    cfg.batch_size = n;
                }
                if let Some(prefix) = &p.commit_prefix {
                    cfg.commit_prefix = prefix.clone();
                }
            }
            Command::Rename(_) => {}
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

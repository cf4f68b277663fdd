//! Config module.
//! Provides configuration types, default paths and validation.
//! Defaults mirror the values the utilities have always shipped with; the CLI overrides them.

pub mod paths;
pub mod types;
mod validate;

pub use paths::{default_log_path, path_has_symlink_ancestor};
pub use types::{Config, ExtensionFilter, JsonStyle, LogLevel};

/// Extensions picked up by the manifest builder and the publisher.
pub const EXTENSIONS_DEFAULT: [&str; 2] = [".mp4", ".mov"];
/// Manifest file written into the working directory.
pub const OUTPUT_PATH_DEFAULT: &str = "file_list.json";
/// Maximum number of files staged per commit.
pub const BATCH_SIZE_DEFAULT: usize = 100;
/// Commit message prefix; the 1-based batch index is appended.
pub const COMMIT_PREFIX_DEFAULT: &str = "Add batch";
/// Prefix stripped by the renamer when the user enters nothing.
pub const DEFAULT_PREFIX: &str = "2-XP01-_2025-";

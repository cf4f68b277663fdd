//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.
//! - ExtensionFilter decides which file names a utility picks up.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::{
    BATCH_SIZE_DEFAULT, COMMIT_PREFIX_DEFAULT, DEFAULT_PREFIX, EXTENSIONS_DEFAULT,
    OUTPUT_PATH_DEFAULT,
};

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors (default; user-facing output is printed separately)
    #[default]
    Quiet,
    /// Informational events
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" | "warning" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Layout of the JSON manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Single line: `["a.mp4","b.mp4"]`
    #[default]
    Compact,
    /// Two-space indentation, one name per line
    Pretty,
}

impl fmt::Display for JsonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JsonStyle::Compact => "compact",
            JsonStyle::Pretty => "pretty",
        })
    }
}

/// Suffix filter over file names.
///
/// An empty filter matches every name. Matching is case-sensitive unless
/// `ignore_case` is set, in which case suffixes compare ASCII-case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
    ignore_case: bool,
}

impl ExtensionFilter {
    /// Build a filter from extensions; a missing leading dot is added (`mp4` -> `.mp4`).
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| {
                let e = e.as_ref().trim();
                if e.starts_with('.') {
                    e.to_string()
                } else {
                    format!(".{e}")
                }
            })
            .collect();
        Self {
            extensions,
            ignore_case: false,
        }
    }

    /// Filter that accepts every file name.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn ignores_case(&self) -> bool {
        self.ignore_case
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// True if `name` ends with one of the configured extensions (or the filter is empty).
    pub fn matches(&self, name: &str) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        self.extensions.iter().any(|ext| {
            if !self.ignore_case {
                return name.ends_with(ext.as_str());
            }
            let (name, ext) = (name.as_bytes(), ext.as_bytes());
            name.len() >= ext.len() && name[name.len() - ext.len()..].eq_ignore_ascii_case(ext)
        })
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.extensions.is_empty() {
            return f.write_str("<all files>");
        }
        f.write_str(&self.extensions.join(", "))?;
        if self.ignore_case {
            f.write_str(" (ignoring case)")?;
        }
        Ok(())
    }
}

/// Runtime configuration shared by the three utilities.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which files the manifest lists
    pub extension_filter: ExtensionFilter,
    /// Where the manifest is written
    pub output_path: PathBuf,
    /// Manifest JSON layout
    pub json_style: JsonStyle,
    /// Which files the publisher stages
    pub publish_extensions: ExtensionFilter,
    /// Maximum files per commit
    pub batch_size: usize,
    /// Commit message prefix
    pub commit_prefix: String,
    /// Prefix the renamer strips when none is entered
    pub default_prefix: String,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension_filter: ExtensionFilter::new(EXTENSIONS_DEFAULT),
            output_path: PathBuf::from(OUTPUT_PATH_DEFAULT),
            json_style: JsonStyle::Compact,
            publish_extensions: ExtensionFilter::new(EXTENSIONS_DEFAULT),
            batch_size: BATCH_SIZE_DEFAULT,
            commit_prefix: COMMIT_PREFIX_DEFAULT.to_string(),
            default_prefix: DEFAULT_PREFIX.to_string(),
            log_level: LogLevel::Quiet,
            log_file: None,
        }
    }
}

impl Config {
    /// Commit message for a 1-based batch index, e.g. `Add batch 3`.
    pub fn commit_message(&self, batch_index: usize) -> String {
        format!("{} {}", self.commit_prefix, batch_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_adds_missing_dot() {
        let f = ExtensionFilter::new(["mp4", ".mov"]);
        assert_eq!(f.extensions(), &[".mp4".to_string(), ".mov".to_string()]);
    }

    #[test]
    fn case_sensitive_by_default() {
        let f = ExtensionFilter::new([".mov"]);
        assert!(f.matches("clip.mov"));
        assert!(!f.matches("clip.MOV"));
    }

    #[test]
    fn ignore_case_matches_upper_suffix() {
        let f = ExtensionFilter::new([".mov"]).with_ignore_case(true);
        assert!(f.matches("clip.MOV"));
        assert!(f.matches("clip.Mov"));
        assert!(!f.matches("clip.mp4"));
        // multi-byte names must not split a char boundary
        assert!(!f.matches("é"));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let f = ExtensionFilter::any();
        assert!(f.matches("notes.txt"));
        assert!(f.matches("no_extension"));
    }

    #[test]
    fn commit_message_uses_prefix_and_index() {
        let cfg = Config::default();
        assert_eq!(cfg.commit_message(1), "Add batch 1");
        assert_eq!(cfg.commit_message(12), "Add batch 12");
    }
}

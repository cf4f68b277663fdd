//! Non-recursive directory listing.
//! Every utility works on the regular files directly inside one directory.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::config::ExtensionFilter;
use crate::errors::MediaDirError;

/// Fail with a typed error unless `dir` exists and is a directory.
pub fn ensure_directory(dir: &Path) -> Result<(), MediaDirError> {
    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(MediaDirError::NotADirectory(dir.to_path_buf())),
        Err(_) => Err(MediaDirError::DirectoryNotFound(dir.to_path_buf())),
    }
}

/// Names of the regular files directly inside `dir` that pass `filter`, sorted by name.
///
/// Symlinks count when they point at a regular file. Names that are not valid UTF-8
/// are skipped. Any error while reading the directory aborts the listing.
pub fn list_files(dir: &Path, filter: &ExtensionFilter) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to list directory '{}'", dir.display()))?;
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            debug!(path = %entry.path().display(), "Skipping non UTF-8 file name");
            continue;
        };
        if filter.matches(name) {
            names.push(name.to_string());
        } else {
            trace!(file = name, "Filtered out");
        }
    }
    // sort_by_file_name orders by OsStr; re-sort so ordering is by the UTF-8 names themselves.
    names.sort();
    debug!(dir = %dir.display(), count = names.len(), filter = %filter, "Listed files");
    Ok(names)
}

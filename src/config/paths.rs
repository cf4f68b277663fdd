//! Default path helpers and symlink checks.
//! Determines the OS-appropriate log path and detects symlinked ancestors for safety.

use anyhow::{Result, anyhow};
use dirs::data_dir;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// OS-appropriate default log file path (data dir).
pub fn default_log_path() -> Result<PathBuf> {
    if let Some(mut base) = data_dir() {
        base.push("mediadir");
        base.push("mediadir.log");
        return Ok(base);
    }
    std::env::var_os("HOME")
        .map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("mediadir")
                .join("mediadir.log")
        })
        .ok_or_else(|| anyhow!("no data directory or HOME available for the default log path"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}

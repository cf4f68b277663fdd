//! Platform-specific helpers.
//! Hides OS differences (Unix/Windows) behind a uniform API so the rest of the
//! codebase can remain platform-agnostic.

mod temp;
#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

pub use temp::tmp_sibling_name;

#[cfg(unix)]
pub use unix::{atomic_write, open_log_file_secure_append};

#[cfg(not(unix))]
pub use windows::{atomic_write, open_log_file_secure_append};

/// Directory a relative file name lives in; `""` parents mean the working directory.
pub(crate) fn parent_or_cwd(path: &std::path::Path) -> &std::path::Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => std::path::Path::new("."),
    }
}

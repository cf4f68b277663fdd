//! Filesystem helpers shared by the utilities.

mod listing;
mod unique;

pub use listing::{ensure_directory, list_files};
pub use unique::{DirNames, NameSource, resolve_unique, split_name};

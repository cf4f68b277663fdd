//! Unique-name resolution.
//!
//! A candidate name is kept when it is free; otherwise `_1`, `_2`, ... is inserted
//! before the extension until a free name turns up. The lowest free counter wins.
//!
//! The same algorithm runs against two sources of "taken" names: an in-memory set
//! (rename preview) and the live directory (rename apply).

use std::collections::HashSet;
use std::hash::BuildHasher;
use std::path::Path;
use tracing::trace;

/// Answers whether a file name is already in use.
pub trait NameSource {
    fn is_taken(&self, name: &str) -> bool;
}

impl<S: BuildHasher> NameSource for HashSet<String, S> {
    fn is_taken(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// Probes the entries of a directory on every lookup.
///
/// Any entry counts as taken, including directories and dangling symlinks,
/// so a rename never replaces something that is already there.
#[derive(Debug, Clone, Copy)]
pub struct DirNames<'a> {
    dir: &'a Path,
}

impl<'a> DirNames<'a> {
    pub fn new(dir: &'a Path) -> Self {
        Self { dir }
    }
}

impl NameSource for DirNames<'_> {
    fn is_taken(&self, name: &str) -> bool {
        std::fs::symlink_metadata(self.dir.join(name)).is_ok()
    }
}

/// Split on the last `.`: `"clip.final.mp4"` -> `("clip.final", ".mp4")`.
/// Without a dot the extension is empty. A leading-dot name has an empty stem.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) => (&name[..i], &name[i..]),
        None => (name, ""),
    }
}

/// Return `candidate` if free in `taken`, else the first free `{stem}_{n}{ext}` for n = 1, 2, ...
pub fn resolve_unique<S: NameSource + ?Sized>(candidate: &str, taken: &S) -> String {
    if !taken.is_taken(candidate) {
        return candidate.to_string();
    }
    let (stem, ext) = split_name(candidate);
    let mut counter: u64 = 1;
    loop {
        let name = format!("{stem}_{counter}{ext}");
        if !taken.is_taken(&name) {
            trace!(candidate, resolved = %name, "Resolved name collision");
            return name;
        }
        counter += 1;
    }
}

//! Unique hidden sibling names for atomic writes.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use super::parent_or_cwd;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Pattern: `.mediadir.tmp.<pid>.<nanos>.<seq>` next to `target`.
pub fn tmp_sibling_name(target: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    parent_or_cwd(target).join(format!(".mediadir.tmp.{pid}.{nanos}.{seq}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn uniqueness_concurrent() {
        let target = Path::new("file_list.json");
        let handles: Vec<_> = (0..32)
            .map(|_| {
                let t = target.to_path_buf();
                thread::spawn(move || tmp_sibling_name(&t))
            })
            .collect();
        let mut set = HashSet::new();
        for h in handles {
            assert!(set.insert(h.join().unwrap()));
        }
        assert_eq!(set.len(), 32);
    }

    #[test]
    fn bare_file_name_gets_cwd_sibling() {
        let p = tmp_sibling_name(Path::new("file_list.json"));
        assert_eq!(p.parent(), Some(Path::new(".")));
    }
}

use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

use mediadir::fs_ops::{DirNames, resolve_unique};

fn taken(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn result_is_never_in_the_comparison_set() {
    let sets: [&[&str]; 4] = [
        &[],
        &["clip.mp4"],
        &["clip.mp4", "clip_1.mp4", "clip_2.mp4"],
        &["clip_1.mp4", "clip_2.mp4"],
    ];
    for names in sets {
        let set = taken(names);
        let resolved = resolve_unique("clip.mp4", &set);
        assert!(!set.contains(&resolved), "{resolved} collides with {names:?}");
    }
}

#[test]
fn lower_counter_is_preferred() {
    let set = taken(&["clip.mp4", "clip_2.mp4"]);
    assert_eq!(resolve_unique("clip.mp4", &set), "clip_1.mp4");
}

#[test]
fn free_suffixed_name_does_not_matter_when_base_is_free() {
    let set = taken(&["clip_1.mp4"]);
    assert_eq!(resolve_unique("clip.mp4", &set), "clip.mp4");
}

#[test]
fn directory_probe_sees_live_changes() {
    let td = tempdir().unwrap();
    let probe = DirNames::new(td.path());
    assert_eq!(resolve_unique("b.mp4", &probe), "b.mp4");

    fs::write(td.path().join("b.mp4"), b"1").unwrap();
    assert_eq!(resolve_unique("b.mp4", &probe), "b_1.mp4");

    fs::write(td.path().join("b_1.mp4"), b"2").unwrap();
    assert_eq!(resolve_unique("b.mp4", &probe), "b_2.mp4");
}

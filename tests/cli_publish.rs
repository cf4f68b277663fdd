use assert_cmd::cargo;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn publish_with_no_matching_files_does_nothing() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("readme.txt"), b"").unwrap();

    let me = cargo::cargo_bin!("mediadir");
    let out = Command::new(me)
        .current_dir(td.path())
        .arg("publish")
        .output()
        .expect("spawn binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("No matching files found."), "stdout: {stdout}");
    assert!(!stdout.contains("Committing"), "stdout: {stdout}");
}

#[test]
fn publish_dry_run_prints_batches() {
    let td = tempdir().unwrap();
    for name in ["a.mp4", "b.mp4", "c.mov"] {
        fs::write(td.path().join(name), b"").unwrap();
    }

    let me = cargo::cargo_bin!("mediadir");
    let out = Command::new(me)
        .current_dir(td.path())
        .env_remove("MEDIADIR_COMMIT_PREFIX")
        .args(["publish", "--dry-run", "--batch-size", "2"])
        .output()
        .expect("spawn binary");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Found 3 files"), "stdout: {stdout}");
    assert!(stdout.contains("Committing and pushing batch 1 with 2 files"));
    assert!(stdout.contains("Dry-run: git add -- a.mp4 b.mp4"));
    assert!(stdout.contains("Dry-run: git commit -m \"Add batch 1\""));
    assert!(stdout.contains("Committing and pushing batch 2 with 1 files"));
    assert!(stdout.contains("Dry-run: git add -- c.mov"));
    assert!(stdout.contains("All batches committed and pushed."));
}

#[test]
fn publish_rejects_zero_batch_size() {
    let td = tempdir().unwrap();
    let me = cargo::cargo_bin!("mediadir");
    let out = Command::new(me)
        .current_dir(td.path())
        .args(["publish", "--dry-run", "--batch-size", "0"])
        .output()
        .expect("spawn binary");
    assert!(!out.status.success());
}

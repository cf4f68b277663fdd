use assert_cmd::cargo;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::tempdir;

#[test]
fn rename_with_prefix_and_yes() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("2-XP01-_2025-a.mp4"), b"A").unwrap();
    fs::write(td.path().join("2-XP01-_2025-b.mp4"), b"B").unwrap();
    fs::write(td.path().join("b.mp4"), b"existing").unwrap();

    let me = cargo::cargo_bin!("mediadir");
    let out = Command::new(me)
        .args(["rename", "--prefix", "2-XP01-_2025-", "--yes"])
        .arg(td.path())
        .stdin(Stdio::null())
        .output()
        .expect("spawn binary");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("2 files will be renamed"), "stdout: {stdout}");
    assert!(stdout.contains("Done! Renamed 2 files."), "stdout: {stdout}");
    assert_eq!(fs::read(td.path().join("a.mp4")).unwrap(), b"A");
    assert_eq!(fs::read(td.path().join("b_1.mp4")).unwrap(), b"B");
    assert_eq!(fs::read(td.path().join("b.mp4")).unwrap(), b"existing");
}

#[test]
fn interactive_rename_reads_prefix_and_confirmation() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("2-XP01-_2025-clip.mov"), b"").unwrap();

    let me = cargo::cargo_bin!("mediadir");
    let mut child = Command::new(me)
        .arg("rename")
        .arg(td.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn binary");
    // Enter for the default prefix, then confirm.
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"\ny\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("1. Previewing changes..."), "stdout: {stdout}");
    assert!(stdout.contains("'2-XP01-_2025-clip.mov' -> 'clip.mov'"));
    assert!(stdout.contains("2. Renaming..."));
    assert!(td.path().join("clip.mov").exists());
}

#[test]
fn declined_rename_changes_nothing() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("pre-x.mp4"), b"").unwrap();

    let me = cargo::cargo_bin!("mediadir");
    let mut child = Command::new(me)
        .args(["rename", "--prefix", "pre-"])
        .arg(td.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn binary");
    child.stdin.take().unwrap().write_all(b"n\n").unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Operation cancelled."), "stdout: {stdout}");
    assert!(td.path().join("pre-x.mp4").exists());
    assert!(!td.path().join("x.mp4").exists());
}

#[test]
fn missing_directory_is_reported_without_failing() {
    let td = tempdir().unwrap();
    let missing = td.path().join("nope");

    let me = cargo::cargo_bin!("mediadir");
    let out = Command::new(me)
        .arg("rename")
        .arg(&missing)
        .stdin(Stdio::null())
        .output()
        .expect("spawn binary");
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("nope"), "stderr: {stderr}");
    assert!(!String::from_utf8_lossy(&out.stdout).contains("Previewing"));
}

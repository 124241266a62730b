//! File-based command runs.

use std::path::PathBuf;

use kin_diagnostic::ErrorCode;
use kinc::commands::{check_file, parse_file, run_file, RunOptions};
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

/// Write `contents` to `name` inside `dir`.
fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn check_and_parse_from_disk() {
    let dir = tempdir().unwrap();
    let program = fixture(&dir, "ok.kin", "(proc main () ())");
    let path = program.to_str().unwrap();

    assert!(check_file(path).unwrap().has_main);
    assert_eq!(parse_file(path).unwrap(), "(proc main () ())");
}

#[test]
fn run_with_gedcom() {
    let dir = tempdir().unwrap();
    let program = fixture(
        &dir,
        "names.kin",
        r#"(proc main () ((bltin set (p (bltin indi ("@I1@")))) (bltin fullname (p))))"#,
    );
    let gedcom = fixture(&dir, "names.ged", "0 @I1@ INDI\n1 NAME Ann /Lee/\n");
    let options = RunOptions {
        gedcom: Some(gedcom),
        max_depth: None,
    };
    assert!(run_file(program.to_str().unwrap(), &options).is_ok());
}

#[test]
fn missing_gedcom_is_io_error() {
    let dir = tempdir().unwrap();
    let program = fixture(&dir, "plain.kin", "(proc main () ())");
    let options = RunOptions {
        gedcom: Some(PathBuf::from("/nonexistent/family.ged")),
        max_depth: None,
    };
    let diagnostics = run_file(program.to_str().unwrap(), &options).unwrap_err();
    assert_eq!(diagnostics[0].code, ErrorCode::E9001);
}

#[test]
fn max_depth_applies() {
    let dir = tempdir().unwrap();
    let program = fixture(
        &dir,
        "loop.kin",
        "((proc down () ((call down ()))) (proc main () ((call down ()))))",
    );
    let options = RunOptions {
        gedcom: None,
        max_depth: Some(10),
    };
    let diagnostics = run_file(program.to_str().unwrap(), &options).unwrap_err();
    assert_eq!(diagnostics[0].code, ErrorCode::E6009);
    assert_eq!(diagnostics[0].message, "maximum call depth exceeded (limit: 10)");
}

#[test]
fn fixtures_are_removed_with_their_dir() {
    let dir = tempdir().unwrap();
    let root = dir.path().to_path_buf();
    let program = fixture(&dir, "scratch.kin", "(proc main () ())");
    assert!(check_file(program.to_str().unwrap()).is_ok());

    dir.close().unwrap();
    assert!(!root.exists());
    assert!(!program.exists());
}

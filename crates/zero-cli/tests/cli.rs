//! Black-box CLI tests driving the `zero` binary against real temp files.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn zero() -> Command {
    Command::cargo_bin("zero").unwrap()
}

#[test]
fn tokenize_writes_tokens_file() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("a.zero");
    fs::write(&src, "let x = 1;\n").unwrap();

    zero().arg("tokenize").arg(&src).assert().success();

    let tokens_path = dir.path().join("a.zero.tokens");
    let listing = fs::read_to_string(&tokens_path).unwrap();
    assert!(listing.starts_with("# Tokenization Result\n"));
    assert!(listing.contains("# Source:"));
    assert!(listing.contains("Let"));
}

#[test]
fn parse_reports_diagnostics_on_stderr_and_writes_no_file() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("bad.zero");
    fs::write(&src, "let y  let z = 30;").unwrap();

    zero()
        .arg("parse")
        .arg(&src)
        .assert()
        .failure()
        .stderr(predicate::str::contains("P0001"));

    assert!(!dir.path().join("bad.zero.formatted").exists());
    assert!(!dir.path().join("bad.zero.tokens").exists());
}

#[test]
fn fmt_writes_sibling_formatted_file_by_default() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("a.zero");
    fs::write(&src, "let x=1;\n").unwrap();

    zero().arg("fmt").arg(&src).assert().success();

    let formatted_path = dir.path().join("a.zero.formatted");
    let formatted = fs::read_to_string(&formatted_path).unwrap();
    assert_eq!(formatted, "let x = 1;\n");
    assert_eq!(fs::read_to_string(&src).unwrap(), "let x=1;\n");
}

#[test]
fn fmt_in_place_rewrites_source_file() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("a.zero");
    fs::write(&src, "let x=1;\n").unwrap();

    zero().arg("fmt").arg("--in-place").arg(&src).assert().success();

    assert_eq!(fs::read_to_string(&src).unwrap(), "let x = 1;\n");
}

#[test]
fn fmt_rejects_indent_width_out_of_range() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("a.zero");
    fs::write(&src, "let x=1;\n").unwrap();

    zero()
        .arg("fmt")
        .arg("--indent-width")
        .arg("0")
        .arg(&src)
        .assert()
        .failure();
}

#[test]
fn version_flag_prints_version() {
    zero().arg("--version").assert().success().stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

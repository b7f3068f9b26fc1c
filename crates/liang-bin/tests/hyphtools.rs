use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;

const PATTERNS: &str = r"% test patterns
\patterns{
hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n
}
\hyphenation{ta-ble}
";

fn write_patterns(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("patterns.tex");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn hyphenate_from_pattern_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_patterns(&dir, PATTERNS);
    let mut cmd = Command::cargo_bin("hyphtools").unwrap();
    cmd.arg("hyphenate")
        .arg("--patterns")
        .arg(&path)
        .args(["hyphenation", "table", "bach"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    similar_asserts::assert_eq!(
        String::from_utf8(output).unwrap(),
        "hy-phen-ation\nta-ble\nbach\n"
    );
}

#[test]
fn hyphenate_with_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_patterns(&dir, PATTERNS);
    let mut cmd = Command::cargo_bin("hyphtools").unwrap();
    cmd.arg("hyphenate")
        .arg("-p")
        .arg(&path)
        .args(["--left", "3", "--hyphen", "=", "hyphenation"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("hyphen=ation\n"));
}

#[test]
fn compile_then_hyphenate_from_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_patterns(&dir, PATTERNS);
    let mut cmd = Command::cargo_bin("hyphtools").unwrap();
    cmd.arg("compile").arg(&path);
    cmd.assert().success();

    let table = dir.path().join("patterns.json");
    assert!(table.exists());
    let mut cmd = Command::cargo_bin("hyphtools").unwrap();
    cmd.arg("hyphenate")
        .arg("--table")
        .arg(&table)
        .args(["hyphenation", "table"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("hy-phen-ation\nta-ble\n"));
}

#[test]
fn check_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_patterns(&dir, PATTERNS);
    let mut cmd = Command::cargo_bin("hyphtools").unwrap();
    cmd.arg("check").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("9 patterns, 1 exceptions"));
}

#[test]
fn check_invalid_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_patterns(&dir, r"\patterns{ hy3ph a.b }");
    let mut cmd = Command::cargo_bin("hyphtools").unwrap();
    cmd.arg("check").arg(&path);
    cmd.assert().failure().stderr(predicate::str::contains(
        "invalid pattern `a.b` at position 18: the boundary marker can only appear at the start or end of a pattern",
    ));
}

#[test]
fn check_duplicate_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_patterns(&dir, r"\patterns{ hy3ph hy2ph }");
    let mut cmd = Command::cargo_bin("hyphtools").unwrap();
    cmd.arg("check").arg(&path);
    cmd.assert().failure().stderr(predicate::str::contains(
        "the pattern hy2ph conflicts with the previously registered hy3ph",
    ));
}

#[test]
fn dump() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_patterns(&dir, r"\patterns{ a1b b2 }");
    let mut cmd = Command::cargo_bin("hyphtools").unwrap();
    cmd.arg("dump").arg(&path);
    let output = cmd.assert().success().get_output().stdout.clone();
    similar_asserts::assert_eq!(
        String::from_utf8(output).unwrap(),
        "'a' nil\n  'b' (0 1 0)\n'b' (0 2)\n"
    );
}

#[test]
fn missing_file() {
    let mut cmd = Command::cargo_bin("hyphtools").unwrap();
    cmd.args(["dump", "does-not-exist.tex"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.tex"));
}

#[test]
fn hyphenate_requires_a_source() {
    let mut cmd = Command::cargo_bin("hyphtools").unwrap();
    cmd.args(["hyphenate", "hyphenation"]);
    cmd.assert().failure();
}

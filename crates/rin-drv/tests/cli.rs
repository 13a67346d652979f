use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp fixture");
    write!(file, "{contents}").expect("write temp fixture");
    file
}

#[test]
fn parse_mode_on_valid_program_reports_statement_count() {
    let file = fixture("fn main() { let x = 1; }");
    Command::cargo_bin("rinc")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsed successfully: 1 top-level statement(s)."));
}

#[test]
fn parse_mode_on_malformed_program_exits_with_diagnostics() {
    let file = fixture("let = 1;");
    Command::cargo_bin("rinc")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Parse error [line 1]:"));
}

#[test]
fn tokens_mode_prints_one_line_per_non_eof_token() {
    let file = fixture("let x = 1;");
    Command::cargo_bin("rinc")
        .unwrap()
        .arg("--tokens")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("LET let"))
        .stdout(predicate::str::contains("IDENT x"))
        .stdout(predicate::str::contains("NUMBER 1"))
        .stdout(predicate::str::contains("EOF").not());
}

#[test]
fn missing_file_exits_nonzero_with_message() {
    Command::cargo_bin("rinc")
        .unwrap()
        .arg("/nonexistent/path/does-not-exist.rin")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn bad_usage_exits_nonzero() {
    Command::cargo_bin("rinc")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage: rinc"));
}

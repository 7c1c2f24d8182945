use predicates::prelude::*;

use crate::common::{GOLDEN_CSV, GOLDEN_VOLUMES, anhinga};

#[test]
fn shows_help() {
    anhinga()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("anhinga"))
        .stdout(predicate::str::contains("--region"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn shows_version() {
    anhinga().arg("--version").assert().success().stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn renders_csv_from_stdin() {
    anhinga()
        .args(["--region", "us-east-1", "--format", "csv"])
        .write_stdin(GOLDEN_VOLUMES)
        .assert()
        .success()
        .stdout(GOLDEN_CSV);
}

#[test]
fn unknown_format_fails_without_output() {
    anhinga()
        .args(["--region", "us-east-1", "--format", "xml"])
        .write_stdin(GOLDEN_VOLUMES)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unsupported format: xml"));
}

#[test]
fn empty_region_flag_is_rejected() {
    anhinga()
        .args(["--region", "", "--format", "csv"])
        .write_stdin(GOLDEN_VOLUMES)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--region"));
}

#[test]
fn malformed_input_is_reported() {
    anhinga()
        .args(["--region", "us-east-1"])
        .write_stdin("{not json")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to acquire volumes"));
}

#[test]
fn logs_go_to_stderr_only() {
    anhinga()
        .args(["--region", "us-east-1", "--format", "csv", "-vv"])
        .write_stdin(GOLDEN_VOLUMES)
        .assert()
        .success()
        .stdout(GOLDEN_CSV)
        .stderr(predicate::str::contains("pricing volumes"));
}

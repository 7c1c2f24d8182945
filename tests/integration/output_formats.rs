use predicates::prelude::*;
use serde_json::Value;

use crate::common::{GOLDEN_VOLUMES, anhinga};

fn json_output(stdin: &str, region: &str) -> Value {
    let output = anhinga().args(["--region", region, "--format", "json"]).write_stdin(stdin).output().expect("runs");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn json_report_has_documented_shape() {
    let value = json_output(GOLDEN_VOLUMES, "us-east-1");
    assert_eq!(value["totalCost"], 18.75);
    let volumes = value["volumes"].as_array().expect("volumes array");
    assert_eq!(volumes.len(), 2);
    assert_eq!(volumes[0]["volumeId"], "vol-123");
    assert_eq!(volumes[0]["volumeType"], "gp2");
    assert_eq!(volumes[0]["size"], 100);
    assert_eq!(volumes[0]["state"], "available");
    assert_eq!(volumes[0]["cost"], 10.0);
    assert_eq!(volumes[1]["cost"], 8.75);
}

#[test]
fn json_report_feeds_back_as_input() {
    let first = json_output(GOLDEN_VOLUMES, "eu-west-1");
    let second = json_output(&first.to_string(), "eu-west-1");
    assert_eq!(first, second);
}

#[test]
fn table_is_the_default_format() {
    anhinga()
        .args(["--region", "us-east-1"])
        .write_stdin(GOLDEN_VOLUMES)
        .assert()
        .success()
        .stdout(predicate::str::contains("| Volume ID | Type | Size (GB) | State     | Monthly Cost ($) |"))
        .stdout(predicate::str::contains("| vol-456   | io1  |        70 | available |             8.75 |"))
        .stdout(predicate::str::contains("| Total     |      |           |           |            18.75 |"));
}

#[test]
fn format_name_is_case_insensitive() {
    anhinga()
        .args(["--region", "us-east-1", "--format", "CSV"])
        .write_stdin(GOLDEN_VOLUMES)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Volume ID,Type,Size (GB),State,Monthly Cost ($)\n"));
}

#[test]
fn empty_input_still_reports_a_total() {
    anhinga()
        .args(["--region", "us-east-1", "--format", "csv"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("Volume ID,Type,Size (GB),State,Monthly Cost ($)\nTotal,,,,0.00\n");
}

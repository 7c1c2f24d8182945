use predicates::prelude::*;

use crate::common::{DESCRIBE_VOLUMES, GOLDEN_CSV, GOLDEN_VOLUMES, Workspace, anhinga};

#[test]
fn describe_volumes_dump_renders_from_stdin() {
    anhinga()
        .args(["--region", "us-east-1", "--format", "csv"])
        .write_stdin(DESCRIBE_VOLUMES)
        .assert()
        .success()
        .stdout(
            "Volume ID,Type,Size (GB),State,Monthly Cost ($)\n\
             vol-0a1b2c3d,gp3,8,in-use,0.64\n\
             vol-9f8e7d6c,st1,500,available,22.50\n\
             Total,,,,23.14\n",
        );
}

#[test]
fn input_file_and_output_file() {
    let ws = Workspace::new();
    let input = ws.file("volumes.json", GOLDEN_VOLUMES);
    let output = ws.path("report.csv");

    anhinga()
        .args(["-r", "us-east-1", "-f", "csv", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(std::fs::read_to_string(&output).expect("report file"), GOLDEN_CSV);
}

#[test]
fn region_falls_back_to_environment() {
    anhinga()
        .env("AWS_DEFAULT_REGION", "eu-west-1")
        .args(["--format", "csv"])
        .write_stdin(GOLDEN_VOLUMES)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Total,,,,20.62\n"));

    anhinga()
        .env("AWS_REGION", "us-east-1")
        .env("AWS_DEFAULT_REGION", "eu-west-1")
        .args(["--format", "csv"])
        .write_stdin(GOLDEN_VOLUMES)
        .assert()
        .success()
        .stdout(GOLDEN_CSV);
}

#[test]
fn custom_pricing_file_replaces_rates() {
    let ws = Workspace::new();
    let pricing = ws.file(
        "pricing.json",
        r#"{"kinds": {"rates": {"gp2": 0.2}, "default": 0.3},
            "regions": {"baseline": "eu-central-1", "uplift": 1.5}}"#,
    );

    anhinga()
        .args(["-r", "eu-central-1", "-f", "csv", "--pricing"])
        .arg(&pricing)
        .write_stdin(GOLDEN_VOLUMES)
        .assert()
        .success()
        .stdout(predicate::str::contains("vol-123,gp2,100,available,20.00"))
        .stdout(predicate::str::contains("vol-456,io1,70,available,21.00"))
        .stdout(predicate::str::ends_with("Total,,,,41.00\n"));
}

#[test]
fn invalid_pricing_file_is_rejected() {
    let ws = Workspace::new();
    let pricing = ws.file("pricing.json", r#"{"kinds": {"rates": {"gp2": -1}}}"#);

    anhinga()
        .args(["-r", "us-east-1", "--pricing"])
        .arg(&pricing)
        .write_stdin(GOLDEN_VOLUMES)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("pricing file"));
}

#[test]
fn negative_size_is_a_validation_error() {
    anhinga()
        .args(["-r", "us-east-1"])
        .write_stdin(r#"[{"volumeId": "vol-1", "volumeType": "gp2", "size": -5, "state": "available"}]"#)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("size must be non-negative"));
}

#[test]
fn missing_input_file_names_the_path() {
    anhinga()
        .args(["-r", "us-east-1", "-i", "definitely/not/here.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("definitely/not/here.json"));
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_input_is_accepted() {
    let ws = Workspace::new();
    let input = ws.file(
        "volumes.yaml",
        "- volumeId: vol-123\n  volumeType: gp2\n  size: 100\n  state: available\n\
         - volumeId: vol-456\n  volumeType: io1\n  size: 70\n  state: available\n",
    );

    anhinga().args(["-r", "us-east-1", "-f", "csv", "-i"]).arg(&input).assert().success().stdout(GOLDEN_CSV);
}

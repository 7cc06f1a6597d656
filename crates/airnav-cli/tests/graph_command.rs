use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .canonicalize()
        .expect("fixture directory present")
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("airnav-cli");
    cmd.env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(fixtures_dir());
    cmd
}

#[test]
fn graph_lists_every_airport() {
    let mut cmd = prepare_command();
    cmd.arg("graph");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "ATL (Atlanta) -> CLT (364 km), MCO (646 km), ORD (947 km)",
        ))
        .stdout(predicate::str::contains("HNL (Honolulu) ->\n"))
        .stdout(predicate::str::contains("LAX (Los Angeles) -> ORD (2803 km)"));
}

#[test]
fn absolute_longitude_keeps_western_hemisphere_weights() {
    let mut cmd = prepare_command();
    cmd.args(["--absolute-longitude", "graph"]);

    // All fixture airports sit west of Greenwich, so folding the sign leaves
    // their relative distances unchanged.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ATL (Atlanta) -> CLT (364 km)"));
}

#[test]
fn graph_json_lists_locations_in_code_order() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "graph"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("stdout is JSON");
    let codes: Vec<&str> = value["locations"]
        .as_array()
        .expect("locations array")
        .iter()
        .filter_map(|entry| entry["code"].as_str())
        .collect();

    assert_eq!(codes, vec!["ATL", "CLT", "HNL", "LAX", "LGA", "MCO", "ORD"]);
}

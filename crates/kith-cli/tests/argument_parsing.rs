//! Focused CLI tests.
//!
//! Argument parsing plus the sample/inspect file round trip; nothing here
//! needs network access or long timeouts.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Flags And Help
// ============================================================================

#[test]
fn version_flag_shows_name() {
    Command::cargo_bin("kith")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kith"));
}

#[test]
fn help_flag_shows_about() {
    Command::cargo_bin("kith")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("friendship"));
}

#[test]
fn no_command_shows_usage() {
    Command::cargo_bin("kith")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unrecognized_command_shows_error() {
    Command::cargo_bin("kith")
        .unwrap()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized"));
}

#[test]
fn demo_help_lists_the_walkthroughs() {
    Command::cargo_bin("kith")
        .unwrap()
        .args(["demo", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("collections"))
        .stdout(predicate::str::contains("matrix"))
        .stdout(predicate::str::contains("graph"));
}

#[test]
fn sample_help_mentions_out_flag() {
    Command::cargo_bin("kith")
        .unwrap()
        .args(["sample", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--out"));
}

// ============================================================================
// Demo Walkthroughs
// ============================================================================

#[test]
fn demo_requires_a_subcommand() {
    Command::cargo_bin("kith")
        .unwrap()
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn demo_collections_prints_both_structures() {
    Command::cargo_bin("kith")
        .unwrap()
        .args(["demo", "collections"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stack"))
        .stdout(predicate::str::contains("queue"));
}

#[test]
fn demo_matrix_prints_the_determinants() {
    Command::cargo_bin("kith")
        .unwrap()
        .args(["demo", "matrix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("det(left): -1"))
        .stdout(predicate::str::contains("det(right): -17"));
}

#[test]
fn demo_graph_round_trips_the_pair() {
    Command::cargo_bin("kith")
        .unwrap()
        .args(["demo", "graph"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ivan"))
        .stdout(predicate::str::contains("Petr"))
        .stdout(predicate::str::contains("isomorphic to the original: true"));
}

#[test]
fn no_color_flag_is_accepted() {
    Command::cargo_bin("kith")
        .unwrap()
        .args(["--no-color", "demo", "collections"])
        .assert()
        .success();
}

// ============================================================================
// Sample And Inspect Round Trip
// ============================================================================

#[test]
fn sample_prints_json_to_stdout() {
    Command::cargo_bin("kith")
        .unwrap()
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"root_id\": \"0\""))
        .stdout(predicate::str::contains("\"Ivan\""));
}

#[test]
fn sample_writes_the_out_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pair.json");

    Command::cargo_bin("kith")
        .unwrap()
        .args(["sample", "--out", path.to_str().unwrap()])
        .assert()
        .success();

    assert!(path.exists());
}

#[test]
fn out_path_with_spaces_works() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("path with spaces.json");

    Command::cargo_bin("kith")
        .unwrap()
        .args(["sample", "--out", path.to_str().unwrap()])
        .assert()
        .success();

    assert!(path.exists());
}

#[test]
fn inspect_reads_what_sample_wrote() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pair.json");

    Command::cargo_bin("kith")
        .unwrap()
        .args(["sample", "--out", path.to_str().unwrap()])
        .assert()
        .success();

    Command::cargo_bin("kith")
        .unwrap()
        .args(["inspect", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("people: 2"))
        .stdout(predicate::str::contains("Ivan (root)"))
        .stdout(predicate::str::contains("born 2021-09-27"));
}

// ============================================================================
// Inspect Failure Paths
// ============================================================================

#[test]
fn inspect_requires_path() {
    Command::cargo_bin("kith")
        .unwrap()
        .arg("inspect")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn inspect_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.json");

    Command::cargo_bin("kith")
        .unwrap()
        .args(["inspect", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn inspect_rejects_garbage() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("garbage.json");
    std::fs::write(&path, b"not json at all").unwrap();

    Command::cargo_bin("kith")
        .unwrap()
        .args(["inspect", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not hold a friendship blob"));
}

#[test]
fn inspect_reports_dangling_references() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dangling.json");
    std::fs::write(
        &path,
        br#"{
            "objects": {
                "0": {"name": "Ivan", "born_in": "2020-04-12T00:00:00", "friends": ["7"]}
            },
            "root_id": "0"
        }"#,
    )
    .unwrap();

    Command::cargo_bin("kith")
        .unwrap()
        .args(["inspect", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("references"));
}

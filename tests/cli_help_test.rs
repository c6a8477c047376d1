//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("kensho-seed")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seed the Kensho anime backend"));
}

#[test]
fn test_seed_help() {
    Command::cargo_bin("kensho-seed")
        .unwrap()
        .args(["seed", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--episode-cap"))
        .stdout(predicate::str::contains("--base-url"));
}

#[test]
fn test_import_help() {
    Command::cargo_bin("kensho-seed")
        .unwrap()
        .args(["import", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--pause-every"))
        .stdout(predicate::str::contains("--progress"));
}

#[test]
fn test_health_help() {
    Command::cargo_bin("kensho-seed")
        .unwrap()
        .args(["health", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--base-url"));
}

#[test]
fn test_unknown_subcommand_fails() {
    Command::cargo_bin("kensho-seed")
        .unwrap()
        .arg("migrate")
        .assert()
        .failure();
}

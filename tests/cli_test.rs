//! Integration tests for the command-line binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("step-sequencer"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Ordered step execution"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("step-sequencer"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_run_completes() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("step-sequencer"));
    cmd.args(["run", "arithmetic", "--initial", "1"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("arithmetic completed => 6"));
    Ok(())
}

#[test]
fn cli_run_order_completes() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("step-sequencer"));
    cmd.args(["run", "order"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("order completed => [1,2,3,4]"));
    Ok(())
}

#[test]
fn cli_run_halt_exits_with_two() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("step-sequencer"));
    cmd.args(["run", "checked", "--initial", "-5", "--json"]);
    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("\"halted_step\": \"add_five\""))
        .stderr(predicate::str::contains("No halt handler configured for Checked"));
    Ok(())
}

#[test]
fn cli_run_unknown_demo_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("step-sequencer"));
    cmd.args(["run", "nope"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown demo: nope"));
    Ok(())
}

#[test]
fn cli_list_names_only() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("step-sequencer"));
    cmd.args(["list", "--names-only"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("arithmetic\norder\ncounter\nchecked\n"));
    Ok(())
}

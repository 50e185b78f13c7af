//! Integration tests for the CLI binary
//!
//! Tests CLI commands, flag combinations, and exit codes using assert_cmd

// TODO: Migrate to cargo_bin! macro when stable migration path is documented
// https://github.com/assert-rs/assert_cmd/issues/225
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

mod common;
use common::fixtures::*;

fn usemin(project: &Project) -> Command {
    let mut cmd = Command::cargo_bin("usemin").unwrap();
    cmd.current_dir(project.root()).env("NO_EMOJI", "1");
    cmd
}

/// Project with one family and a TOML config listing it
fn configured_project() -> (Project, Family) {
    let project = Project::new();
    let family = project.family("lib", "p5");
    project.write_toml_config(&format!("entries = [{}]\n", family.toml_entry()));
    (project, family)
}

// ===== Basic CLI Tests =====

#[test]
fn test_cli_help_flag() {
    let project = Project::new();
    usemin(&project)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("usemin"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    let project = Project::new();
    usemin(&project)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_for_subcommands() {
    let project = Project::new();
    for subcmd in ["run", "swap", "restore", "status", "init", "completions"] {
        usemin(&project)
            .args([subcmd, "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }
}

// ===== Command Execution =====

#[test]
fn test_swap_then_restore() {
    let (project, family) = configured_project();

    usemin(&project)
        .arg("swap")
        .assert()
        .success()
        .stdout(predicate::str::contains("Substituted"));
    family.assert_swapped();

    usemin(&project)
        .arg("restore")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored"));
    family.assert_ready();
}

#[test]
fn test_status_reports_swapped_family() {
    let (project, _family) = configured_project();

    usemin(&project).arg("swap").assert().success();

    usemin(&project)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("swapped"));
}

#[test]
fn test_status_json_output() {
    let (project, _family) = configured_project();

    let output = usemin(&project).args(["status", "--json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["disabled"], false);
    assert_eq!(report["entries"][0]["state"], "ready");
    assert_eq!(report["entries"][0]["fileName"], "p5");
}

#[test]
fn test_swap_json_output_lists_outcomes() {
    let (project, _family) = configured_project();

    let output = usemin(&project).args(["swap", "--json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["direction"], "substitute");
}

#[test]
fn test_disabled_config_leaves_files_alone() {
    let project = Project::new();
    let family = project.family("lib", "p5");
    project.write_toml_config(&format!(
        "disabled = true\nentries = [{}]\n",
        family.toml_entry()
    ));

    usemin(&project)
        .arg("swap")
        .assert()
        .success()
        .stdout(predicate::str::contains("disabled"));
    family.assert_ready();
}

#[test]
fn test_explicit_json_config_flag() {
    let project = Project::new();
    let family = project.family("lib", "p5");
    let config = project.root().join("usemin.config.json");
    fs::write(
        &config,
        serde_json::json!({
            "entries": [{ "path": family.entry().path, "fileName": "p5" }],
            "noLogs": true,
        })
        .to_string(),
    )
    .unwrap();

    usemin(&project)
        .args(["--config", config.to_str().unwrap(), "swap"])
        .assert()
        .success();
    family.assert_swapped();
}

/// Project with one swappable family and one that has no minified build
fn mixed_project() -> (Project, Family, Family) {
    let project = Project::new();
    let p5 = project.family("lib", "p5");
    let jquery = project.unminified_family("vendor", "jquery");
    project.write_toml_config(&format!(
        "entries = [{}, {}]\n",
        p5.toml_entry(),
        jquery.toml_entry()
    ));
    (project, p5, jquery)
}

#[test]
fn test_swap_logs_each_rename_and_skip_once() {
    let (project, p5, _jquery) = mixed_project();

    usemin(&project)
        .env_remove("RUST_LOG")
        .arg("swap")
        .assert()
        .success()
        .stdout(predicate::str::contains("Substituted 1 entry, 1 skipped, 0 failed"))
        .stdout(predicate::str::contains("Changing").not())
        .stderr(predicate::str::contains("Changing"))
        .stderr(predicate::str::contains("Moving to the next entry"));
    p5.assert_swapped();
}

#[test]
fn test_no_logs_swap_is_quiet_but_still_swaps() {
    let (project, p5, jquery) = mixed_project();

    usemin(&project)
        .env_remove("RUST_LOG")
        .args(["--no-logs", "swap"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Changing").not())
        .stderr(predicate::str::contains("Moving to the next entry").not());
    p5.assert_swapped();
    assert!(jquery.original().exists());
    assert!(!jquery.parked().exists());

    usemin(&project)
        .env_remove("RUST_LOG")
        .args(["--no-logs", "restore"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Moving to the next entry").not());
    p5.assert_ready();
}

#[test]
fn test_swap_refuses_to_overwrite_parked_original() {
    let (project, family) = configured_project();

    usemin(&project).arg("swap").assert().success();
    fs::write(family.minified(), "// rebuilt").unwrap();

    usemin(&project)
        .env_remove("RUST_LOG")
        .arg("swap")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    usemin(&project).arg("restore").assert().success();
    assert_eq!(fs::read_to_string(family.original()).unwrap(), source_of("p5"));
}

#[test]
#[cfg(unix)]
fn test_run_wraps_build_and_restores() {
    let (project, family) = configured_project();
    let script = format!("cat {:?} > seen.txt", family.original());

    usemin(&project)
        .args(["run", "--", "sh", "-c", &script])
        .assert()
        .success();

    family.assert_ready();
    assert_eq!(
        fs::read_to_string(project.root().join("seen.txt")).unwrap(),
        minified_of("p5")
    );
}

#[test]
#[cfg(unix)]
fn test_run_propagates_build_exit_code_and_restores() {
    let (project, family) = configured_project();

    usemin(&project)
        .args(["--no-logs", "run", "--", "sh", "-c", "exit 5"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("exit code 5"));

    family.assert_ready();
}

#[test]
fn test_init_creates_config() {
    let project = Project::new();

    usemin(&project)
        .args(["init", "--entry", "lib:p5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .usemin.toml"));

    let contents = fs::read_to_string(project.root().join(".usemin.toml")).unwrap();
    assert!(contents.contains("p5"));
}

#[test]
fn test_completions_bash() {
    let project = Project::new();
    usemin(&project)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("usemin"));
}

// ===== Error Handling =====

#[test]
fn test_run_without_command_is_usage_error() {
    let project = Project::new();
    usemin(&project)
        .arg("run")
        .assert()
        .code(64)
        .stderr(predicate::str::contains("usemin run --"));
}

#[test]
fn test_non_object_json_config_is_config_error() {
    let project = Project::new();
    project.write_json_config("[1, 2, 3]");

    usemin(&project)
        .arg("swap")
        .assert()
        .code(78)
        .stderr(predicate::str::contains("plain key-value object"));
}

#[test]
fn test_malformed_toml_config_is_config_error() {
    let project = Project::new();
    project.write_toml_config("entries = [");

    usemin(&project)
        .arg("status")
        .assert()
        .code(78)
        .stderr(predicate::str::contains(".usemin.toml"));
}

#[test]
fn test_invalid_subcommand() {
    let project = Project::new();
    usemin(&project)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

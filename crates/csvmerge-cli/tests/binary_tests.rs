// Rust guideline compliant 2026-10-19

//! Tests that run the `csvmerge` binary end to end.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn csvmerge(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_csvmerge"));
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("CSVMERGE_DELIMITER")
        .env_remove("CSVMERGE_EXTENSION")
        .env_remove("CSVMERGE_OUTPUT_DIR")
        .env_remove("CSVMERGE_STRICT_WIDTH")
        .env_remove("CSVMERGE_LOG_LEVEL")
        .env_remove("CSVMERGE_OUTPUT_FORMAT");
    cmd
}

fn run_with_input(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn csvmerge");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(input.as_bytes())
        .expect("write answers");
    child.wait_with_output().expect("wait for csvmerge")
}

fn files_with_prefix(dir: &Path, prefix: &str) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("list dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(prefix))
        .collect();
    names.sort();
    names
}

fn setup(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().expect("temp dir");
    for (name, content) in files {
        fs::write(temp_dir.path().join(name), content).expect("write input");
    }
    temp_dir
}

#[test]
fn no_command_runs_interactive_merge() {
    let temp_dir = setup(&[
        ("a.csv", "id,name\n1,alice\n2,bob\n"),
        ("b.csv", "id,email\n1,a@x.com\n3,c@x.com\n"),
    ]);

    // a.csv, b.csv, then column 1 of each
    let output = run_with_input(csvmerge(temp_dir.path()), "1\n2\n1\n1\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(stdout.contains("Data merged successfully into"), "stdout: {}", stdout);
    assert!(stderr.contains("Choose the first CSV file"));
    assert!(stderr.contains("1: a.csv"));
    assert!(!stdout.contains("Choose the first CSV file"));

    let outputs = files_with_prefix(temp_dir.path(), "output_");
    assert_eq!(outputs.len(), 1);
    let merged = fs::read_to_string(temp_dir.path().join(&outputs[0])).expect("read output");
    assert_eq!(merged, "id,name,id,email\n1,alice,1,a@x.com\n2,bob\n");
    let unmatched = files_with_prefix(temp_dir.path(), "unmatched_");
    let unmatched =
        fs::read_to_string(temp_dir.path().join(&unmatched[0])).expect("read unmatched");
    assert_eq!(unmatched, "id,email\n3,c@x.com\n");
}

#[test]
fn run_error_is_printed_and_exits_zero() {
    let temp_dir = setup(&[]);

    let output = run_with_input(csvmerge(temp_dir.path()), "");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: "), "stderr: {}", stderr);
    assert!(stderr.contains("No candidate files found"));
    assert!(output.stdout.is_empty());
    assert!(files_with_prefix(temp_dir.path(), "output_").is_empty());
}

#[test]
fn json_flag_prints_error_envelope() {
    let temp_dir = setup(&[("a.csv", "id\n1\n")]);

    let mut cmd = csvmerge(temp_dir.path());
    cmd.args(["--json", "merge", "--batch"]);
    let output = run_with_input(cmd, "");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr.lines().last().expect("error line");
    let value: serde_json::Value = serde_json::from_str(line).expect("error envelope is JSON");
    assert_eq!(value["status"], "error");
    assert_eq!(value["code"], "selection_error");
}

#[test]
fn delimiter_override_reads_and_writes_semicolons() {
    let temp_dir = setup(&[
        ("a.csv", "id;name\n1;alice\n"),
        ("b.csv", "id;email\n1;a@x.com\n"),
    ]);

    let mut cmd = csvmerge(temp_dir.path());
    cmd.args([
        "--json",
        "merge",
        "--first",
        "a.csv",
        "--second",
        "b.csv",
        "--first-key",
        "id",
        "--second-key",
        "id",
        "--delimiter",
        ";",
        "--batch",
    ]);
    let output = run_with_input(cmd, "");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("summary is JSON");
    assert_eq!(value["status"], "ok");
    assert_eq!(value["result"]["stats"]["matched"], 1);
    let path = value["result"]["output_path"].as_str().expect("output path");
    let merged = fs::read_to_string(path).expect("read output");
    assert_eq!(merged, "id;name;id;email\n1;alice;1;a@x.com\n");
}

#[test]
fn dir_flag_selects_working_directory() {
    let temp_dir = setup(&[("b.csv", "x\n"), ("a.csv", "x\n")]);
    let elsewhere = TempDir::new().expect("temp dir");

    let mut cmd = csvmerge(elsewhere.path());
    cmd.arg("--dir").arg(temp_dir.path()).args(["--json", "files"]);
    let output = run_with_input(cmd, "");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("listing is JSON");
    assert_eq!(value["result"]["total"], 2);
}

#[test]
fn log_level_override_emits_info_events() {
    let temp_dir = setup(&[
        ("a.csv", "id,name\n1,alice\n"),
        ("b.csv", "id,email\n1,a@x.com\n"),
    ]);

    let mut cmd = csvmerge(temp_dir.path());
    cmd.args([
        "--log-level",
        "info",
        "merge",
        "--first",
        "a.csv",
        "--second",
        "b.csv",
        "--first-key",
        "1",
        "--second-key",
        "1",
        "--batch",
    ]);
    let output = run_with_input(cmd, "");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("merge complete"), "stderr: {}", stderr);
}

#[test]
fn default_log_level_hides_info_events() {
    let temp_dir = setup(&[
        ("a.csv", "id,name\n1,alice\n"),
        ("b.csv", "id,email\n1,a@x.com\n"),
    ]);

    let mut cmd = csvmerge(temp_dir.path());
    cmd.args([
        "merge",
        "--first",
        "a.csv",
        "--second",
        "b.csv",
        "--first-key",
        "1",
        "--second-key",
        "1",
        "--batch",
    ]);
    let output = run_with_input(cmd, "");

    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("merge complete"));
}

#[test]
fn invalid_startup_options_exit_non_zero() {
    let temp_dir = setup(&[("a.csv", "id\n1\n")]);

    let mut cmd = csvmerge(temp_dir.path());
    cmd.args(["--log-level", "verbose", "files"]);
    assert!(!run_with_input(cmd, "").status.success());

    let mut cmd = csvmerge(temp_dir.path());
    cmd.args(["merge", "--delimiter", "ab", "--batch"]);
    assert!(!run_with_input(cmd, "").status.success());
}

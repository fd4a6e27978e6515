// Rust guideline compliant 2026-10-19

//! Integration tests for CLI commands.

use csvmerge_app::{ErrorCode, MergePlan, RunContext};
use csvmerge_cli::commands;
use csvmerge_core::Config;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn context(files: &[(&str, &str)]) -> (TempDir, RunContext) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        fs::write(temp_dir.path().join(name), content).expect("Failed to write input");
    }
    let ctx = RunContext::with_config(temp_dir.path().to_path_buf(), Config::default());
    (temp_dir, ctx)
}

#[test]
fn test_files_lists_sorted_candidates() {
    let (_temp_dir, ctx) = context(&[("b.csv", "x\n"), ("a.csv", "x\n"), ("notes.txt", "x\n")]);

    let files = commands::files::execute(&ctx).expect("Listing should succeed");
    let names: Vec<_> = files
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["a.csv", "b.csv"]);
}

#[test]
fn test_batch_merge_writes_outputs() {
    let (temp_dir, ctx) = context(&[
        ("a.csv", "id,name\n1,alice\n2,bob\n"),
        ("b.csv", "id,email\n1,a@x.com\n3,c@x.com\n"),
    ]);
    let plan = MergePlan {
        first: Some(PathBuf::from("a.csv")),
        second: Some(PathBuf::from("b.csv")),
        first_key: Some("id".to_string()),
        second_key: Some("1".to_string()),
    };

    let summary = commands::merge::execute(&ctx, &plan, true).expect("Merge should succeed");

    assert!(summary.output_path.starts_with(temp_dir.path()));
    let merged = fs::read_to_string(&summary.output_path).expect("Output exists");
    assert_eq!(merged, "id,name,id,email\n1,alice,1,a@x.com\n2,bob\n");
    let unmatched = fs::read_to_string(&summary.unmatched_path).expect("Unmatched exists");
    assert_eq!(unmatched, "id,email\n3,c@x.com\n");
}

#[test]
fn test_batch_merge_without_plan_fails_on_file_choice() {
    let (_temp_dir, ctx) = context(&[("a.csv", "id\n1\n"), ("b.csv", "id\n1\n")]);

    let err = commands::merge::execute(&ctx, &MergePlan::default(), true)
        .expect_err("Batch run without files should fail");

    assert_eq!(err.code(), ErrorCode::SelectionError);
}

#[test]
fn test_batch_merge_in_empty_dir_fails_on_discovery() {
    let (_temp_dir, ctx) = context(&[]);

    let err = commands::merge::execute(&ctx, &MergePlan::default(), true)
        .expect_err("Empty directory should fail");

    assert_eq!(err.code(), ErrorCode::DiscoveryError);
}

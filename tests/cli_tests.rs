//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tokometer() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("tokometer"))
}

#[test]
fn test_cli_version() {
    let mut cmd = tokometer();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("tokometer"));
}

#[test]
fn test_cli_help() {
    let mut cmd = tokometer();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Estimate LLM token counts"))
        .stdout(predicate::str::contains("estimate"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("presets"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_estimate_text_argument() {
    let mut cmd = tokometer();
    cmd.args(["estimate", "Hello"]);
    cmd.assert().success().stdout("1\n");
}

#[test]
fn test_estimate_symbols_and_space() {
    let mut cmd = tokometer();
    cmd.args(["estimate", "!@# $%^"]);
    cmd.assert().success().stdout("3\n");
}

#[test]
fn test_estimate_reads_stdin() {
    let mut cmd = tokometer();
    cmd.arg("estimate").write_stdin("Hello");
    cmd.assert().success().stdout("1\n");
}

#[test]
fn test_estimate_unknown_preset_fails() {
    let mut cmd = tokometer();
    cmd.args(["estimate", "--preset", "nope", "hi"]);
    cmd.assert().failure().stderr(predicate::str::contains("unknown preset: nope"));
}

#[test]
fn test_estimate_rejects_text_and_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("in.txt");
    fs::write(&path, "hi").expect("write input");

    let mut cmd = tokometer();
    cmd.args(["estimate", "hello", "--file", path.to_str().expect("utf8 path")]);
    cmd.assert().failure();
}

#[test]
fn test_estimate_sampling_flags_require_each_other() {
    let mut cmd = tokometer();
    cmd.args(["estimate", "hello", "--sample-threshold", "100"]);
    cmd.assert().failure();
}

#[test]
fn test_estimate_with_sampling_flags() {
    // Uniform text: the sampled projection matches the full count.
    let text = "a".repeat(100);
    let mut cmd = tokometer();
    cmd.args(["estimate", "--sample-threshold", "10", "--sample-size", "5", &text]);
    cmd.assert().success().stdout("21\n"); // 100 x 0.206 = 20.6
}

#[test]
fn test_estimate_file_json_report() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("in.txt");
    fs::write(&path, "Hello world, this is a test sentence.").expect("write input");

    let mut cmd = tokometer();
    cmd.args([
        "estimate",
        "--file",
        path.to_str().expect("utf8 path"),
        "--json",
        "--no-timestamp",
    ]);
    let output = cmd.output().expect("run estimate");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON report");
    assert_eq!(report["preset"], "general");
    assert_eq!(report["files"][0]["tokens"], 7);
    assert_eq!(report["total"], 7);
    assert!(report.get("generated_at").is_none());
}

#[test]
fn test_estimate_json_carries_timestamp_by_default() {
    let mut cmd = tokometer();
    cmd.args(["estimate", "Hello", "--json"]);
    cmd.assert().success().stdout(predicate::str::contains("generated_at"));
}

#[test]
fn test_estimate_multiple_files_totals() {
    let dir = TempDir::new().expect("temp dir");
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "Hello").expect("write a");
    fs::write(&b, "!@# $%^").expect("write b");

    let mut cmd = tokometer();
    cmd.args([
        "estimate",
        "--file",
        a.to_str().expect("utf8 path"),
        "--file",
        b.to_str().expect("utf8 path"),
        "--json",
        "--no-timestamp",
    ]);
    let output = cmd.output().expect("run estimate");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON report");
    assert_eq!(report["files"].as_array().expect("files array").len(), 2);
    assert_eq!(report["total"], 4); // 1 + 3
}

#[test]
fn test_estimate_missing_file_fails() {
    let mut cmd = tokometer();
    cmd.args(["estimate", "--file", "/nonexistent/input.txt"]);
    cmd.assert().failure().stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_analyze_json_breakdown() {
    let mut cmd = tokometer();
    cmd.args(["analyze", "Hello, 世界! 123", "--json"]);
    let output = cmd.output().expect("run analyze");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON report");
    assert_eq!(report["taxonomy"], "coarse");
    assert_eq!(report["counts"]["letters"], 5);
    assert_eq!(report["counts"]["symbols"], 2);
    assert_eq!(report["counts"]["cjk"], 2);
    assert_eq!(report["counts"]["digits"], 3);
    assert_eq!(report["counts"]["spaces"], 2);
    assert_eq!(report["total_code_points"], 14);
    assert_eq!(report["tokens"], 5);
}

#[test]
fn test_analyze_script_preset_text_output() {
    let mut cmd = tokometer();
    cmd.args(["analyze", "--preset", "kimi-k2", "Hello мир"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("script taxonomy"))
        .stdout(predicate::str::contains("cyrillic"))
        .stdout(predicate::str::contains("Estimated tokens"));
}

#[test]
fn test_presets_lists_builtins() {
    let mut cmd = tokometer();
    cmd.arg("presets");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("general"))
        .stdout(predicate::str::contains("kimi-k2"));
}

#[test]
fn test_presets_file_registers_custom_model() {
    let dir = TempDir::new().expect("temp dir");
    let presets = dir.path().join("models.toml");
    fs::write(
        &presets,
        r#"
[presets.letters-only]
description = "one token per letter"
taxonomy = "coarse"

[presets.letters-only.weights]
symbols = 0.0
letters = 1.0
digits = 0.0
cjk = 0.0
spaces = 0.0
other = 0.0
"#,
    )
    .expect("write presets file");

    let mut cmd = tokometer();
    cmd.args([
        "estimate",
        "--presets",
        presets.to_str().expect("utf8 path"),
        "--preset",
        "letters-only",
        "Hello",
    ]);
    cmd.assert().success().stdout("5\n");
}

#[test]
fn test_explicit_presets_file_must_parse() {
    let dir = TempDir::new().expect("temp dir");
    let presets = dir.path().join("broken.toml");
    fs::write(&presets, "not toml [").expect("write presets file");

    let mut cmd = tokometer();
    cmd.args(["presets", "--presets", presets.to_str().expect("utf8 path")]);
    cmd.assert().failure().stderr(predicate::str::contains("Invalid TOML syntax"));
}

#[test]
fn test_completions_generate() {
    let mut cmd = tokometer();
    cmd.args(["completions", "bash"]);
    cmd.assert().success().stdout(predicate::str::contains("tokometer"));
}

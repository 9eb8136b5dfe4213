use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use pretty_assertions::assert_eq;

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mdhtml"))
}

/// A fresh, empty working directory for one test.
fn temp_dir(name: &str) -> PathBuf {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).expect("time");
    let dir = env::temp_dir().join(format!(
        "mdhtml_cli_{}_{}_{}",
        name,
        now.as_secs(),
        now.subsec_nanos()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_input(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("input.md");
    fs::write(&path, contents).expect("write input");
    path
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("run")
}

#[test]
fn converts_to_output_html_in_working_directory() {
    let dir = temp_dir("default");
    write_input(&dir, "# Title\n\nHello *world*\n");

    let output = run_in(&dir, &["input.md"]);

    assert!(output.status.success(), "expected success exit code");
    let html = fs::read_to_string(dir.join("output.html")).expect("read output");
    assert_eq!(html, "<h1>Title</h1>\n<p>Hello <em>world</em></p>\n\n");
}

#[test]
fn output_flag_chooses_destination() {
    let dir = temp_dir("output_flag");
    write_input(&dir, "Hello world\n");

    let output = run_in(&dir, &["input.md", "-o", "page.html"]);

    assert!(output.status.success(), "expected success exit code");
    assert!(!dir.join("output.html").exists());
    let html = fs::read_to_string(dir.join("page.html")).expect("read output");
    assert_eq!(html, "<p>Hello world</p>\n\n");
}

#[test]
fn syntax_error_reports_position_and_writes_nothing() {
    let dir = temp_dir("syntax_error");
    write_input(&dir, "[text](url\n");

    let output = run_in(&dir, &["input.md"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("line 1, column 11: expected `)`, got text"),
        "unexpected stderr: {stderr}"
    );
    assert!(!dir.join("output.html").exists());
}

#[test]
fn syntax_error_keeps_previous_output() {
    let dir = temp_dir("keep_previous");
    write_input(&dir, "*unclosed\n");
    fs::write(dir.join("output.html"), "previous").expect("seed output");

    let output = run_in(&dir, &["input.md"]);

    assert!(!output.status.success(), "expected error exit code");
    let html = fs::read_to_string(dir.join("output.html")).expect("read output");
    assert_eq!(html, "previous");
}

#[test]
fn missing_input_is_reported() {
    let dir = temp_dir("missing");

    let output = run_in(&dir, &["nope.md"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read nope.md"), "unexpected stderr: {stderr}");
    assert!(!dir.join("output.html").exists());
}

#[test]
fn empty_input_is_rejected() {
    let dir = temp_dir("empty");
    write_input(&dir, "");

    let output = run_in(&dir, &["input.md"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("empty input"), "unexpected stderr: {stderr}");
    assert!(!dir.join("output.html").exists());
}

#[test]
fn no_arguments_prints_usage() {
    let dir = temp_dir("no_args");

    let output = run_in(&dir, &[]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "unexpected stderr: {stderr}");
}

#[test]
fn extra_arguments_print_usage() {
    let dir = temp_dir("extra_args");
    write_input(&dir, "Hello\n");

    let output = run_in(&dir, &["input.md", "other.md"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.join("output.html").exists());
}

#[test]
fn check_flag_writes_nothing() {
    let dir = temp_dir("check");
    write_input(&dir, "# Fine\n");

    let output = run_in(&dir, &["--check", "input.md"]);

    assert!(output.status.success(), "expected success exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("OK: input.md"), "unexpected stderr: {stderr}");
    assert!(!dir.join("output.html").exists());
}

#[test]
fn standalone_flag_wraps_page() {
    let dir = temp_dir("standalone");
    write_input(&dir, "# Notes\n");

    let output = run_in(&dir, &["--standalone", "input.md"]);

    assert!(output.status.success(), "expected success exit code");
    let html = fs::read_to_string(dir.join("output.html")).expect("read output");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>input</title>"));
    assert!(html.contains("<body>\n<h1>Notes</h1>\n</body>"));
}

#[test]
fn unknown_log_level_is_rejected() {
    let dir = temp_dir("bad_log_level");
    write_input(&dir, "Hello\n");

    let output = run_in(&dir, &["--log-level", "loud", "input.md"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loud"), "unexpected stderr: {stderr}");
    assert!(!dir.join("output.html").exists());
}

#[test]
fn debug_log_level_is_accepted() {
    let dir = temp_dir("debug_log_level");
    write_input(&dir, "Hello\n");

    let output = run_in(&dir, &["-l", "debug", "input.md"]);

    assert!(output.status.success(), "expected success exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[DEBUG]"), "unexpected stderr: {stderr}");
    assert!(dir.join("output.html").exists());
}

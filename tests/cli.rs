//! End-to-end runs of the binary: stdout, exit status and log filtering.

use std::process::{Command, Output};

fn run(args: &[&str], rust_log: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_levenshtein_calculator"));
    cmd.args(args).env("NO_COLOR", "1").env_remove("RUST_LOG");
    if let Some(filter) = rust_log {
        cmd.env("RUST_LOG", filter);
    }
    cmd.output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn prints_distance() {
    let output = run(&["kitten", "sitting"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3");
}

#[test]
fn json_report() {
    let output = run(&["flaw", "lawn", "--json"], None);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["score"]["distance"], 2);
    assert_eq!(report["mode"], "absolute");
}

#[test]
fn undefined_ratio_exits_non_zero() {
    let output = run(&["", "", "--ratio"], None);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("ratio is undefined"));
}

#[test]
fn matrix_logged_at_default_level() {
    let output = run(&["flaw", "lawn", "--print-matrix"], None);
    assert!(output.status.success());
    assert!(stderr(&output).contains("levenshtein::matrix"));
}

#[test]
fn rust_log_can_silence_the_matrix() {
    for filter in ["warn", "off"] {
        let output = run(&["flaw", "lawn", "--print-matrix"], Some(filter));
        assert!(output.status.success());
        assert_eq!(stderr(&output), "", "RUST_LOG={}", filter);
        assert_eq!(stdout(&output), "2");
    }
}

#[test]
fn rust_log_debug_shows_engine_events() {
    let output = run(&["flaw", "lawn"], Some("debug"));
    assert!(output.status.success());
    assert!(stderr(&output).contains("filled distance matrix"));
}

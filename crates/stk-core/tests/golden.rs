use std::fs;
use std::path::{Path, PathBuf};

use stk_core::{Outcome, Report, make_report, summarize_command};

fn case_dir(dir: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(dir)
}

fn load_expected_report(dir: &str) -> Report {
    let expected_path = case_dir(dir).join("expected_report.json");
    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

/// One command per line; blank lines and `#` comments are skipped.
fn load_inputs(dir: &str) -> Vec<Vec<u8>> {
    let input = fs::read_to_string(case_dir(dir).join("input.hex")).expect("read input.hex");
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let digits: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            hex::decode(digits).expect("valid hex line")
        })
        .collect()
}

fn run_golden(dir: &str) {
    let expected = load_expected_report(dir);

    let summaries = load_inputs(dir)
        .iter()
        .map(|buffer| summarize_command(buffer))
        .collect();
    let mut actual = make_report(summaries);
    actual.generated_at = expected.generated_at.clone();
    actual.tool = expected.tool.clone();

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_display_text() {
    run_golden("tests/golden/display_text");
}

#[test]
fn golden_length_mismatch() {
    run_golden("tests/golden/length_mismatch");
}

#[test]
fn golden_bare_command_details() {
    run_golden("tests/golden/bare_command_details");
}

#[test]
fn golden_unknown_command_type() {
    run_golden("tests/golden/unknown_command_type");
}

#[test]
fn golden_rejected() {
    run_golden("tests/golden/rejected");
}

#[test]
fn golden_length_mismatch_keeps_header() {
    let report = load_expected_report("tests/golden/length_mismatch");
    let command = &report.commands[0];
    assert_eq!(command.outcome, Outcome::LengthMismatch);
    assert_eq!(command.length_valid, Some(false));
    assert!(command.header.is_some());
    assert!(command.result.is_none());
}

#[test]
fn golden_rejected_has_result_codes() {
    let report = load_expected_report("tests/golden/rejected");
    let values: Vec<u8> = report
        .commands
        .iter()
        .filter_map(|command| command.result.as_ref())
        .map(|result| result.value)
        .collect();
    assert_eq!(values, vec![0x36, 0x32, 0x31]);
}

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;

const DISPLAY_TEXT: &str = "D0 0E 81 03 01 21 80 82 02 81 02 8D 03 04 48 69";
const TRUNCATED: &str = "D081";
const SHORT_DECLARED_LENGTH: &str = "D0 08 81 03 01 21 80 82 02 81 02";

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("stk"))
}

fn decode_json(args: &[&str]) -> Value {
    let assert = cmd().arg("decode").args(args).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    serde_json::from_str(&stdout).expect("valid json")
}

#[test]
fn help_lists_decode() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("decode"));
    cmd().arg("decode").arg("--help").assert().success();
}

#[test]
fn version_includes_build_commit() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("stk").and(contains("commit")));
}

#[test]
fn missing_input_is_usage_error() {
    cmd().arg("decode").assert().failure();
}

#[test]
fn invalid_hex_shows_error_and_hint() {
    cmd()
        .arg("decode")
        .arg("D0Z3")
        .assert()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn stdout_outputs_json_report() {
    let report = decode_json(&[DISPLAY_TEXT]);
    assert_eq!(report["report_version"], 1);
    assert_eq!(report["tool"]["name"], "stk");

    let command = &report["commands"][0];
    assert_eq!(command["outcome"], "decoded");
    assert_eq!(command["ber_tag"], "proactive_command");
    assert_eq!(command["header"]["command_type"], "DISPLAY_TEXT");
    assert_eq!(command["elements"].as_array().map(Vec::len), Some(3));
}

#[test]
fn reports_every_input_in_order() {
    let report = decode_json(&["0xD0 05 81 03 01 21 80", TRUNCATED, SHORT_DECLARED_LENGTH]);
    let outcomes: Vec<&str> = report["commands"]
        .as_array()
        .expect("commands array")
        .iter()
        .map(|command| command["outcome"].as_str().expect("outcome"))
        .collect();
    assert_eq!(outcomes, vec!["decoded", "rejected", "length_mismatch"]);
    assert_eq!(
        report["commands"][1]["result"]["code"],
        "REQUIRED_VALUES_MISSING"
    );
}

#[test]
fn pretty_and_compact_conflict() {
    cmd()
        .arg("decode")
        .arg(DISPLAY_TEXT)
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("error:").and(contains("cannot be used with")));
}

#[test]
fn pretty_output_is_multiline() {
    cmd()
        .arg("decode")
        .arg(DISPLAY_TEXT)
        .arg("--pretty")
        .assert()
        .success()
        .stdout(contains("\n  \"report_version\": 1"));
}

#[test]
fn quiet_suppresses_ok_message() {
    cmd()
        .arg("decode")
        .arg(DISPLAY_TEXT)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(contains("OK:").not());
}

#[test]
fn strict_fails_when_command_rejected() {
    cmd()
        .arg("decode")
        .arg(DISPLAY_TEXT)
        .arg(TRUNCATED)
        .arg("--strict")
        .assert()
        .code(2)
        .stderr(contains("1 command(s) rejected or length-invalid"));
}

#[test]
fn strict_fails_on_length_mismatch() {
    cmd()
        .arg("decode")
        .arg(SHORT_DECLARED_LENGTH)
        .arg("--strict")
        .assert()
        .code(2)
        .stderr(contains("hint:"));
}

#[test]
fn strict_passes_when_all_decoded() {
    cmd()
        .arg("decode")
        .arg(DISPLAY_TEXT)
        .arg("--strict")
        .assert()
        .success()
        .stderr(contains("OK: decoded 1 command(s)"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let assert = cmd()
        .arg("decode")
        .arg(SHORT_DECLARED_LENGTH)
        .arg("--verbose")
        .arg("--quiet")
        .assert()
        .success()
        .stderr(contains("length does not match"));
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let _: Value = serde_json::from_str(&stdout).expect("stdout stays valid json");
}

// Tests for the bracketty binary in non-interactive modes

use assert_cmd::Command;
use predicates::prelude::*;

fn bracketty() -> Command {
    Command::cargo_bin("bracketty").expect("binary should build")
}

#[test]
fn test_plain_balanced_exits_zero() {
    bracketty()
        .args(["--mode", "plain", "{()}[]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: balanced"))
        .stdout(predicate::str::contains("Push '{' to stack"));
}

#[test]
fn test_plain_unbalanced_exits_one() {
    bracketty()
        .args(["--mode", "plain", ")"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("without matching opening bracket"))
        .stdout(predicate::str::contains("Result: not balanced"));
}

#[test]
fn test_json_output() {
    bracketty()
        .args(["--mode", "json", "(]"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"is_valid\": false"))
        .stdout(predicate::str::contains("Mismatched brackets"));
}

#[test]
fn test_default_input_is_balanced() {
    bracketty()
        .args(["--mode", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: balanced (6 steps"));
}

#[test]
fn test_file_input_with_trailing_newline() {
    let path = std::env::temp_dir().join(format!("bracketty-cli-{}.txt", std::process::id()));
    std::fs::write(&path, "{[]}\n").expect("temp file should be writable");

    bracketty()
        .arg("--mode")
        .arg("plain")
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: balanced (4 steps"));

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_zero_interval_is_rejected() {
    bracketty()
        .args(["--mode", "plain", "--interval-ms", "0", "()"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("interval"));
}

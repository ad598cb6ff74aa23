use assert_cmd::Command;
use predicates::prelude::*;

fn sketchpad_cmd() -> Command {
    Command::cargo_bin("sketchpad").expect("binary exists")
}

#[test]
fn help_prints_usage() {
    sketchpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand and shape drawing pad with snapshot undo and PNG export",
        ));
}

#[test]
fn version_prints_package_version() {
    sketchpad_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_tool_is_rejected() {
    sketchpad_cmd()
        .args(["--tool", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tool 'banana'"));
}

#[test]
fn out_of_range_width_is_rejected() {
    sketchpad_cmd()
        .args(["--width", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in 16..=8192"));
}

//! The `delta` binary.

use std::process::{Command, Output};

use crate::common::write_file;

fn delta(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_delta"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("DELTA_BUFFER_SIZE")
        .output()
        .unwrap()
}

#[test]
fn lexes_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "sum.dl", "total = 1;\n");
    let output = delta(&["--buffer-size=4", path.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "LC_IDENTIFIER total [variable] @ ln 1 : col 1",
            "LC_OP_ASSIGNMENT_ASSIGN @ ln 1 : col 7",
            "LC_LITERAL_INT 1 = 1 @ ln 1 : col 9",
            "LC_SEPARATOR_SEMICOL @ ln 1 : col 10",
        ]
    );
}

#[test]
fn lexical_errors_fail_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "bad.dl", "x = 45a;\n");
    let output = delta(&["--color=never", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error[E2323]: malformed base 10 integer number"), "{stderr}");
    assert!(stderr.contains(": ln 1 : col 7"), "{stderr}");
}

#[test]
fn missing_file_fails() {
    let output = delta(&["/no/such/file.dl"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("E5101"), "{stderr}");
}

#[test]
fn bad_option_is_a_usage_error() {
    let output = delta(&["--buffer-size=1"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage: delta"), "{stderr}");
}

#[test]
fn version() {
    let output = delta(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("delta "));
}

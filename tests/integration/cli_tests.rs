// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use assert_cmd::Command;
use std::io::Write;

fn roll() -> Command {
    Command::cargo_bin("roll").unwrap()
}

#[test]
fn reads_notation_from_stdin() {
    let output = roll().write_stdin("2d1 + 3\n").output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "(1) + (1) + 3 = 5");
}

#[test]
fn prints_json_for_file_input() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "3d1 - 2").unwrap();

    let output = roll()
        .arg(file.path())
        .arg("--as-json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["step"][0]["total"], 1);
    assert_eq!(value["step"][0]["rolls"][0]["rolls"], serde_json::json!([1, 1, 1]));
}

#[test]
fn invalid_notation_exits_with_failure() {
    let output = roll().write_stdin("+3").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

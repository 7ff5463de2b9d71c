// tests/integration_test.rs
use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn run_binary(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--bin", "version-stamp", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_version_stamp_help() {
    let output = run_binary(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("version-stamp"));
    assert!(stdout.contains("Template file to read"));
}

#[test]
fn test_missing_required_flags_is_a_usage_error() {
    let output = run_binary(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_end_to_end_stamp() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("version.h.in");
    let tag = dir.path().join("version.tag");
    let out = dir.path().join("version.h");
    fs::write(&template, "#define LIB_VERSION \"${LIB_VERSION}\"\n").unwrap();
    fs::write(&tag, "2.5.10-rc1\n").unwrap();

    let output = run_binary(&[
        "-i",
        template.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "-v",
        tag.to_str().unwrap(),
        "--quiet",
    ]);

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "#define LIB_VERSION \"2.5.10\"\n"
    );
}

#[test]
fn test_malformed_tag_exits_nonzero_without_output() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("version.h.in");
    let tag = dir.path().join("version.tag");
    let out = dir.path().join("version.h");
    fs::write(&template, "${LIB_VERSION}\n").unwrap();
    fs::write(&tag, "1.0.0\nextra\n").unwrap();

    let output = run_binary(&[
        "-i",
        template.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "-v",
        tag.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("improperly formed"));
    assert!(!out.exists());
}

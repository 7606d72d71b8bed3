//! PTY integration tests for the bootcap binary
//!
//! These spawn the real binary in a pseudo-terminal. None of them press
//! Enter, so picocom and a serial device are never needed.

use rexpect::spawn;
use std::process::Command;
use tempfile::TempDir;

const TIMEOUT_MS: u64 = 10000;

fn bootcap_binary() -> &'static str {
    env!("CARGO_BIN_EXE_bootcap")
}

/// Test that a missing output path is a usage error
#[test]
fn test_missing_argument_is_usage_error() {
    let output = Command::new(bootcap_binary())
        .output()
        .expect("Failed to run bootcap");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<OUTPUT>"), "stderr: {stderr}");
}

/// Test that two output paths are rejected before anything runs
#[test]
fn test_two_arguments_are_usage_error() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("a.txt");
    let second = dir.path().join("b.txt");

    let output = Command::new(bootcap_binary())
        .arg(&first)
        .arg(&second)
        .output()
        .expect("Failed to run bootcap");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Press a key"), "stdout: {stdout}");
    assert!(!first.exists());
    assert!(!second.exists());
}

/// Test that an empty output path is rejected
#[test]
fn test_empty_argument_is_usage_error() {
    let output = Command::new(bootcap_binary())
        .arg("")
        .output()
        .expect("Failed to run bootcap");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Must specify target output file!"), "stderr: {stderr}");
}

/// Test that Ctrl+C at the first prompt exits without writing a file
#[test]
fn test_ctrl_c_at_prompt_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");

    let mut p = spawn(
        &format!("{} {}", bootcap_binary(), path.display()),
        Some(TIMEOUT_MS),
    )
    .expect("Failed to spawn bootcap");

    p.exp_string("Press a key to capture a 10-second sample")
        .expect("Should see the prompt");

    p.send_control('c').expect("Failed to send Ctrl+C");

    p.exp_string("No samples collected, exiting.")
        .expect("Should report that nothing was captured");
    p.exp_eof().expect("bootcap should exit");

    assert!(!path.exists());
}

/// Test that closing input at the prompt behaves like stopping
#[test]
fn test_eof_at_prompt_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");

    let mut p = spawn(
        &format!("{} {}", bootcap_binary(), path.display()),
        Some(TIMEOUT_MS),
    )
    .expect("Failed to spawn bootcap");

    p.exp_string("Press a key to capture a 10-second sample")
        .expect("Should see the prompt");

    p.send_control('d').expect("Failed to send Ctrl+D");

    p.exp_string("No samples collected, exiting.")
        .expect("Should report that nothing was captured");
    p.exp_eof().expect("bootcap should exit");

    assert!(!path.exists());
}

//! End-to-end tests of the `bird-adapter` binary

use std::process::Command;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bird-adapter"));
    cmd.env_remove("RUST_LOG");
    cmd
}

const CLASSIC_STDOUT: &str = "Bird Flying...\n\
None\n\
Bird chirp...chirp..\n\
None\n\
Toy Squeaking...\n\
None\n\
Adapter.....\n\
Bird chirp...chirp..\n\
None\n";

#[test]
fn default_run_prints_classic_transcript() {
    let output = bin().output().expect("failed to run binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), CLASSIC_STDOUT);
}

#[test]
fn logging_stays_off_stdout() {
    let output = bin().arg("-vv").output().expect("failed to run binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), CLASSIC_STDOUT);
    assert!(!output.stderr.is_empty());
}

#[test]
fn narrated_script_selectable() {
    let output = bin()
        .args(["--script", "narrated"])
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Sparrow...\nFlying...\n"));
    assert!(stdout.ends_with("Bird Adapter...\nChirp..Chirp...\n"));
}

#[test]
fn output_flag_writes_file_and_leaves_stdout_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transcript.txt");

    let output = bin()
        .arg("--output")
        .arg(&path)
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), CLASSIC_STDOUT);
}

#[test]
fn unwritable_output_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("transcript.txt");

    let output = bin()
        .arg("--output")
        .arg(&path)
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn unknown_script_is_rejected() {
    let output = bin()
        .args(["--script", "opera"])
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success());
}

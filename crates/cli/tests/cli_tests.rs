// Integration tests for the `leetsheet` binary.
// Run with: cargo test -p leetsheet-cli --test cli_tests -- --nocapture

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::tempdir;

const EXPORT_HEADER: &str = "Category,Problem No,Link,Problem Name,Technique,Completed?";

fn leetsheet(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_leetsheet"));
    cmd.current_dir(dir)
        .env_remove("LEETSHEET_CONFIG")
        .env_remove("RUST_LOG")
        // keep a real user config out of the run
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("HOME", dir);
    cmd
}

fn write_sheet(dir: &Path, name: &str) {
    fs::write(
        dir.join(name),
        "Problem Number,Problem Name,Technique,Completed?,Link\n\
         42,42. Trapping Rain Water,Two Pointers,TRUE,https://leetcode.com/problems/trapping-rain-water/\n\
         ,Unnumbered Warmup,Stack,,\n",
    )
    .unwrap();
}

// ---------------------------------------------------------------------------
// organize
// ---------------------------------------------------------------------------

#[test]
fn default_run_pads_to_three_hundred_rows() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("problems.csv"), "Problem Number,Problem Name,Technique\n").unwrap();
    fs::write(dir.path().join("leetsheet.toml"), "input = \"problems.csv\"\n").unwrap();

    let output = leetsheet(dir.path()).output().expect("run leetsheet");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        "Successfully organized 300 problems into 'leetcode_problems.csv'"
    );

    let csv = fs::read_to_string(dir.path().join("leetcode_problems.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], EXPORT_HEADER);
    assert_eq!(lines.len(), 301);
    assert!(lines[1].starts_with("Array & Hashing,36,"));
}

#[test]
fn organize_with_flags_and_source_rows() {
    let dir = tempdir().unwrap();
    write_sheet(dir.path(), "mine.csv");

    let output = leetsheet(dir.path())
        .args(["organize", "--input", "mine.csv", "--output", "out.csv", "--target", "140"])
        .output()
        .expect("run leetsheet organize");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let csv = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert_eq!(csv.lines().count(), 141);
    assert!(csv.contains(
        "Two Pointers,42,https://leetcode.com/problems/trapping-rain-water/ ,Trapping Rain Water,Two Pointers,True"
    ));
    // No dot in the name: problem number column falls back to empty
    assert!(csv.contains("Stack,,,Unnumbered Warmup,Stack,"));
}

#[test]
fn config_file_sets_target() {
    let dir = tempdir().unwrap();
    write_sheet(dir.path(), "mine.csv");
    fs::write(
        dir.path().join("custom.toml"),
        "input = \"mine.csv\"\noutput = \"small.csv\"\ntarget = 10\n",
    )
    .unwrap();

    let output = leetsheet(dir.path())
        .env("LEETSHEET_CONFIG", "custom.toml")
        .output()
        .expect("run leetsheet");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "Successfully organized 10 problems into 'small.csv'"
    );
    assert_eq!(fs::read_to_string(dir.path().join("small.csv")).unwrap().lines().count(), 11);
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempdir().unwrap();

    let output = leetsheet(dir.path()).output().expect("run leetsheet");
    assert_eq!(output.status.code(), Some(3));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: input file not found: leetcode problems.xlsx"), "{stderr}");
    assert!(stderr.contains("hint:"));
    assert!(!dir.path().join("leetcode_problems.csv").exists());
}

#[test]
fn malformed_config_is_a_config_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("leetsheet.toml"), "target = [").unwrap();

    let output = leetsheet(dir.path()).output().expect("run leetsheet");
    assert_eq!(output.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&output.stderr).contains("config parse error"));
}

#[test]
fn missing_column_is_an_input_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.csv"), "Name,Technique\n1. Two Sum,Hash Map\n").unwrap();

    let output = leetsheet(dir.path())
        .args(["organize", "-i", "bad.csv"])
        .output()
        .expect("run leetsheet");
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing required column 'Problem Name'"));
}

#[test]
fn overflowing_synthetic_start_is_a_config_error() {
    let dir = tempdir().unwrap();
    write_sheet(dir.path(), "mine.csv");
    fs::write(
        dir.path().join("leetsheet.toml"),
        "input = \"mine.csv\"\nsynthetic_start = 9223372036854775807\n",
    )
    .unwrap();

    let output = leetsheet(dir.path()).output().expect("run leetsheet");
    assert_eq!(output.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&output.stderr).contains("synthetic_start"));
    assert!(!dir.path().join("leetcode_problems.csv").exists());
}

#[test]
fn zero_target_is_a_usage_error() {
    let dir = tempdir().unwrap();
    let output = leetsheet(dir.path())
        .args(["organize", "--target", "0"])
        .output()
        .expect("run leetsheet");
    assert_eq!(output.status.code(), Some(2));
}

// ---------------------------------------------------------------------------
// setup
// ---------------------------------------------------------------------------

#[test]
fn setup_fills_missing_keys() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env"), "VITE_A4F_API_KEY=abc\nPORT=5173\n").unwrap();

    let mut child = leetsheet(dir.path())
        .arg("setup")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn leetsheet setup");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"client-id\n\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("VITE_A4F_API_KEY is already set."));
    assert!(stdout.contains("1 added, 1 already set"));
    assert!(stdout.contains("Still missing: GOOGLE_CLIENT_SECRET"));

    assert_eq!(
        fs::read_to_string(dir.path().join(".env")).unwrap(),
        "VITE_A4F_API_KEY=abc\nPORT=5173\nGOOGLE_CLIENT_ID=client-id\n"
    );
}

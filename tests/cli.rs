//! End-to-end tests of the `vmm` executable.
//!
//! These run the binary the way the dashboard does: two positional
//! arguments, report on stdout, failure signalled by exit status and stderr.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

fn vmm(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vmm"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn trace_file(contents: &str) -> (TempDir, String) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.txt");
    fs::write(&path, contents).unwrap();
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

/// Parse summary lines the way the dashboard does.
fn summary_fields(stdout: &str, name: &str) -> Vec<String> {
    let line = stdout
        .lines()
        .find(|l| l.starts_with(name))
        .unwrap_or_else(|| panic!("no summary line for {name}"));
    line.split('|')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

#[test]
fn test_belady_trace_report() {
    let (_dir, path) = trace_file("1 2 3 4 1 2 5 1 2 3 4 5\n");
    let output = vmm(&[&path, "3"]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    for banner in ["--- FIFO", "--- LRU", "--- Optimal"] {
        assert!(stdout.contains(banner), "missing {banner}");
    }
    assert_eq!(summary_fields(&stdout, "FIFO"), vec!["FIFO", "9", "3", "0.2500"]);
    assert_eq!(summary_fields(&stdout, "LRU"), vec!["LRU", "10", "2", "0.1667"]);
    assert_eq!(summary_fields(&stdout, "Optimal"), vec!["Optimal", "7", "5", "0.4167"]);
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let (_dir, path) = trace_file("7 0 1 2 0 3 0 4 2 3 0 3 2 1 2 0 1 7 0 1\n");

    let first = vmm(&[&path, "3"]);
    let second = vmm(&[&path, "3"]);
    let sequential = vmm(&[&path, "3", "--sequential"]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stdout, sequential.stdout);
}

#[test]
fn test_empty_trace() {
    let (_dir, path) = trace_file("");
    let output = vmm(&[&path, "4"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for name in ["FIFO", "LRU", "Optimal"] {
        assert_eq!(summary_fields(&stdout, name)[1..], ["0", "0", "0.0000"]);
    }
}

#[test]
fn test_empty_trace_rejected_on_request() {
    let (_dir, path) = trace_file("\n");
    let output = vmm(&[&path, "4", "--require-references"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_negative_page_is_rejected() {
    let (_dir, path) = trace_file("1 2 -3\n");
    let output = vmm(&[&path, "3"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid input"), "stderr: {stderr}");
}

#[test]
fn test_non_numeric_token_is_rejected() {
    let (_dir, path) = trace_file("1 two 3\n");
    let output = vmm(&[&path, "3"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let output = vmm(&[path.to_str().unwrap(), "3"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_bad_frame_counts_are_rejected() {
    // An unreadable trace would also fail; the frame count must be caught first.
    for frames in ["0", "-2", "abc"] {
        let output = vmm(&["does-not-exist.txt", frames]);

        assert!(!output.status.success(), "frames {frames:?} accepted");
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("invalid configuration"), "stderr: {stderr}");
    }
}

#[test]
fn test_step_mode_prints_frames() {
    let (_dir, path) = trace_file("1 2 3 4\n");
    let output = vmm(&[&path, "3", "--step"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Page 4 -> FAULT (Replaced 1)\nFrames: [ 4 2 3 ]\n"));
}

#[test]
fn test_report_and_csv_files() {
    let (dir, path) = trace_file("1 2 3 4 1 2 5 1 2 3 4 5\n");
    let out_dir = dir.path().to_str().unwrap();
    let output = vmm(&[&path, "3", "--report", out_dir, "--csv", out_dir]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Report saved to"));
    // The trailing notice must not disturb the summary table.
    assert_eq!(summary_fields(&stdout, "FIFO")[1], "9");

    let report = fs::read_to_string(Path::new(out_dir).join("report.txt")).unwrap();
    assert!(report.contains("Unique Pages: 5"));

    let csv = fs::read_to_string(Path::new(out_dir).join("results.csv")).unwrap();
    assert_eq!(
        csv,
        "Algorithm,PageFaults,Hits,HitRatio\nFIFO,9,3,0.2500\nLRU,10,2,0.1667\nOptimal,7,5,0.4167\n"
    );
}

#[test]
fn test_frame_count_beyond_trace_size() {
    let (_dir, path) = trace_file("1 2 3 1 2 3\n");
    let output = vmm(&[&path, "18446744073709551615"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stderr.is_empty());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Frames: 18446744073709551615\n"));
    assert!(!stdout.contains("Replaced"));
    for name in ["FIFO", "LRU", "Optimal"] {
        assert_eq!(summary_fields(&stdout, name)[1..], ["3", "3", "0.5000"]);
    }
}

#[test]
fn test_page_numbers_beyond_u64() {
    let (_dir, path) = trace_file("1 18446744073709551616 1 018446744073709551616 2\n");
    let output = vmm(&[&path, "1"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Page 18446744073709551616 -> FAULT (Replaced 1)\n"));
    assert!(stdout.contains("Page 2 -> FAULT (Replaced 18446744073709551616)\n"));
    assert_eq!(summary_fields(&stdout, "FIFO")[1..], ["5", "0", "0.0000"]);
}

#[test]
fn test_unwritable_csv_leaves_stdout_empty() {
    let (dir, path) = trace_file("1 2 3 1\n");
    let csv = dir.path().join("no-such-dir").join("results.csv");
    let output = vmm(&[&path, "2", "--csv", csv.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("results.csv"), "stderr: {stderr}");
}

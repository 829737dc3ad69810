//! CLI tests for the kcc binary.
//!
//! Spawns the real binary against temp suites and script libraries and
//! verifies exit codes, report output, and cache behavior end to end.

#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use kcc::exit_codes;

fn write_script(dir: &Path, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join(name);
    fs::write(&path, body).expect("write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
}

fn write_suite(dir: &Path, contents: &str) -> String {
    let path = dir.join("suite.yml");
    fs::write(&path, contents).expect("write suite");
    path.to_str().expect("utf8").to_string()
}

fn kcc(dir: &Path, args: &[&str]) -> Output {
    // Point --config at a missing file so a developer's own config file
    // cannot leak into the test run.
    let config = dir.join("no-config.toml");
    Command::new(env!("CARGO_BIN_EXE_kcc"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .expect("run kcc")
}

#[test]
fn run_passing_suite_prints_ok_report_and_exits_zero() {
    let temp = tempfile::tempdir().expect("tempdir");
    let lib = temp.path().join("lib");
    fs::create_dir(&lib).expect("mkdir");
    write_script(&lib, "boot.sh", "#!/bin/sh\nexit 0\n");

    let suite = write_suite(
        temp.path(),
        "- category: svc\n  description: service checks\n  test-suite:\n    - category: start\n      test:\n        - script: boot.sh\n          description: boots service\n",
    );

    let output = kcc(
        temp.path(),
        &["run", "--suite", &suite, "--library", lib.to_str().expect("utf8")],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[+] svc"));
    assert!(stdout.contains("service checks"));
    assert!(stdout.contains(" - Testing svc"));
    assert!(stdout.contains("   - boots service"));
    assert!(stdout.contains("[ OK ]"));
    assert!(!stdout.contains("[ KO ]"));
}

#[test]
fn run_failing_script_shows_ko_and_hint() {
    let temp = tempfile::tempdir().expect("tempdir");
    let lib = temp.path().join("lib");
    fs::create_dir(&lib).expect("mkdir");
    write_script(
        &lib,
        "cable.sh",
        "#!/bin/sh\n# @KCC hint 2 Check network cable\nexit 2\n",
    );

    let suite = write_suite(
        temp.path(),
        "- category: net\n  test:\n    - script: cable.sh\n",
    );

    let output = kcc(
        temp.path(),
        &[
            "run",
            "--suite",
            &suite,
            "--library",
            lib.to_str().expect("utf8"),
            "--show-hints",
        ],
    );
    // Test failures are reported, not encoded in the exit status.
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[ KO ]"));
    assert!(stdout.contains("Hint : Check network cable"));
}

#[test]
fn missing_script_is_reported_as_ko_without_failing_the_run() {
    let temp = tempfile::tempdir().expect("tempdir");
    let lib = temp.path().join("lib");
    fs::create_dir(&lib).expect("mkdir");

    let suite = write_suite(
        temp.path(),
        "- category: net\n  test:\n    - script: ping.sh\n",
    );

    let output = kcc(
        temp.path(),
        &["run", "--suite", &suite, "--library", lib.to_str().expect("utf8")],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stdout).contains("[ KO ]"));
}

#[test]
fn unknown_category_token_is_fatal() {
    let temp = tempfile::tempdir().expect("tempdir");
    let lib = temp.path().join("lib");
    fs::create_dir(&lib).expect("mkdir");

    let suite = write_suite(temp.path(), "- category: net\n");

    let output = kcc(
        temp.path(),
        &[
            "run",
            "--suite",
            &suite,
            "--library",
            lib.to_str().expect("utf8"),
            "--category",
            "net:bogus",
        ],
    );
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("bogus"));
}

#[test]
fn missing_suite_file_is_fatal() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = kcc(
        temp.path(),
        &["run", "--suite", "/nonexistent/suite.yml", "--library", "/tmp"],
    );
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

#[test]
fn undefined_library_path_is_fatal() {
    let temp = tempfile::tempdir().expect("tempdir");
    let suite = write_suite(temp.path(), "- category: net\n");

    let output = kcc(temp.path(), &["run", "--suite", &suite]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("library path is not defined"));
}

#[test]
fn result_cache_runs_duplicate_pairs_once() {
    let temp = tempfile::tempdir().expect("tempdir");
    let lib = temp.path().join("lib");
    fs::create_dir(&lib).expect("mkdir");
    let counter = temp.path().join("count");
    write_script(
        &lib,
        "count.sh",
        &format!("#!/bin/sh\necho x >> {}\nexit 0\n", counter.display()),
    );

    let suite = write_suite(
        temp.path(),
        "- category: a\n  test:\n    - script: count.sh\n- category: b\n  test:\n    - script: count.sh\n",
    );

    let output = kcc(
        temp.path(),
        &["run", "--suite", &suite, "--library", lib.to_str().expect("utf8")],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let runs = fs::read_to_string(&counter).expect("read counter");
    assert_eq!(runs.lines().count(), 1);
}

#[test]
fn no_result_cache_runs_duplicate_pairs_each_time() {
    let temp = tempfile::tempdir().expect("tempdir");
    let lib = temp.path().join("lib");
    fs::create_dir(&lib).expect("mkdir");
    let counter = temp.path().join("count");
    write_script(
        &lib,
        "count.sh",
        &format!("#!/bin/sh\necho x >> {}\nexit 0\n", counter.display()),
    );

    let suite = write_suite(
        temp.path(),
        "- category: a\n  test:\n    - script: count.sh\n- category: b\n  test:\n    - script: count.sh\n",
    );

    let output = kcc(
        temp.path(),
        &[
            "run",
            "--suite",
            &suite,
            "--library",
            lib.to_str().expect("utf8"),
            "--no-result-cache",
        ],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let runs = fs::read_to_string(&counter).expect("read counter");
    assert_eq!(runs.lines().count(), 2);
}

#[test]
fn script_arguments_are_passed_through() {
    let temp = tempfile::tempdir().expect("tempdir");
    let lib = temp.path().join("lib");
    fs::create_dir(&lib).expect("mkdir");
    // Fails unless called with the expected arguments.
    write_script(
        &lib,
        "args.sh",
        "#!/bin/sh\n[ \"$1\" = \"alpha\" ] && [ \"$2\" = \"beta\" ] && exit 0\nexit 1\n",
    );

    let suite = write_suite(
        temp.path(),
        "- category: net\n  test:\n    - script: args.sh\n      args: \"alpha beta\"\n",
    );

    let output = kcc(
        temp.path(),
        &["run", "--suite", &suite, "--library", lib.to_str().expect("utf8")],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[ OK ]"));
    assert!(!stdout.contains("[ KO ]"));
}

#[test]
fn validate_accepts_well_formed_suite() {
    let temp = tempfile::tempdir().expect("tempdir");
    let suite = write_suite(
        temp.path(),
        "- category: net\n  test:\n    - script: ping.sh\n",
    );

    let output = kcc(temp.path(), &["validate", "--suite", &suite]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stdout).contains("valid suite"));
}

#[test]
fn validate_rejects_malformed_suite() {
    let temp = tempfile::tempdir().expect("tempdir");
    let suite = write_suite(temp.path(), "- category: net\n  bogus: true\n");

    let output = kcc(temp.path(), &["validate", "--suite", &suite]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn list_prints_the_category_tree() {
    let temp = tempfile::tempdir().expect("tempdir");
    let suite = write_suite(
        temp.path(),
        "- category: net\n  test-suite:\n    - category: tcp\n      test:\n        - script: handshake.sh\n",
    );

    let output = kcc(temp.path(), &["list", "--suite", &suite]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("- net"));
    assert!(stdout.contains("  - tcp"));
    assert!(stdout.contains("handshake.sh"));
}

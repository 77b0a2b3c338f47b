//! Probe specs: file contents and branch name reporting.
//!
//! Every run exits 1 once both probes are reported, on success and failure
//! branches alike.

use crate::prelude::*;

#[test]
fn reports_file_and_argv_inside_repository() {
    let temp = Project::empty();
    temp.git_init();
    temp.file("notes.txt", "hello\n");

    temp.headcheck()
        .args(&["notes.txt"])
        .exits_with(PROBE_EXIT)
        .stdout_has("{ stdout: \"hello\\n\", err: null, stderr: \"\" }")
        .stdout_has("\"notes.txt\"]");
}

#[test]
fn missing_file_is_reported_as_failure() {
    let temp = Project::empty();
    temp.git_init();

    temp.headcheck()
        .args(&["absent.txt"])
        .exits_with(PROBE_EXIT)
        .stdout_has("err: \"command `cat absent.txt` failed with exit code 1\"")
        .stdout_has("absent.txt: No such file or directory");
}

#[test]
fn outside_repository_reports_git_failure() {
    let temp = Project::empty();
    temp.file("notes.txt", "hello\n");

    temp.headcheck()
        .args(&["notes.txt"])
        .exits_with(PROBE_EXIT)
        .stdout_has("stdout: \"hello\\n\"")
        .stdout_lacks("\"notes.txt\"]")
        .stdout_has("not a git repository")
        .stderr_has("command `git rev-parse --abbrev-ref HEAD` failed with exit code 128");
}

#[cfg(unix)]
#[test]
fn non_utf8_file_name_is_catted() {
    use std::os::unix::ffi::OsStrExt;

    let temp = Project::empty();
    temp.git_init();
    let name = std::ffi::OsStr::from_bytes(b"caf\xe9.txt");
    temp.file(name, "latin-1 name\n");

    temp.headcheck()
        .arg_os(name)
        .exits_with(PROBE_EXIT)
        .stdout_has("{ stdout: \"latin-1 name\\n\", err: null, stderr: \"\" }");
}

#[test]
fn no_argument_cats_empty_stdin() {
    let temp = Project::empty();
    temp.git_init();

    temp.headcheck().exits_with(PROBE_EXIT).stdout_has("{ stdout: \"\", err: null, stderr: \"\" }");
}

#[test]
fn argument_is_passed_verbatim() {
    let temp = Project::empty();
    temp.git_init();
    temp.file("a b; echo pwned", "literal\n");

    temp.headcheck()
        .args(&["a b; echo pwned"])
        .exits_with(PROBE_EXIT)
        .stdout_has("stdout: \"literal\\n\"")
        .stdout_lacks("pwned\\n");
}

#[test]
fn json_output_is_one_record() {
    let temp = Project::empty();
    temp.git_init();
    temp.file("notes.txt", "line one\nline two\n");

    let run = temp.headcheck().args(&["--output", "json", "notes.txt"]).exits_with(PROBE_EXIT);

    let stdout = run.stdout();
    let record = stdout.lines().find(|l| l.starts_with('{')).unwrap();
    let value: serde_json::Value = serde_json::from_str(record).unwrap();
    assert_eq!(value["stdout"], "line one\nline two\n");
    assert_eq!(value["failed"], false);
    assert_eq!(value["exit_code"], 0);
}

#[test]
fn repeated_runs_print_the_same_report() {
    let temp = Project::empty();
    temp.git_init();
    temp.file("notes.txt", "stable\n");

    let first = temp.headcheck().args(&["notes.txt"]).exits_with(PROBE_EXIT).stdout();
    let second = temp.headcheck().args(&["notes.txt"]).exits_with(PROBE_EXIT).stdout();

    let mut first: Vec<&str> = first.lines().collect();
    let mut second: Vec<&str> = second.lines().collect();
    first.sort_unstable();
    second.sort_unstable();
    assert_eq!(first, second);
}

use pretty_assertions::assert_eq;
use std::{
    fs,
    path::Path,
    process::{Command, Output},
};
use tempfile::tempdir;

fn run(directory: &Path, arguments: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_inliner"))
        .args(arguments)
        .current_dir(directory)
        .output()
        .unwrap()
}

#[test]
fn expand_file() {
    let directory = tempdir().unwrap();
    fs::write(
        directory.path().join("a.txt"),
        "before\n#include \"b.txt\"\nafter\n",
    )
    .unwrap();
    fs::write(directory.path().join("b.txt"), "MIDDLE").unwrap();

    let output = run(directory.path(), &["a.txt"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "before\nMIDDLE\nafter\n"
    );
    assert_eq!(String::from_utf8(output.stderr).unwrap(), "");
}

#[test]
fn keep_nested_directive() {
    let directory = tempdir().unwrap();
    fs::write(directory.path().join("a.txt"), "#include \"b.txt\"\n").unwrap();
    fs::write(directory.path().join("b.txt"), "#include \"missing.txt\"").unwrap();

    let output = run(directory.path(), &["a.txt"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "#include \"missing.txt\"\n"
    );
}

#[test]
fn resolve_include_path_against_working_directory() {
    let directory = tempdir().unwrap();
    fs::create_dir(directory.path().join("sub")).unwrap();
    fs::write(
        directory.path().join("sub/a.txt"),
        "#include \"sub/b.txt\"",
    )
    .unwrap();
    fs::write(directory.path().join("sub/b.txt"), "B").unwrap();

    let output = run(directory.path(), &["sub/a.txt"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "B");
}

#[test]
fn change_working_directory() {
    let directory = tempdir().unwrap();
    let other_directory = tempdir().unwrap();
    fs::write(directory.path().join("a.txt"), "#include \"b.txt\"").unwrap();
    fs::write(directory.path().join("b.txt"), "B").unwrap();

    let output = run(
        other_directory.path(),
        &["-C", &directory.path().display().to_string(), "a.txt"],
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "B");
}

#[test]
fn print_usage_without_file() {
    let directory = tempdir().unwrap();

    let output = run(directory.path(), &[]);

    assert!(!output.status.success());
    assert!(
        String::from_utf8(output.stdout)
            .unwrap()
            .starts_with("Usage:")
    );
}

#[test]
fn fail_on_missing_file() {
    let directory = tempdir().unwrap();

    let output = run(directory.path(), &["missing.txt"]);

    assert!(!output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "");
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "file \"missing.txt\" not found\n"
    );
}

#[test]
fn fail_on_missing_included_file() {
    let directory = tempdir().unwrap();
    fs::write(
        directory.path().join("c.txt"),
        "before\n#include \"missing.txt\"\n",
    )
    .unwrap();

    let output = run(directory.path(), &["c.txt"]);

    assert!(!output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "");
    assert!(
        String::from_utf8(output.stderr)
            .unwrap()
            .contains("missing.txt")
    );
}

#[test]
fn prefix_error_message() {
    let directory = tempdir().unwrap();

    let output = run(
        directory.path(),
        &["--log-prefix", "inliner: ", "missing.txt"],
    );

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "inliner: file \"missing.txt\" not found\n"
    );
}

#[test]
fn log_debug_messages() {
    let directory = tempdir().unwrap();
    fs::write(directory.path().join("a.txt"), "#include \"b.txt\"").unwrap();
    fs::write(directory.path().join("b.txt"), "B").unwrap();

    let output = run(directory.path(), &["--debug", "a.txt"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "B");
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "inliner: reading \"a.txt\"\ninliner: including \"b.txt\"\n"
    );
}

#[test]
fn log_profile_timing() {
    let directory = tempdir().unwrap();
    fs::write(directory.path().join("a.txt"), "A").unwrap();

    let output = run(directory.path(), &["--profile", "a.txt"]);

    assert!(output.status.success());
    assert!(
        String::from_utf8(output.stderr)
            .unwrap()
            .starts_with("inliner: expanded \"a.txt\" in ")
    );
}

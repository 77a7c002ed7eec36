use predicates::str::{contains, starts_with};
use rstest::rstest;

use crate::common;

#[rstest]
#[case::no_arguments(&[])]
#[case::two_arguments(&["first", "second"])]
#[case::three_arguments(&["a", "b", "c"])]
fn test_usage_when_wrong_number_of_arguments(#[case] args: &[&str]) {
    common::Runner::new()
        .args(args)
        .run()
        .code(1)
        .stdout("")
        .stderr(contains("Usage: pagecat <FILE>"));
}

#[test]
fn test_usage_does_not_touch_existing_files() {
    let sandbox = common::get_sandbox();
    let first = common::create_file(&sandbox, "first", b"first");
    let second = common::create_file(&sandbox, "second", b"second");

    common::Runner::new()
        .arg_path(first)
        .arg_path(second)
        .run()
        .code(1)
        .stdout("")
        .stderr(starts_with("error: unexpected argument"));
}

#[test]
fn test_version() {
    common::Runner::new()
        .args(&["--version"])
        .run()
        .code(0)
        .stdout(format!("pagecat {}\n", env!("CARGO_PKG_VERSION")))
        .stderr("");
}

#[test]
fn test_help() {
    common::Runner::new()
        .args(&["--help"])
        .run()
        .code(0)
        .stdout(contains("Usage: pagecat <FILE>"))
        .stderr("");
}

#[test]
fn test_file_starting_with_dash_after_double_dash() {
    let sandbox = common::get_sandbox();
    common::create_file(&sandbox, "-dash", b"dash content");

    common::Runner::new()
        .current_dir(sandbox.path())
        .args(&["--", "-dash"])
        .run()
        .code(0)
        .stdout("dash content")
        .stderr("");
}

#[test]
fn test_file_starting_with_dash_without_double_dash() {
    let sandbox = common::get_sandbox();
    common::create_file(&sandbox, "-dash", b"dash content");

    common::Runner::new()
        .current_dir(sandbox.path())
        .args(&["-dash"])
        .run()
        .code(1)
        .stdout("")
        .stderr(contains("Usage: pagecat <FILE>"));
}

#[test]
fn test_help_explains_double_dash() {
    common::Runner::new()
        .args(&["--help"])
        .run()
        .code(0)
        .stdout(contains("must follow '--'"));
}

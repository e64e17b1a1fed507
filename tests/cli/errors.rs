//! Tests for top-level flags, help and completions.

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "search-parameters");
    assert_stdout_contains(&output, "search-secrets");
}

#[test]
fn test_search_help_lists_flags() {
    let t = Test::new();

    let output = t.search_parameters(&["-h"]);
    assert_success(&output);
    for flag in [
        "--term",
        "--region",
        "--max-results",
        "--no-limit",
        "--all",
        "--csv",
        "--extended",
        "--no-truncate",
        "--no-header",
        "--disable-decryption",
    ] {
        assert_stdout_contains(&output, flag);
    }
}

#[test]
fn test_secrets_have_no_decryption_flag() {
    let t = Test::new();

    let output = t.search_secrets(&["--disable-decryption"]);
    assert_exit_code(&output, 2);
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "asap");
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "zsh"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "#compdef asap");
}

#[test]
fn test_completions_fish() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "fish"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "complete -c asap");
}

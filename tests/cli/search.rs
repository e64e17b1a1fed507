//! Tests for `asap search-parameters` and `asap search-secrets` up to the
//! authentication check.

use crate::support::*;

const AUTH_MESSAGE: &str = "Please authenticate against AWS to use this tool";

#[test]
fn test_parameters_without_credentials_fail() {
    let t = Test::new();

    let output = t.search_parameters(&["--term", "db"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, AUTH_MESSAGE);
}

#[test]
fn test_secrets_without_credentials_fail() {
    let t = Test::new();

    let output = t.search_secrets(&["--all"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, AUTH_MESSAGE);
}

#[test]
fn test_aliases_reach_authentication() {
    let t = Test::new();

    for alias in ["ps", "sm"] {
        let output = t.cmd().args([alias, "-t", "db"]).output().unwrap();
        assert_exit_code(&output, 1);
        assert_stderr_contains(&output, AUTH_MESSAGE);
    }
}

#[test]
fn test_term_conflicts_with_all() {
    let t = Test::new();

    let output = t.search_parameters(&["--term", "db", "--all"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "--term cannot be used together with --all");
    assert_stderr_excludes(&output, AUTH_MESSAGE);
}

#[test]
fn test_max_results_conflicts_with_no_limit() {
    let t = Test::new();

    let output = t.search_secrets(&["-n", "10", "--no-limit"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "--max-results cannot be used together with --no-limit");
}

#[test]
fn test_no_limit_conflicts_with_all() {
    let t = Test::new();

    let output = t.search_secrets(&["--no-limit", "--all"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "--no-limit cannot be used together with --all");
}

#[test]
fn test_term_combines_with_max_results() {
    let t = Test::new();

    let output = t.search_parameters(&["-t", "db", "-n", "5"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, AUTH_MESSAGE);
}

#[test]
fn test_csv_conflicts_with_display_toggles() {
    let t = Test::new();

    let output = t.search_parameters(&["--all", "--csv", "--no-header"]);
    assert_exit_code(&output, 2);

    let output = t.search_parameters(&["--all", "--csv", "--no-truncate"]);
    assert_exit_code(&output, 2);
}

#[test]
fn test_max_results_must_be_positive() {
    let t = Test::new();

    let output = t.search_parameters(&["-t", "db", "-n", "0"]);
    assert_exit_code(&output, 2);
}

#[test]
fn test_invalid_config_reported_before_authentication() {
    let t = Test::with_config("max_results = 0\n");

    let output = t.search_secrets(&["--all"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "max_results");
    assert_stderr_excludes(&output, AUTH_MESSAGE);
}

#[test]
fn test_valid_config_is_accepted() {
    let t = Test::with_config("region = \"eu-west-1\"\nmax_results = 20\n");

    let output = t.search_secrets(&["--all"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, AUTH_MESSAGE);
}

#[test]
fn test_empty_term_rejected() {
    let t = Test::new();

    let output = t.search_parameters(&["--term", ""]);
    assert_exit_code(&output, 2);
}

#[test]
fn test_parameter_page_size_capped_before_authentication() {
    let t = Test::new();

    let output = t.search_parameters(&["-t", "db", "-n", "100"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "page size 100 is above the 50 results");
    assert_stderr_excludes(&output, AUTH_MESSAGE);
}

#[test]
fn test_secret_page_size_allows_one_hundred() {
    let t = Test::new();

    let output = t.search_secrets(&["-t", "db", "-n", "100"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, AUTH_MESSAGE);

    let output = t.search_secrets(&["-t", "db", "-n", "101"]);
    assert_stderr_contains(&output, "page size 101 is above the 100 results");
}

#[test]
fn test_config_page_size_capped_for_parameters() {
    let t = Test::with_config("max_results = 80\n");

    let output = t.search_parameters(&["-t", "db"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "page size 80 is above the 50 results");
}

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Build a recipe-new command running in an isolated temp directory with a
/// dummy token set.
fn recipe_new() -> (Command, TempDir) {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("recipe-new").unwrap();
    cmd.current_dir(temp.path());
    cmd.env("GITHUB_TOKEN", "dummy-token-for-tests");
    (cmd, temp)
}

#[test]
fn missing_token_is_fatal_before_url_validation() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("recipe-new").unwrap();
    cmd.current_dir(temp.path());
    cmd.env_remove("GITHUB_TOKEN");

    // Even a plainly invalid URL is never inspected without a token.
    cmd.arg("not-a-url")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_TOKEN"));
}

#[test]
fn invalid_url_exits_one_without_network() {
    let (mut cmd, _temp) = recipe_new();

    cmd.arg("https://gitlab.com/some/project")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "does not appear to be a valid GitHub URL",
        ));
}

#[test]
fn invalid_url_names_the_offending_input() {
    let (mut cmd, _temp) = recipe_new();

    cmd.arg("ftp://github.com/owner/repo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ftp://github.com/owner/repo"));
}

#[test]
fn missing_argument_is_a_usage_error() {
    let (mut cmd, _temp) = recipe_new();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_describes_the_positional_url() {
    let (mut cmd, _temp) = recipe_new();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("URL"));
}

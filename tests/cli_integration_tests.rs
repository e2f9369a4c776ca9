#![allow(deprecated)] // cargo_bin deprecation - still works fine

use assert_cmd::Command;
use predicates::prelude::*;
use std::fmt::Write;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SQUEEZE_SPACES: &str = "sed -e 's/  */ /g' {file}";

fn default_cmd(repo: &Path) -> Command {
    let mut cmd = Command::cargo_bin("style-check").expect("binary should exist");
    cmd.current_dir(repo)
        .env_remove("STYLE_CHECK_IGNORE_FILE")
        .env_remove("STYLE_CHECK_FORMATTER")
        .env_remove("NO_COLOR");
    cmd
}

fn bare_cmd(repo: &Path) -> Command {
    let mut cmd = default_cmd(repo);
    cmd.args(["--color", "never"]);
    cmd
}

fn cmd(repo: &Path) -> Command {
    let mut cmd = bare_cmd(repo);
    cmd.args(["--formatter", SQUEEZE_SPACES]);
    cmd
}

fn git(repo: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .expect("git should run");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn commit_file(repo: &Path, rel: &str, contents: &str) {
    let path = repo.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    git(repo, &["add", rel]);
    git(repo, &["commit", "-q", "-m", rel]);
}

/// `foo.c` with 41 lines on `main`; lines 1 and 3 carry formatting debt.
fn foo_c() -> String {
    let mut s = String::from("int  debt_one;\nint ok;\nint  debt_two;\n");
    for i in 4..=41 {
        let _ = writeln!(s, "int v{i};");
    }
    s
}

/// Repository on branch `feature`, forked from `main` after `foo.c` was added.
fn setup_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let repo = temp_dir.path();

    git(repo, &["init", "-q"]);
    git(repo, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(repo, &["config", "user.email", "test@example.com"]);
    git(repo, &["config", "user.name", "Test User"]);
    git(repo, &["config", "commit.gpgsign", "false"]);

    commit_file(repo, "foo.c", &foo_c());
    fs::write(repo.join(".style_ignored_dirs"), "# vendored\next/\n").unwrap();
    git(repo, &["checkout", "-q", "-b", "feature"]);

    temp_dir
}

#[test]
fn clean_change_next_to_existing_debt_exits_success() {
    let temp_dir = setup_repo();
    let repo = temp_dir.path();
    commit_file(repo, "foo.c", &format!("{}int added;\n", foo_c()));

    cmd(repo)
        .args(["HEAD", "main"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ foo.c"))
        .stdout(predicate::str::contains("debt").not());
}

#[test]
fn violation_on_new_line_exits_one_with_hunk() {
    let temp_dir = setup_repo();
    let repo = temp_dir.path();
    commit_file(repo, "foo.c", &format!("{}int  added;\n", foo_c()));

    cmd(repo)
        .args(["HEAD", "main", "--style-url", "https://example.org/style"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "! See https://example.org/style for details.",
        ))
        .stdout(predicate::str::contains("! foo.c"))
        .stdout(predicate::str::contains("@@ -42 +42 @@"))
        .stdout(predicate::str::contains("-int  added;"))
        .stdout(predicate::str::contains("+int added;"))
        .stdout(predicate::str::contains("debt_one").not());
}

#[test]
fn skipped_files_are_listed() {
    let temp_dir = setup_repo();
    let repo = temp_dir.path();
    commit_file(repo, "README.md", "some  text\n");
    commit_file(repo, "ext/lib.c", "int  vendored;\n");

    cmd(repo)
        .args(["HEAD", "main"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- README.md"))
        .stdout(predicate::str::contains("- ext/lib.c"));
}

#[test]
fn report_is_colored_by_default_when_piped() {
    let temp_dir = setup_repo();
    let repo = temp_dir.path();
    commit_file(repo, "README.md", "some  text\n");
    commit_file(repo, "foo.c", &format!("{}int  added;\n", foo_c()));

    default_cmd(repo)
        .args(["HEAD", "main", "--formatter", SQUEEZE_SPACES])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\x1b[90m- README.md"))
        .stdout(predicate::str::contains("\x1b[31m! foo.c"));
}

#[test]
fn no_color_env_disables_default_colors() {
    let temp_dir = setup_repo();
    let repo = temp_dir.path();
    commit_file(repo, "README.md", "some  text\n");

    default_cmd(repo)
        .env("NO_COLOR", "1")
        .args(["HEAD", "main", "--formatter", SQUEEZE_SPACES])
        .assert()
        .success()
        .stdout(predicate::str::contains("- README.md"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn help_documents_exit_statuses() {
    let temp_dir = TempDir::new().unwrap();

    default_cmd(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exit status:"))
        .stdout(predicate::str::contains("3  git failure"));
}

#[test]
fn runs_from_subdirectory() {
    let temp_dir = setup_repo();
    let repo = temp_dir.path();
    commit_file(repo, "src/app/main.c", "int  main_var;\n");

    cmd(&repo.join("src").join("app"))
        .args(["feature", "main"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("! src/app/main.c"));
}

#[test]
fn missing_ignore_file_exits_with_user_error() {
    let temp_dir = setup_repo();
    let repo = temp_dir.path();
    fs::remove_file(repo.join(".style_ignored_dirs")).unwrap();

    cmd(repo)
        .args(["HEAD", "main"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read ignore file"));
}

#[test]
fn unknown_upstream_exits_with_git_error() {
    let temp_dir = setup_repo();

    cmd(temp_dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Git operation failed"));
}

#[test]
fn outside_repository_exits_with_user_error() {
    let temp_dir = TempDir::new().unwrap();

    cmd(temp_dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not inside a git repository"));
}

#[test]
fn broken_formatter_exits_with_tool_error() {
    let temp_dir = setup_repo();
    let repo = temp_dir.path();
    commit_file(repo, "foo.c", &format!("{}int added;\n", foo_c()));

    bare_cmd(repo)
        .args(["HEAD", "main", "--formatter", "false"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Formatter failed"));
}

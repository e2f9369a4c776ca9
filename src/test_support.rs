use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Create a throwaway repository on `main` with one commit containing README.md.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init", "-q"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-q", "-m", "Initial commit"]);

    temp_dir
}

/// Write `contents` to `rel_path` (creating parent directories) and commit it.
pub(crate) fn commit_file(repo_dir: &Path, rel_path: &str, contents: &str, message: &str) {
    let file = repo_dir.join(rel_path);
    if let Some(parent) = file.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&file, contents).unwrap();
    git(repo_dir, &["add", rel_path]);
    git(repo_dir, &["commit", "-q", "-m", message]);
}

/// Current HEAD commit id.
pub(crate) fn head_sha(repo_dir: &Path) -> String {
    git(repo_dir, &["rev-parse", "HEAD"]).trim().to_string()
}

fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).into_owned()
}

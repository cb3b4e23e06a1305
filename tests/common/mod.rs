#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A working repository whose `origin` is a bare repository, both inside one
/// temp dir.
pub struct TestRepos {
    _temp_dir: TempDir,
    origin: PathBuf,
    work: PathBuf,
}

impl TestRepos {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let origin = root.join("origin.git");
        let work = root.join("work");
        fs::create_dir_all(&work).expect("Failed to create work dir");

        git(&root, &["init", "--bare", "--initial-branch=main", "origin.git"]);

        git(&work, &["init", "--initial-branch=main"]);
        git(&work, &["config", "user.name", "Test User"]);
        git(&work, &["config", "user.email", "test@example.com"]);
        git(&work, &["config", "commit.gpgsign", "false"]);

        fs::write(work.join("README.md"), "# Test Repository").expect("Failed to write README");
        git(&work, &["add", "README.md"]);
        git(&work, &["commit", "-m", "Initial commit"]);

        let origin_url = origin.to_string_lossy().to_string();
        git(&work, &["remote", "add", "origin", &origin_url]);
        git(&work, &["push", "-u", "origin", "main"]);

        Self {
            _temp_dir: temp_dir,
            origin,
            work,
        }
    }

    pub fn work_path(&self) -> &Path {
        &self.work
    }

    pub fn origin_path(&self) -> &Path {
        &self.origin
    }

    pub fn remove_origin(&self) {
        git(&self.work, &["remote", "remove", "origin"]);
    }

    /// Branch at the current commit with no commits of its own.
    pub fn create_branch(&self, name: &str) {
        git(&self.work, &["branch", name]);
    }

    /// Branch carrying one commit that exists nowhere else.
    pub fn create_branch_with_commit(&self, name: &str) {
        let current = self.current_branch();
        git(&self.work, &["checkout", "-b", name]);
        let file_name = format!("{}.txt", name.replace(['/', '.', '+'], "_"));
        fs::write(self.work.join(&file_name), name).expect("Failed to write branch file");
        git(&self.work, &["add", &file_name]);
        git(&self.work, &["commit", "-m", &format!("Work on {}", name)]);
        git(&self.work, &["checkout", &current]);
    }

    /// Check `name` out in a linked worktree next to the work repo.
    pub fn add_worktree(&self, name: &str) {
        let path = self.work.with_file_name(format!("wt-{}", name.replace('/', "_")));
        let path = path.to_string_lossy().to_string();
        git(&self.work, &["worktree", "add", &path, name]);
    }

    pub fn push(&self, name: &str) {
        git(&self.work, &["push", "origin", name]);
    }

    /// Remove the branch on the server only. The work repo keeps its stale
    /// remote-tracking ref, as it would after a pull request is merged upstream.
    pub fn delete_remote_branch(&self, name: &str) {
        git(&self.origin, &["branch", "-D", name]);
    }

    pub fn checkout(&self, name: &str) {
        git(&self.work, &["checkout", name]);
    }

    pub fn current_branch(&self) -> String {
        git(&self.work, &["rev-parse", "--abbrev-ref", "HEAD"])
    }

    pub fn local_branch_exists(&self, name: &str) -> bool {
        Command::new("git")
            .current_dir(&self.work)
            .args([
                "rev-parse",
                "--verify",
                "--quiet",
                &format!("refs/heads/{}", name),
            ])
            .output()
            .expect("Failed to run git")
            .status
            .success()
    }
}

/// Run git in `dir`, panicking on failure. Returns trimmed stdout.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .expect("Failed to run git");

    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

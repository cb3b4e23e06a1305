//! Zombie branch detection.
//!
//! A zombie is a local branch whose name is not present on the remote. Each
//! zombie is either deletable or carries the reason it has to stay.

use super::parsing::{self, LocalBranches};
use super::runner::CommandRunner;
use crate::utils::error::{GitridError, Result};
use std::collections::HashSet;

pub const DEFAULT_REMOTE: &str = "origin";

pub const REASON_CHECKED_OUT: &str = "checked out, cannot be deleted";
pub const REASON_WORKTREE: &str = "checked out in another worktree";
pub const REASON_UNPUSHED: &str = "has unpushed content";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZombieCandidate {
    pub branch_name: String,
    /// `None` means the branch may be deleted.
    pub error_reason: Option<String>,
}

impl ZombieCandidate {
    pub fn deletable(branch_name: impl Into<String>) -> Self {
        Self {
            branch_name: branch_name.into(),
            error_reason: None,
        }
    }

    pub fn protected(branch_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            branch_name: branch_name.into(),
            error_reason: Some(reason.into()),
        }
    }

    pub fn is_deletable(&self) -> bool {
        self.error_reason.is_none()
    }
}

/// Everything a caller needs to present a classification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZombieReport {
    pub remote_url: String,
    pub active_branch: String,
    pub local_count: usize,
    pub remote_count: usize,
    pub candidates: Vec<ZombieCandidate>,
}

impl ZombieReport {
    pub fn deletable(&self) -> impl Iterator<Item = &ZombieCandidate> {
        self.candidates.iter().filter(|c| c.is_deletable())
    }

    pub fn deletable_names(&self) -> Vec<String> {
        self.deletable().map(|c| c.branch_name.clone()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierState {
    Uninitialized,
    Validated,
    BranchesLoaded,
    Classified,
}

/// Per-classifier cache. Instance-local; never shared between classifiers.
#[derive(Debug, Default)]
struct RepositoryHandle {
    validated: bool,
    remote_url: Option<String>,
    pending_log: Option<String>,
}

pub struct BranchClassifier<R: CommandRunner> {
    runner: R,
    remote: String,
    handle: RepositoryHandle,
    state: ClassifierState,
}

impl<R: CommandRunner> BranchClassifier<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            remote: DEFAULT_REMOTE.to_string(),
            handle: RepositoryHandle::default(),
            state: ClassifierState::Uninitialized,
        }
    }

    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    pub fn state(&self) -> ClassifierState {
        self.state
    }

    /// Resolve and cache the remote URL. Later calls reuse the cached value.
    pub async fn validate_repository(&mut self) -> Result<String> {
        if self.handle.validated {
            if let Some(url) = &self.handle.remote_url {
                return Ok(url.clone());
            }
        }

        let args = ["remote", "get-url", self.remote.as_str()];
        let result = self.runner.run(&args).await?;

        let url = result.output.trim().to_string();
        if !result.success() || url.is_empty() {
            let output = if url.is_empty() {
                format!("remote '{}' has no URL", self.remote)
            } else {
                url
            };
            return Err(GitridError::repository_validation(
                self.runner.working_directory().to_string_lossy(),
                format!("git {}", args.join(" ")),
                output,
            ));
        }

        self.handle.validated = true;
        self.handle.remote_url = Some(url.clone());
        if self.state == ClassifierState::Uninitialized {
            self.state = ClassifierState::Validated;
        }

        Ok(url)
    }

    pub async fn list_local_branches(&self) -> Result<LocalBranches> {
        let output = self.query(&["branch"]).await?;
        parsing::parse_local_branches(&output)
    }

    /// Branch names as reported by the remote itself, not the possibly stale
    /// remote-tracking refs.
    pub async fn list_remote_branches(&mut self) -> Result<Vec<String>> {
        let url = self.validate_repository().await?;
        self.fetch_remote_heads(&url).await
    }

    async fn fetch_remote_heads(&self, url: &str) -> Result<Vec<String>> {
        let output = self.query(&["ls-remote", "--heads", url]).await?;
        Ok(parsing::parse_remote_heads(&output))
    }

    pub async fn get_zombie_branches(&mut self) -> Result<ZombieReport> {
        let remote_url = self.validate_repository().await?;

        let (local, remote_branches) = tokio::try_join!(
            self.list_local_branches(),
            self.fetch_remote_heads(&remote_url)
        )?;
        if self.state == ClassifierState::Validated {
            self.state = ClassifierState::BranchesLoaded;
        }

        let remote_set: HashSet<&str> = remote_branches.iter().map(String::as_str).collect();

        let mut candidates = Vec::new();
        for branch in &local.branches {
            if remote_set.contains(branch.as_str()) {
                continue;
            }

            let candidate = if *branch == local.active {
                ZombieCandidate::protected(branch, REASON_CHECKED_OUT)
            } else if self.has_pending_commits(branch).await? {
                ZombieCandidate::protected(branch, REASON_UNPUSHED)
            } else if local.worktree_checkouts.contains(branch) {
                ZombieCandidate::protected(branch, REASON_WORKTREE)
            } else {
                ZombieCandidate::deletable(branch)
            };
            candidates.push(candidate);
        }
        self.state = ClassifierState::Classified;

        Ok(ZombieReport {
            remote_url,
            active_branch: local.active,
            local_count: local.branches.len(),
            remote_count: remote_branches.len(),
            candidates,
        })
    }

    /// Whether `branch` has commits that no remote-tracking branch contains.
    ///
    /// The underlying log is fetched once per classifier and reused.
    pub async fn has_pending_commits(&mut self, branch: &str) -> Result<bool> {
        if self.handle.pending_log.is_none() {
            let log = self
                .query(&["log", "--branches", "--not", "--remotes", "--source"])
                .await?;
            self.handle.pending_log = Some(log.trim().to_string());
        }

        match &self.handle.pending_log {
            Some(log) => parsing::log_mentions_branch(log, branch),
            None => Ok(false),
        }
    }

    /// Delete with `git branch -d`, which itself refuses unmerged branches.
    pub async fn delete_local_branch(&self, branch: &str) -> Result<String> {
        let result = self.runner.run(&["branch", "-d", branch]).await?;
        if !result.success() {
            return Err(GitridError::deletion(branch, result.output.trim()));
        }
        Ok(result.output.trim().to_string())
    }

    async fn query(&self, args: &[&str]) -> Result<String> {
        let result = self.runner.run(args).await?;
        if !result.success() {
            return Err(GitridError::command_failure(
                format!("git {}", args.join(" ")),
                result.output.trim(),
            ));
        }
        Ok(result.output)
    }
}

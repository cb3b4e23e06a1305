//! Scrapers for git's human-oriented branch and log output.

use crate::utils::error::Result;
use regex::Regex;

const LOCAL_MARKER_PATTERN: &str = r"^[\s*+]+";
const REMOTE_HEAD_PREFIX: &str = "refs/heads/";

/// Result of parsing `git branch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalBranches {
    pub branches: Vec<String>,
    /// Branch marked with `*`; empty when none is marked.
    pub active: String,
    /// Branches marked with `+`, checked out in a linked worktree.
    pub worktree_checkouts: Vec<String>,
}

pub fn parse_local_branches(output: &str) -> Result<LocalBranches> {
    let marker = Regex::new(LOCAL_MARKER_PATTERN)?;
    let mut parsed = LocalBranches::default();

    for line in output.trim().lines() {
        let name = marker.replace(line, "").trim_end().to_string();
        if name.is_empty() {
            continue;
        }

        let is_active = line.starts_with('*');
        if is_active {
            parsed.active = name.clone();
        }

        // "(HEAD detached at 1a2b3c)" is not a branch.
        if name.starts_with('(') {
            continue;
        }

        if line.starts_with('+') {
            parsed.worktree_checkouts.push(name.clone());
        }
        parsed.branches.push(name);
    }

    Ok(parsed)
}

/// Branch names from `git ls-remote --heads <url>`.
pub fn parse_remote_heads(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let reference = line.split_whitespace().nth(1)?;
            reference.strip_prefix(REMOTE_HEAD_PREFIX)
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pattern matching a `git log --source` commit header attributed to `branch`.
///
/// The name is escaped so it only ever matches literally.
pub fn pending_commit_pattern(branch: &str) -> Result<Regex> {
    let pattern = format!(
        r"(?im)^commit [0-9a-f]+\t+(?:{})?{}(?:\s|$)",
        regex::escape(REMOTE_HEAD_PREFIX),
        regex::escape(branch)
    );
    Ok(Regex::new(&pattern)?)
}

pub fn log_mentions_branch(log: &str, branch: &str) -> Result<bool> {
    Ok(pending_commit_pattern(branch)?.is_match(log))
}

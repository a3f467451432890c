//! Remote queries: main branch resolution and tracking-ref pruning.

use anyhow::{Context, Result};
use std::path::Path;

use super::runner::run_git_checked;
use super::GitError;

/// Query a remote to determine its main ("HEAD") branch name.
///
/// Needs to reach the remote, so this will not work offline for
/// network remotes.
pub fn main_branch_for_remote(remote: &str, repo_root: &Path) -> Result<String> {
    let output = run_git_checked(&["remote", "show", remote], repo_root)
        .with_context(|| format!("failed to query remote '{remote}'"))?;

    parse_head_branch(&output).ok_or_else(|| {
        GitError::MainBranchNotFound {
            remote: remote.to_string(),
        }
        .into()
    })
}

/// Extract the branch name from a `HEAD branch:` line of
/// `git remote show` output.
pub fn parse_head_branch(output: &str) -> Option<String> {
    output.lines().map(str::trim).find_map(|line| {
        line.strip_prefix("HEAD branch:")
            .map(|rest| rest.trim().to_string())
    })
}

/// Remove stale remote-tracking references for a remote.
///
/// With `dry_run`, git reports what it would prune instead of pruning;
/// that report is passed through to the user.
pub fn prune_remote(remote: &str, repo_root: &Path, dry_run: bool) -> Result<()> {
    let mut args = vec!["remote", "prune"];
    if dry_run {
        args.push("--dry-run");
    }
    args.push(remote);

    let output = run_git_checked(&args, repo_root)?;
    if dry_run && !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

//! Local branch listing, checkout and deletion.

use anyhow::{bail, Context, Result};
use regex::Regex;
use std::path::Path;

use super::runner::{run_git, run_git_checked};
use super::GitError;

/// Tracking annotation of a branch whose upstream no longer exists,
/// as printed by `git branch -vv`.
const GONE_PATTERN: &str = r"\[[^\]]*: gone\]";

/// Switch the working branch, suppressing routine output.
pub fn checkout(branch: &str, repo_root: &Path) -> Result<()> {
    let output = run_git(&["checkout", "--quiet", branch], repo_root)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(GitError::Checkout {
            branch: branch.to_string(),
            stderr,
        }
        .into());
    }
    Ok(())
}

/// List local branches whose history is fully contained in the current
/// branch. The current branch itself is excluded.
pub fn merged_branches(repo_root: &Path) -> Result<Vec<String>> {
    let output = run_git_checked(&["branch", "--merged"], repo_root)?;
    Ok(parse_merged_branches(&output))
}

/// List all local branches except `main_branch`.
pub fn local_branches(main_branch: &str, repo_root: &Path) -> Result<Vec<String>> {
    let output = run_git_checked(&["branch"], repo_root)?;
    Ok(parse_local_branches(&output, main_branch))
}

/// List local branches that track a remote branch which no longer exists.
pub fn gone_branches(repo_root: &Path) -> Result<Vec<String>> {
    let output = run_git_checked(&["branch", "-vv"], repo_root)?;
    parse_gone_branches(&output)
}

/// Delete a local branch.
///
/// A non-forced delete fails when the branch is not fully merged into
/// the current branch; that is the safety check for the merged pass.
/// On success git's own report (branch name and commit hash) is passed
/// through verbatim, so no extra confirmation is printed here.
pub fn delete_branch(name: &str, force: bool, repo_root: &Path) -> Result<()> {
    let mut args = vec!["branch", "--delete"];
    if force {
        args.push("--force");
    }
    args.push(name);

    let output =
        run_git(&args, repo_root).with_context(|| format!("failed to delete branch {name}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("git branch --delete failed: {}", stderr.trim());
    }

    print!("{}", String::from_utf8_lossy(&output.stdout));
    Ok(())
}

/// Parse `git branch --merged` output, dropping the `*`-marked
/// current branch.
fn parse_merged_branches(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('*'))
        .map(str::to_string)
        .collect()
}

/// Parse `git branch` output, stripping checkout markers and excluding
/// `main_branch` by exact match.
fn parse_local_branches(output: &str, main_branch: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .filter(|line| !line.is_empty() && *line != main_branch)
        .map(str::to_string)
        .collect()
}

/// Parse `git branch -vv` output for branches with a `: gone` tracking
/// annotation.
///
/// Lines look like `{name} {short hash} [{tracking remote}] {subject}`,
/// with `: gone` inside the brackets when the upstream was deleted.
fn parse_gone_branches(output: &str) -> Result<Vec<String>> {
    let gone = Regex::new(GONE_PATTERN).context("invalid gone-branch pattern")?;

    Ok(output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && gone.is_match(line))
        .filter_map(|line| line.trim_start_matches('*').trim().split_whitespace().next())
        .map(str::to_string)
        .collect())
}

//! Git command runner abstraction
//!
//! Centralized functions for running git commands with consistent error
//! handling, reducing boilerplate across the git modules.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Run a git command and return the raw Output.
///
/// Wraps `Command::new("git")` with `current_dir` and error context.
/// Use this when you need access to both stdout and stderr, or when
/// you need custom error handling logic.
pub fn run_git(args: &[&str], repo_root: &Path) -> Result<Output> {
    tracing::debug!(cmd = %args.join(" "), "running git");
    Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()
        .with_context(|| format!("Failed to execute: git {}", args.join(" ")))
}

/// Run a git command, check for success, and return stdout as a trimmed String.
///
/// On failure, bails with the stderr content.
pub fn run_git_checked(args: &[&str], repo_root: &Path) -> Result<String> {
    let output = run_git(args, repo_root)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let cmd = args.first().unwrap_or(&"");
        bail!("git {cmd} failed: {}", stderr.trim());
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

//! Dry-run merge previews.

use anyhow::{Context, Result};
use std::path::Path;

use super::runner::run_git_checked;

/// Check whether merging `dev_branch` into `main_branch` would change
/// any content.
///
/// Computes the merge base of the two branches and previews the
/// three-way merge with `git merge-tree`, without touching the working
/// tree. Squash-merged branches and branches with no commits of their
/// own produce an empty preview.
pub fn merge_would_produce_changes(
    main_branch: &str,
    dev_branch: &str,
    repo_root: &Path,
) -> Result<bool> {
    let merge_base = run_git_checked(&["merge-base", main_branch, dev_branch], repo_root)
        .with_context(|| format!("failed to find merge base of {main_branch} and {dev_branch}"))?;

    let preview = run_git_checked(
        &["merge-tree", &merge_base, main_branch, dev_branch],
        repo_root,
    )
    .with_context(|| format!("failed to compute merge preview for {dev_branch}"))?;

    Ok(preview_has_changes(&preview))
}

/// Scan a merge-tree preview for added or removed content lines.
///
/// This is a plain prefix scan of the preview text, not a real
/// diff-line classifier; metadata lines starting with `+` or `-` would
/// count as changes.
pub fn preview_has_changes(preview: &str) -> bool {
    preview
        .lines()
        .map(str::trim)
        .any(|line| line.starts_with('+') || line.starts_with('-'))
}

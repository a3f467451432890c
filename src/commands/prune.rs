//! Branch cleanup passes and their orchestration.
//!
//! Three destructive passes run in order against a repository that has
//! been switched to its main branch:
//!
//! 1. Delete branches cleanly merged into main (non-forced, so git
//!    itself is the safety check).
//! 2. Offer to delete branches whose merge into main would produce no
//!    changes, typically squash-merged topic branches.
//! 3. Prune remote-tracking refs, then offer to delete branches whose
//!    upstream no longer exists.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process;

use crate::git::{branch, merge, remote};
use crate::prompt;

/// Remote queried for the main branch when none is given.
pub const DEFAULT_REMOTE: &str = "origin";

/// Branches never deleted or prompted for, regardless of merge state.
pub const IGNORED_BRANCHES: &[&str] = &["gh-pages"];

/// Options collected from the command line.
pub struct PruneOptions {
    pub remote: String,
    pub ignore: Vec<String>,
    pub yes: bool,
    pub dry_run: bool,
}

/// Execute the prune command in the current directory.
pub fn execute(opts: PruneOptions) -> Result<()> {
    which::which("git").context("git executable not found in PATH")?;
    let repo_root = std::env::current_dir().context("failed to determine current directory")?;

    let main_branch = remote::main_branch_for_remote(&opts.remote, &repo_root)?;

    // Running the destructive passes from a topic branch would most
    // likely end up deleting the branch in use.
    if let Err(err) = branch::checkout(&main_branch, &repo_root) {
        tracing::debug!("checkout failed: {err:#}");
        println!("Could not switch to {main_branch} branch");
        process::exit(1);
    }

    let ignored = ignored_branches(&opts.ignore);
    let mut confirm: Box<dyn FnMut(&str) -> bool> = if opts.yes {
        Box::new(|_| true)
    } else {
        Box::new(prompt::confirm_on_stdin)
    };

    let deleted = run(
        &main_branch,
        &opts.remote,
        &ignored,
        &repo_root,
        confirm.as_mut(),
        opts.dry_run,
    )?;

    if opts.dry_run {
        println!(
            "\n{}",
            format!("Would delete {} branch(es).", deleted.len()).yellow()
        );
    } else if deleted.is_empty() {
        println!("\nNothing to delete.");
    } else {
        println!(
            "\n{}",
            format!("Deleted {} branch(es).", deleted.len()).green().bold()
        );
    }

    Ok(())
}

/// Run the cleanup passes against `repo_root`, which must already have
/// `main_branch` checked out. Returns the deleted branch names, or the
/// would-be-deleted names in dry-run mode.
pub fn run(
    main_branch: &str,
    remote_name: &str,
    ignored: &[String],
    repo_root: &Path,
    confirm: &mut dyn FnMut(&str) -> bool,
    dry_run: bool,
) -> Result<Vec<String>> {
    let mut claimed = delete_merged_branches(ignored, repo_root, dry_run)?;

    let redundant =
        delete_redundant_branches(main_branch, ignored, &claimed, repo_root, confirm, dry_run)?;
    claimed.extend(redundant);

    // Deliberately not fault-isolated: a failing prune aborts the run.
    remote::prune_remote(remote_name, repo_root, dry_run)?;

    let gone = delete_gone_branches(main_branch, ignored, &claimed, repo_root, confirm, dry_run)?;
    claimed.extend(gone);

    Ok(claimed)
}

/// The built-in ignore list plus any extra protected branches.
pub fn ignored_branches(extra: &[String]) -> Vec<String> {
    IGNORED_BRANCHES
        .iter()
        .map(|name| (*name).to_string())
        .chain(extra.iter().cloned())
        .collect()
}

fn is_ignored(branch: &str, ignored: &[String]) -> bool {
    ignored.iter().any(|name| name == branch)
}

/// Delete branches cleanly merged into the current branch. Failures are
/// reported per branch and do not stop the pass.
fn delete_merged_branches(
    ignored: &[String],
    repo_root: &Path,
    dry_run: bool,
) -> Result<Vec<String>> {
    let mut deleted = Vec::new();

    for branch_name in branch::merged_branches(repo_root)? {
        if is_ignored(&branch_name, ignored) {
            continue;
        }
        if dry_run {
            println!("Would delete branch {branch_name}");
            deleted.push(branch_name);
            continue;
        }
        match branch::delete_branch(&branch_name, false, repo_root) {
            Ok(()) => deleted.push(branch_name),
            Err(err) => {
                tracing::debug!("non-forced delete failed: {err:#}");
                println!("Could not delete {branch_name} automatically");
            }
        }
    }

    Ok(deleted)
}

/// Offer to delete branches whose merge into main would produce no
/// changes. A branch whose preview cannot be computed is reported and
/// kept.
fn delete_redundant_branches(
    main_branch: &str,
    ignored: &[String],
    claimed: &[String],
    repo_root: &Path,
    confirm: &mut dyn FnMut(&str) -> bool,
    dry_run: bool,
) -> Result<Vec<String>> {
    let mut deleted = Vec::new();

    for branch_name in branch::local_branches(main_branch, repo_root)? {
        if is_ignored(&branch_name, ignored) || claimed.contains(&branch_name) {
            continue;
        }

        let has_changes = match merge::merge_would_produce_changes(
            main_branch,
            &branch_name,
            repo_root,
        ) {
            Ok(has_changes) => has_changes,
            Err(err) => {
                println!("Failed to generate merge preview for {branch_name}: {err:#}");
                true
            }
        };
        if has_changes {
            continue;
        }

        if dry_run {
            println!("Would delete branch {branch_name}");
            deleted.push(branch_name);
            continue;
        }

        let question = format!(
            "Merging {branch_name} into {main_branch} would not produce any changes. Delete it? [y/n]"
        );
        if confirm(&question) {
            branch::delete_branch(&branch_name, true, repo_root)?;
            deleted.push(branch_name);
        }
    }

    Ok(deleted)
}

/// Offer to delete branches whose tracked remote branch was removed.
fn delete_gone_branches(
    main_branch: &str,
    ignored: &[String],
    claimed: &[String],
    repo_root: &Path,
    confirm: &mut dyn FnMut(&str) -> bool,
    dry_run: bool,
) -> Result<Vec<String>> {
    let mut deleted = Vec::new();

    for branch_name in branch::gone_branches(repo_root)? {
        if branch_name == main_branch
            || is_ignored(&branch_name, ignored)
            || claimed.contains(&branch_name)
        {
            continue;
        }

        if dry_run {
            println!("Would delete branch {branch_name}");
            deleted.push(branch_name);
            continue;
        }

        let question = format!("Branch {branch_name} tracks removed remote branch. Delete it? [y/n]");
        if confirm(&question) {
            branch::delete_branch(&branch_name, true, repo_root)?;
            deleted.push(branch_name);
        }
    }

    Ok(deleted)
}

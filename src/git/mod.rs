//! Git subprocess plumbing.
//!
//! Everything here shells out to the `git` binary and consumes its
//! line-oriented stdout. Parsing lives in pure functions so it can be
//! tested without a repository.

use thiserror::Error;

pub mod branch;
pub mod merge;
pub mod remote;
pub mod runner;

/// Failures the cleanup flow needs to tell apart from generic git errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// `git remote show` output carried no `HEAD branch:` line.
    #[error("HEAD branch information not found for remote '{remote}'")]
    MainBranchNotFound { remote: String },

    /// Switching branches failed, e.g. uncommitted changes conflict.
    #[error("could not check out branch '{branch}': {stderr}")]
    Checkout { branch: String, stderr: String },
}

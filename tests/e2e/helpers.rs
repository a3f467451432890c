//! Test helpers: fixture repositories with a local path remote.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run a git command in `dir`, panicking on failure.
pub fn git(args: &[&str], dir: &Path) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn git {args:?}: {e}"));

    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// A clone whose `origin` remote lives on disk next to it.
///
/// Keep the struct in scope for the lifetime of the test; dropping it
/// removes both repositories.
pub struct Fixture {
    _temp: TempDir,
    pub clone: PathBuf,
    pub origin: PathBuf,
}

impl Fixture {
    /// Build an upstream repo with one commit on `main`, a bare clone of
    /// it serving as `origin`, and a working clone of that.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("failed to create temp directory");

        let upstream = temp.path().join("upstream");
        fs::create_dir(&upstream).expect("failed to create upstream directory");
        git(&["init", "-b", "main"], &upstream);
        configure_user(&upstream);
        fs::write(upstream.join("README.md"), "# fixture\n").expect("failed to write README.md");
        git(&["add", "."], &upstream);
        git(&["commit", "-m", "Initial commit"], &upstream);

        let origin = temp.path().join("origin.git");
        let clone = temp.path().join("clone");
        git(
            &["clone", "--quiet", "--bare", path_str(&upstream), path_str(&origin)],
            temp.path(),
        );
        git(
            &["clone", "--quiet", path_str(&origin), path_str(&clone)],
            temp.path(),
        );
        configure_user(&clone);

        Fixture {
            _temp: temp,
            clone,
            origin,
        }
    }

    /// Create a branch at the current head without switching to it.
    pub fn branch(&self, name: &str) {
        git(&["branch", name], &self.clone);
    }

    pub fn checkout(&self, branch: &str) {
        git(&["checkout", "--quiet", branch], &self.clone);
    }

    pub fn checkout_new(&self, branch: &str) {
        git(&["checkout", "--quiet", "-b", branch], &self.clone);
    }

    /// Commit `content` to `file` on the currently checked out branch.
    pub fn commit_file(&self, file: &str, content: &str, message: &str) {
        fs::write(self.clone.join(file), content).expect("failed to write file");
        git(&["add", file], &self.clone);
        git(&["commit", "-m", message], &self.clone);
    }

    pub fn branch_exists(&self, name: &str) -> bool {
        Command::new("git")
            .args(["rev-parse", "--verify", &format!("refs/heads/{name}")])
            .current_dir(&self.clone)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

fn configure_user(dir: &Path) {
    git(&["config", "user.email", "test@test.com"], dir);
    git(&["config", "user.name", "Test"], dir);
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("fixture path is not valid UTF-8")
}

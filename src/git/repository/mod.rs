//! Repository context for git operations.

use std::path::PathBuf;

use anyhow::Context;

use super::GitError;
use crate::shell_exec::Cmd;

mod branches;
mod history;
mod status;

/// A git working directory that commands are run against.
///
/// # Examples
///
/// ```no_run
/// use glimpse::git::Repository;
///
/// let repo = Repository::open(".")?;
/// let status = repo.repository_status()?;
/// println!("{} clean={}", status.branch(), status.is_clean());
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// Create a repository context at the specified path without checking it.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a repository context, failing with [`GitError::NotARepository`]
    /// unless `path` is inside a git work tree or git dir.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let repo = Self::at(path);
        if !repo.is_repository() {
            return Err(GitError::NotARepository {
                path: repo.path.clone(),
            }
            .into());
        }
        Ok(repo)
    }

    /// Whether git recognizes the path as a repository.
    pub fn is_repository(&self) -> bool {
        self.run_command(&["rev-parse", "--git-dir"]).is_ok()
    }

    /// Get the current branch name, or `None` in detached HEAD state.
    pub fn current_branch(&self) -> anyhow::Result<Option<String>> {
        let stdout = self
            .run_command(&["branch", "--show-current"])
            .context("Failed to determine the current branch")?;
        let branch = stdout.trim();
        Ok((!branch.is_empty()).then(|| branch.to_string()))
    }

    /// Run a git command in this repository's context and return stdout.
    ///
    /// Non-zero exit becomes [`GitError::CommandFailed`] carrying stderr.
    pub fn run_command(&self, args: &[&str]) -> anyhow::Result<String> {
        let cmd = Cmd::new("git")
            .args(args.iter().copied())
            .current_dir(&self.path)
            .context(self.path.display().to_string());
        let command = cmd.display();

        let output = cmd.run().map_err(|e| GitError::CommandSpawn {
            command: command.clone(),
            error: e.to_string(),
        })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

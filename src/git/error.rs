//! Git error types.
//!
//! Uses anyhow for propagation. `GitError` covers the failures callers may
//! want to recognize (e.g. not-a-repository); everything else is plain
//! `anyhow::Error` with context.

use std::path::PathBuf;

use color_print::cformat;

use crate::styling::{ERROR_EMOJI, HINT_EMOJI};

#[derive(Debug)]
pub enum GitError {
    /// The working directory is not inside a git repository
    NotARepository { path: PathBuf },
    /// git ran but exited non-zero
    CommandFailed { command: String, stderr: String },
    /// git could not be started at all
    CommandSpawn { command: String, error: String },
}

impl GitError {
    /// The error text without emoji or styling, for nested cause lines.
    pub fn message(&self) -> String {
        match self {
            GitError::NotARepository { path } => {
                format!("Not a git repository: {}", path.display())
            }
            GitError::CommandFailed { command, stderr } => match stderr.trim() {
                "" => format!("{command} failed"),
                detail => format!("{command} failed: {detail}"),
            },
            GitError::CommandSpawn { command, error } => {
                format!("Failed to run {command}: {error}")
            }
        }
    }
}

impl std::fmt::Display for GitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = self.message();
        write!(f, "{}", cformat!("{ERROR_EMOJI} <red>{message}</>"))?;
        if let GitError::NotARepository { .. } = self {
            write!(
                f,
                "\n{}",
                cformat!("{HINT_EMOJI} <dim>Run 'git init' to initialize a new repository</>")
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for GitError {}

//! Commit history for Repository.

use anyhow::Context;

use super::Repository;
use crate::git::{Commit, LogQuery, parse_log_output};

impl Repository {
    /// List commits matching `query`, newest first.
    pub fn commits(&self, query: &LogQuery) -> anyhow::Result<Vec<Commit>> {
        let args = query.to_args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = self
            .run_command(&args)
            .context("Failed to read commit history")?;
        Ok(parse_log_output(&output))
    }

    /// The most recent `limit` commits, for graph views.
    pub fn recent_commits(&self, limit: usize) -> anyhow::Result<Vec<Commit>> {
        self.commits(&LogQuery {
            limit,
            ..Default::default()
        })
    }
}

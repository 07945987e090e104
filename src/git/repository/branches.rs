//! Branch-related operations for Repository.

use anyhow::Context;

use super::Repository;
use crate::git::{BRANCH_FORMAT, Branch, BranchScope, parse_branch_output};

impl Repository {
    /// List branches in `scope` with their last-commit summary.
    pub fn branches(&self, scope: BranchScope) -> anyhow::Result<Vec<Branch>> {
        let format = format!("--format={BRANCH_FORMAT}");
        let mut args = vec!["branch"];
        args.extend(scope.flag());
        args.push(&format);

        let output = self
            .run_command(&args)
            .context("Failed to list branches")?;
        Ok(parse_branch_output(&output))
    }
}

//! Working-tree status and remote tracking for Repository.

use anyhow::Context;

use super::Repository;
use crate::git::{RemoteTracking, RepositoryStatus, parse_ahead_behind, parse_porcelain_status};

impl Repository {
    /// Get the upstream tracking branch for the given branch.
    ///
    /// Uses [`@{upstream}` syntax][1] to resolve the tracking branch. A
    /// missing upstream is `None`, never an error.
    ///
    /// [1]: https://git-scm.com/docs/gitrevisions#Documentation/gitrevisions.txt-emltaboranchgtemuaboranchgtupaboranchgtupstream
    pub fn upstream_branch(&self, branch: &str) -> Option<String> {
        match self.run_command(&["rev-parse", "--abbrev-ref", &format!("{branch}@{{upstream}}")]) {
            Ok(upstream) => {
                let trimmed = upstream.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Err(e) => {
                log::debug!("No upstream for {branch}: {e:#}");
                None
            }
        }
    }

    /// Commits on `branch` but not `upstream`, and vice versa.
    pub fn ahead_behind(&self, branch: &str, upstream: &str) -> Option<(usize, usize)> {
        let range = format!("{branch}...{upstream}");
        let output = self
            .run_command(&["rev-list", "--left-right", "--count", &range])
            .map_err(|e| log::debug!("Failed to count {range}: {e:#}"))
            .ok()?;
        let counts = parse_ahead_behind(&output);
        if counts.is_none() {
            log::debug!("Unexpected rev-list output for {range}: {output:?}");
        }
        counts
    }

    /// Resolve the upstream of `branch` and its divergence counts.
    ///
    /// Returns `None` when there is nothing to track (detached HEAD, local-only
    /// branch). When the upstream exists but counting fails, the upstream is
    /// still reported with zero counts.
    pub fn remote_tracking(&self, branch: &str) -> Option<RemoteTracking> {
        if branch.is_empty() {
            return None;
        }
        let upstream = self.upstream_branch(branch)?;
        let (ahead, behind) = self.ahead_behind(branch, &upstream).unwrap_or_default();
        Some(RemoteTracking {
            upstream,
            ahead,
            behind,
        })
    }

    /// Take a snapshot of the working tree.
    ///
    /// Branch and status enumeration failures are fatal; tracking failures
    /// only leave the remote fields empty.
    pub fn repository_status(&self) -> anyhow::Result<RepositoryStatus> {
        let branch = self.current_branch()?.unwrap_or_default();
        let tracking = self.remote_tracking(&branch);
        let output = self
            .run_command(&["-c", "core.quotePath=false", "status", "--porcelain"])
            .context("Failed to list file status")?;
        Ok(RepositoryStatus::from_parts(
            branch,
            tracking,
            parse_porcelain_status(&output),
        ))
    }
}

//! Branch listing records parsed from `git branch --format`.

use serde::Serialize;

/// `--format` for `git branch`: HEAD marker, name, sha, subject, author, date.
///
/// The subject sits between fixed fields so a `|` inside it can be recovered
/// by splitting from both ends.
pub const BRANCH_FORMAT: &str = "%(HEAD)|%(refname:lstrip=2)|%(objectname)|%(contents:subject)|%(authorname)|%(committerdate:short)";

/// Which refs `git branch` should list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BranchScope {
    #[default]
    Local,
    Remote,
    All,
}

impl BranchScope {
    pub fn from_flags(remote: bool, all: bool) -> Self {
        match (remote, all) {
            (_, true) => BranchScope::All,
            (true, false) => BranchScope::Remote,
            (false, false) => BranchScope::Local,
        }
    }

    /// Extra flag passed to `git branch`.
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            BranchScope::Local => None,
            BranchScope::Remote => Some("-r"),
            BranchScope::All => Some("-a"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branch {
    pub name: String,
    pub is_current: bool,
    pub is_remote: bool,
    pub last_commit_hash: String,
    pub last_commit_message: String,
    pub last_commit_author: String,
    pub last_commit_date: String,
}

/// Name-based remote detection.
///
/// Only looks at the prefix, so a local branch literally named
/// `origin/...` is reported as remote.
pub fn is_remote_branch_name(name: &str) -> bool {
    name.starts_with("remotes/") || name.starts_with("origin/")
}

impl Branch {
    /// Parse one line produced with [`BRANCH_FORMAT`].
    ///
    /// Returns `None` for short lines and for entries that are not real
    /// branches (`origin/HEAD` symrefs, the detached-HEAD placeholder).
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut head = line.splitn(4, '|');
        let marker = head.next()?;
        let name = head.next()?.trim();
        let hash = head.next()?.trim();
        let rest = head.next()?;

        let mut tail = rest.rsplitn(3, '|');
        let date = tail.next()?.trim();
        let author = tail.next()?.trim();
        let message = tail.next()?.trim();

        if name.is_empty() || name == "HEAD" || name.ends_with("/HEAD") || name.starts_with('(') {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            is_current: marker.trim() == "*",
            is_remote: is_remote_branch_name(name),
            last_commit_hash: hash.to_string(),
            last_commit_message: message.to_string(),
            last_commit_author: author.to_string(),
            last_commit_date: date.to_string(),
        })
    }
}

/// Parse `git branch --format` output, preserving git's order.
pub fn parse_branch_output(output: &str) -> Vec<Branch> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let branch = Branch::parse_line(line);
            if branch.is_none() {
                log::debug!("Skipping branch line: {line:?}");
            }
            branch
        })
        .collect()
}

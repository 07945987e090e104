//! Commit log records parsed from `git log`.

use indexmap::IndexMap;
use serde::Serialize;

/// `git log --pretty=format:` string producing one pipe-delimited line per commit.
pub const LOG_FORMAT: &str = "%H|%an|%ad|%s";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub hash: String,
    pub author: String,
    pub date: String,
    /// Subject line
    pub message: String,
}

impl Commit {
    /// Parse one `hash|author|date|subject` line. The subject may itself
    /// contain `|`; lines with fewer than four fields yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.splitn(4, '|');
        let hash = parts.next()?.trim();
        let author = parts.next()?.trim();
        let date = parts.next()?.trim();
        let message = parts.next()?.trim();

        Some(Self {
            hash: hash.to_string(),
            author: author.to_string(),
            date: date.to_string(),
            message: message.to_string(),
        })
    }

    /// First eight characters of the hash.
    pub fn short_hash(&self) -> &str {
        self.hash.get(..8).unwrap_or(&self.hash)
    }
}

/// Parse `git log` output, dropping blank and malformed lines.
pub fn parse_log_output(output: &str) -> Vec<Commit> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let commit = Commit::parse_line(line);
            if commit.is_none() {
                log::debug!("Skipping malformed log line: {line:?}");
            }
            commit
        })
        .collect()
}

/// Keep commits whose subject contains `needle`, ignoring case.
pub fn filter_by_message(commits: Vec<Commit>, needle: &str) -> Vec<Commit> {
    let needle = needle.to_lowercase();
    commits
        .into_iter()
        .filter(|c| c.message.to_lowercase().contains(&needle))
        .collect()
}

/// Commits per author, in order of first appearance.
pub fn count_by_author(commits: &[Commit]) -> IndexMap<&str, usize> {
    let mut counts = IndexMap::new();
    for commit in commits {
        *counts.entry(commit.author.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Filters passed through to `git log`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub author: Option<String>,
    pub since: Option<String>,
    pub until: Option<String>,
    /// Maximum number of commits; 0 means no limit
    pub limit: usize,
}

impl LogQuery {
    /// Full argument list for `git`, starting with `log`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            format!("--pretty=format:{LOG_FORMAT}"),
            "--date=iso".to_string(),
        ];
        let non_empty = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_owned);
        if let Some(author) = non_empty(&self.author) {
            args.push(format!("--author={author}"));
        }
        if let Some(since) = non_empty(&self.since) {
            args.push(format!("--since={since}"));
        }
        if let Some(until) = non_empty(&self.until) {
            args.push(format!("--until={until}"));
        }
        if self.limit > 0 {
            args.push(format!("--max-count={}", self.limit));
        }
        args
    }
}

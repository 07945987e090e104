//! Renderers for `glimpse log`.

use serde::Serialize;

use super::LogFormat;
use crate::git::{Commit, LogQuery, count_by_author};
use crate::styling::{AUTHOR, DATE, HASH, HEADER, paint};
use crate::utils::{format_timestamp, get_now};

/// Commits listed under "Recent Commits" in summaries.
const RECENT_COMMITS: usize = 5;

/// Layout switches orthogonal to the format.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogView {
    /// Markdown table instead of a list (Markdown only)
    pub table: bool,
    /// Totals, per-author counts and recent commits
    pub summary: bool,
}

/// Render a non-empty commit list.
pub fn render(
    commits: &[Commit],
    format: LogFormat,
    view: LogView,
    query: &LogQuery,
) -> anyhow::Result<String> {
    Ok(match (format, view.summary) {
        (LogFormat::Color, false) => color_list(commits),
        (LogFormat::Color, true) => color_summary(commits),
        (LogFormat::Json, false) => serde_json::to_string_pretty(commits)?,
        (LogFormat::Json, true) => json_summary(commits, query)?,
        (LogFormat::Markdown, true) => markdown_summary(commits),
        (LogFormat::Markdown, false) if view.table => markdown_table(commits),
        (LogFormat::Markdown, false) => markdown_list(commits, get_now()),
    })
}

/// `hash author date subject`, colored per field.
pub fn color_line(commit: &Commit) -> String {
    format!(
        "{} {} {} {}",
        paint(commit.short_hash(), HASH),
        paint(&commit.author, AUTHOR),
        paint(&commit.date, DATE),
        commit.message
    )
}

fn color_list(commits: &[Commit]) -> String {
    commits.iter().map(color_line).collect::<Vec<_>>().join("\n")
}

fn color_summary(commits: &[Commit]) -> String {
    let mut lines = vec![
        paint("Git Repository Summary", HEADER.bold()),
        String::new(),
        format!("Total commits: {}", commits.len()),
        String::new(),
        paint("Commits by Author:", HEADER.bold()),
    ];
    for (author, count) in count_by_author(commits) {
        lines.push(format!("  {author}: {count} commits"));
    }

    lines.push(String::new());
    lines.push(paint("Recent Commits:", HEADER.bold()));
    for (i, commit) in commits.iter().take(RECENT_COMMITS).enumerate() {
        lines.push(format!("{}. {}", i + 1, color_line(commit)));
    }
    lines.join("\n")
}

#[derive(Serialize)]
struct LogSummary<'a> {
    total_commits: usize,
    commits: &'a [Commit],
    metadata: LogFilters<'a>,
}

/// Filters echoed back in JSON summaries; unset filters are empty strings.
#[derive(Serialize)]
struct LogFilters<'a> {
    author: &'a str,
    since: &'a str,
    until: &'a str,
}

fn json_summary(commits: &[Commit], query: &LogQuery) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&LogSummary {
        total_commits: commits.len(),
        commits,
        metadata: LogFilters {
            author: query.author.as_deref().unwrap_or_default(),
            since: query.since.as_deref().unwrap_or_default(),
            until: query.until.as_deref().unwrap_or_default(),
        },
    })
}

fn markdown_list(commits: &[Commit], generated_at: i64) -> String {
    let mut out = String::from("# Git Commit History\n\n");
    out.push_str(&format!("*Generated on {}*\n\n", format_timestamp(generated_at)));
    out.push_str(&format!("**Total Commits:** {}\n\n", commits.len()));
    out.push_str("---\n\n");

    for (i, commit) in commits.iter().enumerate() {
        out.push_str(&format!("### {}. {}\n\n", i + 1, commit.message));
        out.push_str(&format!("- **Hash:** `{}`\n", commit.short_hash()));
        out.push_str(&format!("- **Author:** {}\n", commit.author));
        out.push_str(&format!("- **Date:** {}\n\n", commit.date));
        if i + 1 < commits.len() {
            out.push_str("---\n\n");
        }
    }
    out
}

fn markdown_table(commits: &[Commit]) -> String {
    let mut out = String::from("# Git Commit History\n\n");
    out.push_str("| Hash | Author | Date | Message |\n");
    out.push_str("|------|--------|------|---------|\n");
    for commit in commits {
        out.push_str(&format!(
            "| `{}` | {} | {} | {} |\n",
            commit.short_hash(),
            commit.author,
            commit.date,
            commit.message.replace('|', "\\|")
        ));
    }
    out
}

fn markdown_summary(commits: &[Commit]) -> String {
    let mut out = String::from("# Git Repository Summary\n\n");
    out.push_str(&format!("**Total Commits:** {}\n\n", commits.len()));
    out.push_str("## Commits by Author\n\n");
    for (author, count) in count_by_author(commits) {
        out.push_str(&format!("- **{author}:** {count} commits\n"));
    }

    out.push_str("\n---\n\n## Recent Commits\n\n");
    for (i, commit) in commits.iter().take(RECENT_COMMITS).enumerate() {
        out.push_str(&format!(
            "{}. **{}** by {} (`{}`)\n",
            i + 1,
            commit.message,
            commit.author,
            commit.short_hash()
        ));
    }
    out
}

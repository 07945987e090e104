use crate::common::{TestRepo, stderr, stdout};

/// Three commits by two authors on three different days.
fn repo_with_history() -> TestRepo {
    let repo = TestRepo::new();
    repo.commit_as("Alice", "2024-01-01T10:00:00Z", "Initial commit");
    repo.commit_as("Bob", "2024-02-01T10:00:00Z", "Fix parser | edge case");
    repo.commit_as("Alice", "2024-03-01T10:00:00Z", "Add feature flag");
    repo
}

fn subjects(out: &str) -> Vec<String> {
    // `<hash> <author> <date> <time> <tz> <subject>`
    out.lines()
        .map(|line| line.splitn(6, ' ').nth(5).unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_log_newest_first() {
    let repo = repo_with_history();
    let out = repo.glimpse_ok(&["log"]);
    assert_eq!(
        subjects(&out),
        ["Add feature flag", "Fix parser | edge case", "Initial commit"]
    );
    let first = out.lines().next().unwrap();
    assert!(first.contains(" Alice 2024-03-01 10:00:00 +0000 "));
    assert_eq!(first.split(' ').next().unwrap().len(), 8);
}

#[test]
fn test_log_author_filter() {
    let repo = repo_with_history();
    let out = repo.glimpse_ok(&["log", "--author", "Bob"]);
    assert_eq!(subjects(&out), ["Fix parser | edge case"]);
}

#[test]
fn test_log_message_filter_ignores_case() {
    let repo = repo_with_history();
    let out = repo.glimpse_ok(&["log", "-m", "FEATURE"]);
    assert_eq!(subjects(&out), ["Add feature flag"]);
}

#[test]
fn test_log_date_range() {
    let repo = repo_with_history();
    let out = repo.glimpse_ok(&["log", "--since", "2024-01-15", "--until", "2024-02-15"]);
    assert_eq!(subjects(&out), ["Fix parser | edge case"]);
}

#[test]
fn test_log_limit() {
    let repo = repo_with_history();
    let out = repo.glimpse_ok(&["log", "-l", "2"]);
    assert_eq!(out.lines().count(), 2);

    // Zero means unlimited
    let out = repo.glimpse_ok(&["log", "-l", "0"]);
    assert_eq!(out.lines().count(), 3);
}

#[test]
fn test_log_limit_from_config() {
    let repo = repo_with_history();
    repo.write_config("log-limit = 1\n");
    let out = repo.glimpse_ok(&["log"]);
    assert_eq!(subjects(&out), ["Add feature flag"]);
}

#[test]
fn test_log_no_matches() {
    let repo = repo_with_history();
    let output = repo.glimpse(&["log", "--author", "Nobody"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No commits found matching the criteria.\n");

    let out = repo.glimpse_ok(&["log", "-m", "nothing like this", "-f", "json"]);
    assert_eq!(out, "No commits found matching the criteria.\n");
}

#[test]
fn test_log_json() {
    let repo = repo_with_history();
    let out = repo.glimpse_ok(&["log", "-f", "json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let commits = value.as_array().unwrap();
    assert_eq!(commits.len(), 3);
    assert_eq!(commits[1]["author"], "Bob");
    assert_eq!(commits[1]["message"], "Fix parser | edge case");
    assert_eq!(commits[1]["date"], "2024-02-01 10:00:00 +0000");
    assert_eq!(commits[1]["hash"].as_str().unwrap().len(), 40);
}

#[test]
fn test_log_json_summary() {
    let repo = repo_with_history();
    let out = repo.glimpse_ok(&["log", "-f", "json", "--summary", "-a", "Alice"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["total_commits"], 2);
    assert_eq!(value["metadata"]["author"], "Alice");
    assert_eq!(value["metadata"]["until"], "");
}

#[test]
fn test_log_color_summary() {
    let repo = repo_with_history();
    let out = repo.glimpse_ok(&["log", "--summary"]);
    assert!(out.starts_with("Git Repository Summary\n\nTotal commits: 3\n"));
    assert!(out.contains("Commits by Author:\n  Alice: 2 commits\n  Bob: 1 commits\n"));
    assert!(out.contains("Recent Commits:\n1. "));
}

#[test]
fn test_log_markdown_list() {
    let repo = repo_with_history();
    let out = repo.glimpse_ok(&["log", "-f", "markdown"]);
    assert!(out.starts_with("# Git Commit History\n\n*Generated on 2024-01-01 00:00:00*\n"));
    assert!(out.contains("**Total Commits:** 3"));
    assert!(out.contains("### 1. Add feature flag\n"));
}

#[test]
fn test_log_markdown_table() {
    let repo = repo_with_history();
    let out = repo.glimpse_ok(&["log", "-f", "markdown", "--table"]);
    assert!(out.contains("| Hash | Author | Date | Message |\n"));
    assert!(out.contains("| Bob | 2024-02-01 10:00:00 +0000 | Fix parser \\| edge case |"));
}

#[test]
fn test_log_markdown_summary() {
    let repo = repo_with_history();
    let out = repo.glimpse_ok(&["log", "-f", "md", "--summary"]);
    assert!(out.starts_with("# Git Repository Summary\n"));
    assert!(out.contains("- **Alice:** 2 commits\n- **Bob:** 1 commits\n"));
}

#[test]
fn test_log_without_commits_fails() {
    let repo = TestRepo::new();
    let output = repo.glimpse(&["log"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("❌ Failed to read commit history\n   git log "));
    assert_eq!(err.matches('❌').count(), 1);
}

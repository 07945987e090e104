//! Renderers for `glimpse branch`.

use anstyle::Style;

use super::BranchFormat;
use crate::display::truncate_to_width;
use crate::git::{Branch, Commit};
use crate::styling::{
    BOLD, CURRENT_BRANCH, DATE, HEADER, LANE_DEVELOP, LANE_FEATURE, LANE_HOTFIX, LANE_MAIN,
    LOCAL_BRANCH, LOCAL_EMOJI, REMOTE_BRANCH, REMOTE_EMOJI, REPOSITORY_EMOJI, StyledLine, UNTRACKED,
    VALUE, paint,
};

/// Commits drawn by the graph view.
pub const GRAPH_DEPTH: usize = 10;

const NAME_COLUMN_END: usize = 21;
const TYPE_COLUMN_END: usize = 32;
const DATE_COLUMN_END: usize = 48;
const MESSAGE_COLUMN_END: usize = 99;
const MESSAGE_WIDTH: usize = 48;
const TABLE_RULE_WIDTH: usize = 120;

/// Render a non-empty branch list. `graph_commits` is only read by
/// [`BranchFormat::Graph`].
pub fn render(
    branches: &[Branch],
    graph_commits: &[Commit],
    format: BranchFormat,
    with_dates: bool,
) -> anyhow::Result<String> {
    Ok(match format {
        BranchFormat::Color => color(branches, with_dates),
        BranchFormat::Table => table(branches),
        BranchFormat::Tree => tree(branches, with_dates),
        BranchFormat::Graph => graph(graph_commits),
        BranchFormat::Json => serde_json::to_string_pretty(branches)?,
    })
}

fn branch_style(branch: &Branch) -> Style {
    if branch.is_current {
        CURRENT_BRANCH
    } else if branch.is_remote {
        REMOTE_BRANCH
    } else {
        LOCAL_BRANCH
    }
}

fn branch_kind(branch: &Branch) -> &'static str {
    if branch.is_current {
        "current"
    } else if branch.is_remote {
        "remote"
    } else {
        "local"
    }
}

fn date_suffix(branch: &Branch, with_dates: bool) -> String {
    if with_dates {
        format!(" {}", paint(format!("({})", branch.last_commit_date), DATE))
    } else {
        String::new()
    }
}

fn color(branches: &[Branch], with_dates: bool) -> String {
    branches
        .iter()
        .map(|branch| {
            let marker = if branch.is_current { "* " } else { "  " };
            format!(
                "{marker}{}{}",
                paint(&branch.name, branch_style(branch)),
                date_suffix(branch, with_dates)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn table(branches: &[Branch]) -> String {
    let mut lines = vec![paint("Git Branches", HEADER.bold()), String::new()];

    let mut header = StyledLine::new();
    header.push_column("Branch", Some(BOLD), NAME_COLUMN_END);
    header.push_column("Type", Some(BOLD), TYPE_COLUMN_END);
    header.push_column("Last Commit", Some(BOLD), DATE_COLUMN_END);
    header.push_column("Message", Some(BOLD), MESSAGE_COLUMN_END);
    header.push_styled("Author", BOLD);
    lines.push(header.render());
    lines.push("-".repeat(TABLE_RULE_WIDTH));

    for branch in branches {
        let mut row = StyledLine::new();
        row.push_column(&branch.name, None, NAME_COLUMN_END);
        row.push_column(branch_kind(branch), Some(branch_style(branch)), TYPE_COLUMN_END);
        row.push_column(&branch.last_commit_date, Some(DATE), DATE_COLUMN_END);
        row.push_column(
            truncate_to_width(&branch.last_commit_message, MESSAGE_WIDTH),
            None,
            MESSAGE_COLUMN_END,
        );
        row.push_raw(&branch.last_commit_author);
        lines.push(row.render().trim_end().to_string());
    }

    lines.join("\n")
}

fn tree(branches: &[Branch], with_dates: bool) -> String {
    let (remote, local): (Vec<&Branch>, Vec<&Branch>) =
        branches.iter().partition(|b| b.is_remote);

    let mut lines = vec![
        paint("Git Branch Tree", HEADER.bold()),
        String::new(),
        paint(format!("{REPOSITORY_EMOJI} Repository"), BOLD),
        "│".to_string(),
    ];

    if !local.is_empty() {
        lines.push(format!(
            "├── {}",
            paint(format!("{LOCAL_EMOJI} Local Branches"), LOCAL_BRANCH)
        ));
        for (i, branch) in local.iter().enumerate() {
            let last = i + 1 == local.len() && remote.is_empty();
            let connector = if last { "│   └── " } else { "│   ├── " };
            let marker = if branch.is_current { "* " } else { "  " };
            lines.push(format!(
                "{connector}{marker}{}{}",
                paint(&branch.name, branch_style(branch)),
                date_suffix(branch, with_dates)
            ));
        }
    }

    if !remote.is_empty() {
        if !local.is_empty() {
            lines.push("│".to_string());
        }
        lines.push(format!(
            "└── {}",
            paint(format!("{REMOTE_EMOJI} Remote Branches"), REMOTE_BRANCH)
        ));
        for (i, branch) in remote.iter().enumerate() {
            let connector = if i + 1 == remote.len() { "    └── " } else { "    ├── " };
            lines.push(format!(
                "{connector}{}{}",
                paint(&branch.name, REMOTE_BRANCH),
                date_suffix(branch, with_dates)
            ));
        }
    }

    if let Some(current) = branches.iter().find(|b| b.is_current) {
        lines.push(String::new());
        lines.push(format!(
            "{}{}",
            paint("Current branch: ", BOLD),
            paint(&current.name, CURRENT_BRANCH)
        ));
    }

    lines.join("\n")
}

/// Lane color for a commit, picked from keywords in its subject.
fn lane_style(message: &str) -> Style {
    let message = message.to_lowercase();
    if message.contains("feature") {
        LANE_FEATURE
    } else if message.contains("hotfix") {
        LANE_HOTFIX
    } else if message.contains("develop") {
        LANE_DEVELOP
    } else {
        LANE_MAIN
    }
}

fn is_merge(message: &str) -> bool {
    message.to_lowercase().contains("merge")
}

/// Draw `commits` (newest first) as a single-lane graph with merge forks.
pub fn graph(commits: &[Commit]) -> String {
    let mut lines = vec![
        paint("Git Branch Graph", HEADER.bold()),
        String::new(),
        "Commit Graph:".to_string(),
        String::new(),
    ];

    for (i, commit) in commits.iter().enumerate() {
        let lane = lane_style(&commit.message);
        if is_merge(&commit.message) {
            lines.push(format!("  {}", paint("│", lane)));
            lines.push(format!(
                "  {} {} {}",
                paint("├─╮", lane),
                paint(commit.short_hash(), lane),
                commit.message
            ));
            lines.push(format!("  {}", paint("│ │", lane)));
        } else {
            lines.push(format!(
                "  {} {} {} by {}",
                paint("●", lane),
                paint(commit.short_hash(), lane),
                commit.message,
                paint(&commit.author, DATE)
            ));
            if i + 1 < commits.len() {
                lines.push(format!("  {}", paint("│", lane)));
            }
        }
    }

    lines.push(String::new());
    lines.push("Legend:".to_string());
    lines.push(format!(
        "  {} Main/current branch   {} Feature branches   {} Hotfix branches",
        paint("●", LANE_MAIN),
        paint("●", LANE_FEATURE),
        paint("●", LANE_HOTFIX)
    ));
    lines.push(format!(
        "  {} Merge commit   {} Commit line",
        paint("├─╮", UNTRACKED),
        paint("│", VALUE)
    ));

    lines.join("\n")
}

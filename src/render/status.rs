//! Renderers for `glimpse status`.

use anstyle::Style;
use color_print::cformat;
use strum::IntoEnumIterator;

use super::StatusFormat;
use crate::display::count_noun;
use crate::git::{Category, RepositoryStatus};
use crate::styling::{
    AHEAD, BEHIND, BOLD, CLEAN, CONFLICT, HEADER, LABEL, MODIFIED, STAGED, StyledLine, UNTRACKED,
    VALUE, paint,
};
use crate::utils::{format_timestamp, get_now};

const CLEAN_MESSAGE: &str = "Working tree clean";
const CATEGORY_COLUMN_END: usize = 13;
const STATUS_COLUMN_END: usize = 26;
const RULE_WIDTH: usize = 50;

/// Render `status` in `format`.
pub fn render(status: &RepositoryStatus, format: StatusFormat) -> anyhow::Result<String> {
    Ok(match format {
        StatusFormat::Color => color(status),
        StatusFormat::Table => table(status),
        StatusFormat::Summary => summary(status),
        StatusFormat::Json => serde_json::to_string_pretty(status)?,
        StatusFormat::Markdown => markdown(status, get_now()),
    })
}

/// Sections in display order: conflicts first, since they block everything else.
fn sections() -> impl Iterator<Item = Category> {
    Category::iter()
}

fn category_style(category: Category) -> Style {
    match category {
        Category::Conflict => CONFLICT,
        Category::Staged => STAGED,
        Category::Modified => MODIFIED,
        Category::Untracked => UNTRACKED,
    }
}

fn branch_label(status: &RepositoryStatus) -> &str {
    match status.branch() {
        "" => "HEAD (detached)",
        branch => branch,
    }
}

/// `(2 ahead, 1 behind)`, or `(up to date)` when both counts are zero.
fn divergence(status: &RepositoryStatus, styled: bool) -> String {
    let mut parts = Vec::new();
    if status.ahead() > 0 {
        let text = format!("{} ahead", status.ahead());
        parts.push(if styled { paint(text, AHEAD) } else { text });
    }
    if status.behind() > 0 {
        let text = format!("{} behind", status.behind());
        parts.push(if styled { paint(text, BEHIND) } else { text });
    }
    if parts.is_empty() {
        let text = "up to date".to_string();
        parts.push(if styled { paint(text, CLEAN) } else { text });
    }
    format!("({})", parts.join(", "))
}

/// Suggested follow-up commands, most urgent first.
pub fn next_steps(status: &RepositoryStatus) -> Vec<&'static str> {
    let mut steps = Vec::new();
    if !status.conflicts().is_empty() {
        steps.push("Resolve conflicts first");
    } else if !status.modified().is_empty() || !status.untracked().is_empty() {
        steps.push(r#"git add . && git commit -m "your message""#);
    } else if !status.staged().is_empty() {
        steps.push(r#"git commit -m "your message""#);
    }
    if status.ahead() > 0 {
        steps.push("git push");
    }
    steps
}

fn color(status: &RepositoryStatus) -> String {
    let mut lines = vec![format!(
        "{}{}",
        paint("Repository Status: ", HEADER),
        paint(branch_label(status), BOLD)
    )];

    if let Some(remote) = status.remote_branch() {
        lines.push(format!(
            "{}{} {}",
            paint("Remote: ", LABEL),
            paint(remote, VALUE),
            divergence(status, true)
        ));
    }

    if status.is_clean() {
        lines.push(cformat!("<green>{CLEAN_MESSAGE}</>"));
        return lines.join("\n");
    }

    for category in sections() {
        let files = status.files(category);
        if files.is_empty() {
            continue;
        }
        let style = category_style(category);
        lines.push(String::new());
        lines.push(paint(
            format!("{category} ({})", count_noun(files.len(), "file")),
            style.bold(),
        ));
        for file in files {
            lines.push(format!(
                "  {}    {}",
                paint(file.display_status(), style),
                file.path()
            ));
        }
    }

    let steps = next_steps(status);
    if !steps.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "{}{}",
            paint("Next: ", LABEL),
            steps.join(" → ")
        ));
    }

    lines.join("\n")
}

fn table(status: &RepositoryStatus) -> String {
    let rule = "─".repeat(RULE_WIDTH);
    let mut lines = vec![
        paint(format!("Repository Status: {}", branch_label(status)), HEADER),
        rule.clone(),
    ];

    if status.is_clean() {
        lines.push(cformat!("Status: <green>Clean - no changes to commit</>"));
        return lines.join("\n");
    }

    let mut header = StyledLine::new();
    header.push_column("CATEGORY", Some(BOLD), CATEGORY_COLUMN_END);
    header.push_column("STATUS", Some(BOLD), STATUS_COLUMN_END);
    header.push_styled("FILE", BOLD);
    lines.push(header.render());
    lines.push(rule);

    for category in sections() {
        let style = category_style(category);
        for (i, file) in status.files(category).iter().enumerate() {
            let mut row = StyledLine::new();
            let label = if i == 0 { category.to_string() } else { String::new() };
            row.push_column(label, Some(style), CATEGORY_COLUMN_END);
            row.push_column(
                format!("{} {}", file.display_status(), file.description()),
                Some(style),
                STATUS_COLUMN_END,
            );
            row.push_raw(file.path());
            lines.push(row.render().trim_end().to_string());
        }
    }

    lines.join("\n")
}

fn summary(status: &RepositoryStatus) -> String {
    let branch = branch_label(status);
    if status.is_clean() {
        return format!("{branch}: clean");
    }

    let mut parts: Vec<String> = [
        (status.staged().len(), "staged"),
        (status.modified().len(), "modified"),
        (status.untracked().len(), "untracked"),
    ]
    .into_iter()
    .filter(|(n, _)| *n > 0)
    .map(|(n, label)| format!("{n} {label}"))
    .collect();
    if !status.conflicts().is_empty() {
        parts.push(count_noun(status.conflicts().len(), "conflict"));
    }

    format!("{branch}: {}", parts.join(", "))
}

fn markdown(status: &RepositoryStatus, generated_at: i64) -> String {
    let mut out = format!("# Repository Status: `{}`\n\n", branch_label(status));

    if let Some(remote) = status.remote_branch() {
        out.push_str(&format!(
            "**Remote:** `{remote}` {}\n\n",
            divergence(status, false)
        ));
    }

    if status.is_clean() {
        out.push_str(CLEAN_MESSAGE);
        out.push('\n');
    } else {
        for category in sections() {
            let files = status.files(category);
            if files.is_empty() {
                continue;
            }
            out.push_str(&format!(
                "## {category} ({})\n\n",
                count_noun(files.len(), "file")
            ));
            for file in files {
                out.push_str(&format!(
                    "- `{}` {} ({})\n",
                    file.display_status(),
                    file.path(),
                    file.description()
                ));
            }
            out.push('\n');
        }

        let steps = next_steps(status);
        if !steps.is_empty() {
            out.push_str("**Next:** ");
            let steps: Vec<String> = steps.iter().map(|s| format!("`{s}`")).collect();
            out.push_str(&steps.join(" → "));
            out.push('\n');
        }
    }

    out.push_str(&format!("\n---\n*Generated on {}*\n", format_timestamp(generated_at)));
    out
}

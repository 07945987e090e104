use glimpse::config::UserConfig;
use glimpse::git::{LogQuery, Repository, filter_by_message};
use glimpse::render;
use glimpse::render::log::LogView;
use glimpse::styling::println;

use crate::cli::LogArgs;

const NO_COMMITS: &str = "No commits found matching the criteria.";

/// `glimpse log`: list commits matching the filters.
pub fn handle_log(repo: &Repository, args: LogArgs, config: &UserConfig) -> anyhow::Result<()> {
    let format = match args.format {
        Some(format) => format,
        None => config.log_format()?.unwrap_or_default(),
    };

    let query = LogQuery {
        author: args.author,
        since: args.since,
        until: args.until,
        limit: args.limit.or(config.log_limit).unwrap_or(0),
    };

    let mut commits = repo.commits(&query)?;
    if let Some(needle) = args.message.as_deref().filter(|m| !m.is_empty()) {
        commits = filter_by_message(commits, needle);
    }

    if commits.is_empty() {
        println!("{NO_COMMITS}");
        return Ok(());
    }

    let view = LogView {
        table: args.table,
        summary: args.summary,
    };
    println!("{}", render::log::render(&commits, format, view, &query)?);
    Ok(())
}

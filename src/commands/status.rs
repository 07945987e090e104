use glimpse::config::UserConfig;
use glimpse::git::Repository;
use glimpse::render;
use glimpse::styling::println;

use crate::cli::StatusArgs;

/// `glimpse status`: classify the working tree and print it.
pub fn handle_status(repo: &Repository, args: StatusArgs, config: &UserConfig) -> anyhow::Result<()> {
    let format = match args.format {
        Some(format) => format,
        None => config.status_format()?.unwrap_or_default(),
    };

    let status = repo.repository_status()?;
    println!("{}", render::status::render(&status, format)?);
    Ok(())
}

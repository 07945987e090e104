use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use color_print::cformat;
use glimpse::config::{UserConfig, config_path};
use glimpse::git::{GitError, Repository};
use glimpse::styling::{ERROR_EMOJI, eprintln};

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{VersionInfo, handle_branch, handle_log, handle_status, handle_version};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and --version go to stdout with exit 0; usage errors exit 1
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    init_logging(cli.verbose);
    let version = VersionInfo::from_build();

    if let Err(e) = run(cli, &version) {
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, version: &VersionInfo) -> anyhow::Result<()> {
    let Cli {
        command,
        directory,
        config,
        ..
    } = cli;

    match command {
        Commands::Status(args) => {
            let (repo, config) = open(directory, config)?;
            handle_status(&repo, args, &config)
        }
        Commands::Log(args) => {
            let (repo, config) = open(directory, config)?;
            handle_log(&repo, args, &config)
        }
        Commands::Branch(args) => {
            let (repo, config) = open(directory, config)?;
            handle_branch(&repo, args, &config)
        }
        Commands::Version => handle_version(version),
    }
}

/// Load the user config, then check that `directory` (default: the current
/// directory) is a repository.
fn open(
    directory: Option<PathBuf>,
    config_override: Option<PathBuf>,
) -> anyhow::Result<(Repository, UserConfig)> {
    let path = config_path(config_override.as_deref());
    let config = UserConfig::load(path.as_deref()).with_context(|| match &path {
        Some(path) => format!("Invalid config file {}", path.display()),
        None => "Invalid configuration".to_string(),
    })?;

    let repo = Repository::open(directory.unwrap_or_else(|| PathBuf::from(".")))?;
    Ok((repo, config))
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
        .format(|buf, record| writeln!(buf, "{}", cformat!("<dim>{}</>", record.args())))
        .init();
}

/// Print an error chain to stderr.
fn print_error(err: &anyhow::Error) {
    eprintln!("{}", format_error(err));
}

/// Render an error chain.
///
/// A bare [`GitError`] already carries its own emoji and styling; anything
/// wrapped in context gets the context on the first line and the causes below,
/// each without an emoji of its own.
fn format_error(err: &anyhow::Error) -> String {
    if let Some(git_err) = err.chain().next().and_then(|e| e.downcast_ref::<GitError>()) {
        return git_err.to_string();
    }

    let mut lines = vec![cformat!("{ERROR_EMOJI} <red>{err}</>")];
    for cause in err.chain().skip(1) {
        match cause.downcast_ref::<GitError>() {
            Some(git_err) => lines.push(format!("   {}", git_err.message())),
            None => lines.push(format!("   {cause}")),
        }
    }
    lines.join("\n")
}

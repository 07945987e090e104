use glimpse::config::UserConfig;
use glimpse::git::{BranchScope, Repository};
use glimpse::render::branch::GRAPH_DEPTH;
use glimpse::render::{self, BranchFormat};
use glimpse::styling::println;

use crate::cli::BranchArgs;

const NO_BRANCHES: &str = "No branches found.";

/// `glimpse branch`: list branches, or draw recent history as a graph.
pub fn handle_branch(repo: &Repository, args: BranchArgs, config: &UserConfig) -> anyhow::Result<()> {
    let format = if args.tree {
        BranchFormat::Tree
    } else if args.graph {
        BranchFormat::Graph
    } else {
        match args.format {
            Some(format) => format,
            None => config.branch_format()?.unwrap_or_default(),
        }
    };
    let with_dates = args.with_dates || config.with_dates;

    let branches = repo.branches(BranchScope::from_flags(args.remote, args.all))?;
    if branches.is_empty() {
        println!("{NO_BRANCHES}");
        return Ok(());
    }

    let graph_commits = if format == BranchFormat::Graph {
        repo.recent_commits(GRAPH_DEPTH)?
    } else {
        Vec::new()
    };

    println!(
        "{}",
        render::branch::render(&branches, &graph_commits, format, with_dates)?
    );
    Ok(())
}

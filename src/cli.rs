use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use glimpse::render::{BranchFormat, LogFormat, StatusFormat};

#[derive(Parser)]
#[command(name = "glimpse")]
#[command(about = "Readable views of git status, history and branches", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Show debug logs, including every git command run
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Run as if started in <path>
    #[arg(short = 'C', global = true, value_name = "path")]
    pub directory: Option<PathBuf>,

    /// User config file
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show working tree status grouped by category
    #[command(after_long_help = r#"## Output formats

- `color` (default): sections for conflicts, staged, modified and untracked files, then suggested next steps
- `table`: one row per file with its category and status
- `summary`: a single line of counts
- `json`: the full status object
- `markdown`: a report suitable for pasting into issues"#)]
    Status(StatusArgs),

    /// Show commit history with filters
    Log(LogArgs),

    /// Show branches
    Branch(BranchArgs),

    /// Show version and build information
    Version,
}

#[derive(Args, Debug, Default)]
pub struct StatusArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<StatusFormat>,
}

#[derive(Args, Debug, Default)]
pub struct LogArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<LogFormat>,

    /// Only commits by this author
    #[arg(short, long)]
    pub author: Option<String>,

    /// Only commits after this date (e.g. 2024-01-01)
    #[arg(short, long)]
    pub since: Option<String>,

    /// Only commits before this date
    #[arg(short, long)]
    pub until: Option<String>,

    /// Only commits whose subject contains this text (case-insensitive)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Maximum number of commits (0 = no limit)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Markdown table instead of a list
    #[arg(short, long)]
    pub table: bool,

    /// Totals, commits per author and recent commits
    #[arg(long)]
    pub summary: bool,
}

#[derive(Args, Debug, Default)]
pub struct BranchArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<BranchFormat>,

    /// Shorthand for --format=tree
    #[arg(short, long, conflicts_with_all = ["format", "graph"])]
    pub tree: bool,

    /// Shorthand for --format=graph
    #[arg(short, long, conflicts_with = "format")]
    pub graph: bool,

    /// Include last commit dates
    #[arg(short = 'd', long)]
    pub with_dates: bool,

    /// Only remote branches
    #[arg(short, long)]
    pub remote: bool,

    /// Local and remote branches
    #[arg(short, long)]
    pub all: bool,
}

//! Output renderers.
//!
//! Renderers are pure functions from the parsed models to a `String`. Colored
//! formats embed ANSI codes unconditionally; printing through
//! [`crate::styling::println`] strips them when the stream is not a terminal
//! or `NO_COLOR` is set. JSON and Markdown never carry styles.

pub mod branch;
pub mod log;
pub mod status;

use clap::ValueEnum;

/// `--format` values accepted by `status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum StatusFormat {
    /// Colorized sections with next-step suggestions
    #[default]
    Color,
    /// One row per file
    Table,
    /// Single-line counts
    Summary,
    Json,
    #[value(alias = "md")]
    Markdown,
}

/// `--format` values accepted by `log`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Color,
    Json,
    #[value(alias = "md")]
    Markdown,
}

/// `--format` values accepted by `branch`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BranchFormat {
    #[default]
    Color,
    Table,
    /// Local and remote branches as a tree
    Tree,
    /// Recent commits drawn as a graph
    Graph,
    Json,
}

/// Parse a format name the same way the command line does (case-insensitive).
pub fn parse_format<F: ValueEnum>(value: &str) -> anyhow::Result<F> {
    F::from_str(value, true).map_err(|_| {
        let known: Vec<String> = F::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        anyhow::anyhow!("Unknown format '{value}'. Use: {}", known.join(", "))
    })
}

//! User configuration.
//!
//! Optional defaults read from a TOML file, overridable through `GLIMPSE_*`
//! environment variables. Command-line flags always win over both.
//!
//! ```toml
//! status-format = "table"
//! log-format = "markdown"
//! branch-format = "tree"
//! log-limit = 20
//! with-dates = true
//! ```

use std::path::{Path, PathBuf};

use config::{Case, ConfigError, Environment, File, FileFormat, Map};
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::Deserialize;

use crate::render::{BranchFormat, LogFormat, StatusFormat, parse_format};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "GLIMPSE_CONFIG_PATH";

const ENV_PREFIX: &str = "GLIMPSE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UserConfig {
    /// Default `status --format`
    pub status_format: Option<String>,
    /// Default `log --format`
    pub log_format: Option<String>,
    /// Default `branch --format`
    pub branch_format: Option<String>,
    /// Default `log --limit`
    pub log_limit: Option<usize>,
    /// Default for `branch --with-dates`
    pub with_dates: bool,
}

/// Get the user config file path.
///
/// Priority:
/// 1. CLI `--config`
/// 2. `GLIMPSE_CONFIG_PATH`
/// 3. Platform config dir (`~/.config/glimpse/config.toml` on Linux and macOS)
pub fn config_path(cli_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_override {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }

    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("glimpse").join("config.toml"))
}

impl UserConfig {
    /// Load from `path` (missing file is fine) layered under the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Load with an explicit environment map instead of the process
    /// environment. `None` reads the real environment.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            log::debug!("Loading config from {}", path.display());
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .convert_case(Case::Kebab)
                .try_parsing(true)
                .source(env),
        );

        builder.build()?.try_deserialize()
    }

    pub fn status_format(&self) -> anyhow::Result<Option<StatusFormat>> {
        self.status_format.as_deref().map(parse_format).transpose()
    }

    pub fn log_format(&self) -> anyhow::Result<Option<LogFormat>> {
        self.log_format.as_deref().map(parse_format).transpose()
    }

    pub fn branch_format(&self) -> anyhow::Result<Option<BranchFormat>> {
        self.branch_format.as_deref().map(parse_format).transpose()
    }
}

use glimpse::styling::println;

/// Build metadata shown by `glimpse version`, assembled once in `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: String,
    pub commit: String,
    pub date: String,
}

impl VersionInfo {
    /// Metadata baked in at compile time; vergen's values are absent when
    /// the crate was built outside a git checkout.
    pub fn from_build() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit: option_env!("VERGEN_GIT_SHA").unwrap_or("none").to_string(),
            date: option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown").to_string(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "glimpse version {}\nGit commit: {}\nBuilt: {}",
            self.version, self.commit, self.date
        )
    }
}

pub fn handle_version(info: &VersionInfo) -> anyhow::Result<()> {
    println!("{}", info.render());
    Ok(())
}

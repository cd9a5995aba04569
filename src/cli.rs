//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

use crate::error::{self, Result};
use crate::logging;

/// Config shard validator
///
/// Checks that every CI operator and job configuration belongs to exactly one
/// auto-updating config map, and that injected configs name the right one.
#[derive(Parser, Debug)]
#[command(
    name = "config-shard-validator",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Validate config-updater sharding of CI configuration",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  config-shard-validator --release-repo-dir ../release\n    \
                  config-shard-validator --release-repo-dir ../release --log-level debug"
)]
pub struct Cli {
    /// Path to the release repository checkout
    #[arg(long, value_name = "DIR")]
    pub release_repo_dir: Option<PathBuf>,

    /// Level at which to log output
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Validated options for a run
#[derive(Debug, Clone)]
pub struct Options {
    pub release_repo_dir: PathBuf,
    pub log_level: LevelFilter,
}

impl Cli {
    /// Check flag values and turn them into [`Options`]
    pub fn validate(self) -> Result<Options> {
        let release_repo_dir = self
            .release_repo_dir
            .filter(|dir| !dir.as_os_str().is_empty())
            .ok_or_else(|| error::options::missing_flag("release-repo-dir"))?;

        let log_level = logging::parse_level(&self.log_level)?;

        if !release_repo_dir.is_dir() {
            return Err(error::options::repo_not_found(
                release_repo_dir.display().to_string(),
            ));
        }

        Ok(Options {
            release_repo_dir,
            log_level,
        })
    }
}

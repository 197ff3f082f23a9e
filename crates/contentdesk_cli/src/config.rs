//! Process-level settings shared by every command.

use clap::Args;
use contentdesk_core::{default_log_level, init_logging, LoggingError};
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// SQLite file holding the portal's key/value namespace
    #[arg(
        long,
        global = true,
        env = "CONTENTDESK_DB",
        default_value = "contentdesk.sqlite3"
    )]
    pub db: PathBuf,

    /// Absolute directory for rotating log files; logging is off when unset
    #[arg(long, global = true, env = "CONTENTDESK_LOG_DIR")]
    pub log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "CONTENTDESK_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl GlobalArgs {
    /// Starts file logging when a directory is configured.
    pub fn init_logging(&self) -> Result<(), LoggingError> {
        let Some(log_dir) = self.log_dir.as_deref() else {
            return Ok(());
        };
        let level = self.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)
    }
}

//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::paths;
use super::{HANDLE_PREFIX_DEFAULT, NEW_PUBLISHER_DEFAULT, OLD_PUBLISHER_DEFAULT};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for the migration run.
#[derive(Debug, Clone)]
pub struct Config {
    /// StarCraft II documents folder (contains `Accounts/` and shortcuts)
    pub sc2_root: PathBuf,
    /// Publisher folder the saves are migrated out of
    pub old_publisher: String,
    /// Publisher folder the saves are migrated into
    pub new_publisher: String,
    /// Only handles starting with this prefix are considered
    pub handle_prefix: String,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, print actions but do not modify the filesystem
    pub dry_run: bool,
    /// If true, leave the old-location file in place after a successful copy
    pub keep_source: bool,
    /// If true, skip interactive confirmation prompts
    pub assume_yes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sc2_root: paths::default_sc2_root(),
            old_publisher: OLD_PUBLISHER_DEFAULT.to_string(),
            new_publisher: NEW_PUBLISHER_DEFAULT.to_string(),
            handle_prefix: HANDLE_PREFIX_DEFAULT.to_string(),
            log_level: LogLevel::Normal,
            // paths::default_log_path() returns Option; best-effort default.
            log_file: paths::default_log_path(),
            dry_run: false,
            keep_source: false,
            assume_yes: false,
        }
    }
}

impl Config {
    /// Construct a Config rooted at an explicit SC2 documents folder; other
    /// fields use defaults. Mostly for tests.
    pub fn with_root(sc2_root: impl Into<PathBuf>) -> Self {
        Self {
            sc2_root: sc2_root.into(),
            ..Default::default()
        }
    }

    /// `<sc2_root>/Accounts`
    pub fn accounts_dir(&self) -> PathBuf {
        self.sc2_root.join("Accounts")
    }
}

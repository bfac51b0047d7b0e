//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - CLI flags override config.xml values.
//! - --debug is a shorthand for --log-level debug.
//! - --handle selects an account non-interactively; --yes skips prompts.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Relocate StarCraft II map bank saves from the old publisher folder to the
/// new one, backing up any conflicting destination file first.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Migrate SC2 map bank saves to the new publisher folder")]
pub struct Args {
    /// Account handle to migrate (e.g. 5-S2-1-654321); prompts when omitted.
    #[arg(value_name = "HANDLE")]
    pub handle: Option<String>,

    /// Override the StarCraft II documents folder (contains Accounts/).
    #[arg(long, value_hint = ValueHint::DirPath, help = "Override the StarCraft II documents folder")]
    pub sc2_root: Option<PathBuf>,

    /// Override the old publisher folder identifier.
    #[arg(long, value_name = "ID", help = "Publisher folder the saves are migrated out of")]
    pub old_publisher: Option<String>,

    /// Override the new publisher folder identifier.
    #[arg(long, value_name = "ID", help = "Publisher folder the saves are migrated into")]
    pub new_publisher: Option<String>,

    /// List accounts with migratable saves and exit.
    #[arg(long, help = "List accounts with migratable saves and exit")]
    pub list: bool,

    /// Answer yes to all confirmation prompts.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation prompts")]
    pub assume_yes: bool,

    /// Leave old-location files in place after a successful copy.
    #[arg(long, help = "Copy instead of move: keep the old-location files")]
    pub keep_source: bool,

    /// Dry-run: log actions but do not modify the filesystem.
    #[arg(long, help = "Show what would be done, but do not modify files")]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where sc2_bank_move will look for the config file, then exit.
    #[arg(long, help = "Print the config file location used by sc2_bank_move and exit")]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(root) = &self.sc2_root {
            cfg.sc2_root = root.clone();
        }
        if let Some(old) = &self.old_publisher {
            cfg.old_publisher = old.clone();
        }
        if let Some(new) = &self.new_publisher {
            cfg.new_publisher = new.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.keep_source {
            cfg.keep_source = true;
        }
        if self.assume_yes {
            cfg.assume_yes = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

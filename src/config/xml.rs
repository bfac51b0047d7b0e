//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a template if missing (unless SC2_BANK_MOVE_CONFIG is set).
//! - Exposes helpers to ensure a default config exists.
//!
//! Notes:
//! - This module only reads/writes the config file; path validation happens
//!   elsewhere.
//! - Unknown XML fields fail the parse (serde deny_unknown_fields) so typos
//!   surface instead of being silently ignored.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};

/// Env var naming an explicit config file; overrides the platform default.
pub const CONFIG_ENV: &str = "SC2_BANK_MOVE_CONFIG";

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    sc2_root: Option<String>,
    old_publisher: Option<String>,
    new_publisher: Option<String>,
    handle_prefix: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
    keep_source: Option<bool>,
}

// Map XmlConfig over defaults; empty/whitespace values count as unset.
fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(s) = nonempty(parsed.sc2_root.as_deref()) {
        cfg.sc2_root = PathBuf::from(s);
    }
    if let Some(s) = nonempty(parsed.old_publisher.as_deref()) {
        cfg.old_publisher = s.to_string();
    }
    if let Some(s) = nonempty(parsed.new_publisher.as_deref()) {
        cfg.new_publisher = s.to_string();
    }
    if let Some(s) = nonempty(parsed.handle_prefix.as_deref()) {
        cfg.handle_prefix = s.to_string();
    }
    if let Some(s) = nonempty(parsed.log_level.as_deref()) {
        if let Ok(level) = s.parse::<LogLevel>() {
            cfg.log_level = level;
        }
    }
    if let Some(s) = nonempty(parsed.log_file.as_deref()) {
        cfg.log_file = Some(PathBuf::from(s));
    }
    cfg.keep_source = parsed.keep_source.unwrap_or(false);

    cfg
}

fn nonempty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Load a Config from a specific XML file path (quick_xml).
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig =
        from_xml_str(&contents).with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Read config from XML. SC2_BANK_MOVE_CONFIG wins over the platform default.
/// Returns None if no config file exists or it doesn't parse; callers fall
/// back to `Config::default()`.
pub fn load_config_from_xml() -> Option<Config> {
    let cfg_path = if let Some(p) = env::var_os(CONFIG_ENV) {
        PathBuf::from(p)
    } else {
        default_config_path()?
    };

    if !cfg_path.exists() {
        return None;
    }

    match load_config_from_xml_path(&cfg_path) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            debug!("Failed to load config at {}: {e:#}", cfg_path.display());
            None
        }
    }
}

/// Create default template config file and parent directory (best-effort).
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        return Err(anyhow::anyhow!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/sc2_bank_move.log".into());

    let content = format!(
        "<!--\n  sc2_bank_move configuration (XML)\n\n  Fields:\n    sc2_root       -> StarCraft II documents folder (contains Accounts/)\n    old_publisher  -> publisher folder the saves are migrated out of\n    new_publisher  -> publisher folder the saves are migrated into\n    handle_prefix  -> only account handles starting with this are considered\n    log_level      -> quiet | normal | info | debug\n    log_file       -> path to log file (optional; stdout/stderr still used)\n    keep_source    -> true to leave old-location files in place after copying\n\n  Notes:\n    - CLI flags override XML values.\n-->\n<config>\n  <old_publisher>{}</old_publisher>\n  <new_publisher>{}</new_publisher>\n  <handle_prefix>{}</handle_prefix>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n  <keep_source>false</keep_source>\n</config>\n",
        super::OLD_PUBLISHER_DEFAULT,
        super::NEW_PUBLISHER_DEFAULT,
        super::HANDLE_PREFIX_DEFAULT,
        suggested_log,
    );

    fs::write(path, content)
        .with_context(|| format!("write template config '{}'", path.display()))?;

    info!("Created template config at {}", path.display());
    Ok(())
}

/// Create default config if SC2_BANK_MOVE_CONFIG not set; return created path
/// so the CLI can inform the user.
pub fn ensure_default_config_exists() -> Option<PathBuf> {
    if env::var_os(CONFIG_ENV).is_some() {
        return None;
    }

    let cfg_path = default_config_path()?;
    if cfg_path.exists() {
        return None;
    }

    match create_template_config(&cfg_path) {
        Ok(()) => Some(cfg_path),
        Err(e) => {
            eprintln!(
                "Failed to create template config at {}: {}",
                cfg_path.display(),
                e
            );
            None
        }
    }
}

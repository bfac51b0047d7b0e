//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths, the default StarCraft II
//! documents folder, and detects symlinked ancestors for safety.

use dirs::{config_dir, data_dir, document_dir, home_dir};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// OS-appropriate default config path.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(mut base) = config_dir() {
        base.push("sc2_bank_move");
        base.push("config.xml");
        Some(base)
    } else {
        std::env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("sc2_bank_move")
                .join("config.xml")
        })
    }
}

/// OS-appropriate default log file path (data dir).
pub fn default_log_path() -> Option<PathBuf> {
    if let Some(mut base) = data_dir() {
        base.push("sc2_bank_move");
        // ensure dir exists (best-effort)
        let _ = fs::create_dir_all(&base);
        base.push("sc2_bank_move.log");
        Some(base)
    } else {
        std::env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("sc2_bank_move")
                .join("sc2_bank_move.log")
        })
    }
}

/// Default StarCraft II documents folder: `<Documents>/StarCraft II`.
/// Falls back to `~/Documents/StarCraft II` when the platform can't report a
/// documents dir (common on headless Linux).
pub fn default_sc2_root() -> PathBuf {
    if let Some(docs) = document_dir() {
        return docs.join("StarCraft II");
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("StarCraft II")
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}

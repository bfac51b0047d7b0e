//! Account discovery.
//!
//! Layout on disk:
//!   <sc2_root>/Accounts/<battle_net_id>/<handle>/Banks/<publisher_id>/<bank>.SC2Bank
//!
//! Only handles starting with the configured region prefix are considered, and
//! only accounts that still have at least one old-location bank file are
//! returned. Display names are recovered best-effort from the `.lnk` shortcut
//! files the game drops in the SC2 root, one per logged-in character.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::banks::BANK_FILES;
use crate::config::Config;

/// One discovered StarCraft II account with old-location saves.
#[derive(Debug, Clone)]
pub struct Account {
    /// Handle folder, e.g. `.../Accounts/123456/5-S2-1-654321`
    pub path: PathBuf,
    /// Parent folder name (the numeric battle-net account id)
    pub battle_net_id: String,
    /// Region-specific handle, e.g. `5-S2-1-654321`
    pub handle: String,
    /// Character name recovered from a shortcut, when one matches
    pub display_name: Option<String>,
    /// `<path>/Banks/<old_publisher>`
    pub old_bank_dir: PathBuf,
    /// `<path>/Banks/<new_publisher>`
    pub new_bank_dir: PathBuf,
}

impl Account {
    fn new(path: PathBuf, battle_net_id: String, handle: String, cfg: &Config) -> Self {
        let banks = path.join("Banks");
        let old_bank_dir = banks.join(&cfg.old_publisher);
        let new_bank_dir = banks.join(&cfg.new_publisher);
        Self {
            path,
            battle_net_id,
            handle,
            display_name: None,
            old_bank_dir,
            new_bank_dir,
        }
    }

    /// True if at least one known bank file exists in the old location.
    pub fn has_old_banks(&self) -> bool {
        !self.migratable_files().is_empty()
    }

    /// Known bank files present in the old-publisher folder.
    pub fn migratable_files(&self) -> Vec<&'static str> {
        files_present(&self.old_bank_dir)
    }

    /// Known bank files already present in the new-publisher folder.
    pub fn existing_target_files(&self) -> Vec<&'static str> {
        files_present(&self.new_bank_dir)
    }
}

fn files_present(dir: &Path) -> Vec<&'static str> {
    if !dir.is_dir() {
        return Vec::new();
    }
    BANK_FILES
        .iter()
        .copied()
        .filter(|f| dir.join(f).is_file())
        .collect()
}

/// Scan `<sc2_root>/Accounts` for accounts with migratable saves.
///
/// Walks exactly two levels (battle-net id folder, then handle folder) and
/// filters by the region handle prefix. Returns accounts sorted by handle so
/// the listing is stable between runs.
pub fn scan_accounts(cfg: &Config) -> Result<Vec<Account>> {
    let accounts_dir = cfg.accounts_dir();
    fs::read_dir(&accounts_dir)
        .with_context(|| format!("read Accounts folder '{}'", accounts_dir.display()))?;

    let mut found = Vec::new();
    for entry in WalkDir::new(&accounts_dir)
        .min_depth(2)
        .max_depth(2)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
    {
        let handle = entry.file_name().to_string_lossy().into_owned();
        if !handle.starts_with(&cfg.handle_prefix) {
            continue;
        }
        let battle_net_id = entry
            .path()
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut account = Account::new(entry.into_path(), battle_net_id, handle, cfg);
        if !account.has_old_banks() {
            debug!(handle = %account.handle, "Skipping account without old-location banks");
            continue;
        }
        account.display_name = display_name_from_shortcuts(&cfg.sc2_root, &account.handle);
        found.push(account);
    }

    found.sort_by(|a, b| a.handle.cmp(&b.handle));
    Ok(found)
}

/// Look for a `.lnk` shortcut in the SC2 root whose target mentions `handle`;
/// the shortcut's stem is the character's display name.
///
/// Shortcut targets are embedded in the binary `.lnk` payload; rather than
/// parsing the full shell-link format we search for the handle as ASCII and
/// as UTF-16LE, which covers the path strings the game writes. Best-effort:
/// unreadable shortcuts are skipped.
fn display_name_from_shortcuts(sc2_root: &Path, handle: &str) -> Option<String> {
    let entries = match fs::read_dir(sc2_root) {
        Ok(e) => e,
        Err(e) => {
            warn!("Cannot list shortcuts in {}: {}", sc2_root.display(), e);
            return None;
        }
    };

    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("lnk") || !path.is_file() {
            continue;
        }
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(_) => continue,
        };
        if bytes_contain_handle(&bytes, handle) {
            return path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned());
        }
    }
    None
}

fn bytes_contain_handle(bytes: &[u8], handle: &str) -> bool {
    if contains_subslice(bytes, handle.as_bytes()) {
        return true;
    }
    let utf16: Vec<u8> = handle
        .encode_utf16()
        .flat_map(|u| u.to_le_bytes())
        .collect();
    contains_subslice(bytes, &utf16)
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}

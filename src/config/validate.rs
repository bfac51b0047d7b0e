//! Config validation logic.
//! Verifies the SC2 root layout, publisher identifiers, and readability
//! before any scanning or migration starts.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

use super::types::Config;

impl Config {
    /// Validate the SC2 root and publisher settings.
    pub fn validate(&self) -> Result<()> {
        // 1) SC2 root: must exist, be a directory, and be readable.
        ensure_dir_exists_and_is_dir(&self.sc2_root, "sc2_root")?;
        ensure_readable(&self.sc2_root, "sc2_root")?;

        // 2) Accounts folder: must exist (the game creates it on first login).
        let accounts = self.accounts_dir();
        if !accounts.is_dir() {
            error!("Accounts folder not found: {}", accounts.display());
            bail!(
                "Accounts folder not found under '{}'; is this really the StarCraft II documents folder?",
                self.sc2_root.display()
            );
        }

        // 3) Publisher identifiers: non-empty and distinct. Equal identifiers
        //    would relocate files onto themselves.
        if self.old_publisher.trim().is_empty() || self.new_publisher.trim().is_empty() {
            bail!("old_publisher and new_publisher must not be empty");
        }
        if self.old_publisher == self.new_publisher {
            bail!(
                "old_publisher and new_publisher are both '{}'; nothing to migrate",
                self.old_publisher
            );
        }

        info!(
            "Config validated: sc2_root='{}' old='{}' new='{}'",
            self.sc2_root.display(),
            self.old_publisher,
            self.new_publisher
        );
        Ok(())
    }
}

/// Ensure path exists and is a directory; emit clear errors with path context.
fn ensure_dir_exists_and_is_dir(path: &Path, name: &str) -> Result<()> {
    if !path.exists() {
        error!("{name} does not exist: {}", path.display());
        bail!("{name} does not exist: {}", path.display());
    }
    if !path.is_dir() {
        error!("{name} is not a directory: {}", path.display());
        bail!("{name} is not a directory: {}", path.display());
    }
    Ok(())
}

/// Ensure directory is readable by attempting to open its entries.
fn ensure_readable(path: &Path, name: &str) -> Result<()> {
    fs::read_dir(path).with_context(|| {
        format!(
            "Cannot read {name} directory '{}'; check permissions",
            path.display()
        )
    })?;
    debug!("{name} readable: {}", path.display());
    Ok(())
}

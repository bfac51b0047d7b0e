//! Atomic rename helper.
//! - Performs a rename with context-rich errors.
//! - On Unix, best-effort fsync of the destination directory after rename.
//!
//! Unlike a general-purpose mover this never removes an existing destination:
//! callers must have cleared the path first (by renaming it to a backup slot),
//! so a collision here is a bug and should surface as an error.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn try_atomic_move(src: &Path, dst: &Path) -> Result<()> {
    // Perform the atomic rename.
    fs::rename(src, dst)
        .with_context(|| format!("atomic rename '{}' -> '{}'", src.display(), dst.display()))?;

    // Unix: fsync the destination directory to persist the rename (best-effort).
    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // Ignore fsync errors to avoid turning a successful rename into a failure.
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}

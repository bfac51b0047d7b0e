//! Backup-slot naming.
//!
//! A conflicting destination file is preserved by renaming it to
//! the first `<name>.bakN` suffix not already taken, starting at `.bak1`.
//! The probe is strictly sequential so slots are deterministic and no
//! existing backup is ever reused.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::errors::BankMoveError;

/// Upper bound on the sequential probe. Generous enough that hitting it means
/// something is wrong with the directory, not that a user migrated this often.
pub const BACKUP_PROBE_LIMIT: u32 = 100_000;

/// Return the first free `.bakN` path next to `dest`.
///
/// Only inspects the filesystem; the caller performs the rename and should
/// treat a rename failure (e.g. a race) as its own error.
pub fn next_backup_path(dest: &Path) -> Result<PathBuf, BankMoveError> {
    let name = dest
        .file_name()
        .ok_or_else(|| BankMoveError::DestinationUnavailable(dest.to_path_buf()))?;

    let mut collisions = 0u32;
    for n in 1..=BACKUP_PROBE_LIMIT {
        let mut candidate = OsString::from(name);
        candidate.push(format!(".bak{n}"));
        let path = dest.with_file_name(&candidate);
        if !path.exists() {
            return Ok(path);
        }
        collisions += 1;
        if collisions == 3 {
            trace!(file = %dest.display(), "multiple backup slots taken, continuing probe");
        }
    }

    Err(BankMoveError::BackupExhausted {
        path: dest.to_path_buf(),
        probed: BACKUP_PROBE_LIMIT,
    })
}

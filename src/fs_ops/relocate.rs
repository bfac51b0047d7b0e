//! The Safe Relocator.
//!
//! Given a source bank file and a destination directory, places the file at
//! `dest_dir/file_name`. A conflicting destination file is first renamed to
//! the next free `.bakN` slot, so nothing pre-existing is ever deleted or
//! overwritten. Placement is copy-to-temp + fsync + rename; the source is
//! removed only after the destination rename succeeded (and only when
//! `keep_source` is false), so an interrupted run never loses the save.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::BankMoveError;

use super::backup::next_backup_path;
use super::copy::safe_copy_and_rename;
use super::helpers::io_error_with_help;

/// What a relocation did, for reporting and tests.
#[derive(Debug, Clone)]
pub struct RelocateOutcome {
    /// Final path of the relocated bank file.
    pub dest: PathBuf,
    /// Backup slot the previous destination file was renamed to, if any.
    pub backup: Option<PathBuf>,
}

/// Relocate `source` into `dest_dir` under `file_name`.
///
/// The caller is responsible for creating `dest_dir`; a missing directory is
/// reported as `DestinationUnavailable` rather than silently created.
pub fn relocate(
    source: &Path,
    dest_dir: &Path,
    file_name: &str,
    keep_source: bool,
) -> Result<RelocateOutcome> {
    if !source.is_file() {
        return Err(BankMoveError::SourceMissing(source.to_path_buf()).into());
    }
    if !dest_dir.is_dir() {
        return Err(BankMoveError::DestinationUnavailable(dest_dir.to_path_buf()).into());
    }

    let dest = dest_dir.join(file_name);

    // Preserve any conflicting destination file in a numbered backup slot
    // before the new file becomes visible under its name.
    let backup = if dest.exists() {
        let slot = next_backup_path(&dest)?;
        fs::rename(&dest, &slot).map_err(classify_io("rename existing bank to backup", &dest))?;
        debug!(from = %dest.display(), to = %slot.display(), "Backed up existing bank");
        Some(slot)
    } else {
        None
    };

    safe_copy_and_rename(source, &dest)?;

    if !keep_source {
        fs::remove_file(source).map_err(classify_io("remove source after move", source))?;
    }

    info!(
        source = %source.display(),
        dest = %dest.display(),
        backup = backup.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "<none>".into()),
        "Relocated bank file"
    );

    Ok(RelocateOutcome { dest, backup })
}

/// Map a denied access to the typed error; everything else gets the enriched
/// io message.
fn classify_io<'a>(op: &'a str, path: &'a Path) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| {
        if e.kind() == io::ErrorKind::PermissionDenied {
            BankMoveError::PermissionDenied {
                path: path.to_path_buf(),
                context: op.to_string(),
            }
            .into()
        } else {
            io_error_with_help(op, path)(e)
        }
    }
}

//! Typed error definitions for sc2_bank_move.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankMoveError {
    #[error("Source bank file not found: {0}")]
    SourceMissing(PathBuf),

    #[error("Permission denied on {path}: {context}")]
    PermissionDenied { path: PathBuf, context: String },

    #[error("Destination directory unavailable: {0}")]
    DestinationUnavailable(PathBuf),

    #[error("No free backup slot for {path} after {probed} probes")]
    BackupExhausted { path: PathBuf, probed: u32 },
}

impl BankMoveError {
    /// Stable machine-readable code for structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            BankMoveError::SourceMissing(_) => "source_missing",
            BankMoveError::PermissionDenied { .. } => "permission_denied",
            BankMoveError::DestinationUnavailable(_) => "destination_unavailable",
            BankMoveError::BackupExhausted { .. } => "backup_exhausted",
        }
    }
}

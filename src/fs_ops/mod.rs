//! Filesystem operations: modularized.

mod atomic;
mod backup;
mod copy;
mod helpers;
mod relocate;
mod util;

pub use backup::{next_backup_path, BACKUP_PROBE_LIMIT};
pub use copy::safe_copy_and_rename;
pub use helpers::io_error_with_help;
pub use relocate::{relocate, RelocateOutcome};

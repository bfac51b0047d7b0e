//! Migration planning.
//!
//! The planner is a pure function from observed save-file presence to a list
//! of relocation steps; nothing here touches the filesystem (the convenience
//! constructor on `MigrationPlan` gathers presence from an `Account` first).
//! This keeps the only decision logic testable without a console or a disk
//! layout.

use std::path::{Path, PathBuf};

use crate::accounts::Account;

/// One file to relocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStep {
    /// Canonical bank filename (exact contract with the game client)
    pub bank_file: &'static str,
    /// Full path of the old-location file
    pub source: PathBuf,
    /// New-publisher directory the file goes into
    pub dest_dir: PathBuf,
    /// True when the target name already exists and will be backed up
    pub needs_backup: bool,
}

/// Everything to do for one account.
#[derive(Debug, Clone)]
pub struct MigrationPlan {
    pub handle: String,
    pub steps: Vec<FileStep>,
}

impl MigrationPlan {
    /// Gather presence from disk and build the plan for `account`.
    pub fn for_account(account: &Account) -> Self {
        plan_account(
            &account.handle,
            &account.old_bank_dir,
            &account.new_bank_dir,
            &account.migratable_files(),
            &account.existing_target_files(),
        )
    }

    /// Number of steps whose target will be preserved in a backup slot.
    pub fn backup_count(&self) -> usize {
        self.steps.iter().filter(|s| s.needs_backup).count()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Pure planner: given which bank files exist on each side, produce the steps.
pub fn plan_account(
    handle: &str,
    old_dir: &Path,
    new_dir: &Path,
    present_old: &[&'static str],
    present_new: &[&'static str],
) -> MigrationPlan {
    let steps = present_old
        .iter()
        .map(|&bank_file| FileStep {
            bank_file,
            source: old_dir.join(bank_file),
            dest_dir: new_dir.to_path_buf(),
            needs_backup: present_new.contains(&bank_file),
        })
        .collect();

    MigrationPlan {
        handle: handle.to_string(),
        steps,
    }
}

//! Plan execution.
//!
//! Runs a `MigrationPlan` through the Safe Relocator, one file at a time.
//! A failing step is recorded and skipped rather than aborting the run;
//! filesystem conflicts here are repeat-run artifacts, not transient faults,
//! so there are no retries.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::Config;
use crate::fs_ops::relocate;
use crate::plan::MigrationPlan;
use crate::shutdown;

/// What happened for each step of a plan.
#[derive(Debug, Default)]
pub struct MigrationReport {
    /// Successfully relocated files (final destination paths)
    pub migrated: Vec<PathBuf>,
    /// Backup slots created for pre-existing targets
    pub backups: Vec<PathBuf>,
    /// Failed steps: (bank filename, the error itself, so callers can
    /// downcast to `BankMoveError` for its stable code)
    pub failures: Vec<(&'static str, anyhow::Error)>,
    /// Steps skipped because a shutdown was requested
    pub interrupted: usize,
}

impl MigrationReport {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty() && self.interrupted == 0
    }
}

/// Execute `plan`: ensure the new-publisher directory exists, then relocate
/// each file, continuing past per-file failures.
pub fn execute_plan(cfg: &Config, plan: &MigrationPlan) -> Result<MigrationReport> {
    let mut report = MigrationReport::default();
    if plan.is_empty() {
        return Ok(report);
    }

    // All steps of one account share a destination directory.
    let dest_dir = &plan.steps[0].dest_dir;
    if cfg.dry_run {
        info!(action = "mkdir -p", path = %dest_dir.display(), "dry-run");
    } else {
        fs::create_dir_all(dest_dir).with_context(|| {
            format!("create new-publisher directory '{}'", dest_dir.display())
        })?;
    }

    for step in &plan.steps {
        if shutdown::is_requested() {
            report.interrupted = plan.steps.len() - report.migrated.len() - report.failures.len();
            warn!(remaining = report.interrupted, "Shutdown requested; stopping migration");
            break;
        }

        if cfg.dry_run {
            info!(
                file = step.bank_file,
                source = %step.source.display(),
                dest = %step.dest_dir.display(),
                needs_backup = step.needs_backup,
                "dry-run: would relocate"
            );
            report.migrated.push(step.dest_dir.join(step.bank_file));
            continue;
        }

        match relocate(&step.source, &step.dest_dir, step.bank_file, cfg.keep_source) {
            Ok(outcome) => {
                if let Some(backup) = outcome.backup {
                    report.backups.push(backup);
                }
                report.migrated.push(outcome.dest);
            }
            Err(e) => {
                warn!(file = step.bank_file, error = %format!("{e:#}"), "Relocation failed; continuing");
                report.failures.push((step.bank_file, e));
            }
        }
    }

    info!(
        handle = %plan.handle,
        migrated = report.migrated.len(),
        backups = report.backups.len(),
        failures = report.failures.len(),
        "Migration finished"
    );
    Ok(report)
}

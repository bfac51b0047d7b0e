//! Core library for `sc2_bank_move`.
//!
//! Relocates StarCraft II map bank saves from the old publisher folder to the
//! new one after the maps were republished under a new identifier. Any
//! conflicting destination file is renamed to a numbered `.bakN` slot first,
//! so the tool never silently overwrites existing data.
//!
//! Keep the library small and ergonomic: a Config type with sensible
//! defaults, a pure planner, and the Safe Relocator that performs the actual
//! filesystem work.

pub mod accounts;
pub mod banks;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod migrate;
pub mod output;
pub mod plan;
pub mod shutdown;

pub use accounts::{scan_accounts, Account};
pub use config::{default_config_path, default_log_path, Config, LogLevel};
pub use errors::BankMoveError;
pub use fs_ops::{relocate, RelocateOutcome};
pub use migrate::{execute_plan, MigrationReport};
pub use plan::{plan_account, FileStep, MigrationPlan};

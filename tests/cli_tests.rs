use clap::Parser;
use sc2_bank_move::cli::Args;
use sc2_bank_move::{Config, LogLevel};
use std::path::PathBuf;

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["sc2_bank_move", "--debug", "--log-level", "quiet"]);
    let lvl = args.effective_log_level().unwrap();
    assert_eq!(lvl, LogLevel::Debug); // --debug wins

    let args = Args::parse_from(["sc2_bank_move", "--log-level", "info"]);
    let lvl = args.effective_log_level().unwrap();
    assert_eq!(lvl, LogLevel::Info);
}

#[test]
fn apply_overrides_sets_fields() {
    let args = Args::parse_from([
        "sc2_bank_move",
        "--sc2-root",
        "/sc2",
        "--old-publisher",
        "5-S2-1-1",
        "--new-publisher",
        "5-S2-1-2",
        "--log-level",
        "info",
        "--dry-run",
        "--keep-source",
        "--yes",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.sc2_root, PathBuf::from("/sc2"));
    assert_eq!(cfg.old_publisher, "5-S2-1-1");
    assert_eq!(cfg.new_publisher, "5-S2-1-2");
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert!(cfg.dry_run);
    assert!(cfg.keep_source);
    assert!(cfg.assume_yes);
}

#[test]
fn unset_flags_leave_config_alone() {
    let args = Args::parse_from(["sc2_bank_move"]);
    let mut cfg = Config::default();
    let before = cfg.clone();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.old_publisher, before.old_publisher);
    assert_eq!(cfg.new_publisher, before.new_publisher);
    assert_eq!(cfg.log_level, before.log_level);
    assert!(!cfg.dry_run);
}

#[test]
fn positional_handle_is_captured() {
    let args = Args::parse_from(["sc2_bank_move", "5-S2-1-654321"]);
    assert_eq!(args.handle.as_deref(), Some("5-S2-1-654321"));
}

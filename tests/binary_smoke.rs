//! Smoke tests driving the compiled binary.
//! SC2_BANK_MOVE_CONFIG always points at a file inside the test's tempdir so
//! runs never touch (or create) the user's real config.

use assert_cmd::cargo::cargo_bin;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn run(cfg_path: &Path, args: &[&str]) -> std::process::Output {
    let me = cargo_bin("sc2_bank_move");
    Command::new(me)
        .env("SC2_BANK_MOVE_CONFIG", cfg_path)
        .args(args)
        .output()
        .expect("spawn binary")
}

#[test]
fn help_mentions_publisher_flags() {
    let me = cargo_bin("sc2_bank_move");
    let out = Command::new(me).arg("--help").output().expect("spawn binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--old-publisher"));
    assert!(stdout.contains("--new-publisher"));
}

#[test]
fn print_config_reports_env_override() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config></config>").unwrap();

    let out = run(&cfg_path, &["--print-config"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("SC2_BANK_MOVE_CONFIG"));
}

#[test]
fn list_shows_seeded_account() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).expect("canonicalize tempdir");
    let cfg_path = base.join("config.xml");
    fs::write(&cfg_path, "<config></config>").unwrap();

    let root = base.join("SC2");
    let bank_dir = root
        .join("Accounts")
        .join("1001")
        .join("5-S2-1-111")
        .join("Banks")
        .join("5-S2-1-11831282");
    fs::create_dir_all(&bank_dir).unwrap();
    fs::write(bank_dir.join("CDRPG.SC2Bank"), "save").unwrap();

    let root_s = root.display().to_string();
    let out = run(
        &cfg_path,
        &["--sc2-root", &root_s, "--list", "--log-level", "quiet"],
    );
    eprintln!("=== STDOUT ===\n{}", String::from_utf8_lossy(&out.stdout));
    eprintln!("=== STDERR ===\n{}", String::from_utf8_lossy(&out.stderr));
    assert!(out.status.success(), "binary exited with failure");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("5-S2-1-111"));
    assert!(stdout.contains("Migratable saves: 1"));
}

#[test]
fn missing_accounts_folder_fails() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config></config>").unwrap();

    let root = td.path().join("SC2");
    fs::create_dir_all(&root).unwrap();

    let root_s = root.display().to_string();
    let out = run(
        &cfg_path,
        &["--sc2-root", &root_s, "--list", "--log-level", "quiet"],
    );
    assert!(!out.status.success(), "should fail without Accounts folder");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Accounts"));
}

#[test]
fn migrate_with_yes_flag_runs_end_to_end() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).expect("canonicalize tempdir");
    let cfg_path = base.join("config.xml");
    fs::write(&cfg_path, "<config></config>").unwrap();

    let root = base.join("SC2");
    let account = root.join("Accounts").join("1001").join("5-S2-1-222");
    let old_dir = account.join("Banks").join("5-S2-1-11831282");
    fs::create_dir_all(&old_dir).unwrap();
    fs::write(old_dir.join("HSF.SC2Bank"), "my save").unwrap();

    let root_s = root.display().to_string();
    let out = run(
        &cfg_path,
        &[
            "--sc2-root",
            &root_s,
            "5-S2-1-222",
            "--yes",
            "--log-level",
            "quiet",
        ],
    );
    eprintln!("=== STDOUT ===\n{}", String::from_utf8_lossy(&out.stdout));
    eprintln!("=== STDERR ===\n{}", String::from_utf8_lossy(&out.stderr));
    assert!(out.status.success(), "binary exited with failure");

    let migrated = account
        .join("Banks")
        .join("5-S2-1-10786818")
        .join("HSF.SC2Bank");
    assert!(migrated.is_file(), "expected migrated bank at {}", migrated.display());
    assert!(!old_dir.join("HSF.SC2Bank").exists(), "source should be moved away");
}

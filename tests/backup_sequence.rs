//! The backup-slot invariants: deterministic `.bakN` naming, no overwrites,
//! no data loss across repeated migrations of the same file.

use sc2_bank_move::relocate;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(p: &Path, content: &str) {
    fs::write(p, content).unwrap();
}

#[test]
fn conflicting_destination_moves_to_bak1() {
    let td = tempdir().unwrap();
    let new = td.path().join("new");
    fs::create_dir_all(&new).unwrap();
    write(&new.join("CDRPG.SC2Bank"), "A");

    let src = td.path().join("CDRPG.SC2Bank");
    write(&src, "B");

    let out = relocate(&src, &new, "CDRPG.SC2Bank", false).expect("relocate");

    assert_eq!(out.backup.as_deref(), Some(new.join("CDRPG.SC2Bank.bak1").as_path()));
    assert_eq!(fs::read_to_string(new.join("CDRPG.SC2Bank")).unwrap(), "B");
    assert_eq!(fs::read_to_string(new.join("CDRPG.SC2Bank.bak1")).unwrap(), "A");
}

/// Two migrations in a row produce .bak1 then .bak2; .bak1 is untouched by
/// the second run.
#[test]
fn repeated_migration_appends_slots() {
    let td = tempdir().unwrap();
    let new = td.path().join("new");
    fs::create_dir_all(&new).unwrap();
    write(&new.join("CDRPG.SC2Bank"), "A");

    let src = td.path().join("CDRPG.SC2Bank");
    write(&src, "B");
    relocate(&src, &new, "CDRPG.SC2Bank", false).expect("first relocate");

    write(&src, "C");
    relocate(&src, &new, "CDRPG.SC2Bank", false).expect("second relocate");

    assert_eq!(fs::read_to_string(new.join("CDRPG.SC2Bank")).unwrap(), "C");
    assert_eq!(fs::read_to_string(new.join("CDRPG.SC2Bank.bak1")).unwrap(), "A");
    assert_eq!(fs::read_to_string(new.join("CDRPG.SC2Bank.bak2")).unwrap(), "B");
}

/// With k pre-existing backups the next one is .bak(k+1) and the old ones
/// stay byte-identical.
#[test]
fn existing_backups_are_never_touched() {
    let td = tempdir().unwrap();
    let new = td.path().join("new");
    fs::create_dir_all(&new).unwrap();
    write(&new.join("HSF.SC2Bank"), "current");
    write(&new.join("HSF.SC2Bank.bak1"), "oldest");
    write(&new.join("HSF.SC2Bank.bak2"), "older");

    let src = td.path().join("HSF.SC2Bank");
    write(&src, "fresh");

    relocate(&src, &new, "HSF.SC2Bank", false).expect("relocate");

    assert_eq!(fs::read_to_string(new.join("HSF.SC2Bank")).unwrap(), "fresh");
    assert_eq!(fs::read_to_string(new.join("HSF.SC2Bank.bak1")).unwrap(), "oldest");
    assert_eq!(fs::read_to_string(new.join("HSF.SC2Bank.bak2")).unwrap(), "older");
    assert_eq!(fs::read_to_string(new.join("HSF.SC2Bank.bak3")).unwrap(), "current");
}

/// File-count accounting: after a conflicting relocation the destination has
/// exactly one more file than before, plus the relocated one.
#[test]
fn no_file_is_lost() {
    let td = tempdir().unwrap();
    let new = td.path().join("new");
    fs::create_dir_all(&new).unwrap();
    write(&new.join("NeoStarBank.SC2Bank"), "v1");
    write(&new.join("NeoStarBank.SC2Bank.bak1"), "v0");
    let before = fs::read_dir(&new).unwrap().count();

    let src = td.path().join("NeoStarBank.SC2Bank");
    write(&src, "v2");
    relocate(&src, &new, "NeoStarBank.SC2Bank", false).expect("relocate");

    let after = fs::read_dir(&new).unwrap().count();
    assert_eq!(after, before + 1);
}

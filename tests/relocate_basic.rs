use assert_fs::prelude::*;
use sc2_bank_move::relocate;
use std::fs;

/// Destination absent: the file lands there byte-for-byte and no backup
/// slot is created.
#[test]
fn relocate_into_empty_destination() {
    let temp = assert_fs::TempDir::new().unwrap();
    let old = temp.child("old");
    let new = temp.child("new");
    old.create_dir_all().unwrap();
    new.create_dir_all().unwrap();

    let src = old.child("CDRPG.SC2Bank");
    src.write_str("A").unwrap();

    let out = relocate(src.path(), new.path(), "CDRPG.SC2Bank", false).expect("relocate");

    assert_eq!(out.dest, new.path().join("CDRPG.SC2Bank"));
    assert!(out.backup.is_none());
    assert_eq!(fs::read_to_string(&out.dest).unwrap(), "A");
    // Move semantics: the source is gone once the destination is in place.
    assert!(!src.path().exists());
    // Exactly one file at the destination.
    assert_eq!(fs::read_dir(new.path()).unwrap().count(), 1);
}

#[test]
fn relocate_with_keep_source_copies() {
    let temp = assert_fs::TempDir::new().unwrap();
    let old = temp.child("old");
    let new = temp.child("new");
    old.create_dir_all().unwrap();
    new.create_dir_all().unwrap();

    let src = old.child("HSF.SC2Bank");
    src.write_str("save data").unwrap();

    let out = relocate(src.path(), new.path(), "HSF.SC2Bank", true).expect("relocate");

    assert_eq!(fs::read_to_string(&out.dest).unwrap(), "save data");
    assert_eq!(fs::read_to_string(src.path()).unwrap(), "save data");
}

/// No transient temp files are left at the destination after a relocation.
#[test]
fn relocate_leaves_no_temp_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let new = temp.child("new");
    new.create_dir_all().unwrap();
    let src = temp.child("PBRPG.SC2Bank");
    src.write_str("x").unwrap();

    relocate(src.path(), new.path(), "PBRPG.SC2Bank", false).expect("relocate");

    for entry in fs::read_dir(new.path()).unwrap() {
        let name = entry.unwrap().file_name();
        let name = name.to_string_lossy().into_owned();
        assert!(!name.ends_with(".tmp"), "temp file left behind: {name}");
    }
}

use sc2_bank_move::config::xml::{load_config_from_xml, load_config_from_xml_path, CONFIG_ENV};
use sc2_bank_move::LogLevel;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn reads_publishers_and_root() {
    let td = tempdir().unwrap();
    let p = td.path().join("config.xml");
    fs::write(
        &p,
        r#"<config>
  <sc2_root>/home/player/Documents/StarCraft II</sc2_root>
  <old_publisher>5-S2-1-11831282</old_publisher>
  <new_publisher>5-S2-1-10786818</new_publisher>
  <handle_prefix>5-S2-1</handle_prefix>
  <log_level>info</log_level>
</config>
"#,
    )
    .unwrap();

    let cfg = load_config_from_xml_path(&p).unwrap();
    assert_eq!(
        cfg.sc2_root,
        PathBuf::from("/home/player/Documents/StarCraft II")
    );
    assert_eq!(cfg.old_publisher, "5-S2-1-11831282");
    assert_eq!(cfg.new_publisher, "5-S2-1-10786818");
    assert_eq!(cfg.handle_prefix, "5-S2-1");
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert!(!cfg.keep_source);
}

#[test]
fn malformed_xml_is_an_error() {
    let td = tempdir().unwrap();
    let p = td.path().join("config.xml");
    fs::write(&p, "<config><old_publisher>unterminated").unwrap();
    assert!(load_config_from_xml_path(&p).is_err());
}

#[test]
#[serial]
fn env_override_selects_the_file() {
    let td = tempdir().unwrap();
    let p = td.path().join("custom.xml");
    fs::write(
        &p,
        "<config><old_publisher>env-old</old_publisher></config>",
    )
    .unwrap();

    unsafe { std::env::set_var(CONFIG_ENV, &p) };
    let cfg = load_config_from_xml().expect("config should load via env");
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(cfg.old_publisher, "env-old");
}

#[test]
#[serial]
fn env_pointing_at_missing_file_yields_none() {
    let td = tempdir().unwrap();
    unsafe { std::env::set_var(CONFIG_ENV, td.path().join("absent.xml")) };
    let cfg = load_config_from_xml();
    unsafe { std::env::remove_var(CONFIG_ENV) };
    assert!(cfg.is_none());
}

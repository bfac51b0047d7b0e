//! Safe copy-and-rename helper:
//! - Copies to a temp file in the destination directory
//! - Fsyncs the temp file before it becomes visible under the final name
//! - Atomically renames temp -> dest
//! - Carries the source mtime over to the destination
//!
//! Bank files are small (a few KiB of XML), so a plain buffered stream is
//! plenty; no fast-path syscalls are needed here.

use anyhow::{anyhow, Context, Result};
use filetime::FileTime;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write as _};
use std::path::Path;

use super::atomic::try_atomic_move;
use super::helpers::io_error_with_help;
use super::util;

/// Core: copy src -> temp in dest dir, then atomic rename temp -> dest.
/// Notes:
/// - The temp file is created with `create_new` so we never clobber anything.
/// - The destination's mtime is set to the source's after the rename, matching
///   what the game client sees for an untouched save.
pub fn safe_copy_and_rename(src: &Path, dest: &Path) -> Result<()> {
    let dest_dir = dest
        .parent()
        .ok_or_else(|| anyhow!("destination has no parent: {}", dest.display()))?;

    let src_meta = fs::metadata(src).with_context(|| format!("stat {}", src.display()))?;

    // Allocate a unique temp path within the destination directory.
    let tmp_path = util::unique_temp_path(dest_dir);

    // Stream the copy (fsyncs the temp file internally).
    if let Err(e) = copy_streaming(src, &tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error_with_help("copy to temporary file", &tmp_path)(e));
    }

    // Atomic rename into final destination.
    if let Err(e) = try_atomic_move(&tmp_path, dest) {
        // Best-effort cleanup of the temp file on failure.
        let _ = fs::remove_file(&tmp_path);
        return Err(e).with_context(|| {
            format!(
                "rename temporary file '{}' -> '{}'",
                tmp_path.display(),
                dest.display()
            )
        });
    }

    // Best-effort mtime carry-over; a failure here never undoes the copy.
    let mtime = FileTime::from_last_modification_time(&src_meta);
    let _ = filetime::set_file_mtime(dest, mtime);

    Ok(())
}

/// Copy `src` -> `dst` with buffered I/O, then fsync the destination.
/// `dst` is created with `create_new(true)` so an existing file is never clobbered.
fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    const BUF_SIZE: usize = 64 * 1024;

    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copies_bytes_and_cleans_tmp() {
        let td = tempdir().unwrap();
        let src = td.path().join("src.SC2Bank");
        fs::write(&src, b"<Bank version=\"1\"/>").unwrap();
        let dest_dir = td.path().join("dest");
        fs::create_dir_all(&dest_dir).unwrap();
        let dest = dest_dir.join("src.SC2Bank");

        safe_copy_and_rename(&src, &dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"<Bank version=\"1\"/>");
        // Source untouched by the copy step itself.
        assert!(src.exists());
        for entry in fs::read_dir(&dest_dir).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy().into_owned();
            assert!(
                !(name.starts_with(".sc2_bank_move.") && name.ends_with(".tmp")),
                "tmp file left behind: {name}"
            );
        }
    }

    #[test]
    fn source_mtime_carried_over() {
        let td = tempdir().unwrap();
        let src = td.path().join("a.SC2Bank");
        fs::write(&src, b"data").unwrap();
        let old = FileTime::from_unix_time(1_600_000_000, 0);
        filetime::set_file_mtime(&src, old).unwrap();

        let dest = td.path().join("b.SC2Bank");
        safe_copy_and_rename(&src, &dest).unwrap();

        let got = FileTime::from_last_modification_time(&fs::metadata(&dest).unwrap());
        assert_eq!(got.unix_seconds(), old.unix_seconds());
    }

    #[test]
    fn missing_source_errors() {
        let td = tempdir().unwrap();
        let src = td.path().join("nope.SC2Bank");
        let dest = td.path().join("out.SC2Bank");
        let err = safe_copy_and_rename(&src, &dest).unwrap_err();
        assert!(format!("{err}").contains("stat"));
    }
}

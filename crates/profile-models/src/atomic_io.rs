//! Atomic replacement of generated files.
//!
//! Contents go to a hidden sibling file first and are renamed over the
//! target, so readers never observe a half-written module.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::Utf8Path;
use cap_std::fs::{Dir, OpenOptions};

use crate::typegen_cli::TypegenError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replaces `file_name` inside `dir` with `contents`.
///
/// `display_path` is only used in error messages.
///
/// # Errors
///
/// Returns [`TypegenError::WriteError`] if the temporary file cannot be
/// written, synced, or renamed over the target.
pub(crate) fn write_atomic(
    dir: &Dir,
    file_name: &str,
    display_path: &Utf8Path,
    contents: &str,
) -> Result<(), TypegenError> {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_name = format!(".{file_name}.tmp.{}.{counter}", std::process::id());

    let written = write_new_file(dir, &tmp_name, contents)
        .and_then(|()| replace(dir, &tmp_name, file_name));
    if let Err(err) = written {
        // Leftover temp files are harmless; ignore cleanup failures.
        drop(dir.remove_file(&tmp_name));
        return Err(TypegenError::WriteError {
            path: display_path.to_path_buf(),
            message: err.to_string(),
        });
    }

    // Best-effort directory sync.
    drop(dir.open(".").and_then(|parent| parent.sync_all()));
    Ok(())
}

fn write_new_file(dir: &Dir, name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn replace(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists, so remove it first.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

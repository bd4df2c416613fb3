//! Atomic per-key file replacement.
//!
//! A value is written to a hidden temporary file in the same directory,
//! synced, then renamed over the key's file, so readers observe either the
//! previous value or the new one and never a partial write.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use cap_std::fs::{Dir, OpenOptions};

use crate::domain::ports::KeyValueStoreError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Prefix shared by every temporary file; keys may not start with it.
pub(super) const TEMP_PREFIX: char = '.';

/// Replace the file `name` in `dir` with `contents`.
///
/// `name` must already be a validated single path component.
pub(super) fn write_atomic(dir: &Dir, name: &str, contents: &str) -> Result<(), KeyValueStoreError> {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(
        "{TEMP_PREFIX}{name}.tmp.{}.{suffix}.{counter}",
        std::process::id()
    );

    write_to_temp_file(dir, &tmp_name, contents)
        .map_err(|err| KeyValueStoreError::write(name, err.to_string()))?;
    if let Err(err) = rename_into_place(dir, &tmp_name, name) {
        drop(dir.remove_file(&tmp_name));
        return Err(KeyValueStoreError::write(name, err.to_string()));
    }
    sync_directory(dir);
    Ok(())
}

fn write_to_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;

    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    if let Err(err) = written {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(err);
    }
    Ok(())
}

#[cfg(windows)]
fn rename_into_place(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_into_place(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn sync_directory(dir: &Dir) {
    // Best effort; a failed directory sync does not undo the rename.
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        tracing::debug!("data directory sync skipped");
    }
}

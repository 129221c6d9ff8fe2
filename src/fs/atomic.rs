//! Atomic file writes.
//!
//! Content is written to a hidden temporary sibling (`.{filename}.tmp`),
//! synced, and renamed over the target, so a reader never observes a partially
//! written `prompt_used.txt`. On crash the temporary file may remain.

use crate::error::{LaunchError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, replacing any previous content.
///
/// The parent directory must already exist.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let temp_path = generate_temp_path(path)?;

    write_and_sync(&temp_path, content.as_bytes())?;
    replace(&temp_path, path)
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            LaunchError::UserError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| LaunchError::io("create", path, e))?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(LaunchError::io("write", path, e));
    }

    Ok(())
}

/// Rename `source` over `target`.
///
/// On Windows `rename` fails when the target exists, so the old file is
/// removed first; that window is not atomic.
fn replace(source: &Path, target: &Path) -> Result<()> {
    remove_existing_target(target);

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        LaunchError::io("replace", target, e)
    })
}

#[cfg(windows)]
fn remove_existing_target(target: &Path) {
    if target.exists() {
        let _ = fs::remove_file(target);
    }
}

#[cfg(not(windows))]
fn remove_existing_target(_target: &Path) {}

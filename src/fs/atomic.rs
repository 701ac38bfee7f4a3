//! Atomic file replacement.
//!
//! Content is written to a temporary file in the target's directory, fsynced,
//! then renamed over the target. Readers see either the previous file or the
//! complete new one, never a partial write.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Atomically replace `path` with `content`, creating the parent directory
/// when it does not exist.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;

    // The temp file is removed on drop if persist fails, leaving the target
    // untouched.
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

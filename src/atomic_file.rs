//! Locked, atomic file writes shared by the config and report stores

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

#[derive(Debug, thiserror::Error)]
pub enum AtomicWriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `content` to `path` under an exclusive lock.
///
/// The lock lives in `<path>.<lock_ext>` and the data goes to
/// `<path>.<tmp_ext>` first, then is renamed over `path`. Missing parent
/// directories are created. The lock is released when this returns.
pub fn write_locked(
    path: &Path,
    content: &[u8],
    lock_ext: &str,
    tmp_ext: &str,
) -> Result<(), AtomicWriteError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let lock_path = path.with_extension(lock_ext);
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)?;
    lock_file
        .lock_exclusive()
        .map_err(|source| AtomicWriteError::Lock {
            path: lock_path.clone(),
            source,
        })?;

    let temp_path = path.with_extension(tmp_ext);
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp_file.write_all(content)?;
    temp_file.sync_all()?;

    std::fs::rename(&temp_path, path)?;
    Ok(())
}

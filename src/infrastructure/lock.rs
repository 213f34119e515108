//! Exclusive lock around composition edits
//!
//! Editing a single composition rewrites the whole mapping, so two editors
//! racing through load/modify/save would silently drop one another's
//! changes. Holding a [`StoreLock`] for the whole cycle serialises them.
//!
//! The lock is an OS-level advisory lock on a side file next to the store.
//! It blocks until available and is released when the guard is dropped.

use crate::error::{Result, TagcomboError};
use fs2::FileExt;
use log::{debug, warn};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Held exclusive lock on the composition store
#[derive(Debug)]
pub struct StoreLock {
    path: PathBuf,
    file: File,
}

impl StoreLock {
    /// Block until the lock at `path` is held
    pub fn acquire(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)
            .map_err(|e| {
                TagcomboError::Lock(format!("cannot open {}: {}", path.display(), e))
            })?;

        file.lock_exclusive()
            .map_err(|e| TagcomboError::Lock(format!("{}: {}", path.display(), e)))?;
        debug!("acquired store lock {}", path.display());

        Ok(StoreLock {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Try once without blocking; `None` if another holder has it
    pub fn try_acquire(path: &Path) -> Result<Option<Self>> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)
            .map_err(|e| {
                TagcomboError::Lock(format!("cannot open {}: {}", path.display(), e))
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Some(StoreLock {
                path: path.to_path_buf(),
                file,
            })),
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => Ok(None),
            Err(e) => Err(TagcomboError::Lock(format!("{}: {}", path.display(), e))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            warn!("failed to release store lock {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_acquire_creates_lock_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/store.lock");

        let lock = StoreLock::acquire(&path).unwrap();
        assert!(path.exists());
        assert_eq!(lock.path(), path.as_path());
    }

    #[test]
    fn test_second_holder_is_refused_until_drop() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.lock");

        let first = StoreLock::acquire(&path).unwrap();
        assert!(StoreLock::try_acquire(&path).unwrap().is_none());

        drop(first);
        assert!(StoreLock::try_acquire(&path).unwrap().is_some());
    }

    #[test]
    fn test_try_acquire_reports_open_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing/store.lock");

        let err = StoreLock::try_acquire(&path).unwrap_err();
        assert!(matches!(err, TagcomboError::Lock(_)));
        assert_eq!(err.exit_code(), 3);
    }
}

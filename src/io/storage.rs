use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::NamedTempFile;

/// The single entry name the whole app state lives under.
pub const STORAGE_KEY: &str = "daylist.app-state";

/// Error type for the durable key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
    #[error("storage rejected the write: {0}")]
    Rejected(String),
}

/// A string-valued durable store holding one entry under `STORAGE_KEY`.
///
/// Read failures other than "nothing stored yet" surface as errors; write
/// failures always surface (a quota-style failure must reach the caller,
/// never be swallowed).
pub trait Storage {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&mut self, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage: one JSON file named after the storage key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: &Path) -> Self {
        FileStorage {
            path: dir.join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    // Write to a temp file in the same directory and persist over the
    // target, so a crash mid-write never leaves a truncated entry.
    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };
        let dir = self.path.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(dir).map_err(write_err)?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(value.as_bytes()).map_err(write_err)?;
        tmp.flush().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    value: Option<String>,
    fail_writes: bool,
}

/// In-memory storage with a shared handle, so a test (or embedder) can
/// inspect what the store persisted and inject write failures. Clones share
/// the same entry.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load the raw stored string, bypassing the save path.
    pub fn seed_raw(&self, value: &str) {
        self.inner.borrow_mut().value = Some(value.to_string());
    }

    /// The currently stored string, if any.
    pub fn contents(&self) -> Option<String> {
        self.inner.borrow().value.clone()
    }

    /// Make every subsequent write fail, simulating quota exhaustion.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.inner.borrow().value.clone())
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StorageError::Rejected("quota exceeded".into()));
        }
        inner.value = Some(value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());
        assert!(storage.read().unwrap().is_none());

        storage.write("{\"a\":1}").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("{\"a\":1}"));

        storage.write("{}").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn file_storage_creates_missing_dir() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(&dir.path().join("nested/data"));
        storage.write("x").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn memory_storage_shares_entry_across_clones() {
        let storage = MemoryStorage::new();
        let mut writer = storage.clone();
        writer.write("hello").unwrap();
        assert_eq!(storage.contents().as_deref(), Some("hello"));
    }

    #[test]
    fn memory_storage_write_failure() {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        let err = storage.write("x").unwrap_err();
        assert!(matches!(err, StorageError::Rejected(_)));
        assert!(storage.contents().is_none());
    }
}

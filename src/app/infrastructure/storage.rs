//! Key-value storage backends.
//!
//! Every store in the crate persists through [`StorageAdapter`]. Failures in a
//! backend are logged and reported as `None`/`false`; they never propagate.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::error::{AppError, Result};

/// Flat string key-value store.
pub trait StorageAdapter {
    /// Read a value, `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Returns `false` when the backend rejected the write.
    fn set(&mut self, key: &str, value: &str) -> bool;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&mut self, key: &str);
}

/// In-memory storage. Clones share the same map, the way every script on a page
/// shares one `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&mut self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Persistent storage: one file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    prefix: String,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: String::new(),
        }
    }

    /// Prefix every key, so several sites can share one directory.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Default location: `<data_dir>/vitrina/storage`
    pub fn default_dir() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("vitrina");
        path.push("storage");
        path
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Keys must stay inside the storage directory.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) {
            return Err(AppError::Storage(format!("invalid key {:?}", key)));
        }
        Ok(self.dir.join(format!("{}{}.json", self.prefix, key)))
    }

    fn try_set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, value)?;
        Ok(())
    }
}

impl StorageAdapter for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = match self.path_for(key) {
            Ok(path) => path,
            Err(e) => {
                tracing::error!("Storage get error: {}", e);
                return None;
            }
        };
        match fs::read_to_string(path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::error!("Storage get error for {}: {}", key, e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        match self.try_set(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Storage set error for {}: {}", key, e);
                false
            }
        }
    }

    fn remove(&mut self, key: &str) {
        let path = match self.path_for(key) {
            Ok(path) => path,
            Err(e) => {
                tracing::error!("Storage remove error: {}", e);
                return;
            }
        };
        if let Err(e) = fs::remove_file(path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::error!("Storage remove error for {}: {}", key, e);
            }
        }
    }
}

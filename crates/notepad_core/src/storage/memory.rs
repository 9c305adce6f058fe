//! In-process key-value backend.

use super::{KeyValueStorage, StorageError, StorageResult};
use std::collections::BTreeMap;

/// Map-backed storage living only as long as the process.
///
/// Writes can be forced to fail with [`MemoryStorage::fail_writes`], which
/// mirrors a browser store rejecting writes once its quota is exhausted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
    write_failure: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::default();
        storage.entries.insert(key.into(), value.into());
        storage
    }

    /// Makes every following `set_item`/`remove_item` fail with `message`.
    pub fn fail_writes(&mut self, message: impl Into<String>) {
        self.write_failure = Some(message.into());
    }

    /// Re-enables writes after [`MemoryStorage::fail_writes`].
    pub fn accept_writes(&mut self) {
        self.write_failure = None;
    }

    fn check_writable(&self) -> StorageResult<()> {
        match &self.write_failure {
            Some(message) => Err(StorageError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStorage;
    use crate::storage::{KeyValueStorage, StorageError};

    #[test]
    fn set_get_remove_cycle() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "v1").unwrap();
        storage.set_item("k", "v2").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));

        storage.remove_item("k").unwrap();
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
    }

    #[test]
    fn failing_writes_keep_previous_value() {
        let mut storage = MemoryStorage::with_entry("k", "kept");
        storage.fail_writes("quota exceeded");

        let err = storage.set_item("k", "lost").unwrap_err();
        assert!(matches!(err, StorageError::Backend(ref m) if m == "quota exceeded"));
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("kept"));

        storage.accept_writes();
        storage.set_item("k", "new").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("new"));
    }
}

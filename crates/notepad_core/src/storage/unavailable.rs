//! Backend standing in for an environment without a storage facility.

use super::{KeyValueStorage, StorageError, StorageResult};

/// Storage that fails every call with [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl KeyValueStorage for UnavailableStorage {
    fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable)
    }

    fn remove_item(&mut self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable)
    }
}

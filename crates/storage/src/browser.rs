use gloo_storage::{LocalStorage, Storage as GlooStorage};

use bloomfit_domain::StorageError;

use crate::DocumentStore;

/// Document store backed by the browser's local storage.
pub struct BrowserStore;

impl DocumentStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn write(&self, key: &str, document: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, document)
            .map_err(|_| StorageError::Unavailable)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|_| StorageError::Unavailable)
    }
}

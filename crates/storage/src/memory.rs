use std::cell::RefCell;
use std::collections::HashMap;

use bloomfit_domain::StorageError;

use crate::DocumentStore;

/// In-memory document store for tests and native builds.
#[derive(Default)]
pub struct MemoryStore {
    documents: RefCell<HashMap<String, String>>,
}

impl DocumentStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.documents.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, document: &str) -> Result<(), StorageError> {
        self.documents
            .borrow_mut()
            .insert(key.to_string(), document.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.documents.borrow_mut().remove(key);
        Ok(())
    }
}

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Storage;

/// In-process records. Clones share the same records, like several
/// handles onto one browser's local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`.
    pub fn with_record(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.write(key, value);
        storage
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

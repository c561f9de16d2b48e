//! In-memory key-value store for testing

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};

use super::KeyValueStore;

/// Process-local key-value store
///
/// The persistence-free double for [`KeyValueStore`]: unit tests inject it
/// where production code uses [`super::SqliteStore`].
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| Error::InvalidData("Failed to acquire store lock".into()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("expenses").unwrap(), None);

        store.set("expenses", "[]").unwrap();
        assert_eq!(store.get("expenses").unwrap().as_deref(), Some("[]"));

        store.set("expenses", "[1]").unwrap();
        assert_eq!(store.get("expenses").unwrap().as_deref(), Some("[1]"));

        store.remove("expenses").unwrap();
        assert_eq!(store.get("expenses").unwrap(), None);

        // Removing again is fine
        store.remove("expenses").unwrap();
    }
}

//! In-memory key/value store.

use std::collections::HashMap;

use super::traits::KvStore;
use crate::error::Result;

/// `KvStore` backed by a `HashMap`. Nothing is persisted.
#[derive(Debug, Default, Clone)]
pub struct MemoryKvStore {
    values: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.values.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryKvStore::new();
        assert_eq!(store.get("theme").unwrap(), None);

        store.set("theme", "dark").unwrap();
        store.set("theme", "sepia").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("sepia"));

        assert!(store.remove("theme").unwrap());
        assert!(!store.remove("theme").unwrap());
    }
}

//! Volatile in-memory backend.

use std::collections::HashMap;
use std::sync::RwLock;

use super::Backend;
use super::error::BackendError;
use super::types::StoredValue;

/// Backend storing values in a `HashMap` behind an `RwLock`.
///
/// Multiple readers may hold the lock concurrently; writers are exclusive.
/// Contents are lost when the backend is dropped, which makes this the
/// backend of choice for tests and ephemeral stores.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, StoredValue>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn read_entry(&self, key: &str) -> Result<Option<StoredValue>, BackendError> {
        let entries = self.entries.read().map_err(|_| BackendError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }
}

impl Backend for MemoryBackend {
    fn set(&self, key: &str, value: StoredValue) -> Result<(), BackendError> {
        let mut entries = self.entries.write().map_err(|_| BackendError::Poisoned)?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn get_string(&self, key: &str) -> Result<String, BackendError> {
        Ok(match self.read_entry(key)? {
            Some(StoredValue::Text(text)) => text,
            _ => String::new(),
        })
    }

    fn get_int(&self, key: &str) -> Result<i64, BackendError> {
        Ok(match self.read_entry(key)? {
            Some(StoredValue::Int(int)) => int,
            _ => 0,
        })
    }

    fn get_float(&self, key: &str) -> Result<f64, BackendError> {
        Ok(match self.read_entry(key)? {
            Some(StoredValue::Float(float)) => float,
            _ => 0.0,
        })
    }

    fn get_bool(&self, key: &str) -> Result<bool, BackendError> {
        Ok(match self.read_entry(key)? {
            Some(StoredValue::Bool(flag)) => flag,
            _ => false,
        })
    }

    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        Ok(match self.read_entry(key)? {
            Some(StoredValue::Bytes(bytes)) => Some(bytes),
            _ => None,
        })
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        let mut entries = self.entries.write().map_err(|_| BackendError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_return_defaults() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get_string("missing").unwrap(), "");
        assert_eq!(backend.get_int("missing").unwrap(), 0);
        assert_eq!(backend.get_float("missing").unwrap(), 0.0);
        assert!(!backend.get_bool("missing").unwrap());
        assert_eq!(backend.get_bytes("missing").unwrap(), None);
    }

    #[test]
    fn test_kind_mismatch_falls_back_to_default() {
        let backend = MemoryBackend::new();
        backend.set("n", StoredValue::Int(7)).unwrap();

        assert_eq!(backend.get_string("n").unwrap(), "");
        assert_eq!(backend.get_float("n").unwrap(), 0.0);
        assert!(!backend.get_bool("n").unwrap());
        assert_eq!(backend.get_bytes("n").unwrap(), None);
        assert_eq!(backend.get_int("n").unwrap(), 7);
    }

    #[test]
    fn test_set_replaces_value_and_kind() {
        let backend = MemoryBackend::new();
        backend.set("k", StoredValue::Int(1)).unwrap();
        backend.set("k", StoredValue::Text("one".to_string())).unwrap();

        assert_eq!(backend.get_string("k").unwrap(), "one");
        assert_eq!(backend.get_int("k").unwrap(), 0);
    }

    #[test]
    fn test_remove_clears_entry() {
        let backend = MemoryBackend::new();
        backend.set("k", StoredValue::Bool(true)).unwrap();
        backend.remove("k").unwrap();
        assert!(!backend.get_bool("k").unwrap());

        // Removing a missing key is not an error
        backend.remove("never-written").unwrap();
    }
}

//! Persistent backend backed by fjall.

use std::path::Path;

use fjall::{Keyspace, KeyspaceCreateOptions, PersistMode};

use crate::logging::{error, info, trace};

use super::Backend;
use super::error::BackendError;
use super::format::{decode_value, encode_value};
use super::types::StoredValue;

/// Keyspace holding all preference entries.
const PREFS_KEYSPACE: &str = "prefs";

/// Persistent backend storing values in a fjall keyspace.
///
/// Every write is durably persisted before returning. The database directory
/// is created on first open, so a preference store is always available.
///
/// # Example
///
/// ```ignore
/// use prefstore::backend::{Backend, FjallBackend, StoredValue};
///
/// let backend = FjallBackend::open(".prefstore")?;
/// backend.set("greeting", StoredValue::Text("hello".to_string()))?;
/// assert_eq!(backend.get_string("greeting")?, "hello");
/// ```
pub struct FjallBackend {
    db: fjall::Database,
    prefs: Keyspace,
}

impl FjallBackend {
    /// Open (or create) a preference database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let path = path.as_ref();
        info!(path = %path.display(), "opening preference store");

        let db = fjall::Database::builder(path).open()?;
        let prefs = db.keyspace(PREFS_KEYSPACE, KeyspaceCreateOptions::default)?;

        Ok(Self { db, prefs })
    }

    fn read_entry(&self, key: &str) -> Result<Option<StoredValue>, BackendError> {
        let Some(raw) = self.prefs.get(key)? else {
            return Ok(None);
        };
        match decode_value(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                error!(key, "stored bytes do not decode: {}", err);
                Err(err)
            }
        }
    }
}

impl Backend for FjallBackend {
    fn set(&self, key: &str, value: StoredValue) -> Result<(), BackendError> {
        trace!(key, kind = value.kind_name(), "writing value");
        let encoded = encode_value(&value);
        self.prefs.insert(key, encoded.as_slice())?;
        self.db.persist(PersistMode::SyncAll)?;
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
        trace!(key, "removing value");
        self.prefs.remove(key)?;
        self.db.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}

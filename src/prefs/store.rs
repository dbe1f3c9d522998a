//! Typed save/get facade over a storage backend.

use std::any::{Any, TypeId};
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "fjall")]
use crate::backend::FjallBackend;
use crate::backend::{Backend, MemoryBackend, StoredValue};
use crate::logging::debug;

use super::encode::AnyEncodable;
use super::error::StoreError;

/// Typed entry point for saving and retrieving preference values.
///
/// `save` stores `String`, `&str`, `i64`, `f64`, `bool` and `Vec<u8>` in the
/// backend's native representation and encodes every other serializable value
/// as JSON bytes. `get` mirrors that dispatch on the requested type, so a
/// value comes back exactly as it went in as long as both sides name the same
/// type. Other widths (`i32`, `u64`, `f32`, ...) take the JSON path on both
/// sides and round-trip the same way.
///
/// The facade holds no state beyond the shared backend handle; it is cheap to
/// clone and safe to use from multiple threads.
///
/// # Example
///
/// ```ignore
/// use prefstore::prelude::*;
///
/// let store = PrefStore::in_memory();
/// store.save("name", "Ada")?;
/// let name: Option<String> = store.get("name")?;
/// assert_eq!(name.as_deref(), Some("Ada"));
/// ```
///
/// # Missing keys
///
/// For the scalar primitives the backend accessors fall back to a default
/// (`""`, `0`, `0.0`, `false`) when the key was never written, so those
/// lookups return `Some(default)` rather than `None`. Structured lookups and
/// `Vec<u8>` report true absence. See the crate docs for the full story.
#[derive(Clone)]
pub struct PrefStore {
    backend: Arc<dyn Backend>,
}

impl PrefStore {
    /// Build a store over any backend implementation.
    pub fn with_backend(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Build a store over a fresh volatile in-memory backend.
    pub fn in_memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }

    /// Open (or create) a persistent store at the given path.
    #[cfg(feature = "fjall")]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, StoreError> {
        Ok(Self::with_backend(FjallBackend::open(path)?))
    }

    /// Save a value under `key`, replacing any previous value.
    ///
    /// The representation is picked from the value's concrete type: the
    /// native primitives are stored directly, everything else goes through
    /// the JSON encoder into the backend's byte slot. Values whose encoding
    /// is a bare JSON `null` (unit values, unit structs, `None`) have no
    /// representation in the store and are rejected with
    /// [`StoreError::UnsupportedType`].
    ///
    /// # Errors
    ///
    /// [`StoreError::UnsupportedType`], [`StoreError::Encode`] if the JSON
    /// encoder rejects the value, or [`StoreError::Backend`]. Encoding
    /// failures happen before any write, so the previous value survives a
    /// failed save.
    pub fn save<V>(&self, key: &str, value: V) -> Result<(), StoreError>
    where
        V: Serialize + 'static,
    {
        let any = &value as &dyn Any;
        let stored = if let Some(text) = any.downcast_ref::<String>() {
            StoredValue::Text(text.clone())
        } else if let Some(text) = any.downcast_ref::<&str>() {
            StoredValue::Text((*text).to_string())
        } else if let Some(int) = any.downcast_ref::<i64>() {
            StoredValue::Int(*int)
        } else if let Some(float) = any.downcast_ref::<f64>() {
            StoredValue::Float(*float)
        } else if let Some(flag) = any.downcast_ref::<bool>() {
            StoredValue::Bool(*flag)
        } else if let Some(bytes) = any.downcast_ref::<Vec<u8>>() {
            StoredValue::Bytes(bytes.clone())
        } else {
            let encoded = AnyEncodable::new(&value)
                .to_json()
                .map_err(StoreError::Encode)?;
            if encoded == b"null".as_slice() {
                return Err(StoreError::UnsupportedType);
            }
            StoredValue::Bytes(encoded)
        };

        debug!(key, kind = stored.kind_name(), "saving value");
        self.backend.set(key, stored)?;
        Ok(())
    }

    /// Retrieve the value under `key` as type `T`.
    ///
    /// Dispatches on `T` the same way [`save`](Self::save) dispatches on the
    /// value: the native primitives read through the backend's typed
    /// accessors, any other type reads the stored bytes and decodes them as
    /// JSON.
    ///
    /// The scalar paths return the backend's fallback default when the key is
    /// absent or holds a different kind (so `get::<i64>` on a missing key is
    /// `Ok(Some(0))`, not `Ok(None)`); only `Vec<u8>` and structured types
    /// yield `Ok(None)` for a missing key. This ambiguity is inherited from
    /// platform preference stores and is kept intentionally.
    ///
    /// # Errors
    ///
    /// [`StoreError::Decode`] if stored bytes do not decode as `T`, or
    /// [`StoreError::Backend`].
    pub fn get<T>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned + 'static,
    {
        debug!(key, "loading value");
        if TypeId::of::<T>() == TypeId::of::<String>() {
            Ok(coerce(self.backend.get_string(key)?))
        } else if TypeId::of::<T>() == TypeId::of::<i64>() {
            Ok(coerce(self.backend.get_int(key)?))
        } else if TypeId::of::<T>() == TypeId::of::<f64>() {
            Ok(coerce(self.backend.get_float(key)?))
        } else if TypeId::of::<T>() == TypeId::of::<bool>() {
            Ok(coerce(self.backend.get_bool(key)?))
        } else if TypeId::of::<T>() == TypeId::of::<Vec<u8>>() {
            Ok(self.backend.get_bytes(key)?.and_then(|bytes| coerce(bytes)))
        } else {
            match self.backend.get_bytes(key)? {
                None => Ok(None),
                Some(raw) => serde_json::from_slice(&raw)
                    .map(Some)
                    .map_err(StoreError::Decode),
            }
        }
    }

    /// Remove any value stored under `key`.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        debug!(key, "removing value");
        self.backend.remove(key)?;
        Ok(())
    }
}

/// Move `value` into `T` when the two are the same concrete type.
///
/// Callers guard with a matching `TypeId` check; a miss yields `None`.
fn coerce<T: 'static>(value: impl Any) -> Option<T> {
    (Box::new(value) as Box<dyn Any>)
        .downcast::<T>()
        .ok()
        .map(|boxed| *boxed)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct User {
        name: String,
        age: u32,
    }

    #[derive(Serialize)]
    struct Marker;

    fn sample_user() -> User {
        User {
            name: "Ada".to_string(),
            age: 30,
        }
    }

    #[test]
    fn test_string_saved_natively() {
        let store = PrefStore::in_memory();
        store.save("name", "Ada").unwrap();

        assert_eq!(store.get::<String>("name").unwrap().as_deref(), Some("Ada"));
        // Native text occupies the text slot, not the byte slot
        assert_eq!(store.get::<Vec<u8>>("name").unwrap(), None);
    }

    #[test]
    fn test_owned_string_and_literal_share_representation() {
        let store = PrefStore::in_memory();
        store.save("a", "x").unwrap();
        store.save("b", "x".to_string()).unwrap();

        assert_eq!(
            store.get::<String>("a").unwrap(),
            store.get::<String>("b").unwrap()
        );
    }

    #[test]
    fn test_scalar_roundtrips() {
        let store = PrefStore::in_memory();
        store.save("int", 9_217_489_214_i64).unwrap();
        store.save("float", 3.141592653589793_f64).unwrap();
        store.save("flag", true).unwrap();

        assert_eq!(store.get::<i64>("int").unwrap(), Some(9_217_489_214));
        assert_eq!(store.get::<f64>("float").unwrap(), Some(3.141592653589793));
        assert_eq!(store.get::<bool>("flag").unwrap(), Some(true));
    }

    #[test]
    fn test_bytes_roundtrip() {
        let store = PrefStore::in_memory();
        store.save("raw", vec![1_u8, 2, 3]).unwrap();
        assert_eq!(store.get::<Vec<u8>>("raw").unwrap(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_structured_value_is_stored_as_json_bytes() {
        let store = PrefStore::in_memory();
        store.save("user", sample_user()).unwrap();

        let raw = store.get::<Vec<u8>>("user").unwrap().unwrap();
        let decoded: User = serde_json::from_slice(&raw).unwrap();
        assert_eq!(decoded, sample_user());

        assert_eq!(store.get::<User>("user").unwrap(), Some(sample_user()));
    }

    #[test]
    fn test_non_native_widths_roundtrip_through_json() {
        let store = PrefStore::in_memory();
        store.save("small", 42_i32).unwrap();
        store.save("wide", u64::MAX).unwrap();

        assert_eq!(store.get::<i32>("small").unwrap(), Some(42));
        assert_eq!(store.get::<u64>("wide").unwrap(), Some(u64::MAX));
        // The native integer slot stays untouched
        assert_eq!(store.get::<i64>("small").unwrap(), Some(0));
    }

    #[test]
    fn test_missing_scalar_keys_return_defaults() {
        let store = PrefStore::in_memory();
        assert_eq!(store.get::<String>("missing").unwrap(), Some(String::new()));
        assert_eq!(store.get::<i64>("missing").unwrap(), Some(0));
        assert_eq!(store.get::<f64>("missing").unwrap(), Some(0.0));
        assert_eq!(store.get::<bool>("missing").unwrap(), Some(false));
    }

    #[test]
    fn test_missing_structured_key_is_absent() {
        let store = PrefStore::in_memory();
        assert_eq!(store.get::<User>("missing").unwrap(), None);
        assert_eq!(store.get::<Vec<u8>>("missing").unwrap(), None);
    }

    #[test]
    fn test_kind_mismatch_falls_back_to_default() {
        let store = PrefStore::in_memory();
        store.save("n", 7_i64).unwrap();

        assert_eq!(store.get::<String>("n").unwrap(), Some(String::new()));
        assert_eq!(store.get::<User>("n").unwrap(), None);
    }

    #[test]
    fn test_unrepresentable_value_is_rejected() {
        let store = PrefStore::in_memory();

        let err = store.save("marker", Marker).unwrap_err();
        assert!(matches!(err, StoreError::UnsupportedType));
        assert_eq!(err.domain(), "prefstore");
        assert_eq!(err.code(), 1);

        let err = store.save("nothing", Option::<i64>::None).unwrap_err();
        assert!(matches!(err, StoreError::UnsupportedType));
    }

    #[test]
    fn test_rejected_save_leaves_previous_value() {
        let store = PrefStore::in_memory();
        store.save("k", sample_user()).unwrap();

        assert!(store.save("k", Marker).is_err());
        assert_eq!(store.get::<User>("k").unwrap(), Some(sample_user()));
    }

    #[test]
    fn test_decode_failure_propagates() {
        let store = PrefStore::in_memory();
        store.save("user", sample_user()).unwrap();

        let err = store.get::<Vec<String>>("user").unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
        assert_eq!(err.code(), 3);
    }

    #[test]
    fn test_clones_share_the_backend() {
        let store = PrefStore::in_memory();
        let other = store.clone();

        store.save("k", 1_i64).unwrap();
        assert_eq!(other.get::<i64>("k").unwrap(), Some(1));
    }
}

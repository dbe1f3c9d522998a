//! Storage backends for the preference store.
//!
//! A backend is the underlying key-value collaborator: it owns persistence,
//! durability, and thread safety. The facade only asks it to associate a key
//! with one [`StoredValue`] and to read it back through kind-specific
//! accessors.

mod error;
#[cfg(feature = "fjall")]
mod fjall;
#[cfg(feature = "fjall")]
mod format;
mod memory;
mod types;

pub use error::BackendError;
#[cfg(feature = "fjall")]
pub use fjall::FjallBackend;
pub use memory::MemoryBackend;
pub use types::StoredValue;

/// The key-value collaborator interface required by the store facade.
///
/// Backends store one [`StoredValue`] per key in a single global namespace.
/// The typed accessors follow platform preference-store semantics: the four
/// scalar accessors return a fallback default when the key is absent or holds
/// a different kind, while [`get_bytes`](Backend::get_bytes) is the only
/// accessor with a true absence signal.
pub trait Backend: Send + Sync {
    /// Associate `key` with `value`, replacing any previous value.
    fn set(&self, key: &str, value: StoredValue) -> Result<(), BackendError>;

    /// Text stored under `key`, or `""` if absent or not text.
    fn get_string(&self, key: &str) -> Result<String, BackendError>;

    /// Integer stored under `key`, or `0` if absent or not an integer.
    fn get_int(&self, key: &str) -> Result<i64, BackendError>;

    /// Float stored under `key`, or `0.0` if absent or not a float.
    fn get_float(&self, key: &str) -> Result<f64, BackendError>;

    /// Boolean stored under `key`, or `false` if absent or not a boolean.
    fn get_bool(&self, key: &str) -> Result<bool, BackendError>;

    /// Bytes stored under `key`, or `None` if absent or not bytes.
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError>;

    /// Remove any value stored under `key`.
    fn remove(&self, key: &str) -> Result<(), BackendError>;
}

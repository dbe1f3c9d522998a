//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```ignore
//! use prefstore::prelude::*;
//!
//! let store = PrefStore::in_memory();
//! store.save("launches", 3_i64)?;
//! let launches: Option<i64> = store.get("launches")?;
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Store facade types
pub use crate::prefs::{AnyEncodable, ERROR_DOMAIN, PrefStore, StoreError};

// Backend types
#[cfg(feature = "fjall")]
pub use crate::backend::FjallBackend;
pub use crate::backend::{Backend, BackendError, MemoryBackend, StoredValue};

// Dependency re-exports
pub use serde::{Deserialize, Serialize};

//! Typed preference storage with automatic JSON encoding for structured
//! values.
//!
//! `prefstore` is a thin convenience layer over a key-value backend. Five
//! primitive types (`String`/`&str`, `i64`, `f64`, `bool`, `Vec<u8>`) are
//! stored in the backend's native representation; any other serializable
//! value is encoded as JSON bytes. `save` picks the representation from the
//! value's concrete type and `get` picks the matching accessor from the
//! requested type, so no type tag is ever persisted.
//!
//! # Quick Start
//!
//! ```ignore
//! use prefstore::prelude::*;
//!
//! let store = PrefStore::open(".prefstore")?;
//!
//! store.save("name", "Ada")?;
//! let name: Option<String> = store.get("name")?;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Profile {
//!     name: String,
//!     age: u32,
//! }
//!
//! store.save("profile", Profile { name: "Ada".into(), age: 30 })?;
//! let profile: Option<Profile> = store.get("profile")?;
//! ```
//!
//! # Modules
//!
//! - [`prefs`] - The typed [`PrefStore`] facade and the type-erasing encoder
//! - [`backend`] - The [`Backend`] trait and the bundled backends
//!
//! # Feature Flags
//!
//! - `fjall` - Enable the persistent fjall-backed backend (enabled by default)
//! - `logging` - Enable library-level tracing (consumers provide their own
//!   subscriber)
//! - `cli` - Enable the command-line interface binary
//! - `full` - Enable all features
//!
//! # Missing keys and primitive defaults
//!
//! The typed accessors for the scalar primitives return a fallback value when
//! a key was never written (empty string, `0`, `0.0`, `false`), so for those
//! types `get` cannot distinguish "absent" from "stored the default". Only
//! raw bytes and structured values have a true absence signal. This mirrors
//! the behavior of platform preference stores and is intentional; callers
//! that need presence information should store a structured value.

pub mod backend;
mod error;
mod logging;
pub mod prefs;
pub mod prelude;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export the facade types at the crate root for convenience
pub use prefs::{AnyEncodable, ERROR_DOMAIN, PrefStore, StoreError};

// Re-export backend types at the crate root for convenience
#[cfg(feature = "fjall")]
pub use backend::FjallBackend;
pub use backend::{Backend, BackendError, MemoryBackend, StoredValue};

//! Unified error type for the prefstore library.
//!
//! This module provides a single [`Error`] type that wraps the
//! module-specific error types, so application code can use one error type
//! throughout.

use thiserror::Error;

use crate::backend::BackendError;
use crate::prefs::StoreError;

/// Unified error type for all prefstore operations.
///
/// # Example
///
/// ```ignore
/// use prefstore::{PrefStore, Result};
///
/// fn remember_name(name: String) -> Result<()> {
///     let store = PrefStore::open(".prefstore")?;
///     store.save("name", name)?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the typed store facade.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Error from a storage backend.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

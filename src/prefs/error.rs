//! Error types for the typed store facade.

use thiserror::Error;

use crate::backend::BackendError;

/// Domain tag carried by every [`StoreError`], for callers that discriminate
/// errors by identity rather than by matching variants.
pub const ERROR_DOMAIN: &str = "prefstore";

/// Errors that can occur during save/get operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The value has no representation in the store: its encoding is a bare
    /// JSON `null`, as produced by unit values, unit structs and `None`.
    #[error("type not supported: the store has no representation for this value")]
    UnsupportedType,

    /// The structured encoder rejected the value.
    #[error("failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    /// Stored bytes could not be decoded into the requested type.
    #[error("failed to decode value: {0}")]
    Decode(#[source] serde_json::Error),

    /// The underlying backend failed.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

impl StoreError {
    /// The fixed domain tag for store errors.
    pub fn domain(&self) -> &'static str {
        ERROR_DOMAIN
    }

    /// Stable numeric code identifying the error kind.
    pub fn code(&self) -> u32 {
        match self {
            StoreError::UnsupportedType => 1,
            StoreError::Encode(_) => 2,
            StoreError::Decode(_) => 3,
            StoreError::Backend(_) => 4,
        }
    }
}

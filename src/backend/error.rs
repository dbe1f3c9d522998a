//! Error types for storage backends.

use thiserror::Error;

/// Errors that can occur inside a storage backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// I/O error from the underlying storage engine.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the fjall storage engine.
    #[cfg(feature = "fjall")]
    #[error("fjall error: {0}")]
    Fjall(#[from] fjall::Error),

    /// Stored bytes do not decode as any known value representation.
    #[error("invalid stored format: {0}")]
    InvalidFormat(String),

    /// A lock guarding in-memory state was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

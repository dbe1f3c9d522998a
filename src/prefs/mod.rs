//! Typed store facade and the type-erasing JSON encoder.
//!
//! [`PrefStore`] is the single entry point for saving and retrieving values.
//! `save` dispatches on the value's concrete type and `get` on the requested
//! result type; both walk the same ordered list of native primitives before
//! falling back to the JSON path, which keeps the two sides symmetric.

mod encode;
mod error;
mod store;

pub use encode::AnyEncodable;
pub use error::{ERROR_DOMAIN, StoreError};
pub use store::PrefStore;

//! Type-erased JSON encoding for heterogeneous values.

use serde::Serialize;

/// The serializer type the erased encode step is pinned to.
type JsonSerializer<'buf> = serde_json::Serializer<&'buf mut Vec<u8>>;

/// A type-erased serializable value.
///
/// serde's `Serialize::serialize` is generic over the serializer, so values
/// of different concrete types cannot travel through one non-generic code
/// path directly. `AnyEncodable` captures the value's encode step behind a
/// closure over the one serializer type this crate writes with, which lets
/// the facade funnel every structured value through a single fixed-type
/// encoding routine.
///
/// The wrapper performs no validation of its own; errors surface only from
/// the delegated encode call.
pub struct AnyEncodable<'a> {
    encode: Box<dyn Fn(&mut JsonSerializer<'_>) -> Result<(), serde_json::Error> + 'a>,
}

impl<'a> AnyEncodable<'a> {
    /// Wrap a serializable value of any concrete type.
    pub fn new<T: Serialize>(value: &'a T) -> Self {
        Self {
            encode: Box::new(move |serializer: &mut JsonSerializer<'_>| {
                value.serialize(&mut *serializer)
            }),
        }
    }

    /// Encode the wrapped value into the given serializer.
    pub fn encode_into(
        &self,
        serializer: &mut JsonSerializer<'_>,
    ) -> Result<(), serde_json::Error> {
        (self.encode)(serializer)
    }

    /// Encode the wrapped value to JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::new(&mut buf);
        self.encode_into(&mut serializer)?;
        Ok(buf)
    }
}

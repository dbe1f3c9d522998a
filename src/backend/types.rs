//! Native value representations for backends.

/// A value in one of the store's native representations.
///
/// Structured values never appear here as their own kind: the facade encodes
/// them to JSON and stores the result as `Bytes`, so a backend cannot tell an
/// encoded structure from a raw byte payload.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    /// UTF-8 text.
    Text(String),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// Raw byte payload (also the slot for JSON-encoded structured values).
    Bytes(Vec<u8>),
}

impl StoredValue {
    /// Short name of this value's kind, for logs and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            StoredValue::Text(_) => "text",
            StoredValue::Int(_) => "int",
            StoredValue::Float(_) => "float",
            StoredValue::Bool(_) => "bool",
            StoredValue::Bytes(_) => "bytes",
        }
    }
}

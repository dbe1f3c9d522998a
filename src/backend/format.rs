//! Binary encoding of stored values for persistent backends.
//!
//! Layout: one format version byte, one kind tag byte, then the payload.
//! Integers are little-endian, floats are the little-endian IEEE 754 bit
//! pattern, text is UTF-8, booleans are a single `0`/`1` byte, and byte
//! payloads are stored verbatim.

use super::error::BackendError;
use super::types::StoredValue;

/// Current format version.
/// Increment when changing the on-disk layout; decode rejects other versions.
const FORMAT_VERSION: u8 = 1;

const TAG_TEXT: u8 = 1;
const TAG_INT: u8 = 2;
const TAG_FLOAT: u8 = 3;
const TAG_BOOL: u8 = 4;
const TAG_BYTES: u8 = 5;

/// Encode a value to its on-disk representation.
pub fn encode_value(value: &StoredValue) -> Vec<u8> {
    let mut out = Vec::with_capacity(10);
    out.push(FORMAT_VERSION);
    match value {
        StoredValue::Text(text) => {
            out.push(TAG_TEXT);
            out.extend_from_slice(text.as_bytes());
        }
        StoredValue::Int(int) => {
            out.push(TAG_INT);
            out.extend_from_slice(&int.to_le_bytes());
        }
        StoredValue::Float(float) => {
            out.push(TAG_FLOAT);
            out.extend_from_slice(&float.to_le_bytes());
        }
        StoredValue::Bool(flag) => {
            out.push(TAG_BOOL);
            out.push(u8::from(*flag));
        }
        StoredValue::Bytes(bytes) => {
            out.push(TAG_BYTES);
            out.extend_from_slice(bytes);
        }
    }
    out
}

/// Decode a value from its on-disk representation.
pub fn decode_value(raw: &[u8]) -> Result<StoredValue, BackendError> {
    let (version, rest) = raw
        .split_first()
        .ok_or_else(|| BackendError::InvalidFormat("empty value".to_string()))?;
    if *version != FORMAT_VERSION {
        return Err(BackendError::InvalidFormat(format!(
            "unknown format version {}",
            version
        )));
    }

    let (tag, payload) = rest
        .split_first()
        .ok_or_else(|| BackendError::InvalidFormat("missing kind tag".to_string()))?;
    match *tag {
        TAG_TEXT => {
            let text = std::str::from_utf8(payload)
                .map_err(|e| BackendError::InvalidFormat(format!("invalid UTF-8 text: {}", e)))?;
            Ok(StoredValue::Text(text.to_string()))
        }
        TAG_INT => {
            let bytes: [u8; 8] = payload.try_into().map_err(|_| {
                BackendError::InvalidFormat(format!("integer payload of {} bytes", payload.len()))
            })?;
            Ok(StoredValue::Int(i64::from_le_bytes(bytes)))
        }
        TAG_FLOAT => {
            let bytes: [u8; 8] = payload.try_into().map_err(|_| {
                BackendError::InvalidFormat(format!("float payload of {} bytes", payload.len()))
            })?;
            Ok(StoredValue::Float(f64::from_le_bytes(bytes)))
        }
        TAG_BOOL => match payload {
            [0] => Ok(StoredValue::Bool(false)),
            [1] => Ok(StoredValue::Bool(true)),
            _ => Err(BackendError::InvalidFormat(
                "invalid boolean payload".to_string(),
            )),
        },
        TAG_BYTES => Ok(StoredValue::Bytes(payload.to_vec())),
        other => Err(BackendError::InvalidFormat(format!(
            "unknown kind tag {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_roundtrip() {
        let original = StoredValue::Text("héllo".to_string());
        let decoded = decode_value(&encode_value(&original)).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_int_roundtrip() {
        for int in [0, 1, -1, i64::MIN, i64::MAX] {
            let original = StoredValue::Int(int);
            let decoded = decode_value(&encode_value(&original)).unwrap();
            assert_eq!(original, decoded);
        }
    }

    #[test]
    fn test_float_roundtrip() {
        let original = StoredValue::Float(3.141592653589793);
        let decoded = decode_value(&encode_value(&original)).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_bool_roundtrip() {
        assert_eq!(
            decode_value(&encode_value(&StoredValue::Bool(true))).unwrap(),
            StoredValue::Bool(true)
        );
        assert_eq!(
            decode_value(&encode_value(&StoredValue::Bool(false))).unwrap(),
            StoredValue::Bool(false)
        );
    }

    #[test]
    fn test_bytes_roundtrip() {
        let original = StoredValue::Bytes(vec![0, 1, 2, 255]);
        let decoded = decode_value(&encode_value(&original)).unwrap();
        assert_eq!(original, decoded);

        // Empty payloads are valid bytes values
        let empty = StoredValue::Bytes(Vec::new());
        assert_eq!(decode_value(&encode_value(&empty)).unwrap(), empty);
    }

    #[test]
    fn test_decode_rejects_empty_input() {
        assert!(matches!(
            decode_value(&[]),
            Err(BackendError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        assert!(matches!(
            decode_value(&[99, TAG_BOOL, 1]),
            Err(BackendError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_rejects_missing_tag() {
        assert!(matches!(
            decode_value(&[FORMAT_VERSION]),
            Err(BackendError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_tag() {
        assert!(matches!(
            decode_value(&[FORMAT_VERSION, 42]),
            Err(BackendError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_rejects_truncated_int() {
        assert!(matches!(
            decode_value(&[FORMAT_VERSION, TAG_INT, 1, 2, 3]),
            Err(BackendError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_bool() {
        assert!(matches!(
            decode_value(&[FORMAT_VERSION, TAG_BOOL, 2]),
            Err(BackendError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert!(matches!(
            decode_value(&[FORMAT_VERSION, TAG_TEXT, 0xff, 0xfe]),
            Err(BackendError::InvalidFormat(_))
        ));
    }
}

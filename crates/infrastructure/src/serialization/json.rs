//! JSON serialization helpers for files the user may read or diff.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to pretty JSON with 2-space indentation and a
/// trailing newline.
///
/// Key order follows the source types, so maps should be `BTreeMap`s for
/// output to be reproducible.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize + ?Sized>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Deserializes JSON from bytes.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use courier_domain::{ClientSettings, Environment};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stable_output_shape() {
        let settings = ClientSettings::default();

        let json = to_json_stable(&settings).expect("serialization should work");

        assert!(json.ends_with("}\n"));
        assert!(json.contains("\n  \"timeout_ms\": 30000"));
    }

    #[test]
    fn test_environment_roundtrip() {
        let mut env = Environment::new("Staging");
        env.set_variable("host", "staging.local", true);
        env.set_variable("token", "t0k", false);

        let json = to_json_stable(&env).expect("serialization should work");
        let restored: Environment =
            from_json_bytes(json.as_bytes()).expect("deserialization should work");

        assert_eq!(restored, env);
    }

    #[test]
    fn test_from_json_bytes_rejects_wrong_shape() {
        let result: Result<Vec<Environment>, _> = from_json_bytes(br#"{"name": "x"}"#);
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }
}

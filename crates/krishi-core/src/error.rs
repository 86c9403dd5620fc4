use thiserror::Error;

/// Top-level error type for the Krishi Sahayi system.
///
/// Subsystem crates define their own error types and implement
/// `From<SubsystemError> for KrishiError` so that the `?` operator works
/// across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KrishiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for KrishiError {
    fn from(err: toml::de::Error) -> Self {
        KrishiError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for KrishiError {
    fn from(err: toml::ser::Error) -> Self {
        KrishiError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for KrishiError {
    fn from(err: serde_json::Error) -> Self {
        KrishiError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Krishi Sahayi operations.
pub type Result<T> = std::result::Result<T, KrishiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KrishiError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = KrishiError::Chat("session closed".to_string());
        assert_eq!(err.to_string(), "Chat error: session closed");

        let err = KrishiError::Serialization("invalid json".to_string());
        assert_eq!(err.to_string(), "Serialization error: invalid json");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KrishiError = io_err.into();
        assert!(matches!(err, KrishiError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let parsed: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        let err: KrishiError = parsed.unwrap_err().into();
        assert!(matches!(err, KrishiError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let bad_json = "{ invalid json }";
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str(bad_json);
        let err: KrishiError = parsed.unwrap_err().into();
        assert!(matches!(err, KrishiError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let _value = io_result?;
            Ok("success".to_string())
        }

        assert_eq!(inner().unwrap(), "success");
    }

    #[test]
    fn test_error_debug_impl() {
        let err = KrishiError::Config("test debug".to_string());
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("Config"));
        assert!(dbg.contains("test debug"));
    }
}

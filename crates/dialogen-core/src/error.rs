//! Error types for the Dialogen data layer.

use thiserror::Error;

/// A shared error type for record construction and persistence.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone)]
pub enum DialogenError {
    /// A required field is missing or a value has the wrong primitive shape
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Structured text is not well-formed JSON
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Binary checkpoint is corrupt or was written by an incompatible encoder
    #[error("Deserialization error: {message}")]
    Deserialization { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DialogenError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a Parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Deserialization error
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::Deserialization {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a Parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a Deserialization error
    pub fn is_deserialization(&self) -> bool {
        matches!(self, Self::Deserialization { .. })
    }

    /// Classifies a `serde_json` decode error into the taxonomy above.
    ///
    /// Well-formed JSON that does not match the record schema (missing
    /// required field, wrong primitive type) reports as `Validation`;
    /// text that is not JSON at all reports as `Parse`.
    pub fn from_json_error(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => Self::Validation {
                message: err.to_string(),
            },
            Category::Syntax | Category::Eof => Self::Parse {
                message: err.to_string(),
            },
            Category::Io => Self::Io {
                message: err.to_string(),
            },
        }
    }
}

impl From<std::io::Error> for DialogenError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

/// A type alias for `Result<T, DialogenError>`.
pub type Result<T> = std::result::Result<T, DialogenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_classifies_as_validation() {
        let err = serde_json::from_str::<std::collections::HashMap<String, u32>>("{\"a\": \"x\"}")
            .unwrap_err();
        assert!(DialogenError::from_json_error(err).is_validation());
    }

    #[test]
    fn test_malformed_text_classifies_as_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(DialogenError::from_json_error(err).is_parse());
    }

    #[test]
    fn test_truncated_text_classifies_as_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{\"a\":").unwrap_err();
        assert!(DialogenError::from_json_error(err).is_parse());
    }

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DialogenError = io.into();
        assert!(err.is_io());
        assert!(err.to_string().contains("NotFound"));
    }
}

//! Error handling module for the theming engine
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the library should use these types for consistency.

use thiserror::Error;

/// Main error type for the theming engine
#[derive(Error, Debug)]
pub enum ThemeError {
    /// IO errors (reading preset tables, writing stylesheets)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An unknown design style was requested from the preset registry.
    ///
    /// Never silently defaulted; the caller decides the fallback policy.
    #[error("Unknown design style: {0}")]
    UnknownStyle(String),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for theming operations
pub type Result<T> = std::result::Result<T, ThemeError>;

// Convenient error constructors
impl ThemeError {
    /// Create an unknown-style error
    pub fn unknown_style(name: impl Into<String>) -> Self {
        Self::UnknownStyle(name.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ThemeError::unknown_style("bauhaus");
        assert_eq!(err.to_string(), "Unknown design style: bauhaus");

        let err = ThemeError::config("missing preset table");
        assert_eq!(err.to_string(), "Configuration error: missing preset table");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ThemeError = io_err.into();
        assert!(matches!(err, ThemeError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ThemeError = json_err.into();
        assert!(matches!(err, ThemeError::Json(_)));
    }
}

//! Error types for Tessera.
//!
//! The layout engine itself never fails; these errors come from the edges:
//! configuration loading, CLI input and event scripts.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while running Tessera commands.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum TesseraError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Malformed JSON or JSONC input.
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<std::io::Error> for TesseraError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for TesseraError {
    fn from(err: serde_json::Error) -> Self { Self::ParseError(err.to_string()) }
}

impl From<ConfigError> for TesseraError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<String> for TesseraError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for TesseraError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arguments_display() {
        let err = TesseraError::InvalidArguments("Window id must be a number".to_string());
        assert_eq!(err.to_string(), "Window id must be a number");
    }

    #[test]
    fn test_config_error_display() {
        let err = TesseraError::ConfigError("Invalid JSON".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("Invalid JSON"));
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err: TesseraError = io_err.into();
        assert!(matches!(err, TesseraError::IoError(_)));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_serde_json_error_is_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: TesseraError = json_err.into();
        assert!(matches!(err, TesseraError::ParseError(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: TesseraError = ConfigError::NotFound.into();
        assert!(matches!(err, TesseraError::ConfigError(_)));
        assert!(err.to_string().contains("No configuration file found"));
    }

    #[test]
    fn test_string_conversions() {
        let err: TesseraError = "plain".into();
        assert_eq!(err.to_string(), "plain");
        let err: TesseraError = String::from("owned").into();
        assert_eq!(err.to_string(), "owned");
    }

    #[test]
    fn test_serialize_is_tagged() {
        let err = TesseraError::CommandError("boom".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "CommandError");
        assert_eq!(json["message"], "boom");
    }
}

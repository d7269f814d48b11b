//! # CLI Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in tip-cli                                │
//! │                                                                         │
//! │  ConfigError ──────┐                                                    │
//! │  CoreError ────────┼──► CliError { code, message } ──► stderr (JSON)    │
//! │  io / serde_json ──┘                                    exit code 1     │
//! │                                                                         │
//! │  Keystrokes themselves never produce errors: bad input is filtered      │
//! │  or flagged by tip-core.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use serde::Serialize;
use tip_core::CoreError;

use crate::config::ConfigError;

/// Error returned from CLI commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "UNKNOWN_PRESET",
///   "message": "No 20% tip preset; configured presets are [5, 10, 15, 25, 50]"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for CLI failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Bad configuration, including a preset list the engine rejects
    ConfigError,

    /// A preset id outside the configured buttons
    UnknownPreset,

    /// Input file could not be read
    IoError,

    /// Input file is not valid JSON of the expected shape
    ParseError,
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates an I/O error naming the file involved.
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        CliError::new(
            ErrorCode::IoError,
            format!("{}: {}", path.display(), err),
        )
    }

    /// Creates a parse error naming the file involved.
    pub fn parse(path: &Path, err: serde_json::Error) -> Self {
        CliError::new(
            ErrorCode::ParseError,
            format!("{}: {}", path.display(), err),
        )
    }

    /// Prefixes the message with where it happened.
    pub fn context(mut self, context: impl std::fmt::Display) -> Self {
        self.message = format!("{}: {}", context, self.message);
        self
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::UnknownPreset { .. } => ErrorCode::UnknownPreset,
            // Only preset-list construction produces validation errors.
            CoreError::Validation(_) => ErrorCode::ConfigError,
        };
        CliError::new(code, err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::new(ErrorCode::ParseError, err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::new(ErrorCode::IoError, err.to_string())
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;
    use tip_core::TipPresets;

    #[test]
    fn test_unknown_preset_maps_to_code() {
        let err: CliError = TipPresets::default().get(20).unwrap_err().into();
        assert_eq!(err.code, ErrorCode::UnknownPreset);
        assert!(err.message.contains("20%"));
    }

    #[test]
    fn test_preset_list_validation_maps_to_config_code() {
        let err: CliError = TipPresets::new(vec![10, 10]).unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.contains("already exists"));
    }

    #[test]
    fn test_serialized_shape() {
        let err = CliError::new(ErrorCode::IoError, "missing").context("script.json");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "IO_ERROR");
        assert_eq!(json["message"], "script.json: missing");
    }

    #[test]
    fn test_display() {
        let err = CliError::new(ErrorCode::ParseError, "bad json");
        assert_eq!(err.to_string(), "[ParseError] bad json");
    }
}

//! # Error Types
//!
//! Domain-specific error types for tip-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tip-core errors (this file)                                            │
//! │  ├── CoreError        - General domain errors                           │
//! │  └── ValidationError  - Configuration value failures                    │
//! │                                                                         │
//! │  tip-cli errors (app)                                                   │
//! │  └── CliError         - What the caller sees (serialized)               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr / JSON           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Keystrokes Never Fail
//! The message handlers on [`TipForm`](crate::TipForm) are total: malformed
//! input is filtered or flagged, never rejected. These errors only come from
//! building configuration (the preset list) or from resolving a preset id
//! supplied from outside the engine.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A preset id that is not one of the configured tip buttons.
    ///
    /// ## When This Occurs
    /// - A recorded session refers to a button that is not configured
    /// - A caller passes an arbitrary percentage as if it were a preset
    #[error("No {percent}% tip preset; configured presets are {allowed:?}")]
    UnknownPreset { percent: u16, allowed: Vec<u16> },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required value is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate value (e.g. the same preset listed twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Validation Module
//!
//! Field validity flags and configuration checks.
//!
//! ## Flag vs. Gate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Different Questions                            │
//! │                                                                         │
//! │  "Is this field wrong?"  (THIS MODULE)                                  │
//! │  ├── drives the red "invalid" outline                                   │
//! │  └── empty is NOT wrong                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  "Can we calculate?"     (calculator gating)                            │
//! │  ├── drives real vs. $0.00 outputs                                      │
//! │  └── empty is incomplete → $0.00                                        │
//! │                                                                         │
//! │  Keep these separate: an empty bill shows no outline AND zero totals    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_TIP_PERCENT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validity
// =============================================================================

/// Per-field "invalid" flags, derived from field text on every edit.
///
/// The custom tip field has no flag: its sanitizer only lets digits through,
/// so any non-empty value is a usable percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidity {
    pub bill_invalid: bool,
    pub party_size_invalid: bool,
}

impl FieldValidity {
    /// Classifies both flagged fields.
    pub fn classify(bill: &str, party_size: &str) -> Self {
        FieldValidity {
            bill_invalid: is_bill_invalid(bill),
            party_size_invalid: is_party_size_invalid(party_size),
        }
    }
}

/// Bill is invalid iff it is non-empty and parses to an amount ≤ 0.
///
/// Text that does not parse at all (a lone `"."`) is not flagged; the
/// calculator treats it as incomplete instead.
///
/// ## Example
/// ```rust
/// use tip_core::validation::is_bill_invalid;
///
/// assert!(is_bill_invalid("0"));
/// assert!(is_bill_invalid("0.00"));
/// assert!(!is_bill_invalid(""));
/// assert!(!is_bill_invalid("0.01"));
/// ```
pub fn is_bill_invalid(bill: &str) -> bool {
    if bill.is_empty() {
        return false;
    }
    match Money::parse_decimal(bill) {
        Some(amount) => !amount.is_positive(),
        None => false,
    }
}

/// Party size is invalid iff it is non-empty and not a positive integer.
///
/// ## Example
/// ```rust
/// use tip_core::validation::is_party_size_invalid;
///
/// assert!(is_party_size_invalid("0"));
/// assert!(!is_party_size_invalid(""));
/// assert!(!is_party_size_invalid("3"));
/// ```
pub fn is_party_size_invalid(party_size: &str) -> bool {
    if party_size.is_empty() {
        return false;
    }
    parse_party_size(party_size).is_none()
}

/// Reads a party size; `None` unless the text is a positive integer.
pub fn parse_party_size(party_size: &str) -> Option<u16> {
    if !party_size.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    party_size.parse::<u16>().ok().filter(|n| *n > 0)
}

// =============================================================================
// Configuration Validators
// =============================================================================

/// Validates a single preset percentage.
///
/// ## Rules
/// - Must be positive (a 0 % button is meaningless)
/// - Must not exceed MAX_TIP_PERCENT (999)
pub fn validate_preset_percent(percent: u16) -> ValidationResult<()> {
    if percent == 0 || percent > MAX_TIP_PERCENT {
        return Err(ValidationError::OutOfRange {
            field: "tip preset".to_string(),
            min: 1,
            max: i64::from(MAX_TIP_PERCENT),
        });
    }

    Ok(())
}

/// Validates a full preset list.
///
/// ## Rules
/// - At least one preset
/// - Each preset passes [`validate_preset_percent`]
/// - No duplicates
///
/// ## Example
/// ```rust
/// use tip_core::validation::validate_tip_presets;
///
/// assert!(validate_tip_presets(&[5, 10, 15, 25, 50]).is_ok());
/// assert!(validate_tip_presets(&[]).is_err());
/// assert!(validate_tip_presets(&[0]).is_err());
/// assert!(validate_tip_presets(&[10, 10]).is_err());
/// ```
pub fn validate_tip_presets(percents: &[u16]) -> ValidationResult<()> {
    if percents.is_empty() {
        return Err(ValidationError::Required {
            field: "tip presets".to_string(),
        });
    }

    for (i, percent) in percents.iter().enumerate() {
        validate_preset_percent(*percent)?;
        if percents[..i].contains(percent) {
            return Err(ValidationError::Duplicate {
                field: "tip preset".to_string(),
                value: percent.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

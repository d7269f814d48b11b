//! # tip-core: Pure Form Engine for Tip Calc
//!
//! This crate is the **heart** of Tip Calc. It turns raw keystrokes into
//! well-formed field values and keeps the four derived money outputs
//! consistent with them. There are zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tip Calc Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (web page, tip-cli, ...)              │   │
//! │  │    Bill input ──► Tip buttons / custom ──► People ──► Reset     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ messages in, RenderState out           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tip-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ sanitize  │  │validation │  │calculator │  │controller │  │   │
//! │  │   │ bill/digit│  │ invalid   │  │ gating    │  │ TipForm   │  │   │
//! │  │   │ filters   │  │ flags     │  │ formulas  │  │ dispatch  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • PURE STATE TRANSITIONS                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`sanitize`] - Keystroke filters for the bill and digit-only fields
//! - [`validation`] - Invalid-field flags and configuration checks
//! - [`types`] - Tip presets, tip selection state machine
//! - [`money`] - Integer-cent money type and the currency formatter
//! - [`calculator`] - Gating and the derived value formulas
//! - [`controller`] - The form state and its message handlers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tip_core::{TipForm, TipPresets};
//!
//! let presets = TipPresets::default();
//! let mut form = TipForm::new(presets.clone());
//!
//! form.on_bill_input("100", 3);
//! form.on_party_size_input("2");
//! let ten = presets.get(10).unwrap();
//! let render = form.on_tip_preset_selected(ten);
//!
//! assert_eq!(render.outputs.total, "$110.00");
//! assert_eq!(render.outputs.total_per_person, "$55.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod controller;
pub mod error;
pub mod money;
pub mod sanitize;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{DerivedResult, DisplayedResult};
pub use controller::{RenderState, TipForm};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::{TipPercent, TipPreset, TipPresets, TipSelection};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum digits before the decimal separator in the bill field (99999).
pub const MAX_BILL_INTEGER_DIGITS: usize = 5;

/// Maximum digits after the decimal separator in the bill field (cents).
pub const MAX_BILL_FRACTION_DIGITS: usize = 2;

/// Maximum digits in the party size field (999 people).
pub const MAX_PARTY_SIZE_DIGITS: usize = 3;

/// Maximum digits in the custom tip field (999 %).
pub const MAX_CUSTOM_TIP_DIGITS: usize = 3;

/// Largest whole percentage a tip source can carry.
pub const MAX_TIP_PERCENT: u16 = 999;

/// Preset tip buttons shown when nothing else is configured.
pub const DEFAULT_TIP_PRESETS: [u16; 5] = [5, 10, 15, 25, 50];

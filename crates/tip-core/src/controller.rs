//! # Controller Module
//!
//! Owns the canonical form state and handles one message at a time.
//!
//! ## Message Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Message, Start to Finish                         │
//! │                                                                         │
//! │  Presentation            TipForm handler              State change      │
//! │  ────────────            ───────────────              ────────────      │
//! │                                                                         │
//! │  Type in bill ─────────► on_bill_input() ──────────► bill, caret        │
//! │                                                                         │
//! │  Click 15% ────────────► on_tip_preset_selected() ─► selection,         │
//! │                                                      custom cleared     │
//! │                                                                         │
//! │  Type custom tip ──────► on_custom_tip_input() ────► custom, selection  │
//! │                                                                         │
//! │  Type people ──────────► on_party_size_input() ────► party size         │
//! │                                                                         │
//! │  Click Reset ──────────► on_reset() ───────────────► everything         │
//! │                                                                         │
//! │  Every handler: sanitize → classify → select → derive → format          │
//! │  and returns a fresh RenderState. No handler can fail.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::calculator::{derive, DerivedResult, DisplayedResult};
use crate::error::CoreResult;
use crate::sanitize::{sanitize_bill, sanitize_custom_tip, sanitize_party_size};
use crate::types::{TipPreset, TipPresets, TipSelection};
use crate::validation::FieldValidity;

// =============================================================================
// Render State
// =============================================================================

/// Everything the presentation layer needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RenderState {
    /// Bill field text.
    pub bill: String,
    /// Caret offset to restore in the bill field.
    pub bill_caret: usize,
    /// Party size field text.
    pub party_size: String,
    /// Custom tip field text.
    pub custom_tip: String,
    /// Preset buttons in display order.
    pub presets: Vec<u16>,
    /// Percentage of the active preset button, if one is active.
    pub active_preset: Option<u16>,
    /// Whether the custom field is the active tip source.
    pub custom_active: bool,
    /// Red outline on the bill field.
    pub bill_invalid: bool,
    /// Red outline on the party size field.
    pub party_size_invalid: bool,
    /// The four formatted outputs.
    pub outputs: DisplayedResult,
}

// =============================================================================
// Messages
// =============================================================================

/// A single user action, in wire form.
///
/// ## JSON Shape
/// ```json
/// { "type": "billInput", "raw": "12,5", "caret": 4 }
/// { "type": "presetSelected", "percent": 15 }
/// { "type": "reset" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormMessage {
    /// The bill field's text changed. Caret defaults to the end of `raw`.
    BillInput {
        raw: String,
        #[serde(default)]
        caret: Option<usize>,
    },
    /// The party size field's text changed.
    PartySizeInput { raw: String },
    /// The custom tip field's text changed.
    CustomTipInput { raw: String },
    /// A preset button was clicked.
    PresetSelected { percent: u16 },
    /// The reset button was clicked.
    Reset,
}

// =============================================================================
// Tip Form
// =============================================================================

/// The canonical form state.
///
/// ## Invariants
/// - `bill` is always sanitized bill text, `party_size` and `custom_tip`
///   always sanitized digit text
/// - `custom_tip` is non-empty exactly when `selection` is `Custom`
/// - Derived values and validity flags are never stored; they are
///   recomputed from the fields on every render
#[derive(Debug, Clone)]
pub struct TipForm {
    presets: TipPresets,
    bill: String,
    bill_caret: usize,
    party_size: String,
    custom_tip: String,
    selection: TipSelection,
}

impl TipForm {
    /// Creates an empty form with the given preset buttons.
    pub fn new(presets: TipPresets) -> Self {
        TipForm {
            presets,
            bill: String::new(),
            bill_caret: 0,
            party_size: String::new(),
            custom_tip: String::new(),
            selection: TipSelection::Unselected,
        }
    }

    /// Handles a keystroke in the bill field.
    ///
    /// `raw` is the field's full text after the keystroke and `caret` the
    /// caret's character offset in it.
    pub fn on_bill_input(&mut self, raw: &str, caret: usize) -> RenderState {
        let sanitized = sanitize_bill(raw, caret);
        debug!(
            raw,
            previous = %self.bill,
            value = %sanitized.value,
            caret = sanitized.caret,
            "bill input"
        );

        self.bill = sanitized.value;
        self.bill_caret = sanitized.caret;
        self.render()
    }

    /// Handles a click on a preset tip button.
    ///
    /// Clears the custom field. Clicking the active preset again keeps it active.
    pub fn on_tip_preset_selected(&mut self, preset: TipPreset) -> RenderState {
        debug!(percent = preset.percent().percent(), "preset selected");

        self.custom_tip.clear();
        self.selection = self.selection.preset_clicked(preset);
        self.render()
    }

    /// Handles a keystroke in the custom tip field.
    pub fn on_custom_tip_input(&mut self, raw: &str) -> RenderState {
        let value = sanitize_custom_tip(raw);
        let selection = self.selection.custom_edited(&self.custom_tip, &value);
        debug!(raw, value = %value, ?selection, "custom tip input");

        self.custom_tip = value;
        self.selection = selection;
        self.render()
    }

    /// Handles a keystroke in the party size field.
    pub fn on_party_size_input(&mut self, raw: &str) -> RenderState {
        let value = sanitize_party_size(raw);
        debug!(raw, value = %value, "party size input");

        self.party_size = value;
        self.render()
    }

    /// Restores every field and the tip selection to their initial state.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::{TipForm, TipPresets};
    ///
    /// let mut form = TipForm::new(TipPresets::default());
    /// form.on_bill_input("0", 1);
    /// form.on_custom_tip_input("15");
    ///
    /// let render = form.on_reset();
    /// assert_eq!(render.bill, "");
    /// assert!(!render.bill_invalid);
    /// assert!(!render.custom_active);
    /// assert_eq!(render.outputs.total, "$0.00");
    /// ```
    pub fn on_reset(&mut self) -> RenderState {
        debug!("reset");

        *self = TipForm::new(self.presets.clone());
        self.render()
    }

    /// Dispatches a wire message to its handler.
    ///
    /// Fails only when a preset message names a percentage that is not one
    /// of the configured buttons; the state is untouched in that case.
    pub fn dispatch(&mut self, message: &FormMessage) -> CoreResult<RenderState> {
        let render = match message {
            FormMessage::BillInput { raw, caret } => {
                let caret = caret.unwrap_or_else(|| raw.chars().count());
                self.on_bill_input(raw, caret)
            }
            FormMessage::PartySizeInput { raw } => self.on_party_size_input(raw),
            FormMessage::CustomTipInput { raw } => self.on_custom_tip_input(raw),
            FormMessage::PresetSelected { percent } => {
                let preset = self.presets.get(*percent)?;
                self.on_tip_preset_selected(preset)
            }
            FormMessage::Reset => self.on_reset(),
        };

        Ok(render)
    }

    /// Current derived amounts.
    pub fn derived(&self) -> DerivedResult {
        derive(&self.bill, &self.party_size, self.selection)
    }

    /// Current validity flags.
    pub fn validity(&self) -> FieldValidity {
        FieldValidity::classify(&self.bill, &self.party_size)
    }

    /// Builds a render snapshot from the current state.
    pub fn render(&self) -> RenderState {
        let validity = self.validity();

        RenderState {
            bill: self.bill.clone(),
            bill_caret: self.bill_caret,
            party_size: self.party_size.clone(),
            custom_tip: self.custom_tip.clone(),
            presets: self.presets.percents().to_vec(),
            active_preset: self
                .selection
                .active_preset()
                .map(|preset| preset.percent().percent()),
            custom_active: self.selection.is_custom(),
            bill_invalid: validity.bill_invalid,
            party_size_invalid: validity.party_size_invalid,
            outputs: self.derived().displayed(),
        }
    }

    /// The configured preset buttons.
    pub fn presets(&self) -> &TipPresets {
        &self.presets
    }

    /// The active tip source.
    pub fn selection(&self) -> TipSelection {
        self.selection
    }

    pub fn bill(&self) -> &str {
        &self.bill
    }

    pub fn party_size(&self) -> &str {
        &self.party_size
    }

    pub fn custom_tip(&self) -> &str {
        &self.custom_tip
    }
}

impl Default for TipForm {
    fn default() -> Self {
        Self::new(TipPresets::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

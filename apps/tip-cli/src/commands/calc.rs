//! # One-Shot Calculation
//!
//! Fills a fresh form from command-line values and returns its render.
//! Values go through the same handlers as typed input, so `--bill 12,339`
//! is sanitized to `12.33` exactly as the form would do it.

use tip_core::{RenderState, TipForm, TipPresets};
use tracing::debug;

use crate::error::CliError;

/// The tip source for a calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TipChoice {
    /// A configured preset, by percentage.
    Preset(u16),
    /// Raw text for the custom tip field.
    Custom(String),
    /// No tip source; outputs stay at zero.
    None,
}

/// Inputs for a one-shot calculation.
#[derive(Debug, Clone)]
pub struct CalcRequest {
    pub bill: String,
    pub people: String,
    pub tip: TipChoice,
}

/// Runs the calculation against the given preset buttons.
pub fn calculate(request: &CalcRequest, presets: TipPresets) -> Result<RenderState, CliError> {
    let mut form = TipForm::new(presets);

    form.on_bill_input(&request.bill, request.bill.chars().count());
    match &request.tip {
        TipChoice::Preset(percent) => {
            let preset = form.presets().get(*percent)?;
            form.on_tip_preset_selected(preset);
        }
        TipChoice::Custom(raw) => {
            form.on_custom_tip_input(raw);
        }
        TipChoice::None => {}
    }
    let render = form.on_party_size_input(&request.people);

    debug!(total = %render.outputs.total, "calculation finished");
    Ok(render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn request(bill: &str, people: &str, tip: TipChoice) -> CalcRequest {
        CalcRequest {
            bill: bill.to_string(),
            people: people.to_string(),
            tip,
        }
    }

    #[test]
    fn test_preset_calculation() {
        let render = calculate(&request("100", "2", TipChoice::Preset(10)), TipPresets::default())
            .unwrap();
        assert_eq!(render.outputs.total, "$110.00");
        assert_eq!(render.outputs.tip_amount, "$10.00");
        assert_eq!(render.outputs.total_per_person, "$55.00");
        assert_eq!(render.outputs.tip_per_person, "$5.00");
        assert_eq!(render.active_preset, Some(10));
    }

    #[test]
    fn test_custom_calculation_is_sanitized() {
        let render = calculate(
            &request("12,339", "3", TipChoice::Custom("33".into())),
            TipPresets::default(),
        )
        .unwrap();
        assert_eq!(render.bill, "12.33");
        assert!(render.custom_active);
        assert_eq!(render.outputs.total, "$16.40");
    }

    #[test]
    fn test_no_tip_source() {
        let render = calculate(&request("100", "2", TipChoice::None), TipPresets::default())
            .unwrap();
        assert_eq!(render.outputs.total, "$0.00");
    }

    #[test]
    fn test_invalid_fields_are_flagged() {
        let render = calculate(&request("0", "0", TipChoice::Preset(5)), TipPresets::default())
            .unwrap();
        assert!(render.bill_invalid);
        assert!(render.party_size_invalid);
        assert_eq!(render.outputs.total_per_person, "$0.00");
    }

    #[test]
    fn test_unknown_preset() {
        let err = calculate(&request("100", "2", TipChoice::Preset(20)), TipPresets::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownPreset);
    }
}

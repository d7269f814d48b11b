//! # Calculator Module
//!
//! Gating and the derived value formulas.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  bill text ──┐                                                          │
//! │  party text ─┼──► gate() ──► None ──────────────► DerivedResult::zero() │
//! │  selection ──┘       │                                                  │
//! │                      └─► Some(CalculationInput) ──► calculate()         │
//! │                                                        │                │
//! │   total            = bill × (100 + tip%) / 100         │                │
//! │   tip amount       = bill × tip% / 100                 │                │
//! │   total per person = total / people   (min $0.01)      │                │
//! │   tip per person   = tip amount / people               ▼                │
//! │                                              ceiling to whole cents     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All four outputs are computed from the exact products and rounded up once,
//! so `tip amount` is always `total - bill` to the cent.

use serde::Serialize;
use tracing::warn;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{TipPercent, TipSelection};
use crate::validation::{is_bill_invalid, parse_party_size};

/// Smallest total per person ever shown when a real amount exists.
const MIN_TOTAL_PER_PERSON: Money = Money::from_cents(1);

// =============================================================================
// Inputs
// =============================================================================

/// A complete, valid snapshot of the three inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationInput {
    pub bill: Money,
    pub tip: TipPercent,
    pub party_size: u16,
}

impl CalculationInput {
    /// Checks the preconditions for real values.
    ///
    /// Requires a non-empty, non-invalid bill that parses, a non-empty valid
    /// party size, and an active tip source.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::calculator::CalculationInput;
    /// use tip_core::{TipPercent, TipSelection};
    ///
    /// let custom = TipSelection::Custom(TipPercent::new(30));
    /// assert!(CalculationInput::gate("50", "4", custom).is_some());
    /// assert!(CalculationInput::gate("", "4", custom).is_none());
    /// assert!(CalculationInput::gate("0", "4", custom).is_none());
    /// assert!(CalculationInput::gate("50", "0", custom).is_none());
    /// assert!(CalculationInput::gate("50", "4", TipSelection::Unselected).is_none());
    /// ```
    pub fn gate(bill: &str, party_size: &str, selection: TipSelection) -> Option<Self> {
        if bill.is_empty() || is_bill_invalid(bill) {
            return None;
        }
        let bill = Money::parse_decimal(bill)?;
        let party_size = parse_party_size(party_size)?;
        let tip = selection.active_percent()?;

        Some(CalculationInput {
            bill,
            tip,
            party_size,
        })
    }
}

// =============================================================================
// Outputs
// =============================================================================

/// The four derived amounts. Either all calculated or all zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedResult {
    pub total: Money,
    pub tip_amount: Money,
    pub total_per_person: Money,
    pub tip_per_person: Money,
}

impl DerivedResult {
    /// The all-zero result shown while inputs are incomplete or invalid.
    #[inline]
    pub const fn zero() -> Self {
        DerivedResult {
            total: Money::zero(),
            tip_amount: Money::zero(),
            total_per_person: Money::zero(),
            tip_per_person: Money::zero(),
        }
    }

    /// Renders all four amounts with the money formatter.
    pub fn displayed(&self) -> DisplayedResult {
        DisplayedResult {
            total: self.total.to_string(),
            tip_amount: self.tip_amount.to_string(),
            total_per_person: self.total_per_person.to_string(),
            tip_per_person: self.tip_per_person.to_string(),
        }
    }
}

/// The four output strings handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DisplayedResult {
    pub total: String,
    pub tip_amount: String,
    pub total_per_person: String,
    pub tip_per_person: String,
}

// =============================================================================
// Formulas
// =============================================================================

/// Applies the formulas to a gated snapshot.
///
/// Returns `None` only if the arithmetic would overflow, which field limits
/// rule out.
///
/// ## Example
/// ```rust
/// use tip_core::calculator::{calculate, CalculationInput};
/// use tip_core::{Money, TipPercent};
///
/// let input = CalculationInput {
///     bill: Money::from_cents(1233),
///     tip: TipPercent::new(33),
///     party_size: 3,
/// };
/// let result = calculate(&input).unwrap();
/// assert_eq!(result.total.to_string(), "$16.40");
/// assert_eq!(result.total_per_person.to_string(), "$5.47");
/// assert_eq!(result.tip_per_person.to_string(), "$1.36");
/// ```
pub fn calculate(input: &CalculationInput) -> Option<DerivedResult> {
    let bill = i128::from(input.bill.cents());
    let tip = i128::from(input.tip.percent());
    let people = i128::from(input.party_size);

    // Both products are in hundredths of a cent.
    let total_scaled = bill.checked_mul(100 + tip)?;
    let tip_scaled = bill.checked_mul(tip)?;
    let per_person_den = people.checked_mul(100)?;

    let total = Money::ceil_ratio(total_scaled, 100)?;
    let tip_amount = Money::ceil_ratio(tip_scaled, 100)?;

    // A per-person total of a cent or less still shows $0.01. The tip share
    // has no such floor.
    let total_per_person = if total_scaled <= per_person_den {
        MIN_TOTAL_PER_PERSON
    } else {
        Money::ceil_ratio(total_scaled, per_person_den)?
    };
    let tip_per_person = Money::ceil_ratio(tip_scaled, per_person_den)?;

    Some(DerivedResult {
        total,
        tip_amount,
        total_per_person,
        tip_per_person,
    })
}

/// Gates and calculates in one step: real values when every precondition
/// holds, otherwise [`DerivedResult::zero`].
pub fn derive(bill: &str, party_size: &str, selection: TipSelection) -> DerivedResult {
    let Some(input) = CalculationInput::gate(bill, party_size, selection) else {
        return DerivedResult::zero();
    };

    calculate(&input).unwrap_or_else(|| {
        warn!(?input, "derived values out of range, showing zero");
        DerivedResult::zero()
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TipPresets;

    fn preset(percent: u16) -> TipSelection {
        TipSelection::Preset(TipPresets::default().get(percent).unwrap())
    }

    fn custom(percent: u16) -> TipSelection {
        TipSelection::Custom(TipPercent::new(percent))
    }

    #[test]
    fn test_preset_scenario() {
        let shown = derive("100", "2", preset(10)).displayed();
        assert_eq!(shown.total, "$110.00");
        assert_eq!(shown.tip_amount, "$10.00");
        assert_eq!(shown.total_per_person, "$55.00");
        assert_eq!(shown.tip_per_person, "$5.00");
    }

    #[test]
    fn test_custom_scenario() {
        let shown = derive("50", "4", custom(30)).displayed();
        assert_eq!(shown.total, "$65.00");
        assert_eq!(shown.tip_amount, "$15.00");
        assert_eq!(shown.total_per_person, "$16.25");
        assert_eq!(shown.tip_per_person, "$3.75");
    }

    #[test]
    fn test_ceiling_scenario() {
        // 12.33 × 1.33 = 16.3989, /3 = 5.4663; tip 4.0689, /3 = 1.3563
        let shown = derive("12.33", "3", custom(33)).displayed();
        assert_eq!(shown.total, "$16.40");
        assert_eq!(shown.tip_amount, "$4.07");
        assert_eq!(shown.total_per_person, "$5.47");
        assert_eq!(shown.tip_per_person, "$1.36");
    }

    #[test]
    fn test_tip_amount_is_total_minus_bill() {
        for (bill, tip) in [("12.33", 33), ("0.01", 5), ("99999.99", 999), ("7.77", 17)] {
            let input = CalculationInput::gate(bill, "1", custom(tip)).unwrap();
            let result = calculate(&input).unwrap();
            assert_eq!(result.tip_amount, result.total - input.bill, "bill {bill} tip {tip}");
        }
    }

    #[test]
    fn test_no_float_artifacts_on_exact_values() {
        // 100 × 1.1 is 110.00000000000001 in binary floating point.
        assert_eq!(derive("100", "1", preset(10)).total, Money::from_cents(11_000));
        assert_eq!(derive("0.1", "1", custom(200)).total, Money::from_cents(30));
    }

    #[test]
    fn test_gate_closed_gives_zero() {
        let zero = DerivedResult::zero();
        assert_eq!(derive("", "2", preset(10)), zero);
        assert_eq!(derive("0", "2", preset(10)), zero);
        assert_eq!(derive(".", "2", preset(10)), zero);
        assert_eq!(derive("100", "", preset(10)), zero);
        assert_eq!(derive("100", "0", preset(10)), zero);
        assert_eq!(derive("100", "2", TipSelection::Unselected), zero);
        assert_eq!(zero.displayed().total, "$0.00");
    }

    #[test]
    fn test_total_per_person_floor() {
        // $0.01 × 1.05 / 999 people is far below a cent.
        let result = derive("0.01", "999", preset(5));
        assert_eq!(result.total_per_person, Money::from_cents(1));

        // A 0 % custom tip shows no tip share, but the per-person total keeps its floor.
        let result = derive("0.01", "999", custom(0));
        assert_eq!(result.total_per_person, Money::from_cents(1));
        assert_eq!(result.tip_per_person, Money::zero());
        assert_eq!(result.tip_amount, Money::zero());
    }

    #[test]
    fn test_largest_inputs() {
        let shown = derive("99999.99", "1", custom(999)).displayed();
        // 99999.99 × 10.99 = 1098999.8901; tip 998999.9001
        assert_eq!(shown.total, "$1098999.90");
        assert_eq!(shown.tip_amount, "$998999.91");
    }

    #[test]
    fn test_displayed_serializes_camel_case() {
        let json = serde_json::to_value(DerivedResult::zero().displayed()).unwrap();
        assert_eq!(json["totalPerPerson"], "$0.00");
        assert_eq!(json["tipPerPerson"], "$0.00");
    }
}

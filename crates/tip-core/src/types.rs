//! # Domain Types
//!
//! Tip sources and the tip selection state machine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   TipPercent    │   │   TipPresets    │   │  TipSelection   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  u16 (0..=999)  │   │  [5,10,15,...]  │   │  Unselected     │       │
//! │  │  15 = 15%       │   │  validated set  │   │  Preset(p)      │       │
//! │  └─────────────────┘   └────────┬────────┘   │  Custom(v)      │       │
//! │                                 │ get(p)     └─────────────────┘       │
//! │                                 ▼                                       │
//! │                        ┌─────────────────┐                              │
//! │                        │    TipPreset    │  only obtainable from a      │
//! │                        │  one button     │  configured preset set       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_tip_presets;
use crate::DEFAULT_TIP_PRESETS;

// =============================================================================
// Tip Percent
// =============================================================================

/// A whole tip percentage. `15` means 15 % of the bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TipPercent(u16);

impl TipPercent {
    /// Creates a tip percentage.
    #[inline]
    pub const fn new(percent: u16) -> Self {
        TipPercent(percent)
    }

    /// Reads a sanitized digit string such as `"305"`.
    ///
    /// Returns `None` for empty text or anything that is not plain digits.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(TipPercent)
    }

    /// Returns the whole percentage.
    #[inline]
    pub const fn percent(&self) -> u16 {
        self.0
    }
}

// =============================================================================
// Tip Presets
// =============================================================================

/// One preset tip button.
///
/// Only [`TipPresets::get`] and [`TipPresets::iter`] hand these out, so a
/// `TipPreset` always belongs to the configured set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TipPreset(TipPercent);

impl TipPreset {
    /// Returns the percentage this button carries.
    #[inline]
    pub const fn percent(&self) -> TipPercent {
        self.0
    }
}

/// The ordered set of preset tip buttons.
///
/// ## Invariants
/// - At least one preset
/// - Every preset is 1..=999 percent
/// - No duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipPresets(Vec<u16>);

impl TipPresets {
    /// Builds a validated preset set, keeping the given order.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::TipPresets;
    ///
    /// assert!(TipPresets::new(vec![10, 18, 20]).is_ok());
    /// assert!(TipPresets::new(vec![]).is_err());
    /// assert!(TipPresets::new(vec![10, 10]).is_err());
    /// ```
    pub fn new(percents: Vec<u16>) -> CoreResult<Self> {
        validate_tip_presets(&percents)?;
        Ok(TipPresets(percents))
    }

    /// Resolves a button by its percentage.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::TipPresets;
    ///
    /// let presets = TipPresets::default();
    /// assert_eq!(presets.get(15).unwrap().percent().percent(), 15);
    /// assert!(presets.get(20).is_err());
    /// ```
    pub fn get(&self, percent: u16) -> CoreResult<TipPreset> {
        if self.0.contains(&percent) {
            Ok(TipPreset(TipPercent(percent)))
        } else {
            Err(CoreError::UnknownPreset {
                percent,
                allowed: self.0.clone(),
            })
        }
    }

    /// Iterates the buttons in display order.
    pub fn iter(&self) -> impl Iterator<Item = TipPreset> + '_ {
        self.0.iter().map(|p| TipPreset(TipPercent(*p)))
    }

    /// Returns the raw percentages in display order.
    pub fn percents(&self) -> &[u16] {
        &self.0
    }
}

impl Default for TipPresets {
    fn default() -> Self {
        TipPresets(DEFAULT_TIP_PRESETS.to_vec())
    }
}

// =============================================================================
// Tip Selection
// =============================================================================

/// Which single tip source is active.
///
/// ## State Machine
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │              click preset p                 type "v" (non-empty)        │
/// │  ┌────────────┐ ───────────► ┌───────────┐ ───────────► ┌───────────┐  │
/// │  │ Unselected │              │ Preset(p) │              │ Custom(v) │  │
/// │  └────────────┘ ◄─────────── └───────────┘ ◄─────────── └───────────┘  │
/// │        ▲           reset          │ ▲       click preset      │        │
/// │        │                          └─┘ click p again           │        │
/// │        │                            (stays active)            │        │
/// │        └──────────────────────────────────────────────────────┘        │
/// │                     custom field cleared / reset                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Clearing the custom field never brings back an earlier preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "percent", rename_all = "camelCase")]
pub enum TipSelection {
    /// No tip source is active.
    #[default]
    Unselected,
    /// A preset button is active.
    Preset(TipPreset),
    /// The custom field supplies the tip.
    Custom(TipPercent),
}

impl TipSelection {
    /// A preset button was clicked. Re-clicking the active preset keeps it active.
    #[inline]
    pub const fn preset_clicked(self, preset: TipPreset) -> Self {
        TipSelection::Preset(preset)
    }

    /// The custom field changed from `previous` to `sanitized`.
    ///
    /// - non-empty → `Custom(v)`, whatever was active before
    /// - non-empty → empty → `Unselected`
    /// - empty → empty (every typed character was filtered) → unchanged
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::{TipPercent, TipPresets, TipSelection};
    ///
    /// let fifteen = TipPresets::default().get(15).unwrap();
    /// let state = TipSelection::Unselected.preset_clicked(fifteen);
    ///
    /// // "abc" filtered to nothing: the preset stays active
    /// assert_eq!(state.custom_edited("", ""), state);
    ///
    /// let state = state.custom_edited("", "12");
    /// assert_eq!(state, TipSelection::Custom(TipPercent::new(12)));
    ///
    /// // Clearing does not restore the 15% preset
    /// assert_eq!(state.custom_edited("12", ""), TipSelection::Unselected);
    /// ```
    pub fn custom_edited(self, previous: &str, sanitized: &str) -> Self {
        if sanitized.is_empty() {
            if previous.is_empty() {
                self
            } else {
                TipSelection::Unselected
            }
        } else {
            match TipPercent::from_digits(sanitized) {
                Some(percent) => TipSelection::Custom(percent),
                None => TipSelection::Unselected,
            }
        }
    }

    /// The percentage currently supplying the tip, if any.
    pub const fn active_percent(&self) -> Option<TipPercent> {
        match self {
            TipSelection::Unselected => None,
            TipSelection::Preset(preset) => Some(preset.percent()),
            TipSelection::Custom(percent) => Some(*percent),
        }
    }

    /// The active preset button, if a preset is the tip source.
    pub const fn active_preset(&self) -> Option<TipPreset> {
        match self {
            TipSelection::Preset(preset) => Some(*preset),
            _ => None,
        }
    }

    /// Whether the custom field is the tip source.
    #[inline]
    pub const fn is_custom(&self) -> bool {
        matches!(self, TipSelection::Custom(_))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_percent_from_digits() {
        assert_eq!(TipPercent::from_digits("305"), Some(TipPercent::new(305)));
        assert_eq!(TipPercent::from_digits("007"), Some(TipPercent::new(7)));
        assert_eq!(TipPercent::from_digits("0"), Some(TipPercent::new(0)));
        assert_eq!(TipPercent::from_digits(""), None);
        assert_eq!(TipPercent::from_digits("-5"), None);
        assert_eq!(TipPercent::from_digits("5.5"), None);
    }

    #[test]
    fn test_default_presets() {
        let presets = TipPresets::default();
        assert_eq!(presets.percents(), &[5, 10, 15, 25, 50]);
        assert_eq!(presets.iter().count(), 5);
    }

    #[test]
    fn test_unknown_preset() {
        let err = TipPresets::default().get(20).unwrap_err();
        assert!(matches!(err, CoreError::UnknownPreset { percent: 20, .. }));
    }

    #[test]
    fn test_selection_default() {
        assert_eq!(TipSelection::default(), TipSelection::Unselected);
        assert_eq!(TipSelection::default().active_percent(), None);
    }

    #[test]
    fn test_preset_click_is_idempotent() {
        let ten = TipPresets::default().get(10).unwrap();
        let once = TipSelection::Unselected.preset_clicked(ten);
        let twice = once.preset_clicked(ten);
        assert_eq!(once, twice);
        assert_eq!(twice.active_preset(), Some(ten));
    }

    #[test]
    fn test_preset_replaces_custom() {
        let five = TipPresets::default().get(5).unwrap();
        let state = TipSelection::Custom(TipPercent::new(30)).preset_clicked(five);
        assert_eq!(state, TipSelection::Preset(five));
        assert!(!state.is_custom());
    }

    #[test]
    fn test_custom_edit_transitions() {
        let state = TipSelection::Unselected.custom_edited("", "7");
        assert!(state.is_custom());
        assert_eq!(state.active_percent(), Some(TipPercent::new(7)));

        let state = state.custom_edited("7", "75");
        assert_eq!(state.active_percent(), Some(TipPercent::new(75)));

        assert_eq!(state.custom_edited("75", ""), TipSelection::Unselected);
        assert_eq!(
            TipSelection::Unselected.custom_edited("", ""),
            TipSelection::Unselected
        );
    }

    #[test]
    fn test_selection_serializes_tagged() {
        let ten = TipPresets::default().get(10).unwrap();
        let json = serde_json::to_string(&TipSelection::Preset(ten)).unwrap();
        assert_eq!(json, r#"{"kind":"preset","percent":10}"#);

        let json = serde_json::to_string(&TipSelection::Unselected).unwrap();
        assert_eq!(json, r#"{"kind":"unselected"}"#);
    }
}

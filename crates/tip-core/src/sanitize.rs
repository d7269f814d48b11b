//! # Sanitize Module
//!
//! Keystroke filters that keep each free-text field well-formed while the
//! user types. Filters never reject a keystroke; they only drop what does
//! not fit.
//!
//! ## Bill Pipeline
//! ```text
//! raw "1,2a3.4.56" caret 10
//!   │
//!   ├─ 1. first ',' → '.'          "1.2a3.4.56"
//!   ├─ 2. keep digits and '.'      "1.23.4.56"
//!   ├─ 3. keep the first '.' only  "1.23456"
//!   ├─ 4. integer part ≤ 5 digits  "1"
//!   ├─ 5. fraction part ≤ 2 digits "23"
//!   ├─ 6. reassemble               "1.23"
//!   └─ 7. changed → caret clamped  4
//! ```
//!
//! Only the full pipeline above is supported. Truncating the fraction
//! without collapsing extra separators or restoring the caret leaves
//! fields such as `"3.3."` behind and is not offered.

use crate::{
    MAX_BILL_FRACTION_DIGITS, MAX_BILL_INTEGER_DIGITS, MAX_CUSTOM_TIP_DIGITS,
    MAX_PARTY_SIZE_DIGITS,
};

/// A sanitized field value and where the caret belongs in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    /// The well-formed field text.
    pub value: String,
    /// Caret offset in characters, always within `value`.
    pub caret: usize,
}

// =============================================================================
// Bill Amount
// =============================================================================

/// Sanitizes raw bill text.
///
/// `caret` is the character offset of the caret in `raw`. When the text had
/// to change, the caret keeps its offset, clamped to the new length.
///
/// ## Example
/// ```rust
/// use tip_core::sanitize::sanitize_bill;
///
/// assert_eq!(sanitize_bill("3,3", 3).value, "3.3");
/// assert_eq!(sanitize_bill("3.3.", 4).value, "3.3");
/// assert_eq!(sanitize_bill("3.333", 5).value, "3.33");
/// assert_eq!(sanitize_bill("100000", 6).value, "10000");
/// assert_eq!(sanitize_bill("abc", 3).value, "");
/// ```
pub fn sanitize_bill(raw: &str, caret: usize) -> Sanitized {
    let normalized = raw.replacen(',', ".", 1);

    let kept: String = normalized
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let value = match kept.split_once('.') {
        Some((int_part, rest)) => {
            let fraction: String = rest
                .chars()
                .filter(|c| *c != '.')
                .take(MAX_BILL_FRACTION_DIGITS)
                .collect();
            format!("{}.{}", truncate(int_part, MAX_BILL_INTEGER_DIGITS), fraction)
        }
        None => truncate(&kept, MAX_BILL_INTEGER_DIGITS).to_string(),
    };

    let caret = if value == raw {
        caret.min(raw.chars().count())
    } else {
        caret.min(value.len())
    };

    Sanitized { value, caret }
}

/// Cuts ASCII digit text to at most `max` characters.
fn truncate(digits: &str, max: usize) -> &str {
    &digits[..digits.len().min(max)]
}

// =============================================================================
// Digit-only Fields
// =============================================================================

/// Keeps ASCII digits only, at most `max_len` of them.
///
/// A leading `-` is just another non-digit, so `"-1"` becomes `"1"`.
///
/// ## Example
/// ```rust
/// use tip_core::sanitize::sanitize_digits;
///
/// assert_eq!(sanitize_digits("30.5", 3), "305");
/// assert_eq!(sanitize_digits("9999", 3), "999");
/// assert_eq!(sanitize_digits("-1", 3), "1");
/// ```
pub fn sanitize_digits(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(max_len)
        .collect()
}

/// Sanitizes raw party size text.
pub fn sanitize_party_size(raw: &str) -> String {
    sanitize_digits(raw, MAX_PARTY_SIZE_DIGITS)
}

/// Sanitizes raw custom tip text.
pub fn sanitize_custom_tip(raw: &str) -> String {
    sanitize_digits(raw, MAX_CUSTOM_TIP_DIGITS)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Every string up to `max_len` characters over `alphabet`.
    fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
        let mut out = vec![String::new()];
        let mut frontier = vec![String::new()];
        for _ in 0..max_len {
            let mut next = Vec::new();
            for prefix in &frontier {
                for c in alphabet {
                    let mut s = prefix.clone();
                    s.push(*c);
                    next.push(s);
                }
            }
            out.extend(next.iter().cloned());
            frontier = next;
        }
        out
    }

    fn assert_bill_shape(value: &str, raw: &str) {
        assert!(value.chars().all(|c| c.is_ascii_digit() || c == '.'), "{raw:?} -> {value:?}");
        assert!(value.matches('.').count() <= 1, "{raw:?} -> {value:?}");
        let (int_part, frac_part) = value.split_once('.').unwrap_or((value, ""));
        assert!(int_part.len() <= MAX_BILL_INTEGER_DIGITS, "{raw:?} -> {value:?}");
        assert!(frac_part.len() <= MAX_BILL_FRACTION_DIGITS, "{raw:?} -> {value:?}");
    }

    #[test]
    fn test_bill_keeps_well_formed_input() {
        for raw in ["", "3", "3.3", "3.33", "99999.99", "0", ".", ".5", "12."] {
            let result = sanitize_bill(raw, raw.len());
            assert_eq!(result.value, raw);
            assert_eq!(result.caret, raw.len());
        }
    }

    #[test]
    fn test_bill_result_carries_value_and_caret() {
        assert_eq!(
            sanitize_bill("12x34", 3),
            Sanitized {
                value: "1234".to_string(),
                caret: 3,
            }
        );
    }

    #[test]
    fn test_bill_separator_normalization() {
        assert_eq!(sanitize_bill("3,3", 3).value, "3.3");
        assert_eq!(sanitize_bill(",5", 2).value, ".5");
        // Only the first comma becomes a separator; later ones are stripped.
        assert_eq!(sanitize_bill("1,2,3", 5).value, "1.23");
        assert_eq!(sanitize_bill("1.2,3", 5).value, "1.23");
    }

    #[test]
    fn test_bill_single_separator() {
        assert_eq!(sanitize_bill("3.3.", 4).value, "3.3");
        assert_eq!(sanitize_bill("1..2", 4).value, "1.2");
        assert_eq!(sanitize_bill("..", 2).value, ".");
    }

    #[test]
    fn test_bill_length_limits() {
        assert_eq!(sanitize_bill("3.333", 5).value, "3.33");
        assert_eq!(sanitize_bill("100000", 6).value, "10000");
        assert_eq!(sanitize_bill("999999.99", 9).value, "99999.99");
        assert_eq!(sanitize_bill("123456.789", 10).value, "12345.78");
    }

    #[test]
    fn test_bill_strips_foreign_characters() {
        assert_eq!(sanitize_bill("abc", 3).value, "");
        assert_eq!(sanitize_bill("-12", 3).value, "12");
        assert_eq!(sanitize_bill("$ 1 2", 5).value, "12");
        assert_eq!(sanitize_bill("1e5", 3).value, "15");
        assert_eq!(sanitize_bill("٣4", 2).value, "4");
    }

    #[test]
    fn test_bill_caret_restored_and_clamped() {
        // Typing 'x' in the middle of "12|34": caret stays at offset 3.
        let result = sanitize_bill("12x34", 3);
        assert_eq!(result.value, "1234");
        assert_eq!(result.caret, 3);

        // Truncation in front of the caret: clamp to the end.
        let result = sanitize_bill("123456", 6);
        assert_eq!(result.value, "12345");
        assert_eq!(result.caret, 5);

        // Caret past the raw text is clamped even when nothing changed.
        assert_eq!(sanitize_bill("12", 9).caret, 2);
    }

    #[test]
    fn test_bill_shape_holds_for_all_short_inputs() {
        let alphabet = ['1', '0', '9', '.', ',', '-', 'a', ' '];
        for raw in all_strings(&alphabet, 5) {
            let result = sanitize_bill(&raw, raw.chars().count());
            assert_bill_shape(&result.value, &raw);
            assert!(result.caret <= result.value.len());
        }
    }

    #[test]
    fn test_bill_shape_holds_for_long_inputs() {
        let inputs = [
            "1234567890.1234567890",
            ",,,,,,,,,,",
            "..........1",
            "9.9.9.9.9.9.9",
            "€1.234,56",
        ];
        for raw in inputs {
            assert_bill_shape(&sanitize_bill(raw, 0).value, raw);
        }
    }

    #[test]
    fn test_digit_fields() {
        assert_eq!(sanitize_party_size("2"), "2");
        assert_eq!(sanitize_party_size("3.5"), "35");
        assert_eq!(sanitize_party_size("1000"), "100");
        assert_eq!(sanitize_party_size("abc"), "");
        assert_eq!(sanitize_party_size("-1"), "1");

        assert_eq!(sanitize_custom_tip("30.5"), "305");
        assert_eq!(sanitize_custom_tip("9999"), "999");
        assert_eq!(sanitize_custom_tip("abc"), "");
    }

    #[test]
    fn test_digit_shape_holds_for_all_short_inputs() {
        let alphabet = ['1', '0', '.', ',', '-', 'x'];
        for raw in all_strings(&alphabet, 5) {
            for value in [sanitize_party_size(&raw), sanitize_custom_tip(&raw)] {
                assert!(value.len() <= 3, "{raw:?} -> {value:?}");
                assert!(value.bytes().all(|b| b.is_ascii_digit()), "{raw:?} -> {value:?}");
            }
        }
    }
}

//! # Money Module
//!
//! Provides the `Money` type and the currency formatter used for all four
//! derived outputs.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    100 × 1.1 = 110.00000000000001                                       │
//! │    ceil(110.00000000000001 × 100) / 100 = 110.01  ❌ WRONG!             │
//! │                                                                         │
//! │  OUR SOLUTION: exact ratios, one rounding step                          │
//! │    Field text parses into an exact rust_decimal `Decimal`               │
//! │    10000 cents × 110 / 100 = 11000 cents exactly                        │
//! │    Only the final division rounds, and it rounds UP (ceiling)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cent Policy
//! Every amount shown to the user is rounded **up** (toward positive
//! infinity) to whole cents. `$16.3989` is shown as `$16.40`.
//!
//! ## Usage
//! ```rust
//! use tip_core::money::{present_amount, Money};
//!
//! let tip = Money::ceil_ratio(40_689, 300).unwrap(); // 135.63 cents
//! assert_eq!(tip.to_string(), "$1.36");
//!
//! assert_eq!(present_amount("16.3989"), "$16.40");
//! assert_eq!(present_amount("abc"), "Not a number");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use ts_rs::TS;

/// Sentinel printed when the formatter is handed something that is not a number.
pub const NOT_A_NUMBER: &str = "Not a number";

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: the formatter also renders negative amounts
/// - **Single field tuple struct**: zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// Bill text "12.33" ──► Money(1233) ──► calculator ──► DerivedResult
///                                                         │
///                                   "$16.40" ◄── Display ─┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::money::Money;
    ///
    /// let bill = Money::from_cents(1099); // $10.99
    /// assert_eq!(bill.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Builds Money from an exact ratio of cents, rounding **up** to a whole cent.
    ///
    /// `numerator / denominator` is an amount expressed in cents. This is the
    /// single place where the cent policy is applied.
    ///
    /// Returns `None` for a zero denominator or when the result does not fit.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::money::Money;
    ///
    /// // 163989 / 100 = 1639.89 cents → 1640 cents
    /// assert_eq!(Money::ceil_ratio(163_989, 100), Some(Money::from_cents(1640)));
    /// // Negative values round toward zero (still "up")
    /// assert_eq!(Money::ceil_ratio(-150, 100), Some(Money::from_cents(-1)));
    /// assert_eq!(Money::ceil_ratio(1, 0), None);
    /// ```
    pub fn ceil_ratio(numerator: i128, denominator: i128) -> Option<Money> {
        if denominator == 0 {
            return None;
        }
        let (num, den) = if denominator < 0 {
            (numerator.checked_neg()?, denominator.checked_neg()?)
        } else {
            (numerator, denominator)
        };

        // Integer division truncates toward zero, which is already the
        // ceiling for negative quotients.
        let quotient = num / den;
        let cents = if num % den > 0 { quotient + 1 } else { quotient };

        i64::try_from(cents).ok().map(Money)
    }

    /// Parses decimal text (`"12.33"`, `"-0.5"`, `".75"`) into Money, rounding
    /// any sub-cent remainder up.
    ///
    /// Only plain decimal text counts: an optional sign, digits, and at most
    /// one `.`, with at least one digit somewhere. Empty text, exponents
    /// (`"1e3"`), digit separators and words like `"Infinity"` return `None`.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("12.33"), Some(Money::from_cents(1233)));
    /// assert_eq!(Money::parse_decimal("12."), Some(Money::from_cents(1200)));
    /// assert_eq!(Money::parse_decimal("."), None);
    /// ```
    pub fn parse_decimal(text: &str) -> Option<Money> {
        let normalized = normalize_decimal_text(text)?;
        let amount = Decimal::from_str_exact(&normalized).ok()?;

        let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity);
        cents.rescale(2);

        i64::try_from(cents.mantissa()).ok().map(Money)
    }
}

/// Trims plain decimal text and fills in a bare side of the dot, so
/// `"12."` becomes `"12"` and `"-.5"` becomes `"-0.5"`.
fn normalize_decimal_text(text: &str) -> Option<String> {
    let text = text.trim();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };

    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    if frac_part.is_empty() {
        Some(format!("{sign}{int_part}"))
    } else {
        Some(format!("{sign}{int_part}.{frac_part}"))
    }
}

// =============================================================================
// Formatter
// =============================================================================

/// Formats arbitrary amount text as a `$D.DD` currency string.
///
/// Entry point for values that did not come through
/// the calculator: anything that is not a number comes back as
/// [`NOT_A_NUMBER`] instead of propagating garbage to the display.
///
/// "A number" means plain decimal text as accepted by
/// [`Money::parse_decimal`]. Empty text and exponent notation such as
/// `"1e3"` are not numbers here.
///
/// ## Example
/// ```rust
/// use tip_core::money::{present_amount, NOT_A_NUMBER};
///
/// assert_eq!(present_amount("110"), "$110.00");
/// assert_eq!(present_amount("5.4663"), "$5.47");
/// assert_eq!(present_amount("NaN"), NOT_A_NUMBER);
/// ```
pub fn present_amount(text: &str) -> String {
    match Money::parse_decimal(text) {
        Some(money) => money.to_string(),
        None => NOT_A_NUMBER.to_string(),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `$D.DD`; negative values render as `-$D.DD`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

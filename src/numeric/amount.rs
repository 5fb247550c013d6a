// ============================================================================
// Naira Amounts
// Parsing, scaling and grouping helpers for Naira price values
// ============================================================================

use super::errors::{PriceError, PriceResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Currency glyph used when rendering amounts.
pub const NAIRA_SIGN: char = '₦';

/// Letter markers accepted in front of an amount, longest first.
const LETTER_MARKERS: [&str; 3] = ["naira", "ngn", "n"];

// ============================================================================
// Magnitude Suffix
// ============================================================================

/// Magnitude suffix used in abbreviated prices (`450k`, `1.5m`, `2b`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Magnitude {
    Thousand,
    Million,
    Billion,
}

impl Magnitude {
    /// Parse a suffix letter, case-insensitively.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(Magnitude::Thousand),
            'm' => Some(Magnitude::Million),
            'b' => Some(Magnitude::Billion),
            _ => None,
        }
    }

    /// Lower-case suffix letter
    pub fn letter(self) -> char {
        match self {
            Magnitude::Thousand => 'k',
            Magnitude::Million => 'm',
            Magnitude::Billion => 'b',
        }
    }

    /// Multiplier applied to the mantissa
    pub fn factor(self) -> Decimal {
        match self {
            Magnitude::Thousand => Decimal::from(1_000u32),
            Magnitude::Million => Decimal::from(1_000_000u32),
            Magnitude::Billion => Decimal::from(1_000_000_000u32),
        }
    }

    /// `mantissa × factor`, checked.
    pub fn scale(self, mantissa: Decimal) -> PriceResult<Decimal> {
        mantissa
            .checked_mul(self.factor())
            .ok_or(PriceError::Overflow)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse an unsigned decimal made only of ASCII digits and at most one dot.
pub fn parse_decimal(number: &str) -> PriceResult<Decimal> {
    let valid = !number.is_empty()
        && number.chars().all(|c| c.is_ascii_digit() || c == '.')
        && number.chars().filter(|c| *c == '.').count() <= 1
        && number.chars().any(|c| c.is_ascii_digit());
    if !valid {
        return Err(PriceError::InvalidInput);
    }

    Decimal::from_str(number).map_err(|e| match e {
        rust_decimal::Error::ExceedsMaximumPossibleValue => PriceError::Overflow,
        _ => PriceError::InvalidInput,
    })
}

/// Strip a leading currency marker (`₦`, `NGN`, `naira`, `N`) and any
/// whitespace after it.
pub fn strip_marker(text: &str) -> &str {
    let text = text.trim_start();
    if let Some(rest) = text.strip_prefix(NAIRA_SIGN) {
        return rest.trim_start();
    }
    for marker in LETTER_MARKERS {
        if let Some(head) = text.get(..marker.len()) {
            if head.eq_ignore_ascii_case(marker) {
                return text[marker.len()..].trim_start();
            }
        }
    }
    text
}

/// Parse an abbreviated amount such as `450k`, `₦ 1.5m`, `1,500k` or `2B`.
///
/// The leading decimal is taken from the first digit up to the first
/// character that is not a digit, dot or comma; commas are dropped. The next
/// non-space character must be a magnitude suffix.
pub fn parse_abbreviated(text: &str) -> PriceResult<Decimal> {
    let start = text
        .find(|c: char| c.is_ascii_digit())
        .ok_or(PriceError::InvalidInput)?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
        .unwrap_or(rest.len());

    let magnitude = rest[end..]
        .trim_start()
        .chars()
        .next()
        .and_then(Magnitude::from_char)
        .ok_or(PriceError::InvalidInput)?;

    magnitude.scale(parse_decimal(&rest[..end].replace(',', ""))?)
}

/// Parse a formatted amount such as `₦1,000,000`, `NGN 450,000` or `2500`.
pub fn parse_formatted(text: &str) -> PriceResult<Decimal> {
    let digits: String = strip_marker(text)
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    parse_decimal(&digits)
}

// ============================================================================
// Arithmetic & Formatting
// ============================================================================

/// Round `value` up to the next multiple of `step`.
pub fn ceil_to_multiple(value: Decimal, step: Decimal) -> PriceResult<Decimal> {
    if step <= Decimal::ZERO {
        return Err(PriceError::InvalidInput);
    }
    value
        .checked_div(step)
        .map(|q| q.ceil())
        .and_then(|q| q.checked_mul(step))
        .ok_or(PriceError::Overflow)
}

/// Round to `dp` decimal places, half away from zero, and drop trailing zeros.
pub fn round_trimmed(value: Decimal, dp: u32) -> Decimal {
    value
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Integer part of `value` with comma thousands separators (`1,500,000`).
pub fn group_thousands(value: Decimal) -> String {
    let digits = value.trunc().abs().normalize().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

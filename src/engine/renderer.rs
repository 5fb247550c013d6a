// ============================================================================
// Price Renderer
// Displays Naira values in full or abbreviated notation
// ============================================================================

use crate::domain::PriceExpression;
use crate::numeric::{group_thousands, round_trimmed, Magnitude, NAIRA_SIGN};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal places kept in abbreviated notation (`4.59m`)
const ABBREVIATED_DECIMALS: u32 = 2;

/// Display notation for a Naira value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RenderStyle {
    /// `₦1,500,000`
    Full,
    /// `1.5m`, `450k`; below ₦1,000 falls back to `Full`
    Abbreviated,
    /// Same as `Abbreviated`
    #[default]
    Auto,
}

/// Render `value` in the given style
pub fn render(value: Decimal, style: RenderStyle) -> String {
    match style {
        RenderStyle::Full => render_full(value),
        RenderStyle::Abbreviated | RenderStyle::Auto => render_abbreviated(value),
    }
}

/// `₦` plus the comma-grouped integer part; fractions are dropped.
pub fn render_full(value: Decimal) -> String {
    format!("{}{}", NAIRA_SIGN, group_thousands(value))
}

/// Largest tier (million, else thousand) with up to two trimmed decimals.
pub fn render_abbreviated(value: Decimal) -> String {
    abbreviate(value, false)
}

fn abbreviate(value: Decimal, uppercase: bool) -> String {
    let mut magnitude = if value >= Magnitude::Million.factor() {
        Magnitude::Million
    } else if value >= Magnitude::Thousand.factor() {
        Magnitude::Thousand
    } else {
        return render_full(value);
    };

    let mut mantissa = round_trimmed(value / magnitude.factor(), ABBREVIATED_DECIMALS);

    // 999,999 rounds to 1000k; say 1m instead
    if magnitude == Magnitude::Thousand && mantissa >= Magnitude::Thousand.factor() {
        magnitude = Magnitude::Million;
        mantissa = round_trimmed(value / magnitude.factor(), ABBREVIATED_DECIMALS);
    }

    let letter = if uppercase {
        magnitude.letter().to_ascii_uppercase()
    } else {
        magnitude.letter()
    };
    format!("{}{}", mantissa, letter)
}

/// Render `value` to replace `source`, echoing how the source was written.
///
/// Abbreviated sources give abbreviated output (same suffix case), anything
/// else gives full notation. A source marker is carried over when the
/// rendering has none of its own, and a label is kept as written.
pub fn render_replacement(source: &PriceExpression, value: Decimal) -> String {
    let rendered = match source.suffix {
        Some(suffix) => abbreviate(value, suffix.uppercase),
        None => render_full(value),
    };

    let mut replacement = String::with_capacity(source.raw.len() + rendered.len());
    if let Some(label) = &source.label {
        replacement.push_str(label);
    }
    if let Some(marker) = &source.marker {
        if !rendered.contains(NAIRA_SIGN) {
            replacement.push_str(marker);
        }
    }
    replacement.push_str(&rendered);
    replacement
}

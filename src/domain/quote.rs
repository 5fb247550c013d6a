// ============================================================================
// Price Quote Domain Model
// Per-price profit breakdown and the result of rewriting one caption
// ============================================================================

use super::CaptionId;
use crate::numeric::{group_thousands, PriceError, PriceResult, NAIRA_SIGN};
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Original and marked-up value of one detected price
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceQuote {
    /// Source expression as written
    pub raw: String,

    /// Text written in its place
    pub replacement: String,

    /// Vendor price
    pub original: Decimal,

    /// Price after markup and rounding
    pub marked_up: Decimal,
}

impl PriceQuote {
    pub fn new(
        raw: impl Into<String>,
        replacement: impl Into<String>,
        original: Decimal,
        marked_up: Decimal,
    ) -> Self {
        Self {
            raw: raw.into(),
            replacement: replacement.into(),
            original,
            marked_up,
        }
    }

    /// Reseller margin (marked_up - original)
    pub fn profit(&self) -> Decimal {
        self.marked_up - self.original
    }
}

impl fmt::Display for PriceQuote {
    /// Three-line profit report sent alongside a forwarded caption.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original: {}{}", NAIRA_SIGN, group_thousands(self.original))?;
        writeln!(f, "New Price: {}{}", NAIRA_SIGN, group_thousands(self.marked_up))?;
        write!(f, "Your Profit: {}{}", NAIRA_SIGN, group_thousands(self.profit()))
    }
}

/// Outcome of rewriting one caption
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rewrite<'a> {
    pub caption_id: CaptionId,

    /// Rewritten caption; borrowed from the input when nothing changed
    pub text: Cow<'a, str>,

    /// One quote per rewritten expression, in text order
    pub quotes: Vec<PriceQuote>,
}

impl Rewrite<'_> {
    pub fn is_changed(&self) -> bool {
        matches!(self.text, Cow::Owned(_))
    }

    /// Quote for the largest vendor price in the caption
    pub fn primary_quote(&self) -> Option<&PriceQuote> {
        self.quotes.iter().max_by_key(|q| q.original)
    }

    /// Sum of every quote's profit.
    ///
    /// # Errors
    /// Returns `Overflow` if the total does not fit a decimal.
    pub fn total_profit(&self) -> PriceResult<Decimal> {
        self.quotes
            .iter()
            .try_fold(Decimal::ZERO, |total, quote| total.checked_add(quote.profit()))
            .ok_or(PriceError::Overflow)
    }
}

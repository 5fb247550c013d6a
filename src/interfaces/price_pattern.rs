// ============================================================================
// Price Pattern Interface
// Defines the contract for pluggable price pattern families
// ============================================================================

use crate::domain::{NotationStyle, Suffix};
use crate::numeric::{parse_decimal, parse_formatted, PriceResult};
use rust_decimal::Decimal;
use std::ops::Range;

/// One syntactic match of a pattern family, before valuation.
///
/// All slices borrow from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch<'t> {
    /// Byte range of the whole match
    pub span: Range<usize>,

    /// Whole matched text
    pub raw: &'t str,

    /// Keyword plus separator (`Price: `)
    pub label: Option<&'t str>,

    /// Currency marker plus trailing whitespace (`₦ `, `NGN`)
    pub marker: Option<&'t str>,

    /// Number as written, possibly comma grouped
    pub number: &'t str,

    /// Magnitude suffix letter as written
    pub suffix: Option<char>,
}

impl RawMatch<'_> {
    pub fn suffix(&self) -> Option<Suffix> {
        self.suffix.and_then(Suffix::from_char)
    }
}

/// Strategy pattern interface for price pattern families
/// Implementations: Labeled, Abbreviated, Formatted
pub trait PricePattern: Send + Sync {
    /// Notation family this pattern detects, which is also its priority
    fn notation(&self) -> NotationStyle;

    /// Get the pattern name for logging
    fn name(&self) -> &str;

    /// Every non-overlapping match of this family, in text order
    fn find_matches<'t>(&self, text: &'t str) -> Vec<RawMatch<'t>>;

    /// Convert a match to its Naira value.
    ///
    /// Default implementation: commas are stripped, then a suffix multiplies
    /// the decimal, otherwise the digits are parsed as a whole amount.
    fn value(&self, m: &RawMatch<'_>) -> PriceResult<Decimal> {
        match m.suffix() {
            Some(suffix) => suffix.magnitude.scale(parse_decimal(&m.number.replace(',', ""))?),
            None => parse_formatted(m.number),
        }
    }
}

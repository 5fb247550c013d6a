// ============================================================================
// Price Expression Domain Model
// ============================================================================

use crate::numeric::{Magnitude, NAIRA_SIGN};
use rust_decimal::Decimal;
use std::ops::Range;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Identifies one caption passing through the rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaptionId(Uuid);

impl CaptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CaptionId {
    fn default() -> Self {
        Self::new()
    }
}

/// How a price was written in the source text.
///
/// The variant order is the detection priority: when two families match
/// overlapping text, the smaller variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NotationStyle {
    /// Introduced by a keyword: `Price: 450k`, `cost ₦1,200,000`
    Labeled,
    /// Magnitude suffix: `450k`, `₦1.5m`
    Abbreviated,
    /// Full digits, optionally grouped: `₦1,000,000`, `250000`
    Formatted,
}

/// Magnitude suffix as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Suffix {
    pub magnitude: Magnitude,
    pub uppercase: bool,
}

impl Suffix {
    pub fn from_char(c: char) -> Option<Self> {
        Magnitude::from_char(c).map(|magnitude| Self {
            magnitude,
            uppercase: c.is_ascii_uppercase(),
        })
    }
}

// ============================================================================
// Price Expression
// ============================================================================

/// A substring of caption text recognised as a Naira amount.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceExpression {
    /// Exact text as it appeared
    pub raw: String,

    /// Byte range of `raw` in the source text
    pub span: Range<usize>,

    /// Amount in Naira
    pub value: Decimal,

    /// Which pattern family produced it
    pub notation: NotationStyle,

    /// Keyword and separator as written (`Price: `), labeled expressions only
    pub label: Option<String>,

    /// Currency marker as written, with the whitespace that followed it
    pub marker: Option<String>,

    /// Magnitude suffix, if the amount was abbreviated
    pub suffix: Option<Suffix>,
}

impl PriceExpression {
    /// `(raw, value)` pair, the shape classification callers consume
    pub fn as_pair(&self) -> (&str, Decimal) {
        (&self.raw, self.value)
    }

    /// Whether the amount was written with a magnitude letter
    pub fn is_abbreviated(&self) -> bool {
        self.suffix.is_some()
    }

    /// Whether the amount carried a currency marker
    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }

    /// Whether the marker is the Naira glyph rather than a letter code
    pub fn has_naira_sign(&self) -> bool {
        self.marker
            .as_deref()
            .is_some_and(|m| m.starts_with(NAIRA_SIGN))
    }

    pub fn len(&self) -> usize {
        self.span.end - self.span.start
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Whether two expressions cover any common byte
    pub fn overlaps(&self, other: &PriceExpression) -> bool {
        self.span.start < other.span.end && other.span.start < self.span.end
    }
}

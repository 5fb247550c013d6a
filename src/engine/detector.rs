// ============================================================================
// Price Detector
// Merges pattern families into one non-overlapping list of valued prices
// ============================================================================

use super::patterns::default_patterns;
use crate::domain::{PriceExpression, DEFAULT_MINIMUM_PRICE};
use crate::interfaces::{PricePattern, RawMatch};
use crate::numeric::{PriceError, PriceResult};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::ops::Range;

/// A syntactic match whose amount was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discarded {
    pub raw: String,
    pub span: Range<usize>,
    pub reason: PriceError,
}

/// Result of one detection pass over a text
#[derive(Debug, Clone, Default)]
pub struct Scan {
    /// Accepted expressions, non-overlapping, in text order
    pub expressions: Vec<PriceExpression>,

    /// Rejected candidates, in pattern order
    pub discarded: Vec<Discarded>,
}

/// Detects Naira price expressions in free-form text.
///
/// Every pattern family is matched independently; candidates that value to
/// at least `minimum_price` are then merged into a single token list. Where
/// candidates overlap, the higher-priority family wins
/// (labeled > abbreviated > formatted), then the longer span, then the
/// leftmost one.
///
/// # Example
/// ```text
/// "Price: 450k"   labeled "Price: 450k"  ✓
///                 abbreviated "450k"     (overlaps, dropped)
/// ```
pub struct PriceDetector {
    patterns: Vec<Box<dyn PricePattern>>,
    minimum_price: Decimal,
}

impl PriceDetector {
    /// Detector with the standard pattern families
    pub fn new(minimum_price: Decimal) -> Self {
        Self::with_patterns(default_patterns(), minimum_price)
    }

    /// Detector with caller-supplied pattern families
    pub fn with_patterns(patterns: Vec<Box<dyn PricePattern>>, minimum_price: Decimal) -> Self {
        Self {
            patterns,
            minimum_price,
        }
    }

    pub fn minimum_price(&self) -> Decimal {
        self.minimum_price
    }

    /// Every price occurrence in `text`, in text order.
    ///
    /// Occurrences with equal values are all kept; use
    /// [`find_all_prices`](Self::find_all_prices) for the deduplicated view.
    pub fn scan(&self, text: &str) -> Scan {
        let mut candidates: SmallVec<[PriceExpression; 8]> = SmallVec::new();
        let mut discarded = Vec::new();

        for pattern in &self.patterns {
            for m in pattern.find_matches(text) {
                match self.accept(pattern.as_ref(), &m) {
                    Ok(expression) => candidates.push(expression),
                    Err(reason) => {
                        tracing::trace!(
                            pattern = pattern.name(),
                            raw = m.raw,
                            reason = reason.as_str(),
                            "Discarded price candidate"
                        );
                        discarded.push(Discarded {
                            raw: m.raw.to_string(),
                            span: m.span.clone(),
                            reason,
                        });
                    },
                }
            }
        }

        // Priority, then longest span, then leftmost
        candidates.sort_by(|a, b| {
            a.notation
                .cmp(&b.notation)
                .then_with(|| b.len().cmp(&a.len()))
                .then_with(|| a.span.start.cmp(&b.span.start))
        });

        let mut expressions: Vec<PriceExpression> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !expressions.iter().any(|kept| kept.overlaps(&candidate)) {
                expressions.push(candidate);
            }
        }
        expressions.sort_by_key(|e| e.span.start);

        Scan {
            expressions,
            discarded,
        }
    }

    /// Distinct-valued prices in `text`, largest first.
    ///
    /// When two expressions share a value, the one met first in detection
    /// order survives: family priority (labeled, abbreviated, formatted),
    /// then position within the family.
    pub fn find_all_prices(&self, text: &str) -> Vec<PriceExpression> {
        let mut expressions = self.scan(text).expressions;
        expressions.sort_by_key(|e| (e.notation, e.span.start));

        let mut seen: SmallVec<[Decimal; 8]> = SmallVec::new();
        let mut prices: Vec<PriceExpression> = expressions
            .into_iter()
            .filter(|e| {
                if seen.contains(&e.value) {
                    false
                } else {
                    seen.push(e.value);
                    true
                }
            })
            .collect();

        prices.sort_by(|a, b| b.value.cmp(&a.value));
        prices
    }

    /// Value a raw match and build its expression, or say why not.
    fn accept(&self, pattern: &dyn PricePattern, m: &RawMatch<'_>) -> PriceResult<PriceExpression> {
        let value = pattern.value(m)?;
        if value < self.minimum_price {
            return Err(PriceError::BelowMinimum);
        }

        Ok(PriceExpression {
            raw: m.raw.to_string(),
            span: m.span.clone(),
            value,
            notation: pattern.notation(),
            label: m.label.map(str::to_string),
            marker: m.marker.map(str::to_string),
            suffix: m.suffix(),
        })
    }
}

impl Default for PriceDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_PRICE)
    }
}

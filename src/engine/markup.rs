// ============================================================================
// Markup Policy
// Percentage markup with magnitude-tiered upward rounding
// ============================================================================

use crate::numeric::{ceil_to_multiple, PriceError, PriceResult};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::Serialize;

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
const THOUSAND: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);
const TEN_THOUSAND: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);
const HUNDRED_THOUSAND: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);
const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Reseller markup: `base × (1 + percent/100)`, rounded up to a step that
/// grows with the price.
///
/// | Marked-up value        | Rounded up to |
/// |------------------------|---------------|
/// | ≥ 1,000,000            | 10,000        |
/// | 100,000 – 999,999      | 1,000         |
/// | < 100,000              | 100           |
///
/// Rounding only ever goes up, so the margin is never eroded.
///
/// # Example
/// ```text
/// 2% of 450,000   → 459,000   → 459,000
/// 2% of 1,750,000 → 1,785,000 → 1,790,000
/// 2% of 85,000    → 86,700    → 86,700
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MarkupPolicy {
    percent: Decimal,
    multiplier: Decimal,
}

impl MarkupPolicy {
    /// # Errors
    /// Returns `NegativeMarkup` if `percent` is below zero.
    pub fn new(percent: Decimal) -> PriceResult<Self> {
        if percent < Decimal::ZERO {
            return Err(PriceError::NegativeMarkup);
        }

        let multiplier = percent
            .checked_div(HUNDRED)
            .and_then(|fraction| fraction.checked_add(Decimal::ONE))
            .ok_or(PriceError::Overflow)?;

        Ok(Self {
            percent,
            multiplier,
        })
    }

    pub fn percent(&self) -> Decimal {
        self.percent
    }

    /// Rounding step for a marked-up value
    pub fn rounding_step(value: Decimal) -> Decimal {
        if value >= MILLION {
            TEN_THOUSAND
        } else if value >= HUNDRED_THOUSAND {
            THOUSAND
        } else {
            HUNDRED
        }
    }

    /// Marked-up value before rounding
    pub fn raw_markup(&self, base: Decimal) -> PriceResult<Decimal> {
        base.checked_mul(self.multiplier)
            .ok_or(PriceError::Overflow)
    }

    /// Apply the markup and round up.
    ///
    /// # Errors
    /// Returns `Overflow` if the result does not fit a decimal.
    pub fn apply(&self, base: Decimal) -> PriceResult<Decimal> {
        let raw = self.raw_markup(base)?;
        ceil_to_multiple(raw, Self::rounding_step(raw))
    }
}

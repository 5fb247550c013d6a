// ============================================================================
// Rewriter Configuration
// Markup percentage and noise threshold for the price rewriter
// ============================================================================

use crate::numeric::{PriceError, PriceResult};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Markup applied when no percentage is configured (+2%)
pub const DEFAULT_MARKUP_PERCENT: Decimal = Decimal::from_parts(20, 0, 0, false, 1);

/// Smallest amount treated as a price; anything below is hardware noise (RAM, cores)
pub const DEFAULT_MINIMUM_PRICE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

// ============================================================================
// Rewriter Configuration
// ============================================================================

/// Process-wide configuration for a price rewriter.
///
/// Created once, validated, and then shared read-only by every caption the
/// rewriter processes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewriterConfig {
    /// Percentage added to every detected price (2.0 means +2%)
    pub markup_percent: Decimal,

    /// Detected amounts below this value are discarded
    pub minimum_price: Decimal,
}

impl RewriterConfig {
    /// Create a configuration with the given markup percentage
    pub fn new(markup_percent: Decimal) -> Self {
        Self {
            markup_percent,
            minimum_price: DEFAULT_MINIMUM_PRICE,
        }
    }

    /// Standard reseller configuration: +2% markup, ₦1,000 minimum
    pub fn standard() -> Self {
        Self::new(DEFAULT_MARKUP_PERCENT)
    }

    /// Builder method: Set markup percentage
    pub fn with_markup_percent(mut self, percent: Decimal) -> Self {
        self.markup_percent = percent;
        self
    }

    /// Builder method: Set minimum accepted price
    pub fn with_minimum_price(mut self, minimum: Decimal) -> Self {
        self.minimum_price = minimum;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> PriceResult<()> {
        // A negative markup would erode the reseller margin
        if self.markup_percent < Decimal::ZERO {
            return Err(PriceError::NegativeMarkup);
        }

        if self.minimum_price <= Decimal::ZERO {
            return Err(PriceError::InvalidMinimum);
        }

        Ok(())
    }

    /// Load and validate a configuration from JSON.
    ///
    /// Missing fields take their defaults, so `{"markup_percent": "5"}` is a
    /// complete configuration.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("Invalid rewriter config: {}", e))?;
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self::standard()
    }
}

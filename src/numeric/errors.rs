// ============================================================================
// Price Errors
// Error types for price parsing, markup arithmetic and configuration
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while valuing, marking up or configuring prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PriceError {
    /// Input string could not be parsed as an amount
    InvalidInput,
    /// Result exceeded the representable decimal range
    Overflow,
    /// Parsed amount is below the minimum accepted price
    BelowMinimum,
    /// Markup percentage is negative
    NegativeMarkup,
    /// Minimum price is zero or negative
    InvalidMinimum,
}

impl PriceError {
    /// Short machine-friendly tag, used in log fields and events.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceError::InvalidInput => "invalid_input",
            PriceError::Overflow => "overflow",
            PriceError::BelowMinimum => "below_minimum",
            PriceError::NegativeMarkup => "negative_markup",
            PriceError::InvalidMinimum => "invalid_minimum",
        }
    }
}

impl fmt::Display for PriceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceError::InvalidInput => write!(f, "invalid input: could not parse amount"),
            PriceError::Overflow => {
                write!(f, "arithmetic overflow: amount exceeded maximum value")
            },
            PriceError::BelowMinimum => write!(f, "amount is below the minimum price"),
            PriceError::NegativeMarkup => write!(f, "markup percentage cannot be negative"),
            PriceError::InvalidMinimum => write!(f, "minimum price must be positive"),
        }
    }
}

impl std::error::Error for PriceError {}

/// Result type alias for price operations
pub type PriceResult<T> = Result<T, PriceError>;

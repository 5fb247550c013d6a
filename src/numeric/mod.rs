// ============================================================================
// Numeric Module
// Exact decimal helpers for Naira price values
// ============================================================================
//
// This module provides:
// - Magnitude: k/m/b suffixes and their multipliers
// - parse_abbreviated / parse_formatted: raw expression to value
// - ceil_to_multiple / round_trimmed / group_thousands: markup and display math
// - PriceError: Error types for parsing, arithmetic and configuration
//
// All values are rust_decimal::Decimal; no floating-point arithmetic.

mod amount;
mod errors;

pub use amount::{
    ceil_to_multiple, group_thousands, parse_abbreviated, parse_decimal, parse_formatted,
    round_trimmed, strip_marker, Magnitude, NAIRA_SIGN,
};
pub use errors::{PriceError, PriceResult};

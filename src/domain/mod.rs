// ============================================================================
// Domain Models Module
// Contains the price expression, quote and configuration value objects
// ============================================================================

pub mod config;
pub mod expression;
pub mod quote;

pub use config::{RewriterConfig, DEFAULT_MARKUP_PERCENT, DEFAULT_MINIMUM_PRICE};
pub use expression::{CaptionId, NotationStyle, PriceExpression, Suffix};
pub use quote::{PriceQuote, Rewrite};

// ============================================================================
// Rewriter Factory
// Creates price rewriters with proper configuration
// ============================================================================

use crate::domain::RewriterConfig;
use crate::engine::{MarkupPolicy, PriceDetector, PriceRewriter};
use crate::interfaces::{EventHandler, NoOpEventHandler};
use crate::numeric::PriceResult;
use rust_decimal::Decimal;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a price rewriter from configuration
///
/// # Arguments
/// * `config` - Rewriter configuration
/// * `event_handler` - Handler for detection and rewrite events
///
/// # Example
/// ```
/// use naira_markup::prelude::*;
/// use std::sync::Arc;
///
/// let rewriter = create_from_config(RewriterConfig::standard(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(rewriter.replace_prices("PS5 650k"), "PS5 663k");
/// ```
pub fn create_from_config(
    config: RewriterConfig,
    event_handler: Arc<dyn EventHandler>,
) -> PriceResult<PriceRewriter> {
    config.validate()?;

    let policy = MarkupPolicy::new(config.markup_percent)?;
    let detector = PriceDetector::new(config.minimum_price);

    tracing::debug!(
        markup_percent = %config.markup_percent,
        minimum_price = %config.minimum_price,
        "Price rewriter created"
    );

    Ok(PriceRewriter::with_detector(detector, policy, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating price rewriters with fluent API
///
/// # Example
/// ```
/// use naira_markup::prelude::*;
/// use rust_decimal::Decimal;
/// use std::sync::Arc;
///
/// let rewriter = PriceRewriterBuilder::new()
///     .markup_percent(Decimal::from(5))
///     .event_handler(Arc::new(LoggingEventHandler))
///     .build()
///     .unwrap();
/// assert_eq!(rewriter.replace_prices("iPhone 12 450k"), "iPhone 12 473k");
/// ```
pub struct PriceRewriterBuilder {
    config: RewriterConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl PriceRewriterBuilder {
    /// Start from the standard configuration
    pub fn new() -> Self {
        Self::from_config(RewriterConfig::standard())
    }

    pub fn from_config(config: RewriterConfig) -> Self {
        Self {
            config,
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    /// Set the markup percentage
    pub fn markup_percent(mut self, percent: Decimal) -> Self {
        self.config.markup_percent = percent;
        self
    }

    /// Set the smallest amount treated as a price
    pub fn minimum_price(mut self, minimum: Decimal) -> Self {
        self.config.minimum_price = minimum;
        self
    }

    pub fn event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    /// Get the configuration without building (for inspection)
    pub fn config(&self) -> &RewriterConfig {
        &self.config
    }

    /// Build the rewriter
    pub fn build(self) -> PriceResult<PriceRewriter> {
        create_from_config(self.config, self.event_handler)
    }
}

impl Default for PriceRewriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

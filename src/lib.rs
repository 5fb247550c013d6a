// ============================================================================
// Naira Markup Library
// Detects Naira prices in product captions and rewrites them with a markup
// ============================================================================

//! # Naira Markup
//!
//! Finds every Naira price in a free-form product caption, applies a
//! percentage markup, rounds it up to a sensible step, and writes it back
//! in the notation the seller used.
//!
//! ## Features
//!
//! - **Three notation families**: abbreviated (`450k`, `₦1.5m`), formatted
//!   (`₦450,000`) and labeled (`Price: 420k`)
//! - **Exact arithmetic** with `rust_decimal`; rounding only ever goes up
//! - **Span-based substitution**: one left-to-right pass, surrounding text
//!   untouched
//! - **Event hooks** for logging, statistics and auditing
//! - **Batch rewriting** across scoped worker threads
//!
//! ## Example
//!
//! ```rust
//! use naira_markup::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let rewriter = PriceRewriterBuilder::new()
//!     .markup_percent(Decimal::from(2))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     rewriter.replace_prices("MacBook Pro M2 4.5m DM"),
//!     "MacBook Pro M2 4.59m DM"
//! );
//!
//! let quote = rewriter.quote("Dell Inspiron i7 ₦450,000").unwrap();
//! println!("{}", quote);
//! // Original: ₦450,000
//! // New Price: ₦459,000
//! // Your Profit: ₦9,000
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;


// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CaptionId, NotationStyle, PriceExpression, PriceQuote, Rewrite, RewriterConfig, Suffix,
    };
    pub use crate::engine::{
        create_from_config, BatchRewriter, MarkupPolicy, PriceDetector, PriceRewriter,
        PriceRewriterBuilder, RenderStyle,
    };
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, PricePattern, RecordingEventHandler,
        RewriteEvent, StatsEventHandler,
    };
    pub use crate::numeric::{PriceError, PriceResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;
    use std::borrow::Cow;
    use std::sync::Arc;

    fn standard() -> PriceRewriter {
        create_from_config(RewriterConfig::standard(), Arc::new(NoOpEventHandler)).unwrap()
    }

    #[test]
    fn test_listing_captions() {
        let rewriter = standard();
        let cases = [
            ("iPhone 12 64gb 450k", "iPhone 12 64gb 459k"),
            ("MacBook Pro M2 4.5m DM", "MacBook Pro M2 4.59m DM"),
            ("Dell Inspiron i7 ₦450,000", "Dell Inspiron i7 ₦459,000"),
            ("PS5 + 2 pads 650k", "PS5 + 2 pads 663k"),
            ("Good morning everyone", "Good morning everyone"),
        ];

        for (input, expected) in cases {
            assert_eq!(rewriter.replace_prices(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_hardware_numbers_are_not_prices() {
        let rewriter = standard();
        let text = "Lenovo ThinkPad 16gb RAM 512gb SSD 8 cores 350k";

        let prices = rewriter.find_all_prices(text);
        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].value, Decimal::from(350_000));
        assert_eq!(
            rewriter.replace_prices(text),
            "Lenovo ThinkPad 16gb RAM 512gb SSD 8 cores 357k"
        );
    }

    #[test]
    fn test_find_all_prices_largest_first() {
        let prices = standard().find_all_prices("AirPods 85k, iPhone 1.2m, Watch 250,000");
        let values: Vec<Decimal> = prices.iter().map(|p| p.value).collect();
        assert_eq!(
            values,
            vec![
                Decimal::from(1_200_000),
                Decimal::from(250_000),
                Decimal::from(85_000)
            ]
        );
    }

    #[test]
    fn test_marker_variants() {
        let rewriter = standard();
        assert_eq!(rewriter.replace_prices("Now ₦450k only"), "Now ₦459k only");
        assert_eq!(rewriter.replace_prices("Now NGN 450k only"), "Now NGN 459k only");
        assert_eq!(rewriter.replace_prices("Now N450k only"), "Now N459k only");
        assert_eq!(rewriter.replace_prices("Now 1.5M only"), "Now 1.53M only");
    }

    #[test]
    fn test_unchanged_caption_not_copied() {
        let text = "Brand new, still in box";
        assert!(matches!(standard().replace_prices(text), Cow::Borrowed(_)));
    }

    #[test]
    fn test_batch_and_stats() {
        let stats = Arc::new(StatsEventHandler::new());
        let rewriter = PriceRewriterBuilder::new()
            .event_handler(stats.clone())
            .build()
            .unwrap();

        let buffer = vec![
            "iPhone 12 64gb 450k".to_string(),
            "Good morning everyone".to_string(),
            "Dell Inspiron i7 ₦450,000".to_string(),
        ];
        let rewritten = BatchRewriter::with_workers(&rewriter, 2).rewrite_all(&buffer);

        assert_eq!(
            rewritten,
            vec![
                "iPhone 12 64gb 459k",
                "Good morning everyone",
                "Dell Inspiron i7 ₦459,000"
            ]
        );

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.captions_seen, 3);
        assert_eq!(snapshot.captions_rewritten, 2);
        assert_eq!(snapshot.total_profit, Decimal::from(18_000));
    }

    #[test]
    fn test_profit_report() {
        let quote = standard().quote("MacBook Pro M2 4.5m DM").unwrap();
        assert_eq!(
            quote.to_string(),
            "Original: ₦4,500,000\nNew Price: ₦4,590,000\nYour Profit: ₦90,000"
        );
    }
}

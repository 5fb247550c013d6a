// ============================================================================
// Price Rewriter
// Detect, mark up, render and substitute prices in a caption
// ============================================================================

use super::detector::{PriceDetector, Scan};
use super::markup::MarkupPolicy;
use super::renderer::render_replacement;
use super::substitution::{substitute, Replacement};
use crate::domain::{CaptionId, PriceExpression, PriceQuote, Rewrite};
use crate::interfaces::{EventHandler, NoOpEventHandler, RewriteEvent};
use crate::numeric::PriceResult;
use chrono::Utc;
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::sync::Arc;

/// Rewrites every Naira price in a caption with a marked-up price.
///
/// Holds only immutable configuration, so one rewriter can serve any number
/// of threads.
pub struct PriceRewriter {
    detector: PriceDetector,
    policy: MarkupPolicy,
    event_handler: Arc<dyn EventHandler>,
}

impl PriceRewriter {
    /// Rewriter with the standard detector and no event handler
    pub fn new(policy: MarkupPolicy) -> Self {
        Self::with_detector(PriceDetector::default(), policy, Arc::new(NoOpEventHandler))
    }

    pub fn with_detector(
        detector: PriceDetector,
        policy: MarkupPolicy,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            detector,
            policy,
            event_handler,
        }
    }

    /// Replace the event handler
    pub fn with_event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    pub fn policy(&self) -> &MarkupPolicy {
        &self.policy
    }

    pub fn detector(&self) -> &PriceDetector {
        &self.detector
    }

    /// Distinct-valued prices in `text`, largest first
    pub fn find_all_prices(&self, text: &str) -> Vec<PriceExpression> {
        self.detector.find_all_prices(text)
    }

    /// Marked-up value for a base price
    pub fn markup(&self, value: Decimal) -> PriceResult<Decimal> {
        self.policy.apply(value)
    }

    /// `text` with every price replaced; borrowed when nothing changed
    pub fn replace_prices<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.rewrite(text).text
    }

    /// Profit breakdown for the largest price in `text`
    pub fn quote(&self, text: &str) -> Option<PriceQuote> {
        let primary = self.find_all_prices(text).into_iter().next()?;
        self.quote_expression(&primary).ok()
    }

    /// Rewrite `text` and report a quote for every replaced price.
    pub fn rewrite<'a>(&self, text: &'a str) -> Rewrite<'a> {
        let caption_id = CaptionId::new();
        let mut events = vec![RewriteEvent::CaptionReceived {
            caption_id,
            length: text.len(),
            timestamp: Utc::now(),
        }];

        let Scan {
            expressions,
            discarded,
        } = self.detector.scan(text);

        events.extend(discarded.into_iter().map(|d| RewriteEvent::CandidateDiscarded {
            caption_id,
            raw: d.raw,
            reason: d.reason,
            timestamp: Utc::now(),
        }));

        let mut replacements = Vec::with_capacity(expressions.len());
        let mut quotes = Vec::with_capacity(expressions.len());

        for expression in expressions {
            let quote = match self.quote_expression(&expression) {
                Ok(quote) => quote,
                Err(reason) => {
                    tracing::trace!(raw = %expression.raw, reason = reason.as_str(), "Markup failed");
                    events.push(RewriteEvent::CandidateDiscarded {
                        caption_id,
                        raw: expression.raw,
                        reason,
                        timestamp: Utc::now(),
                    });
                    continue;
                },
            };

            replacements.push(Replacement::new(expression.span.clone(), quote.replacement.clone()));
            events.push(RewriteEvent::PriceDetected {
                caption_id,
                expression,
                timestamp: Utc::now(),
            });
            events.push(RewriteEvent::PriceRewritten {
                caption_id,
                quote: quote.clone(),
                timestamp: Utc::now(),
            });
            quotes.push(quote);
        }

        let rewritten = substitute(text, replacements);
        let rewrite = Rewrite {
            caption_id,
            text: rewritten,
            quotes,
        };

        if rewrite.is_changed() {
            tracing::debug!(
                caption_id = %caption_id.as_uuid(),
                prices = rewrite.quotes.len(),
                profit = ?rewrite.total_profit(),
                "Caption rewritten"
            );
            events.push(RewriteEvent::CaptionRewritten {
                caption_id,
                prices: rewrite.quotes.len(),
                timestamp: Utc::now(),
            });
        } else {
            tracing::debug!(caption_id = %caption_id.as_uuid(), "Caption unchanged");
            events.push(RewriteEvent::CaptionUnchanged {
                caption_id,
                timestamp: Utc::now(),
            });
        }

        self.event_handler.on_events(events);
        rewrite
    }

    fn quote_expression(&self, expression: &PriceExpression) -> PriceResult<PriceQuote> {
        let marked_up = self.policy.apply(expression.value)?;
        Ok(PriceQuote::new(
            expression.raw.clone(),
            render_replacement(expression, marked_up),
            expression.value,
            marked_up,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{RecordingEventHandler, StatsEventHandler};

    fn rewriter() -> PriceRewriter {
        PriceRewriter::new(MarkupPolicy::new(Decimal::from(2)).unwrap())
    }

    #[test]
    fn test_abbreviated_caption() {
        assert_eq!(rewriter().replace_prices("iPhone 12 64gb 450k"), "iPhone 12 64gb 459k");
        assert_eq!(rewriter().replace_prices("PS5 + 2 pads 650k"), "PS5 + 2 pads 663k");
    }

    #[test]
    fn test_fractional_millions() {
        assert_eq!(
            rewriter().replace_prices("MacBook Pro M2 4.5m DM"),
            "MacBook Pro M2 4.59m DM"
        );
        assert_eq!(
            rewriter().replace_prices("iPhone 15 Pro Max 1.8m brand new"),
            "iPhone 15 Pro Max 1.84m brand new"
        );
    }

    #[test]
    fn test_formatted_caption() {
        assert_eq!(
            rewriter().replace_prices("Dell Inspiron i7 ₦450,000"),
            "Dell Inspiron i7 ₦459,000"
        );
    }

    #[test]
    fn test_unchanged_caption_is_borrowed() {
        let text = "Good morning everyone";
        let out = rewriter().replace_prices(text);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, text);
    }

    #[test]
    fn test_duplicate_values_all_rewritten() {
        assert_eq!(
            rewriter().replace_prices("450k or ₦450,000 if paying cash"),
            "459k or ₦459,000 if paying cash"
        );
    }

    #[test]
    fn test_labeled_caption() {
        assert_eq!(
            rewriter().replace_prices("HP EliteBook\nPrice: 420k\nCall 08012345678"),
            "HP EliteBook\nPrice: 429k\nCall 08012345678"
        );
    }

    #[test]
    fn test_grouped_number_with_suffix_rewritten_whole() {
        assert_eq!(rewriter().replace_prices("Price: 1,500k"), "Price: 1.53m");
        assert_eq!(rewriter().replace_prices("Laptop 1,500k"), "Laptop 1.53m");
    }

    #[test]
    fn test_spaced_phone_number_untouched() {
        let text = "Dell XPS 450k\nCall 0801 234 5678";
        assert_eq!(rewriter().replace_prices(text), "Dell XPS 459k\nCall 0801 234 5678");
    }

    #[test]
    fn test_multiple_prices_keep_order() {
        assert_eq!(
            rewriter().replace_prices("AirPods 85k, iPhone 1.2m, Watch 250,000"),
            "AirPods 86.7k, iPhone 1.23m, Watch ₦255,000"
        );
    }

    #[test]
    fn test_quote_uses_largest_price() {
        let quote = rewriter().quote("Case 5k, Samsung S23 Ultra 850k").unwrap();
        assert_eq!(quote.raw, "850k");
        assert_eq!(quote.original, Decimal::from(850_000));
        assert_eq!(quote.marked_up, Decimal::from(867_000));
        assert_eq!(quote.profit(), Decimal::from(17_000));
        assert!(rewriter().quote("No price here").is_none());
    }

    #[test]
    fn test_rewrite_quotes() {
        let rewrite = rewriter().rewrite("Case 5k, Samsung S23 Ultra 850k");
        assert_eq!(rewrite.text, "Case 5.1k, Samsung S23 Ultra 867k");
        assert_eq!(rewrite.quotes.len(), 2);
        assert_eq!(rewrite.primary_quote().unwrap().replacement, "867k");
        assert_eq!(rewrite.total_profit(), Ok(Decimal::from(17_100)));
    }

    #[test]
    fn test_overflowing_price_left_alone() {
        let text = "Yacht 79228162514264337593543950k";
        let recorder = Arc::new(RecordingEventHandler::new());
        let rewriter = rewriter().with_event_handler(recorder.clone());
        assert_eq!(rewriter.replace_prices(text), text);
        assert!(recorder
            .events()
            .iter()
            .any(|e| matches!(e, RewriteEvent::CandidateDiscarded { .. })));
    }

    #[test]
    fn test_events_emitted() {
        let recorder = Arc::new(RecordingEventHandler::new());
        let rewriter = rewriter().with_event_handler(recorder.clone());

        rewriter.rewrite("iPhone 12 64gb 450k");
        let events = recorder.events();
        assert!(matches!(events.first(), Some(RewriteEvent::CaptionReceived { .. })));
        assert!(events
            .iter()
            .any(|e| matches!(e, RewriteEvent::PriceDetected { .. })));
        assert!(matches!(events.last(), Some(RewriteEvent::CaptionRewritten { prices: 1, .. })));

        recorder.clear();
        rewriter.rewrite("Good morning everyone");
        assert!(matches!(
            recorder.events().last(),
            Some(RewriteEvent::CaptionUnchanged { .. })
        ));
    }

    #[test]
    fn test_stats_across_captions() {
        let stats = Arc::new(StatsEventHandler::new());
        let rewriter = rewriter().with_event_handler(stats.clone());

        for caption in ["iPhone 12 64gb 450k", "Good morning", "PS5 650k, pads 25k"] {
            rewriter.rewrite(caption);
        }

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.captions_seen, 3);
        assert_eq!(snapshot.captions_rewritten, 2);
        assert_eq!(snapshot.captions_unchanged, 1);
        assert_eq!(snapshot.prices_rewritten, 3);
        // 9,000 + 13,000 + 500
        assert_eq!(snapshot.total_profit, Decimal::from(22_500));
    }

    #[test]
    fn test_profit_total_overflow_reported() {
        let stats = Arc::new(StatsEventHandler::new());
        let rewriter = rewriter().with_event_handler(stats.clone());
        let caption = vec!["70,000,000,000,000,000,000,000,000,000"; 60].join(" ");

        let rewrite = rewriter.rewrite(&caption);
        assert_eq!(rewrite.quotes.len(), 60);
        assert_eq!(rewrite.total_profit(), Err(crate::numeric::PriceError::Overflow));
        assert_eq!(stats.snapshot().total_profit, Decimal::MAX);
    }
}

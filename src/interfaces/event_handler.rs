// ============================================================================
// Event Handler Interface
// Defines the contract for observing caption rewrites
// ============================================================================

use crate::domain::{CaptionId, PriceExpression, PriceQuote};
use crate::numeric::PriceError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the price rewriter
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RewriteEvent {
    /// Caption handed to the rewriter
    CaptionReceived {
        caption_id: CaptionId,
        length: usize,
        timestamp: DateTime<Utc>,
    },

    /// A pattern matched but the amount was rejected
    CandidateDiscarded {
        caption_id: CaptionId,
        raw: String,
        reason: PriceError,
        timestamp: DateTime<Utc>,
    },

    /// Price expression accepted by the detector
    PriceDetected {
        caption_id: CaptionId,
        expression: PriceExpression,
        timestamp: DateTime<Utc>,
    },

    /// Price replaced with its marked-up rendering
    PriceRewritten {
        caption_id: CaptionId,
        quote: PriceQuote,
        timestamp: DateTime<Utc>,
    },

    /// Caption rebuilt with at least one new price
    CaptionRewritten {
        caption_id: CaptionId,
        prices: usize,
        timestamp: DateTime<Utc>,
    },

    /// No price found; caption passed through untouched
    CaptionUnchanged {
        caption_id: CaptionId,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing rewriter events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a rewrite event
    fn on_event(&self, event: RewriteEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<RewriteEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: RewriteEvent) {}

    fn on_events(&self, _events: Vec<RewriteEvent>) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: RewriteEvent) {
        match &event {
            RewriteEvent::CandidateDiscarded { raw, reason, .. } => {
                tracing::trace!(raw = %raw, reason = reason.as_str(), "Discarded price candidate");
            },
            RewriteEvent::PriceRewritten { quote, .. } => {
                tracing::debug!(
                    raw = %quote.raw,
                    replacement = %quote.replacement,
                    profit = %quote.profit(),
                    "Price rewritten"
                );
            },
            _ => tracing::debug!("Price rewriter event: {:?}", event),
        }
    }
}

/// Keeps every event in memory, for auditing and tests
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<RewriteEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RewriteEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: RewriteEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<RewriteEvent>) {
        self.events.lock().extend(events);
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Point-in-time copy of the counters kept by [`StatsEventHandler`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RewriteStats {
    pub captions_seen: u64,
    pub captions_rewritten: u64,
    pub captions_unchanged: u64,
    pub prices_rewritten: u64,
    pub candidates_discarded: u64,
    /// Saturates at `Decimal::MAX`
    pub total_profit: Decimal,
}

/// Running totals over every caption the rewriter has handled
#[derive(Default)]
pub struct StatsEventHandler {
    captions_seen: AtomicU64,
    captions_rewritten: AtomicU64,
    captions_unchanged: AtomicU64,
    prices_rewritten: AtomicU64,
    candidates_discarded: AtomicU64,
    total_profit: Mutex<Decimal>,
}

impl StatsEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> RewriteStats {
        RewriteStats {
            captions_seen: self.captions_seen.load(Ordering::Acquire),
            captions_rewritten: self.captions_rewritten.load(Ordering::Acquire),
            captions_unchanged: self.captions_unchanged.load(Ordering::Acquire),
            prices_rewritten: self.prices_rewritten.load(Ordering::Acquire),
            candidates_discarded: self.candidates_discarded.load(Ordering::Acquire),
            total_profit: *self.total_profit.lock(),
        }
    }
}

impl EventHandler for StatsEventHandler {
    fn on_event(&self, event: RewriteEvent) {
        match event {
            RewriteEvent::CaptionReceived { .. } => {
                self.captions_seen.fetch_add(1, Ordering::AcqRel);
            },
            RewriteEvent::CandidateDiscarded { .. } => {
                self.candidates_discarded.fetch_add(1, Ordering::AcqRel);
            },
            RewriteEvent::PriceRewritten { quote, .. } => {
                self.prices_rewritten.fetch_add(1, Ordering::AcqRel);
                let mut total = self.total_profit.lock();
                *total = total.checked_add(quote.profit()).unwrap_or_else(|| {
                    tracing::warn!("Total profit overflowed; saturating");
                    Decimal::MAX
                });
            },
            RewriteEvent::CaptionRewritten { .. } => {
                self.captions_rewritten.fetch_add(1, Ordering::AcqRel);
            },
            RewriteEvent::CaptionUnchanged { .. } => {
                self.captions_unchanged.fetch_add(1, Ordering::AcqRel);
            },
            RewriteEvent::PriceDetected { .. } => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewritten(original: i64, marked_up: i64) -> RewriteEvent {
        RewriteEvent::PriceRewritten {
            caption_id: CaptionId::new(),
            quote: PriceQuote::new("x", "y", Decimal::from(original), Decimal::from(marked_up)),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(RewriteEvent::CaptionUnchanged {
            caption_id: CaptionId::new(),
            timestamp: Utc::now(),
        });
        // Should not panic
    }

    #[test]
    fn test_recording_handler() {
        let handler = RecordingEventHandler::new();
        assert!(handler.is_empty());

        handler.on_events(vec![rewritten(450_000, 459_000), rewritten(85_000, 86_700)]);
        assert_eq!(handler.len(), 2);

        handler.clear();
        assert!(handler.is_empty());
    }

    #[test]
    fn test_stats_handler() {
        let handler = StatsEventHandler::new();
        let caption_id = CaptionId::new();

        handler.on_event(RewriteEvent::CaptionReceived {
            caption_id,
            length: 20,
            timestamp: Utc::now(),
        });
        handler.on_event(rewritten(450_000, 459_000));
        handler.on_event(rewritten(650_000, 663_000));
        handler.on_event(RewriteEvent::CaptionRewritten {
            caption_id,
            prices: 2,
            timestamp: Utc::now(),
        });

        let stats = handler.snapshot();
        assert_eq!(stats.captions_seen, 1);
        assert_eq!(stats.captions_rewritten, 1);
        assert_eq!(stats.prices_rewritten, 2);
        assert_eq!(stats.total_profit, Decimal::from(22_000));
        assert_eq!(stats.captions_unchanged, 0);
    }

    #[test]
    fn test_stats_profit_saturates() {
        let handler = StatsEventHandler::new();
        let near_max = Decimal::MAX - Decimal::from(1_000);
        for _ in 0..3 {
            handler.on_event(RewriteEvent::PriceRewritten {
                caption_id: CaptionId::new(),
                quote: PriceQuote::new("x", "y", Decimal::ZERO, near_max),
                timestamp: Utc::now(),
            });
        }

        let stats = handler.snapshot();
        assert_eq!(stats.prices_rewritten, 3);
        assert_eq!(stats.total_profit, Decimal::MAX);
    }
}

// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod price_pattern;

pub use event_handler::{
    EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler, RewriteEvent,
    RewriteStats, StatsEventHandler,
};
pub use price_pattern::{PricePattern, RawMatch};

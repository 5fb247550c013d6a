// ============================================================================
// Basic Usage Example
// ============================================================================

use naira_markup::prelude::*;
use naira_markup::interfaces::RewriteStats;
use rust_decimal::Decimal;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Naira Markup Example ===\n");

    let stats = Arc::new(StatsEventHandler::new());
    let rewriter = PriceRewriterBuilder::new()
        .markup_percent(Decimal::from(2))
        .event_handler(stats.clone())
        .build()
        .expect("standard configuration is valid");

    let buffer = [
        "iPhone 12 64gb 450k",
        "MacBook Pro M2 4.5m DM",
        "Dell Inspiron i7 ₦450,000",
        "PS5 + 2 pads 650k",
        "HP EliteBook\nPrice: 420k\nCall 08012345678",
        "Good morning everyone",
    ];

    // Prices found in each caption
    println!("=== Detected Prices ===");
    for caption in &buffer {
        let prices: Vec<String> = rewriter
            .find_all_prices(caption)
            .iter()
            .map(|p| format!("{} = {}", p.raw, p.value))
            .collect();
        println!("  {:?}: {:?}", caption, prices);
    }

    // Rewrite the whole buffer across worker threads
    println!("\n=== Rewritten Captions ===");
    let rewritten = BatchRewriter::new(&rewriter).rewrite_all(&buffer);
    for (before, after) in buffer.iter().zip(&rewritten) {
        println!("  {:?}\n    -> {:?}", before, after);
    }

    // Profit report for the main price of one caption
    println!("\n=== Profit Report ===");
    if let Some(quote) = rewriter.quote("MacBook Pro M2 4.5m DM") {
        println!("{}", quote);
    }

    let RewriteStats {
        captions_seen,
        captions_rewritten,
        captions_unchanged,
        prices_rewritten,
        candidates_discarded,
        total_profit,
    } = stats.snapshot();

    println!("\n=== Statistics ===");
    println!("Captions seen:        {}", captions_seen);
    println!("Captions rewritten:   {}", captions_rewritten);
    println!("Captions unchanged:   {}", captions_unchanged);
    println!("Prices rewritten:     {}", prices_rewritten);
    println!("Candidates discarded: {}", candidates_discarded);
    println!("Total profit:         ₦{}", total_profit);
}

// ============================================================================
// Engine Module
// Contains the price detection, markup and rewriting logic
// ============================================================================

mod batch;
mod detector;
mod markup;
mod patterns;
mod renderer;
mod rewriter;
mod substitution;

pub mod factory;

pub use batch::BatchRewriter;
pub use detector::{Discarded, PriceDetector, Scan};
pub use factory::{create_from_config, PriceRewriterBuilder};
pub use markup::MarkupPolicy;
pub use patterns::{default_patterns, AbbreviatedPattern, FormattedPattern, LabeledPattern};
pub use renderer::{render, render_abbreviated, render_full, render_replacement, RenderStyle};
pub use rewriter::PriceRewriter;
pub use substitution::{substitute, Replacement};

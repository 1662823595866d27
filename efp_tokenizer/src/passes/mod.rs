//! Fix-up passes run over the raw scanner output
//!
//! Whitespace reduction, then classification, then no-op elimination. Each
//! pass consumes the previous list and produces a new one.

pub mod classify;
pub mod noop;
pub mod whitespace;

use crate::lexical::LexicalMetrics;
use crate::log_success;
use crate::logging::codes;
use crate::tokens::TokenList;

pub use classify::classify;
pub use noop::eliminate_noops;
pub use whitespace::reduce_whitespace;

/// Run every pass in order over a raw token list
pub fn run(raw: TokenList, metrics: &mut LexicalMetrics) -> TokenList {
    let reduced = reduce_whitespace(raw, metrics);
    log_success!(codes::success::WHITESPACE_REDUCTION_COMPLETE,
        "Whitespace reduction completed",
        "dropped" => metrics.whitespace_dropped,
        "intersections" => metrics.intersections_created
    );

    let classified = classify(reduced);
    log_success!(codes::success::CLASSIFICATION_COMPLETE,
        "Classification completed",
        "tokens" => classified.len()
    );

    let tokens = eliminate_noops(classified, metrics);
    metrics.record_final_tokens(tokens.len());
    log_success!(codes::success::NOOP_ELIMINATION_COMPLETE,
        "No-op elimination completed",
        "removed" => metrics.noops_removed,
        "tokens" => tokens.len()
    );

    tokens
}

//! No-op elimination

use crate::lexical::LexicalMetrics;
use crate::tokens::{TokenList, TokenType};

/// Copy every token except no-ops into the public list
pub fn eliminate_noops(tokens: TokenList, metrics: &mut LexicalMetrics) -> TokenList {
    let mut kept = TokenList::new();

    for token in tokens.into_items() {
        if token.token_type == TokenType::Noop {
            metrics.record_noop_removed();
        } else {
            kept.add_ref(token);
        }
    }

    kept
}

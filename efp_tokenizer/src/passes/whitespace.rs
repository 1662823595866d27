//! Whitespace reduction
//!
//! Whitespace only matters between two operand-like tokens, where it is the
//! range intersection operator. Everywhere else it is dropped.

use crate::lexical::LexicalMetrics;
use crate::tokens::{TokenList, TokenSubType, TokenType};

pub fn reduce_whitespace(mut tokens: TokenList, metrics: &mut LexicalMetrics) -> TokenList {
    let mut reduced = TokenList::new();

    while tokens.move_next() {
        let Some(token) = tokens.current() else {
            break;
        };

        if token.token_type != TokenType::Whitespace {
            reduced.add_ref(token.clone());
            continue;
        }

        let is_intersection = !tokens.bof()
            && !tokens.eof()
            && tokens.previous().map_or(false, |t| t.ends_operand())
            && tokens.next().map_or(false, |t| t.begins_operand());

        if is_intersection {
            reduced.add(
                token.value.clone(),
                TokenType::OperatorInfix,
                TokenSubType::Intersection,
            );
        }
        metrics.record_whitespace(is_intersection);
    }

    reduced
}

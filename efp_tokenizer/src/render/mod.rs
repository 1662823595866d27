//! Turning token streams back into text

use crate::config::constants::compile_time::lexical::{
    PAREN_CLOSE, PAREN_OPEN, QUOTE_DOUBLE, WHITESPACE,
};
use crate::tokens::{Token, TokenSubType, TokenType};

/// Rebuild formula text from a token stream
///
/// Text operands are re-quoted but embedded quotes are not doubled again,
/// and the leading `=` is not restored.
pub fn render(tokens: &[Token]) -> String {
    let mut output = String::new();

    for token in tokens {
        match (token.token_type, token.subtype) {
            (TokenType::Function, TokenSubType::Start) => {
                output.push_str(&token.value);
                output.push(PAREN_OPEN);
            }
            (TokenType::Function, TokenSubType::Stop)
            | (TokenType::Subexpression, TokenSubType::Stop) => output.push(PAREN_CLOSE),
            (TokenType::Subexpression, TokenSubType::Start) => output.push(PAREN_OPEN),
            (TokenType::Operand, TokenSubType::Text) => {
                output.push(QUOTE_DOUBLE);
                output.push_str(&token.value);
                output.push(QUOTE_DOUBLE);
            }
            (TokenType::OperatorInfix, TokenSubType::Intersection) => output.push(WHITESPACE),
            _ => output.push_str(&token.value),
        }
    }

    output
}

/// One line per token, tab-indented by scope depth
pub fn pretty_print(tokens: &[Token]) -> String {
    let mut indent: usize = 0;
    let mut output = String::new();

    for token in tokens {
        if token.subtype == TokenSubType::Stop {
            indent = indent.saturating_sub(1);
        }

        for _ in 0..indent {
            output.push('\t');
        }
        output.push_str(&token.to_string());
        output.push('\n');

        if token.subtype == TokenSubType::Start {
            indent += 1;
        }
    }

    output
}

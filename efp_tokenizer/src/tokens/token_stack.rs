//! LIFO stack of open scopes

use super::token::{Token, TokenSubType, TokenType};

/// Stack of Start tokens for scopes that have not been closed yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStack {
    items: Vec<Token>,
}

impl TokenStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.items.push(token);
    }

    /// Close the innermost scope, returning its Stop token
    ///
    /// An empty stack yields a synthetic `Function/Stop`; callers that need
    /// to know about the underflow check `is_empty` first.
    pub fn pop(&mut self) -> Token {
        match self.items.pop() {
            Some(open) => Token::new("", open.token_type, TokenSubType::Stop),
            None => Token::new("", TokenType::Function, TokenSubType::Stop),
        }
    }

    pub fn top(&self) -> Option<&Token> {
        self.items.last()
    }

    pub fn top_value(&self) -> &str {
        self.top().map_or("", |t| t.value.as_str())
    }

    pub fn top_type(&self) -> Option<TokenType> {
        self.top().map(|t| t.token_type)
    }

    pub fn top_subtype(&self) -> TokenSubType {
        self.top().map_or(TokenSubType::Nothing, |t| t.subtype)
    }

    pub fn depth(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

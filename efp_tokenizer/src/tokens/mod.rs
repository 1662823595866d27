//! Token model for formula tokenization
//!
//! - [`Token`] with its [`TokenType`] and [`TokenSubType`]
//! - [`TokenList`], the ordered list every pipeline stage produces
//! - [`TokenStack`], the open-scope stack used while scanning

pub mod token;
pub mod token_list;
pub mod token_stack;

pub use token::{Token, TokenSubType, TokenType};
pub use token_list::TokenList;
pub use token_stack::TokenStack;

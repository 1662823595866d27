//! Spreadsheet formula tokenizer
//!
//! Splits a formula such as `=SUM(B5:B15 A7:D7)` into a flat list of typed
//! tokens, using E. W. Bachtal's state-machine algorithm. Scopes are encoded
//! as Start/Stop token pairs rather than a tree.
//!
//! ```
//! use efp_tokenizer::{parse, TokenSubType, TokenType};
//!
//! let tokens = parse("=1+3+5");
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[1].token_type, TokenType::OperatorInfix);
//! assert_eq!(tokens[1].subtype, TokenSubType::Math);
//! ```

// Internal modules
pub mod config;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod passes;
pub mod pipeline;
pub mod render;
pub mod tokens;

// Re-export key types for library consumers
pub use pipeline::{parse, validate, ParseOutcome, Parser, StructureError};
pub use tokens::{Token, TokenList, TokenStack, TokenSubType, TokenType};

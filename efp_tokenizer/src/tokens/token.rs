//! Formula token model
//!
//! A token is a piece of formula text plus a type and a context-dependent
//! subtype. Type and subtype names render exactly as the published algorithm
//! names them, so pretty-printed output is comparable across implementations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenType {
    /// Unary plus; removed before the stream is returned
    Noop,
    Operand,
    Function,
    Subexpression,
    /// Argument separator inside a function or array row boundary
    Argument,
    OperatorPrefix,
    OperatorInfix,
    OperatorPostfix,
    Whitespace,
    /// Text flushed by a recovery path (quote or error start after operand text)
    Unknown,
}

impl TokenType {
    pub const ALL: [TokenType; 10] = [
        TokenType::Noop,
        TokenType::Operand,
        TokenType::Function,
        TokenType::Subexpression,
        TokenType::Argument,
        TokenType::OperatorPrefix,
        TokenType::OperatorInfix,
        TokenType::OperatorPostfix,
        TokenType::Whitespace,
        TokenType::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Noop => "Noop",
            TokenType::Operand => "Operand",
            TokenType::Function => "Function",
            TokenType::Subexpression => "Subexpression",
            TokenType::Argument => "Argument",
            TokenType::OperatorPrefix => "OperatorPrefix",
            TokenType::OperatorInfix => "OperatorInfix",
            TokenType::OperatorPostfix => "OperatorPostfix",
            TokenType::Whitespace => "Whitespace",
            TokenType::Unknown => "Unknown",
        }
    }

    /// Function and Subexpression tokens open and close scopes
    pub fn is_scope(&self) -> bool {
        matches!(self, TokenType::Function | TokenType::Subexpression)
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenType::OperatorPrefix | TokenType::OperatorInfix | TokenType::OperatorPostfix
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context-dependent refinement of a token type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum TokenSubType {
    /// No subtype assigned; renders as an empty string
    #[default]
    #[serde(rename = "")]
    Nothing,
    Start,
    Stop,
    Text,
    Number,
    Logical,
    Error,
    Range,
    Math,
    Concatenation,
    Intersection,
    Union,
}

impl TokenSubType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSubType::Nothing => "",
            TokenSubType::Start => "Start",
            TokenSubType::Stop => "Stop",
            TokenSubType::Text => "Text",
            TokenSubType::Number => "Number",
            TokenSubType::Logical => "Logical",
            TokenSubType::Error => "Error",
            TokenSubType::Range => "Range",
            TokenSubType::Math => "Math",
            TokenSubType::Concatenation => "Concatenation",
            TokenSubType::Intersection => "Intersection",
            TokenSubType::Union => "Union",
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == TokenSubType::Nothing
    }
}

impl fmt::Display for TokenSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single formula token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub subtype: TokenSubType,
}

impl Token {
    pub fn new(value: impl Into<String>, token_type: TokenType, subtype: TokenSubType) -> Self {
        Self {
            value: value.into(),
            token_type,
            subtype,
        }
    }

    pub fn is_start(&self) -> bool {
        self.token_type.is_scope() && self.subtype == TokenSubType::Start
    }

    pub fn is_stop(&self) -> bool {
        self.token_type.is_scope() && self.subtype == TokenSubType::Stop
    }

    /// Function/Subexpression Stop or any Operand
    pub fn ends_operand(&self) -> bool {
        self.is_stop() || self.token_type == TokenType::Operand
    }

    /// Function/Subexpression Start or any Operand
    pub fn begins_operand(&self) -> bool {
        self.is_start() || self.token_type == TokenType::Operand
    }

    pub fn is_infix(&self, value: &str) -> bool {
        self.token_type == TokenType::OperatorInfix && self.value == value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> <{}>", self.value, self.token_type, self.subtype)
    }
}

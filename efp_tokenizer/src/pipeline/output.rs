use crate::lexical::LexicalMetrics;
use crate::tokens::Token;
use serde::{Deserialize, Serialize};

/// Serializable result of tokenizing one formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// The normalized formula (trimmed, with the leading `=`)
    pub formula: String,
    pub tokens: Vec<Token>,
    pub in_error: bool,
    pub metrics: LexicalMetrics,
}

impl ParseOutcome {
    pub fn new(
        formula: String,
        tokens: Vec<Token>,
        in_error: bool,
        metrics: LexicalMetrics,
    ) -> Self {
        Self {
            formula,
            tokens,
            in_error,
            metrics,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

//! Formula tokenization pipeline
//!
//! Scanner, then the fix-up passes, with the raw list, the error flag and
//! the metrics kept on the [`Parser`] for diagnostics.

mod error;
pub mod output;
mod validation;

pub use error::StructureError;
pub use output::ParseOutcome;
pub use validation::{validate, validate_tokens};

use crate::config::runtime::LexicalPreferences;
use crate::lexical::{LexicalAnalyzer, LexicalMetrics};
use crate::logging::{self, codes};
use crate::tokens::{Token, TokenList};
use crate::{log_success, render};

/// Tokenize a formula with default preferences
pub fn parse(formula: &str) -> Vec<Token> {
    let mut parser = Parser::new();
    parser.parse(formula);
    parser.into_tokens()
}

/// Reusable formula tokenizer
///
/// Every call to [`Parser::parse`] starts from fresh scan state; only the
/// results of the latest call are kept.
pub struct Parser {
    analyzer: LexicalAnalyzer,
    formula: String,
    raw_tokens: TokenList,
    tokens: TokenList,
    in_error: bool,
    metrics: LexicalMetrics,
    parsed_count: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self::with_analyzer(LexicalAnalyzer::new())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self::with_analyzer(LexicalAnalyzer::with_preferences(preferences))
    }

    fn with_analyzer(analyzer: LexicalAnalyzer) -> Self {
        Self {
            analyzer,
            formula: String::new(),
            raw_tokens: TokenList::new(),
            tokens: TokenList::new(),
            in_error: false,
            metrics: LexicalMetrics::default(),
            parsed_count: 0,
        }
    }

    /// Tokenize a formula and return the public token stream
    pub fn parse(&mut self, formula: &str) -> &[Token] {
        self.parsed_count += 1;

        logging::with_formula_context(formula, self.parsed_count, || {
            let scanned = self.analyzer.scan(formula);
            let mut metrics = self.analyzer.take_metrics();

            let tokens = crate::passes::run(scanned.tokens.clone(), &mut metrics);

            log_success!(codes::success::PARSE_COMPLETE,
                "Formula tokenized",
                "tokens" => tokens.len(),
                "raw_tokens" => scanned.tokens.len(),
                "in_error" => scanned.in_error
            );

            self.formula = scanned.formula;
            self.raw_tokens = scanned.tokens;
            self.tokens = tokens;
            self.in_error = scanned.in_error;
            self.metrics = metrics;
        });

        self.tokens.items()
    }

    pub fn tokens(&self) -> &[Token] {
        self.tokens.items()
    }

    pub fn token_list(&self) -> &TokenList {
        &self.tokens
    }

    /// Scanner output before the fix-up passes
    pub fn raw_tokens(&self) -> &[Token] {
        self.raw_tokens.items()
    }

    /// The last formula ended inside an error literal
    pub fn in_error(&self) -> bool {
        self.in_error
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// The last formula as scanned (trimmed, with the leading `=`)
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        self.analyzer.preferences()
    }

    pub fn render(&self) -> String {
        render::render(self.tokens())
    }

    pub fn pretty_print(&self) -> String {
        render::pretty_print(self.tokens())
    }

    pub fn check_structure(&self) -> Result<(), StructureError> {
        validate_tokens(self.tokens(), self.in_error)
    }

    pub fn outcome(&self) -> ParseOutcome {
        ParseOutcome::new(
            self.formula.clone(),
            self.tokens.items().to_vec(),
            self.in_error,
            self.metrics.clone(),
        )
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens.into_items()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{TokenSubType, TokenType};

    #[test]
    fn test_parser_keeps_diagnostics() {
        let mut parser = Parser::new();
        let count = parser.parse("=A1 + B1").len();

        assert_eq!(count, 3);
        assert_eq!(parser.raw_tokens().len(), 5);
        assert_eq!(parser.formula(), "=A1 + B1");
        assert!(!parser.in_error());
        assert_eq!(parser.metrics().whitespace_dropped, 2);
        assert_eq!(parser.metrics().final_tokens, 3);
    }

    #[test]
    fn test_parser_reuse_resets_state() {
        let mut parser = Parser::new();
        parser.parse("=#DIV");
        assert!(parser.in_error());

        parser.parse("SUM(1)");
        assert!(!parser.in_error());
        assert_eq!(parser.formula(), "=SUM(1)");
        assert_eq!(parser.tokens().len(), 3);
        assert_eq!(parser.tokens()[0].token_type, TokenType::Function);
    }

    #[test]
    fn test_outcome_snapshot() {
        let mut parser = Parser::new();
        parser.parse("=TRUE");
        let outcome = parser.outcome();

        assert_eq!(outcome.tokens.len(), 1);
        assert_eq!(outcome.tokens[0].subtype, TokenSubType::Logical);
        assert!(validate(&outcome).is_ok());
    }

    #[test]
    fn test_parse_helper() {
        let tokens = parse("=1");
        assert_eq!(
            tokens,
            vec![Token::new("1", TokenType::Operand, TokenSubType::Number)]
        );
    }
}

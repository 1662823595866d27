//! Single-pass formula scanner
//!
//! Walks the normalized formula one code point at a time. The lexical mode
//! is checked first; outside every mode each character is dispatched on its
//! own. Function, subexpression and array scopes are tracked on a stack so
//! that every closing character emits the Stop token of the scope it ends.

use super::metrics::LexicalMetrics;
use super::state::{LexicalMode, ScanState};
use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{Token, TokenList, TokenSubType, TokenType};
use crate::{log_debug, log_error, log_success, log_warning};
use regex::Regex;
use std::sync::OnceLock;

static SCIENTIFIC_NOTATION: OnceLock<Option<Regex>> = OnceLock::new();

fn compile_pattern(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(error) => {
            log_error!(codes::system::INTERNAL_ERROR,
                "Scientific notation pattern failed to compile; exponent signs will split operands",
                "pattern" => pattern,
                "error" => error
            );
            None
        }
    }
}

/// Mantissa-and-`E` prefix of a number in scientific notation
fn is_scientific_prefix(text: &str) -> bool {
    SCIENTIFIC_NOTATION
        .get_or_init(|| compile_pattern(SCIENTIFIC_NOTATION_PATTERN))
        .as_ref()
        .map_or(false, |re| re.is_match(text))
}

/// Raw scan result
#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    pub formula: String,
    pub tokens: TokenList,
    /// The formula ended inside an error literal
    pub in_error: bool,
}

/// Formula scanner with metrics and runtime preferences
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Scan a formula into its raw token list
    pub fn scan(&mut self, formula: &str) -> ScanOutput {
        self.metrics = LexicalMetrics::default();

        let mut state = ScanState::new(formula);

        log_debug!("Starting lexical analysis",
            "char_count" => state.len()
        );

        while let Some(ch) = state.current_char() {
            match state.mode {
                LexicalMode::String => self.scan_quoted(&mut state, ch, QUOTE_DOUBLE),
                LexicalMode::Path => self.scan_quoted(&mut state, ch, QUOTE_SINGLE),
                LexicalMode::Range => {
                    if ch == BRACKET_CLOSE {
                        state.mode = LexicalMode::None;
                    }
                    state.token.push(ch);
                    state.advance(1);
                }
                LexicalMode::Error => self.scan_error(&mut state, ch),
                LexicalMode::None => self.scan_char(&mut state, ch),
            }
        }

        if state.has_pending() {
            self.flush(&mut state, TokenType::Operand);
        }

        let in_error = state.mode == LexicalMode::Error;
        if in_error {
            log_warning!(code = codes::lexical::UNTERMINATED_ERROR_LITERAL,
                "Formula ended inside an error literal",
                position = state.offset(),
                "literal" => state.tokens.items().last().map_or("", |t| t.value.as_str())
            );
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE,
            "Lexical analysis completed",
            "raw_tokens" => self.metrics.raw_tokens,
            "max_scope_depth" => self.metrics.max_scope_depth,
            "unknown_tokens" => self.metrics.unknown_tokens,
            "stack_underflows" => self.metrics.stack_underflows,
            "in_error" => in_error
        );

        ScanOutput {
            formula: state.formula(),
            tokens: state.tokens,
            in_error,
        }
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Hand the metrics over to the passes that follow the scan
    pub fn take_metrics(&mut self) -> LexicalMetrics {
        std::mem::take(&mut self.metrics)
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    // ========================================================================
    // Lexical modes
    // ========================================================================

    /// Text literals and paths: a doubled quote embeds one quote
    fn scan_quoted(&mut self, state: &mut ScanState, ch: char, quote: char) {
        if ch == quote {
            if state.next_char() == Some(quote) {
                state.token.push(quote);
                state.advance(1);
            } else {
                state.mode = LexicalMode::None;
                // a closing path quote leaves the text for the reference that follows
                if quote == QUOTE_DOUBLE {
                    let text = state.take_pending();
                    self.emit(state, text, TokenType::Operand, TokenSubType::Text);
                }
            }
        } else {
            state.token.push(ch);
        }
        state.advance(1);
    }

    fn scan_error(&mut self, state: &mut ScanState, ch: char) {
        state.token.push(ch);
        state.advance(1);

        if ERROR_LITERALS.contains(&state.token.as_str()) {
            state.mode = LexicalMode::None;
            let text = state.take_pending();
            self.emit(state, text, TokenType::Operand, TokenSubType::Error);
        }
    }

    // ========================================================================
    // Independent character dispatch
    // ========================================================================

    fn scan_char(&mut self, state: &mut ScanState, ch: char) {
        if OPERATORS_SN.contains(ch)
            && state.token.chars().count() > 1
            && is_scientific_prefix(&state.token)
        {
            state.token.push(ch);
            state.advance(1);
            return;
        }

        match ch {
            QUOTE_DOUBLE => {
                self.flush_unexpected(state, ch);
                state.mode = LexicalMode::String;
            }
            QUOTE_SINGLE => {
                self.flush_unexpected(state, ch);
                state.mode = LexicalMode::Path;
            }
            BRACKET_OPEN => {
                state.mode = LexicalMode::Range;
                state.token.push(ch);
            }
            ERROR_START => {
                self.flush_unexpected(state, ch);
                state.mode = LexicalMode::Error;
                state.token.push(ch);
            }
            BRACE_OPEN => {
                self.flush_unexpected(state, ch);
                self.open_scope(state, ARRAY_MARKER.to_string(), TokenType::Function);
                self.open_scope(state, ARRAY_ROW_MARKER.to_string(), TokenType::Function);
            }
            SEMICOLON => {
                self.flush(state, TokenType::Operand);
                self.close_scope(state);
                self.emit(
                    state,
                    COMMA.to_string(),
                    TokenType::Argument,
                    TokenSubType::Nothing,
                );
                self.open_scope(state, ARRAY_ROW_MARKER.to_string(), TokenType::Function);
            }
            BRACE_CLOSE => {
                self.flush(state, TokenType::Operand);
                self.close_scope(state);
                self.close_scope(state);
            }
            WHITESPACE => {
                self.flush(state, TokenType::Operand);
                self.emit(
                    state,
                    String::new(),
                    TokenType::Whitespace,
                    TokenSubType::Nothing,
                );
                state.advance(1);
                while state.current_char() == Some(WHITESPACE) {
                    state.advance(1);
                }
                return;
            }
            _ if state
                .double_char()
                .map_or(false, |pair| COMPARISON_OPERATORS.contains(&pair.as_str())) =>
            {
                self.flush(state, TokenType::Operand);
                let pair = state.double_char().unwrap_or_default();
                self.emit(state, pair, TokenType::OperatorInfix, TokenSubType::Logical);
                state.advance(2);
                return;
            }
            _ if OPERATORS_INFIX.contains(ch) => {
                self.flush(state, TokenType::Operand);
                self.emit(
                    state,
                    ch.to_string(),
                    TokenType::OperatorInfix,
                    TokenSubType::Nothing,
                );
            }
            OPERATOR_POSTFIX => {
                self.flush(state, TokenType::Operand);
                self.emit(
                    state,
                    ch.to_string(),
                    TokenType::OperatorPostfix,
                    TokenSubType::Nothing,
                );
            }
            PAREN_OPEN => {
                if state.has_pending() {
                    let name = state.take_pending();
                    self.open_scope(state, name, TokenType::Function);
                } else {
                    self.open_scope(state, String::new(), TokenType::Subexpression);
                }
            }
            COMMA => {
                self.flush(state, TokenType::Operand);
                if state.stack.top_type() != Some(TokenType::Function) {
                    self.emit(
                        state,
                        ch.to_string(),
                        TokenType::OperatorInfix,
                        TokenSubType::Union,
                    );
                } else {
                    self.emit(
                        state,
                        ch.to_string(),
                        TokenType::Argument,
                        TokenSubType::Nothing,
                    );
                }
            }
            PAREN_CLOSE => {
                self.flush(state, TokenType::Operand);
                self.close_scope(state);
            }
            _ => state.token.push(ch),
        }

        state.advance(1);
    }

    // ========================================================================
    // Token emission
    // ========================================================================

    fn emit(
        &mut self,
        state: &mut ScanState,
        value: String,
        token_type: TokenType,
        subtype: TokenSubType,
    ) -> Token {
        let token = state.tokens.add(value, token_type, subtype);
        self.metrics.record_token(&token, &self.preferences);

        if self.preferences.log_token_events {
            log_debug!("Token emitted",
                "value" => token.value.as_str(),
                "type" => token.token_type,
                "subtype" => token.subtype,
                "offset" => state.offset()
            );
        }

        token
    }

    /// Emit pending operand text, if any, with the given type
    fn flush(&mut self, state: &mut ScanState, token_type: TokenType) {
        if state.has_pending() {
            let text = state.take_pending();
            self.emit(state, text, token_type, TokenSubType::Nothing);
        }
    }

    /// Pending text before a quote, `#` or `{` cannot belong to either side
    fn flush_unexpected(&mut self, state: &mut ScanState, ch: char) {
        if !state.has_pending() {
            return;
        }

        log_warning!(code = codes::lexical::UNEXPECTED_CHARACTER,
            "Operand text pending before a delimiter; kept as Unknown token",
            position = state.offset(),
            "char" => ch,
            "pending" => state.token.as_str()
        );
        self.flush(state, TokenType::Unknown);
    }

    fn open_scope(&mut self, state: &mut ScanState, value: String, token_type: TokenType) {
        let token = self.emit(state, value, token_type, TokenSubType::Start);
        state.stack.push(token);
        self.metrics
            .record_scope_depth(state.stack.depth(), &self.preferences);
    }

    fn close_scope(&mut self, state: &mut ScanState) {
        if state.stack.is_empty() {
            self.metrics.record_stack_underflow();
            log_warning!(code = codes::lexical::SCOPE_UNDERFLOW,
                "Closing character without an open scope; emitting Function Stop",
                position = state.offset(),
                "char" => state.current_char().unwrap_or(' ')
            );
        }

        let stop = state.stack.pop();
        self.metrics.record_token(&stop, &self.preferences);
        state.tokens.add_ref(stop);
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(formula: &str) -> ScanOutput {
        LexicalAnalyzer::new().scan(formula)
    }

    fn summary(output: &ScanOutput) -> Vec<(String, TokenType, TokenSubType)> {
        output
            .tokens
            .iter()
            .map(|t| (t.value.clone(), t.token_type, t.subtype))
            .collect()
    }

    fn tok(
        value: &str,
        token_type: TokenType,
        subtype: TokenSubType,
    ) -> (String, TokenType, TokenSubType) {
        (value.to_string(), token_type, subtype)
    }

    #[test]
    fn test_empty_and_bare_prefix() {
        assert!(scan("").tokens.is_empty());
        assert!(scan("   ").tokens.is_empty());
        assert!(scan("=").tokens.is_empty());
    }

    #[test]
    fn test_leading_equals_is_not_a_token() {
        let with = summary(&scan("=1+2"));
        let without = summary(&scan("1+2"));
        assert_eq!(with, without);
        assert_eq!(
            with,
            vec![
                tok("1", TokenType::Operand, TokenSubType::Nothing),
                tok("+", TokenType::OperatorInfix, TokenSubType::Nothing),
                tok("2", TokenType::Operand, TokenSubType::Nothing),
            ]
        );
    }

    #[test]
    fn test_function_scope() {
        let output = scan("=SUM(B5:B15,D5:D15)");
        assert_eq!(
            summary(&output),
            vec![
                tok("SUM", TokenType::Function, TokenSubType::Start),
                tok("B5:B15", TokenType::Operand, TokenSubType::Nothing),
                tok(",", TokenType::Argument, TokenSubType::Nothing),
                tok("D5:D15", TokenType::Operand, TokenSubType::Nothing),
                tok("", TokenType::Function, TokenSubType::Stop),
            ]
        );
        assert!(!output.in_error);
    }

    #[test]
    fn test_comma_outside_function_is_union() {
        let output = scan("=(A:A,1:1)");
        let types = summary(&output);
        assert_eq!(
            types[0],
            tok("", TokenType::Subexpression, TokenSubType::Start)
        );
        assert_eq!(
            types[2],
            tok(",", TokenType::OperatorInfix, TokenSubType::Union)
        );
        assert_eq!(
            types[4],
            tok("", TokenType::Subexpression, TokenSubType::Stop)
        );
    }

    #[test]
    fn test_text_with_embedded_quotes() {
        let output = scan(r#"="say ""hi"""&"""#);
        let tokens = summary(&output);
        assert_eq!(
            tokens[0],
            tok(r#"say "hi""#, TokenType::Operand, TokenSubType::Text)
        );
        assert_eq!(
            tokens[1],
            tok("&", TokenType::OperatorInfix, TokenSubType::Nothing)
        );
        assert_eq!(tokens[2], tok("", TokenType::Operand, TokenSubType::Text));
    }

    #[test]
    fn test_path_is_absorbed_into_reference() {
        let output = scan("='My Sheet'!A1+'it''s'!B2");
        let tokens = summary(&output);
        assert_eq!(
            tokens[0],
            tok("My Sheet!A1", TokenType::Operand, TokenSubType::Nothing)
        );
        assert_eq!(
            tokens[2],
            tok("it's!B2", TokenType::Operand, TokenSubType::Nothing)
        );
    }

    #[test]
    fn test_bracketed_range_keeps_brackets() {
        let output = scan("=[data.xls]sheet1!$A$1");
        assert_eq!(
            summary(&output),
            vec![tok(
                "[data.xls]sheet1!$A$1",
                TokenType::Operand,
                TokenSubType::Nothing
            )]
        );

        let output = scan("=R[41]C[2]");
        assert_eq!(output.tokens.items()[0].value, "R[41]C[2]");
    }

    #[test]
    fn test_error_literals_close() {
        let output = scan("=#DIV/0!+#N/A");
        assert_eq!(
            summary(&output),
            vec![
                tok("#DIV/0!", TokenType::Operand, TokenSubType::Error),
                tok("+", TokenType::OperatorInfix, TokenSubType::Nothing),
                tok("#N/A", TokenType::Operand, TokenSubType::Error),
            ]
        );
        assert!(!output.in_error);
    }

    #[test]
    fn test_unterminated_error_literal() {
        let output = scan("=#DIV");
        assert!(output.in_error);
        assert_eq!(
            summary(&output),
            vec![tok("#DIV", TokenType::Operand, TokenSubType::Nothing)]
        );
    }

    #[test]
    fn test_scientific_notation() {
        let output = scan("=1.5E+3-2E-1");
        assert_eq!(
            summary(&output),
            vec![
                tok("1.5E+3", TokenType::Operand, TokenSubType::Nothing),
                tok("-", TokenType::OperatorInfix, TokenSubType::Nothing),
                tok("2E-1", TokenType::Operand, TokenSubType::Nothing),
            ]
        );

        // a leading zero does not qualify as a mantissa
        let output = scan("=0E+1");
        assert_eq!(output.tokens.len(), 3);
    }

    #[test]
    fn test_scientific_pattern_compiles() {
        assert!(compile_pattern(SCIENTIFIC_NOTATION_PATTERN).is_some());
        assert!(is_scientific_prefix("1.5E"));
        assert!(!is_scientific_prefix("0E"));
    }

    #[test]
    fn test_broken_pattern_disables_rule_without_panicking() {
        assert!(compile_pattern("([1-9]E").is_none());
    }

    #[test]
    fn test_comparison_operators() {
        let output = scan("=A1<>B1");
        assert_eq!(
            output.tokens.items()[1],
            Token::new("<>", TokenType::OperatorInfix, TokenSubType::Logical)
        );

        let output = scan("=A1<B1");
        assert_eq!(
            output.tokens.items()[1],
            Token::new("<", TokenType::OperatorInfix, TokenSubType::Nothing)
        );
    }

    #[test]
    fn test_whitespace_run_is_one_token() {
        let output = scan("=A1    B1");
        assert_eq!(
            summary(&output),
            vec![
                tok("A1", TokenType::Operand, TokenSubType::Nothing),
                tok("", TokenType::Whitespace, TokenSubType::Nothing),
                tok("B1", TokenType::Operand, TokenSubType::Nothing),
            ]
        );
    }

    #[test]
    fn test_array_rows() {
        let output = scan("={1,2;3}");
        assert_eq!(
            summary(&output),
            vec![
                tok("ARRAY", TokenType::Function, TokenSubType::Start),
                tok("ARRAYROW", TokenType::Function, TokenSubType::Start),
                tok("1", TokenType::Operand, TokenSubType::Nothing),
                tok(",", TokenType::Argument, TokenSubType::Nothing),
                tok("2", TokenType::Operand, TokenSubType::Nothing),
                tok("", TokenType::Function, TokenSubType::Stop),
                tok(",", TokenType::Argument, TokenSubType::Nothing),
                tok("ARRAYROW", TokenType::Function, TokenSubType::Start),
                tok("3", TokenType::Operand, TokenSubType::Nothing),
                tok("", TokenType::Function, TokenSubType::Stop),
                tok("", TokenType::Function, TokenSubType::Stop),
            ]
        );
    }

    #[test]
    fn test_postfix_percent() {
        let output = scan("=50%");
        assert_eq!(
            output.tokens.items()[1],
            Token::new("%", TokenType::OperatorPostfix, TokenSubType::Nothing)
        );
    }

    #[test]
    fn test_unexpected_quote_flushes_unknown() {
        let mut analyzer = LexicalAnalyzer::new();
        let output = analyzer.scan("=A1\"x\"");
        assert_eq!(
            summary(&output),
            vec![
                tok("A1", TokenType::Unknown, TokenSubType::Nothing),
                tok("x", TokenType::Operand, TokenSubType::Text),
            ]
        );
        assert_eq!(analyzer.metrics().unknown_tokens, 1);
    }

    #[test]
    fn test_stack_underflow_yields_function_stop() {
        let mut analyzer = LexicalAnalyzer::new();
        let output = analyzer.scan("=1)");
        assert_eq!(
            summary(&output),
            vec![
                tok("1", TokenType::Operand, TokenSubType::Nothing),
                tok("", TokenType::Function, TokenSubType::Stop),
            ]
        );
        assert_eq!(analyzer.metrics().stack_underflows, 1);
    }

    #[test]
    fn test_metrics_follow_preferences() {
        let mut analyzer = LexicalAnalyzer::with_preferences(LexicalPreferences {
            collect_detailed_metrics: true,
            track_operator_patterns: true,
            log_token_events: true,
        });
        analyzer.scan("=IF(A1>=1,SUM(B1:B2)*2,0)");

        let metrics = analyzer.metrics();
        assert_eq!(metrics.max_scope_depth, 2);
        assert_eq!(metrics.count_of(TokenType::Function), 4);
        assert_eq!(metrics.operator_usage.get(">="), Some(&1));
        assert_eq!(metrics.operator_usage.get("*"), Some(&1));

        let taken = analyzer.take_metrics();
        assert_eq!(taken.raw_tokens, 13);
        assert_eq!(analyzer.metrics().raw_tokens, 0);
    }
}

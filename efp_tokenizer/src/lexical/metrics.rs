//! Tokenization metrics

use crate::config::runtime::LexicalPreferences;
use crate::tokens::{Token, TokenType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counters collected across the scan and the fix-up passes
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalMetrics {
    pub raw_tokens: usize,
    pub final_tokens: usize,

    pub stack_underflows: usize,
    pub unknown_tokens: usize,

    pub whitespace_dropped: usize,
    pub intersections_created: usize,
    pub noops_removed: usize,

    // Runtime preference-controlled metrics
    pub max_scope_depth: usize,
    pub token_type_counts: BTreeMap<String, usize>,
    pub operator_usage: BTreeMap<String, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.raw_tokens += 1;

        if token.token_type == TokenType::Unknown {
            self.unknown_tokens += 1;
        }

        if preferences.collect_detailed_metrics {
            *self
                .token_type_counts
                .entry(token.token_type.as_str().to_string())
                .or_insert(0) += 1;

            if preferences.track_operator_patterns && token.token_type.is_operator() {
                *self.operator_usage.entry(token.value.clone()).or_insert(0) += 1;
            }
        }
    }

    pub(crate) fn record_scope_depth(&mut self, depth: usize, preferences: &LexicalPreferences) {
        if preferences.collect_detailed_metrics {
            self.max_scope_depth = self.max_scope_depth.max(depth);
        }
    }

    pub(crate) fn record_stack_underflow(&mut self) {
        self.stack_underflows += 1;
    }

    pub(crate) fn record_whitespace(&mut self, kept: bool) {
        if kept {
            self.intersections_created += 1;
        } else {
            self.whitespace_dropped += 1;
        }
    }

    pub(crate) fn record_noop_removed(&mut self) {
        self.noops_removed += 1;
    }

    pub(crate) fn record_final_tokens(&mut self, count: usize) {
        self.final_tokens = count;
    }

    /// True when the scan went through a recovery path
    pub fn has_recoveries(&self) -> bool {
        self.stack_underflows > 0 || self.unknown_tokens > 0
    }

    pub fn count_of(&self, token_type: TokenType) -> usize {
        self.token_type_counts
            .get(token_type.as_str())
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenSubType;

    fn preferences(detailed: bool, operators: bool) -> LexicalPreferences {
        LexicalPreferences {
            collect_detailed_metrics: detailed,
            track_operator_patterns: operators,
            log_token_events: false,
        }
    }

    #[test]
    fn test_detailed_counts() {
        let prefs = preferences(true, true);
        let mut metrics = LexicalMetrics::default();
        metrics.record_token(
            &Token::new("+", TokenType::OperatorInfix, TokenSubType::Nothing),
            &prefs,
        );
        metrics.record_token(
            &Token::new("+", TokenType::OperatorInfix, TokenSubType::Nothing),
            &prefs,
        );
        metrics.record_token(
            &Token::new("x", TokenType::Unknown, TokenSubType::Nothing),
            &prefs,
        );
        metrics.record_scope_depth(3, &prefs);
        metrics.record_scope_depth(1, &prefs);

        assert_eq!(metrics.raw_tokens, 3);
        assert_eq!(metrics.count_of(TokenType::OperatorInfix), 2);
        assert_eq!(metrics.operator_usage.get("+"), Some(&2));
        assert_eq!(metrics.max_scope_depth, 3);
        assert!(metrics.has_recoveries());
    }

    #[test]
    fn test_detailed_metrics_disabled() {
        let prefs = preferences(false, false);
        let mut metrics = LexicalMetrics::default();
        metrics.record_token(
            &Token::new("1", TokenType::Operand, TokenSubType::Nothing),
            &prefs,
        );
        metrics.record_scope_depth(4, &prefs);

        assert_eq!(metrics.raw_tokens, 1);
        assert!(metrics.token_type_counts.is_empty());
        assert_eq!(metrics.max_scope_depth, 0);
        assert!(!metrics.has_recoveries());
    }

    #[test]
    fn test_pass_counters() {
        let mut metrics = LexicalMetrics::default();
        metrics.record_whitespace(true);
        metrics.record_whitespace(false);
        metrics.record_whitespace(false);
        metrics.record_noop_removed();
        metrics.record_stack_underflow();
        metrics.record_final_tokens(7);

        assert_eq!(metrics.intersections_created, 1);
        assert_eq!(metrics.whitespace_dropped, 2);
        assert_eq!(metrics.noops_removed, 1);
        assert_eq!(metrics.stack_underflows, 1);
        assert_eq!(metrics.final_tokens, 7);
    }
}

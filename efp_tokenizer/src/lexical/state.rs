//! Per-call scanner state

use crate::config::constants::compile_time::lexical::FORMULA_PREFIX;
use crate::tokens::{TokenList, TokenStack};

/// Mutually exclusive lexical sub-states of the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexicalMode {
    #[default]
    None,
    /// Inside a double-quoted text literal
    String,
    /// Inside a single-quoted workbook or sheet path
    Path,
    /// Inside a bracketed range offset or workbook name
    Range,
    /// Inside an error literal started by `#`
    Error,
}

/// Cursor state owned by a single scan
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    chars: Vec<char>,
    offset: usize,
    pub token: String,
    pub mode: LexicalMode,
    pub tokens: TokenList,
    pub stack: TokenStack,
}

impl ScanState {
    /// Normalize the formula and position the cursor just past the leading `=`
    pub fn new(formula: &str) -> Self {
        let formula = formula.trim();
        let mut chars = Vec::with_capacity(formula.len() + 1);
        if !formula.is_empty() && !formula.starts_with(FORMULA_PREFIX) {
            chars.push(FORMULA_PREFIX);
        }
        chars.extend(formula.chars());

        let offset = usize::from(!chars.is_empty());

        Self {
            chars,
            offset,
            ..Self::default()
        }
    }

    /// The normalized formula text
    pub fn formula(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn advance(&mut self, count: usize) {
        self.offset += count;
    }

    pub fn eof(&self) -> bool {
        self.offset >= self.chars.len()
    }

    pub fn current_char(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    pub fn next_char(&self) -> Option<char> {
        self.chars.get(self.offset + 1).copied()
    }

    /// The current and next character, when both exist
    pub fn double_char(&self) -> Option<String> {
        match (self.current_char(), self.next_char()) {
            (Some(a), Some(b)) => Some([a, b].iter().collect()),
            _ => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.token.is_empty()
    }

    /// Take the accumulated operand text, leaving the accumulator empty
    pub fn take_pending(&mut self) -> String {
        std::mem::take(&mut self.token)
    }
}

//! Lexical analysis of spreadsheet formulas
//!
//! The scanner turns formula text into the raw token list: whitespace is
//! still present and operators and operands carry no subtype yet. The
//! passes in [`crate::passes`] finish the classification.

pub mod analyzer;
pub mod metrics;
pub mod state;

use crate::config::runtime::LexicalPreferences;

pub use analyzer::{LexicalAnalyzer, ScanOutput};
pub use metrics::LexicalMetrics;
pub use state::{LexicalMode, ScanState};

/// Scan a formula with default preferences
pub fn scan(formula: &str) -> ScanOutput {
    LexicalAnalyzer::new().scan(formula)
}

/// Create analyzer with custom runtime preferences
pub fn create_analyzer_with_preferences(preferences: LexicalPreferences) -> LexicalAnalyzer {
    LexicalAnalyzer::with_preferences(preferences)
}

//! Consolidated error codes and classification system
//!
//! Single source of truth for all event codes, their metadata, and classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Configuration error codes
pub mod config {
    use super::Code;

    pub const CONFIG_FILE_UNREADABLE: Code = Code::new("E005");
    pub const CONFIG_PARSE_FAILURE: Code = Code::new("E006");
    pub const CONFIG_INVALID: Code = Code::new("E007");
}

/// Scanner recovery-path codes
pub mod lexical {
    use super::Code;

    pub const UNTERMINATED_ERROR_LITERAL: Code = Code::new("E020");
    pub const UNEXPECTED_CHARACTER: Code = Code::new("E021");
    pub const SCOPE_UNDERFLOW: Code = Code::new("E022");
}

/// Structural validation codes
pub mod validation {
    use super::Code;

    pub const INCOMPLETE_FORMULA: Code = Code::new("E040");
    pub const UNKNOWN_TOKEN: Code = Code::new("E041");
    pub const UNBALANCED_SCOPES: Code = Code::new("E042");
    pub const UNEXPECTED_STOP: Code = Code::new("E043");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const CONFIGURATION_LOADED: Code = Code::new("I005");

    // Tokenizer stages
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const WHITESPACE_REDUCTION_COMPLETE: Code = Code::new("I021");
    pub const CLASSIFICATION_COMPLETE: Code = Code::new("I022");
    pub const NOOP_ELIMINATION_COMPLETE: Code = Code::new("I023");
    pub const PARSE_COMPLETE: Code = Code::new("I024");

    pub const STRUCTURE_VALIDATION_PASSED: Code = Code::new("I040");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Critical internal error",
                "File a bug report with the formula that triggered it",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "Logging or configuration initialization failure",
                "Check EFP_* environment variables and the configuration file",
            ),
            ErrorMetadata::new(
                "E005",
                "Configuration",
                Severity::High,
                true,
                "Configuration file could not be read",
                "Verify the path and file permissions",
            ),
            ErrorMetadata::new(
                "E006",
                "Configuration",
                Severity::High,
                true,
                "Configuration file is not valid TOML",
                "Fix the TOML syntax reported in the message",
            ),
            ErrorMetadata::new(
                "E007",
                "Configuration",
                Severity::Medium,
                true,
                "Configuration preferences are inconsistent",
                "Enable the preference the message names or drop the dependent one",
            ),
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::Medium,
                true,
                "Formula ended inside an error literal",
                "Complete the error literal (for example #DIV/0!)",
            ),
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::Low,
                true,
                "Quote, brace or error start found while operand text was pending",
                "Check for a missing operator before the quoted text",
            ),
            ErrorMetadata::new(
                "E022",
                "Lexical",
                Severity::Medium,
                true,
                "Closing punctuation without a matching open scope",
                "Remove the extra ')' or '}' or add the missing opener",
            ),
            ErrorMetadata::new(
                "E040",
                "Validation",
                Severity::High,
                true,
                "Token stream is incomplete",
                "Inspect the trailing error literal of the formula",
            ),
            ErrorMetadata::new(
                "E041",
                "Validation",
                Severity::Medium,
                true,
                "Token stream contains an Unknown token",
                "Insert the missing operator between adjacent operands",
            ),
            ErrorMetadata::new(
                "E042",
                "Validation",
                Severity::High,
                true,
                "Start and Stop tokens are not balanced",
                "Balance parentheses and braces in the formula",
            ),
            ErrorMetadata::new(
                "E043",
                "Validation",
                Severity::High,
                true,
                "Stop token appears before any matching Start token",
                "Remove the stray closing parenthesis",
            ),
            ErrorMetadata::new(
                "I004",
                "System",
                Severity::Low,
                true,
                "Logging system initialized",
                "No action required",
            ),
            ErrorMetadata::new(
                "I005",
                "Configuration",
                Severity::Low,
                true,
                "Runtime configuration loaded",
                "No action required",
            ),
            ErrorMetadata::new(
                "I020",
                "Lexical",
                Severity::Low,
                true,
                "Scanner produced the raw token list",
                "Continue to whitespace reduction",
            ),
            ErrorMetadata::new(
                "I021",
                "Passes",
                Severity::Low,
                true,
                "Whitespace reduction completed",
                "Continue to classification",
            ),
            ErrorMetadata::new(
                "I022",
                "Passes",
                Severity::Low,
                true,
                "Operator and operand classification completed",
                "Continue to no-op elimination",
            ),
            ErrorMetadata::new(
                "I023",
                "Passes",
                Severity::Low,
                true,
                "No-op elimination completed",
                "Token stream is ready",
            ),
            ErrorMetadata::new(
                "I024",
                "Pipeline",
                Severity::Low,
                true,
                "Formula tokenized",
                "No action required",
            ),
            ErrorMetadata::new(
                "I040",
                "Validation",
                Severity::Low,
                true,
                "Token stream is structurally complete",
                "No action required",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

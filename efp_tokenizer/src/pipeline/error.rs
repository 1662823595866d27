use crate::logging::{codes, Code};

/// Structural problems found in a token stream
///
/// The scanner never fails; these errors are raised only when a caller asks
/// for a formula to be checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("Formula ended inside error literal '{text}'")]
    UnterminatedError { text: String },

    #[error("Unknown token '{value}' at token {position}")]
    UnknownToken { value: String, position: usize },

    #[error("Unbalanced scopes: {opened} opened, {closed} closed")]
    UnbalancedScope { opened: usize, closed: usize },

    #[error("Stop token at token {position} closes no open scope")]
    UnexpectedStop { position: usize },
}

impl StructureError {
    pub fn error_code(&self) -> Code {
        match self {
            StructureError::UnterminatedError { .. } => codes::validation::INCOMPLETE_FORMULA,
            StructureError::UnknownToken { .. } => codes::validation::UNKNOWN_TOKEN,
            StructureError::UnbalancedScope { .. } => codes::validation::UNBALANCED_SCOPES,
            StructureError::UnexpectedStop { .. } => codes::validation::UNEXPECTED_STOP,
        }
    }
}

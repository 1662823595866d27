//! Structural checks over a finished token stream

use super::error::StructureError;
use super::output::ParseOutcome;
use crate::logging::codes;
use crate::tokens::{Token, TokenType};
use crate::{log_error, log_success};

/// Check a parse outcome for the recovery-path signals the scanner leaves behind
pub fn validate(outcome: &ParseOutcome) -> Result<(), StructureError> {
    validate_tokens(&outcome.tokens, outcome.in_error)
}

pub fn validate_tokens(tokens: &[Token], in_error: bool) -> Result<(), StructureError> {
    let result = check(tokens, in_error);

    match &result {
        Ok(()) => {
            log_success!(codes::success::STRUCTURE_VALIDATION_PASSED,
                "Token stream is structurally complete",
                "tokens" => tokens.len()
            );
        }
        Err(error) => {
            log_error!(error.error_code(), &error.to_string(),
                "tokens" => tokens.len()
            );
        }
    }

    result
}

fn check(tokens: &[Token], in_error: bool) -> Result<(), StructureError> {
    if in_error {
        return Err(StructureError::UnterminatedError {
            text: tokens.last().map(|t| t.value.clone()).unwrap_or_default(),
        });
    }

    if let Some((position, token)) = tokens
        .iter()
        .enumerate()
        .find(|(_, t)| t.token_type == TokenType::Unknown)
    {
        return Err(StructureError::UnknownToken {
            value: token.value.clone(),
            position,
        });
    }

    let mut opened = 0;
    let mut closed = 0;
    for (position, token) in tokens.iter().enumerate() {
        if token.is_start() {
            opened += 1;
        } else if token.is_stop() {
            if closed == opened {
                return Err(StructureError::UnexpectedStop { position });
            }
            closed += 1;
        }
    }

    if opened != closed {
        return Err(StructureError::UnbalancedScope { opened, closed });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use assert_matches::assert_matches;

    fn check_formula(formula: &str) -> Result<(), StructureError> {
        let mut parser = crate::Parser::new();
        parser.parse(formula);
        validate_tokens(parser.tokens(), parser.in_error())
    }

    #[test]
    fn test_well_formed_formulas_pass() {
        assert!(check_formula("=SUM(B5:B15,D5:D15)").is_ok());
        assert!(check_formula("={1,2;3,4}").is_ok());
        assert!(check_formula("=IF(A1>0,\"yes\",\"no\")").is_ok());
    }

    #[test]
    fn test_unterminated_error() {
        assert_matches!(
            check_formula("=#DIV"),
            Err(StructureError::UnterminatedError { text }) if text == "#DIV"
        );
    }

    #[test]
    fn test_unknown_token() {
        assert_matches!(
            check_formula("=A1\"x\""),
            Err(StructureError::UnknownToken { position: 0, .. })
        );
    }

    #[test]
    fn test_missing_close() {
        assert_matches!(
            check_formula("=SUM(A1"),
            Err(StructureError::UnbalancedScope {
                opened: 1,
                closed: 0
            })
        );
    }

    #[test]
    fn test_stray_close() {
        assert_matches!(
            check_formula("=1)+(2"),
            Err(StructureError::UnexpectedStop { position: 1 })
        );
    }

    #[test]
    fn test_validate_outcome() {
        let formula = "=(1+2)*3";
        let tokens = parse(formula);
        let outcome = ParseOutcome::new(formula.to_string(), tokens, false, Default::default());
        assert!(validate(&outcome).is_ok());
    }
}

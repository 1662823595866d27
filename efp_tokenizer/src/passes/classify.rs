//! Operator and operand classification
//!
//! Resolves `+`/`-` into prefix, no-op or infix math, fills in the subtype
//! of every infix operator and operand that the scanner left open, and strips
//! the `@` explicit-call marker from function names.

use crate::config::constants::compile_time::lexical::{
    FUNCTION_CALL_MARKER, LOGICAL_FALSE, LOGICAL_TRUE,
};
use crate::tokens::{Token, TokenList, TokenSubType, TokenType};

pub fn classify(mut tokens: TokenList) -> TokenList {
    tokens.reset();

    while tokens.move_next() {
        let follows_operand = !tokens.bof()
            && tokens.previous().map_or(false, |t| {
                t.ends_operand() || t.token_type == TokenType::OperatorPostfix
            });

        if let Some(token) = tokens.current_mut() {
            classify_token(token, follows_operand);
        }
    }

    tokens.reset();
    tokens
}

fn classify_token(token: &mut Token, follows_operand: bool) {
    match token.token_type {
        TokenType::OperatorInfix if token.value == "-" => {
            if follows_operand {
                token.subtype = TokenSubType::Math;
            } else {
                token.token_type = TokenType::OperatorPrefix;
            }
        }
        TokenType::OperatorInfix if token.value == "+" => {
            if follows_operand {
                token.subtype = TokenSubType::Math;
            } else {
                token.token_type = TokenType::Noop;
            }
        }
        TokenType::OperatorInfix if token.subtype.is_empty() => {
            token.subtype = infix_subtype(&token.value);
        }
        TokenType::Operand if token.subtype.is_empty() => {
            token.subtype = operand_subtype(&token.value);
        }
        TokenType::Function => {
            if let Some(name) = token.value.strip_prefix(FUNCTION_CALL_MARKER) {
                token.value = name.to_string();
            }
        }
        _ => {}
    }
}

fn infix_subtype(value: &str) -> TokenSubType {
    if value.starts_with(&['<', '>', '='][..]) {
        TokenSubType::Logical
    } else if value == "&" {
        TokenSubType::Concatenation
    } else {
        TokenSubType::Math
    }
}

fn operand_subtype(value: &str) -> TokenSubType {
    if value.parse::<f64>().is_ok() {
        TokenSubType::Number
    } else if value == LOGICAL_TRUE || value == LOGICAL_FALSE {
        TokenSubType::Logical
    } else {
        TokenSubType::Range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(tokens: &[(&str, TokenType, TokenSubType)]) -> TokenList {
        let mut list = TokenList::new();
        for (value, token_type, subtype) in tokens {
            list.add(*value, *token_type, *subtype);
        }
        list
    }

    #[test]
    fn test_leading_minus_is_prefix() {
        let tokens = classify(list(&[
            ("-", TokenType::OperatorInfix, TokenSubType::Nothing),
            ("2", TokenType::Operand, TokenSubType::Nothing),
        ]));
        assert_eq!(tokens.items()[0].token_type, TokenType::OperatorPrefix);
        assert_eq!(tokens.items()[1].subtype, TokenSubType::Number);
    }

    #[test]
    fn test_plus_after_operator_is_noop() {
        let tokens = classify(list(&[
            ("1", TokenType::Operand, TokenSubType::Nothing),
            ("*", TokenType::OperatorInfix, TokenSubType::Nothing),
            ("+", TokenType::OperatorInfix, TokenSubType::Nothing),
            ("2", TokenType::Operand, TokenSubType::Nothing),
        ]));
        assert_eq!(tokens.items()[1].subtype, TokenSubType::Math);
        assert_eq!(tokens.items()[2].token_type, TokenType::Noop);
    }

    #[test]
    fn test_minus_after_postfix_and_stop_is_math() {
        let tokens = classify(list(&[
            ("5", TokenType::Operand, TokenSubType::Nothing),
            ("%", TokenType::OperatorPostfix, TokenSubType::Nothing),
            ("-", TokenType::OperatorInfix, TokenSubType::Nothing),
            ("", TokenType::Subexpression, TokenSubType::Start),
            ("1", TokenType::Operand, TokenSubType::Nothing),
            ("", TokenType::Subexpression, TokenSubType::Stop),
            ("+", TokenType::OperatorInfix, TokenSubType::Nothing),
            ("2", TokenType::Operand, TokenSubType::Nothing),
        ]));
        let items = tokens.items();
        assert_eq!(items[2].token_type, TokenType::OperatorInfix);
        assert_eq!(items[2].subtype, TokenSubType::Math);
        assert_eq!(items[6].subtype, TokenSubType::Math);
    }

    #[test]
    fn test_minus_after_function_start_is_prefix() {
        let tokens = classify(list(&[
            ("ABS", TokenType::Function, TokenSubType::Start),
            ("-", TokenType::OperatorInfix, TokenSubType::Nothing),
            ("1", TokenType::Operand, TokenSubType::Nothing),
            ("", TokenType::Function, TokenSubType::Stop),
        ]));
        assert_eq!(tokens.items()[1].token_type, TokenType::OperatorPrefix);
    }

    #[test]
    fn test_infix_subtypes() {
        assert_eq!(infix_subtype("<="), TokenSubType::Logical);
        assert_eq!(infix_subtype(">"), TokenSubType::Logical);
        assert_eq!(infix_subtype("="), TokenSubType::Logical);
        assert_eq!(infix_subtype("&"), TokenSubType::Concatenation);
        assert_eq!(infix_subtype("^"), TokenSubType::Math);
        assert_eq!(infix_subtype("/"), TokenSubType::Math);
    }

    #[test]
    fn test_operand_subtypes() {
        assert_eq!(operand_subtype("1.0"), TokenSubType::Number);
        assert_eq!(operand_subtype("1.5E+3"), TokenSubType::Number);
        assert_eq!(operand_subtype("TRUE"), TokenSubType::Logical);
        assert_eq!(operand_subtype("true"), TokenSubType::Range);
        assert_eq!(operand_subtype("$A$1"), TokenSubType::Range);
        assert_eq!(operand_subtype("sheet1!A1:B2"), TokenSubType::Range);
    }

    #[test]
    fn test_assigned_subtypes_are_kept() {
        let tokens = classify(list(&[
            ("abc", TokenType::Operand, TokenSubType::Text),
            ("&", TokenType::OperatorInfix, TokenSubType::Nothing),
            ("#N/A", TokenType::Operand, TokenSubType::Error),
            ("", TokenType::OperatorInfix, TokenSubType::Intersection),
            ("<>", TokenType::OperatorInfix, TokenSubType::Logical),
        ]));
        let subtypes: Vec<TokenSubType> = tokens.iter().map(|t| t.subtype).collect();
        assert_eq!(
            subtypes,
            vec![
                TokenSubType::Text,
                TokenSubType::Concatenation,
                TokenSubType::Error,
                TokenSubType::Intersection,
                TokenSubType::Logical,
            ]
        );
    }

    #[test]
    fn test_function_marker_is_stripped() {
        let tokens = classify(list(&[
            ("@SUM", TokenType::Function, TokenSubType::Start),
            ("R1C1", TokenType::Operand, TokenSubType::Nothing),
            ("", TokenType::Function, TokenSubType::Stop),
        ]));
        assert_eq!(tokens.items()[0].value, "SUM");
    }

    #[test]
    fn test_classification_is_idempotent() {
        let once = classify(list(&[
            ("-", TokenType::OperatorInfix, TokenSubType::Nothing),
            ("A1", TokenType::Operand, TokenSubType::Nothing),
            ("-", TokenType::OperatorInfix, TokenSubType::Nothing),
            ("+", TokenType::OperatorInfix, TokenSubType::Nothing),
            ("3", TokenType::Operand, TokenSubType::Nothing),
            ("&", TokenType::OperatorInfix, TokenSubType::Nothing),
            ("TRUE", TokenType::Operand, TokenSubType::Nothing),
        ]));
        let twice = classify(once.clone());
        assert_eq!(once.items(), twice.items());
    }
}

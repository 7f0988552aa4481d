//! FILENAME: parser/src/tests.rs
//! PURPOSE: Consolidated unit tests for the parser crate.

use crate::lexer::Lexer;
use crate::token::Token;
use crate::validator::{normalize, validate, BracketFamily, ValidationError};

const OPERATORS: [&str; 4] = ["+", "-", "/", "*"];
const NUMBERS: [&str; 6] = ["3.1415", "3", "3.", "7,9", "g", "O"];
const OPENING: [&str; 3] = ["(", "[", "{"];
const CLOSING: [&str; 3] = [")", "]", "}"];

// ========================================
// LEXER TESTS
// ========================================

#[test]
fn lexer_tokenizes_simple_math() {
    let mut lexer = Lexer::new("1+2.5");

    assert_eq!(lexer.next_token(), Token::Number(1.0));
    assert_eq!(lexer.next_token(), Token::Plus);
    assert_eq!(lexer.next_token(), Token::Number(2.5));
    assert_eq!(lexer.next_token(), Token::EOF);
}

#[test]
fn lexer_tokenizes_all_bracket_families() {
    let tokens = Lexer::new("([{}])").tokenize();
    assert_eq!(
        tokens,
        vec![
            Token::LParen,
            Token::LBracket,
            Token::LBrace,
            Token::RBrace,
            Token::RBracket,
            Token::RParen,
            Token::EOF,
        ]
    );
}

#[test]
fn lexer_reads_leading_dot_number() {
    let mut lexer = Lexer::new(".5*2");
    assert_eq!(lexer.next_token(), Token::Number(0.5));
    assert_eq!(lexer.next_token(), Token::Asterisk);
    assert_eq!(lexer.next_token(), Token::Number(2.0));
}

#[test]
fn lexer_marks_unknown_characters_illegal() {
    let mut lexer = Lexer::new("5%3");
    assert_eq!(lexer.next_token(), Token::Number(5.0));
    assert_eq!(lexer.next_token(), Token::Illegal('%'));
    assert_eq!(lexer.next_token(), Token::Number(3.0));
}

#[test]
fn lexer_lone_dot_is_illegal() {
    let mut lexer = Lexer::new(".");
    assert_eq!(lexer.next_token(), Token::Illegal('.'));
}

#[test]
fn token_operator_symbols() {
    assert_eq!(Token::Slash.operator_symbol(), Some("/"));
    assert_eq!(Token::Minus.operator_symbol(), Some("-"));
    assert_eq!(Token::LParen.operator_symbol(), None);
    assert!(Token::LBrace.is_opening_bracket());
    assert!(Token::RBracket.is_closing_bracket());
    assert!(!Token::Number(1.0).is_closing_bracket());
}

// ========================================
// VALIDATOR: REJECTIONS
// ========================================

#[test]
fn test_wrong_parse_grid() {
    let mut checked = 0;
    for number in NUMBERS {
        for open in OPENING {
            for close in CLOSING {
                for op in OPERATORS {
                    let leading = format!("{}{}{}{}", open, op, number, close);
                    assert!(validate(&leading).is_err(), "{} did not error out", leading);

                    let trailing = format!("{}{}{}{}", open, number, op, close);
                    assert!(validate(&trailing).is_err(), "{} did not error out", trailing);
                    checked += 2;
                }
            }
        }
    }
    assert_eq!(checked, NUMBERS.len() * OPENING.len() * CLOSING.len() * OPERATORS.len() * 2);
}

#[test]
fn test_operator_before_closing_bracket() {
    let err = validate("(1.755+)").unwrap_err();
    assert_eq!(
        err,
        ValidationError::MalformedExpression {
            fragment: "+)".to_string()
        }
    );
}

#[test]
fn test_unbalanced_square_brackets() {
    let err = validate("1.755+]").unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnbalancedBrackets {
            family: BracketFamily::Square,
            opening: 0,
            closing: 1,
        }
    );

    let err = validate("[1.755+").unwrap_err();
    assert!(matches!(
        err,
        ValidationError::UnbalancedBrackets {
            family: BracketFamily::Square,
            opening: 1,
            closing: 0,
        }
    ));
}

#[test]
fn test_unbalanced_round_checked_before_curly() {
    let err = validate("(1+2{").unwrap_err();
    assert!(matches!(
        err,
        ValidationError::UnbalancedBrackets {
            family: BracketFamily::Round,
            ..
        }
    ));
    assert_eq!(err.fragment(), Some("()"));
}

#[test]
fn test_balance_ignores_nesting_order() {
    // Counts match per family, so only the structure gate can object.
    assert!(validate(")1+2(").is_ok());
}

#[test]
fn test_trailing_dot_float() {
    let err = validate("4*3.").unwrap_err();
    assert!(matches!(err, ValidationError::MalformedExpression { .. }));
}

#[test]
fn test_broken_float_literal() {
    let err = validate("3.+4").unwrap_err();
    assert_eq!(
        err,
        ValidationError::MalformedExpression {
            fragment: "3.+".to_string()
        }
    );
}

#[test]
fn test_opening_bracket_before_operator() {
    let err = validate("2*[*3]").unwrap_err();
    assert_eq!(err.fragment(), Some("[*"));
}

#[test]
fn test_leading_operator_rejected() {
    // The number pattern is loose enough to swallow the rest of the text.
    let err = validate("-3+2").unwrap_err();
    assert_eq!(
        err,
        ValidationError::MalformedExpression {
            fragment: "-3+2".to_string()
        }
    );
}

#[test]
fn test_trailing_operator_rejected() {
    assert!(validate("3+4+").is_err());
}

#[test]
fn test_letters_rejected_first() {
    // Unbalanced too, but letters are checked before brackets.
    let err = validate("(abc+1").unwrap_err();
    assert_eq!(
        err,
        ValidationError::IllegalCharacter {
            fragment: "abc".to_string()
        }
    );
    assert!(err.to_string().contains("abc"));
}

#[test]
fn test_empty_input_rejected() {
    assert_eq!(validate(""), Err(ValidationError::Empty));
    assert_eq!(validate(" \t\n"), Err(ValidationError::Empty));
    assert_eq!(ValidationError::Empty.fragment(), None);
}

#[test]
fn test_error_messages() {
    let err = validate("{1+2").unwrap_err();
    assert_eq!(
        err.to_string(),
        "mismatching curly parentheses: 1 opening, 0 closing"
    );

    let err = validate("(1+)").unwrap_err();
    assert_eq!(err.to_string(), "wrong operation format: \"+)\"");
}

// ========================================
// VALIDATOR: ACCEPTANCE AND NORMALIZATION
// ========================================

#[test]
fn test_clean_expression_passes() {
    let validated = validate("12.5+3*2").unwrap();
    assert_eq!(validated.as_str(), "12.5+3*2");
}

#[test]
fn test_normalization_commas_and_whitespace() {
    let validated = validate("  12,5 + 3 *\t2 ").unwrap();
    assert_eq!(validated.as_str(), "12.5+3*2");
    assert_eq!(validated.to_string(), "12.5+3*2");
    assert_eq!(normalize(" 7,9 / 1 "), "7.9/1");
}

#[test]
fn test_nested_brackets_pass() {
    let validated = validate("{[(1.5*2)/(2+3)]+[(3+3)-(1/2)]}").unwrap();
    assert_eq!(validated.into_string(), "{[(1.5*2)/(2+3)]+[(3+3)-(1/2)]}");
}

#[test]
fn test_validated_tokens_feed_lexer() {
    let validated = validate("[1,5 + 2] * 3").unwrap();
    assert_eq!(
        validated.tokens(),
        vec![
            Token::LBracket,
            Token::Number(1.5),
            Token::Plus,
            Token::Number(2.0),
            Token::RBracket,
            Token::Asterisk,
            Token::Number(3.0),
            Token::EOF,
        ]
    );
}

#[test]
fn test_non_letter_symbols_pass_validation() {
    // Only letters are illegal at this stage; the lexer flags the rest.
    let validated = validate("5%3").unwrap();
    assert!(validated.tokens().contains(&Token::Illegal('%')));
}

//! FILENAME: parser/src/validator.rs
//! PURPOSE: Rejects malformed expression text before any evaluation tree is built.
//! CONTEXT: Validation runs as a series of hard gates. The first gate that
//! fails decides the error; later gates are not consulted.
//!
//! GATES (in order):
//!   1. letters        --> IllegalCharacter
//!   2. bracket counts --> UnbalancedBrackets (per family, not nesting order)
//!   3. normalization  --> trim, ',' to '.', strip whitespace (never fails, except Empty)
//!   4. structure      --> MalformedExpression (one consolidated pattern)

use crate::lexer::Lexer;
use crate::token::Token;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Operators accepted between operands.
const OPERATOR: &str = r"[-+*/]";
const OPENING: &str = r"[(\[{]";
const CLOSING: &str = r"[)\]}]";
/// Digits optionally followed by dots/digits. Deliberately loose: it only
/// has to anchor an operator to the start or end of the text.
const FLOAT_NUMBER: &str = r"\d+[.\d+]*";
/// A digit and a dot followed by something that is not a digit, e.g. "3.x".
const BROKEN_FLOAT_NUMBER: &str = r"\d\.[^\d]+";

static LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Alphabetic}+").expect("letter pattern is valid"));

static MALFORMED: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        "({op}{close})|({open}{op})|({float}{op}$)|(^{op}{float})|({broken})|(\\.$)",
        op = OPERATOR,
        open = OPENING,
        close = CLOSING,
        float = FLOAT_NUMBER,
        broken = BROKEN_FLOAT_NUMBER,
    );
    Regex::new(&pattern).expect("structure pattern is valid")
});

/// The three bracket families that must each be balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketFamily {
    Round,
    Square,
    Curly,
}

impl BracketFamily {
    pub const ALL: [BracketFamily; 3] = [BracketFamily::Round, BracketFamily::Square, BracketFamily::Curly];

    pub fn opening(self) -> char {
        match self {
            BracketFamily::Round => '(',
            BracketFamily::Square => '[',
            BracketFamily::Curly => '{',
        }
    }

    pub fn closing(self) -> char {
        match self {
            BracketFamily::Round => ')',
            BracketFamily::Square => ']',
            BracketFamily::Curly => '}',
        }
    }

    fn pair(self) -> &'static str {
        match self {
            BracketFamily::Round => "()",
            BracketFamily::Square => "[]",
            BracketFamily::Curly => "{}",
        }
    }
}

impl std::fmt::Display for BracketFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BracketFamily::Round => "round",
            BracketFamily::Square => "square",
            BracketFamily::Curly => "curly",
        };
        write!(f, "{}", name)
    }
}

/// Why an expression was rejected. Each variant carries the offending text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("character found: \"{fragment}\"")]
    IllegalCharacter { fragment: String },

    #[error("mismatching {family} parentheses: {opening} opening, {closing} closing")]
    UnbalancedBrackets {
        family: BracketFamily,
        opening: usize,
        closing: usize,
    },

    #[error("wrong operation format: \"{fragment}\"")]
    MalformedExpression { fragment: String },

    #[error("empty expression")]
    Empty,
}

impl ValidationError {
    /// The substring (or bracket pair) that caused the rejection.
    pub fn fragment(&self) -> Option<&str> {
        match self {
            ValidationError::IllegalCharacter { fragment } => Some(fragment),
            ValidationError::UnbalancedBrackets { family, .. } => Some(family.pair()),
            ValidationError::MalformedExpression { fragment } => Some(fragment),
            ValidationError::Empty => None,
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Expression text that passed every gate, in normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedExpression {
    normalized: String,
}

impl ValidatedExpression {
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn into_string(self) -> String {
        self.normalized
    }

    /// Tokenizes the normalized text, ending with `Token::EOF`.
    pub fn tokens(&self) -> Vec<Token> {
        Lexer::new(&self.normalized).tokenize()
    }
}

impl std::fmt::Display for ValidatedExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Runs all validation gates over raw expression text.
pub fn validate(text: &str) -> ValidationResult<ValidatedExpression> {
    if let Some(found) = LETTERS.find(text) {
        return Err(ValidationError::IllegalCharacter {
            fragment: found.as_str().to_string(),
        });
    }

    check_bracket_balance(text)?;

    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(ValidationError::Empty);
    }

    if let Some(found) = MALFORMED.find(&normalized) {
        return Err(ValidationError::MalformedExpression {
            fragment: found.as_str().to_string(),
        });
    }

    Ok(ValidatedExpression { normalized })
}

fn check_bracket_balance(text: &str) -> ValidationResult<()> {
    for family in BracketFamily::ALL {
        let opening = text.chars().filter(|&c| c == family.opening()).count();
        let closing = text.chars().filter(|&c| c == family.closing()).count();
        if opening != closing {
            return Err(ValidationError::UnbalancedBrackets {
                family,
                opening,
                closing,
            });
        }
    }
    Ok(())
}

/// Trims, swaps comma decimal separators for dots and drops inner whitespace.
pub fn normalize(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

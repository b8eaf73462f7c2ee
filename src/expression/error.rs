//! Error types for boolean expression tokenizing and parsing

use std::fmt;
use std::io;
use std::sync::Arc;
use thiserror::Error;

/// What the parser was looking for when it ran into something else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A closing parenthesis `)`
    ClosingParen,
    /// A variable, constant, or parenthesized expression
    Operand,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::ClosingParen => write!(f, "closing parenthesis \")\""),
            Expected::Operand => write!(f, "variable, constant, or parenthesized expression"),
        }
    }
}

/// Errors that can occur while turning text into a [`BoolExpr`]
///
/// Tokenizing and parsing stop at the first problem; no partial tree is ever
/// returned. Positions are character offsets into the original input.
///
/// [`BoolExpr`]: super::BoolExpr
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A character that no tokenizer rule accepts
    #[error("Unrecognized symbol \"{symbol}\" at position {position}")]
    UnrecognizedSymbol {
        /// The offending character
        symbol: char,
        /// Character offset of the symbol
        position: usize,
    },

    /// Tokens left over after a complete expression was parsed
    #[error("Unexpected token \"{lexeme}\" at position {position}")]
    UnexpectedToken {
        /// The lexeme of the first leftover token
        lexeme: Arc<str>,
        /// Character offset of the token
        position: usize,
    },

    /// A binary operator appeared where an operand was expected
    #[error("Binary operator \"{operator}\" at position {position} is missing its left operand")]
    MissingOperand {
        /// The operator lexeme as written
        operator: Arc<str>,
        /// Character offset of the operator
        position: usize,
    },

    /// A required token was not found
    #[error("Expected {expected}, found {}", found_description(.found))]
    ExpectedToken {
        /// What the parser needed
        expected: Expected,
        /// The lexeme and position actually found, or `None` at end of input
        found: Option<(Arc<str>, usize)>,
    },

    /// The input contained no tokens at all
    #[error("Expression is empty")]
    EmptyExpression,

    /// Parenthesis/prefix-NOT nesting exceeded the configured bound
    #[error("Expression nesting exceeds the limit of {limit} levels")]
    RecursionLimitExceeded {
        /// The configured nesting limit
        limit: usize,
    },

    /// The expression tree grew taller than the size bound
    #[error("Expression is too large: its operator chain exceeds {limit} levels")]
    ExpressionTooLarge {
        /// The tree-height limit
        limit: usize,
    },
}

fn found_description(found: &Option<(Arc<str>, usize)>) -> String {
    match found {
        Some((lexeme, position)) => format!("\"{}\" at position {}", lexeme, position),
        None => "end of input".to_string(),
    }
}

impl SyntaxError {
    /// Character offset the error points at, when there is one
    pub fn position(&self) -> Option<usize> {
        match self {
            SyntaxError::UnrecognizedSymbol { position, .. }
            | SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::MissingOperand { position, .. } => Some(*position),
            SyntaxError::ExpectedToken { found, .. } => found.as_ref().map(|(_, pos)| *pos),
            SyntaxError::EmptyExpression
            | SyntaxError::RecursionLimitExceeded { .. }
            | SyntaxError::ExpressionTooLarge { .. } => None,
        }
    }
}

impl From<SyntaxError> for io::Error {
    fn from(err: SyntaxError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_symbol_display() {
        let err = SyntaxError::UnrecognizedSymbol {
            symbol: '$',
            position: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("\"$\""));
        assert!(msg.contains("position 4"));
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn test_expected_token_at_end_of_input() {
        let err = SyntaxError::ExpectedToken {
            expected: Expected::ClosingParen,
            found: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("closing parenthesis"));
        assert!(msg.contains("end of input"));
        assert_eq!(err.position(), None);
    }

    #[test]
    fn test_expected_token_with_found() {
        let err = SyntaxError::ExpectedToken {
            expected: Expected::Operand,
            found: Some((Arc::from(")"), 3)),
        };
        let msg = err.to_string();
        assert!(msg.contains("\")\" at position 3"));
        assert_eq!(err.position(), Some(3));
    }

    #[test]
    fn test_size_and_nesting_messages_differ() {
        let nesting = SyntaxError::RecursionLimitExceeded { limit: 256 }.to_string();
        let size = SyntaxError::ExpressionTooLarge { limit: 1024 }.to_string();
        assert!(nesting.contains("nesting"));
        assert!(size.contains("too large"));
        assert!(!size.contains("nesting"));
    }

    #[test]
    fn test_syntax_error_to_io_error() {
        let io_err: io::Error = SyntaxError::EmptyExpression.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}

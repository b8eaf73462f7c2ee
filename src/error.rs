//! Error types for the boolean calculator
//!
//! Every failure of [`evaluate_expression`](crate::evaluate_expression) is one
//! of three kinds, each with its own enum so callers can match on the exact
//! cause:
//!
//! - [`SyntaxError`]: the text could not be tokenized or parsed
//! - [`SemanticError`]: the expression parsed but is outside supported bounds
//! - [`InternalError`]: an invariant of the engine itself was violated
//!
//! [`CalculatorError`] wraps all three, and [`Failure`] is its serializable
//! `{ kind, message }` form.

use serde::Serialize;
use std::io;
use std::sync::Arc;
use thiserror::Error;

pub use crate::expression::error::{Expected, SyntaxError};

/// The expression is well-formed but cannot be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// More distinct variables than the configured bound
    #[error("Too many variables: found {count}, at most {limit} are supported")]
    TooManyVariables {
        /// Number of distinct variable names in the expression
        count: usize,
        /// The bound in effect
        limit: usize,
    },
}

impl From<SemanticError> for io::Error {
    fn from(err: SemanticError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// An engine invariant was violated
///
/// None of these are reachable through
/// [`evaluate_expression`](crate::evaluate_expression); they surface misuse of
/// the lower-level building blocks instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalError {
    /// A variable appeared that is not in the truth table's variable list
    #[error("Variable \"{name}\" is not bound in the current row")]
    UnboundVariable {
        /// The unbound variable name
        name: Arc<str>,
    },

    /// A target index has no prime implicant covering it
    #[error("Row {index} is not covered by any prime implicant")]
    UncoverableIndex {
        /// The uncovered truth-table row index
        index: usize,
    },
}

impl From<InternalError> for io::Error {
    fn from(err: InternalError) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}

/// Any failure of the calculator pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl CalculatorError {
    /// The failure category
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalculatorError::Syntax(_) => ErrorKind::SyntaxError,
            CalculatorError::Semantic(_) => ErrorKind::SemanticError,
            CalculatorError::Internal(_) => ErrorKind::InternalError,
        }
    }
}

impl From<CalculatorError> for io::Error {
    fn from(err: CalculatorError) -> Self {
        match err {
            CalculatorError::Syntax(e) => e.into(),
            CalculatorError::Semantic(e) => e.into(),
            CalculatorError::Internal(e) => e.into(),
        }
    }
}

/// Failure category reported in [`Failure::kind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    SyntaxError,
    SemanticError,
    InternalError,
}

/// Serializable failure payload
///
/// # Examples
///
/// ```
/// use boolean_calculator::{evaluate_expression, ErrorKind, Failure};
///
/// let err = evaluate_expression("A +").unwrap_err();
/// let failure = Failure::from(&err);
/// assert_eq!(failure.kind, ErrorKind::SyntaxError);
/// assert!(failure.message.contains("end of input"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&CalculatorError> for Failure {
    fn from(err: &CalculatorError) -> Self {
        Failure {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

//! # Boolean Calculator
//!
//! Compiles a textual boolean expression of up to five variables into its
//! truth table, canonical DNF/CNF, and verified minimal sum-of-products and
//! product-of-sums forms, together with a step-by-step derivation trace.
//!
//! ## Overview
//!
//! The pipeline runs strictly forward:
//!
//! text → tokens → [`BoolExpr`] → sorted variables → [`TruthTable`] →
//! {canonical forms, Quine–McCluskey + Petrick for true rows and for false rows}
//! → [`Evaluation`]
//!
//! It is useful for:
//!
//! - Checking hand simplifications of logic functions
//! - Teaching Quine–McCluskey and Petrick's method step by step
//! - Feeding truth tables, Karnaugh maps or gate diagrams with a single payload
//!
//! ## Evaluating an expression
//!
//! ```
//! use boolean_calculator::evaluate_expression;
//!
//! # fn main() -> Result<(), boolean_calculator::CalculatorError> {
//! let result = evaluate_expression("A'B + A B' + A B")?;
//!
//! assert_eq!(result.variables.len(), 2);
//! assert_eq!(result.minimal_sop, "B + A");
//! assert_eq!(result.minimal_pos, "A + B");
//!
//! for line in &result.derivation_steps {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Failures carry a kind and a message:
//!
//! ```
//! use boolean_calculator::{evaluate_expression, ErrorKind};
//!
//! let err = evaluate_expression("A B C D E F").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::SemanticError);
//! ```
//!
//! ## Building expressions
//!
//! ```
//! use boolean_calculator::{expr, BoolExpr};
//!
//! let a = BoolExpr::variable("A");
//! let b = BoolExpr::variable("B");
//!
//! let parsed = BoolExpr::parse("A B' + A' B").unwrap();
//! let built = expr!(a * !b + !a * b);
//! assert_eq!(parsed, built);
//! ```
//!
//! ## Lower-level building blocks
//!
//! The [`cover`] module exposes the minimizer on raw row indices, including the
//! don't-care set that [`evaluate_expression`] never populates:
//!
//! ```
//! use boolean_calculator::cover::minimize;
//! use std::sync::Arc;
//!
//! let variables: Vec<Arc<str>> = ["A", "B", "C"].iter().map(|v| Arc::from(*v)).collect();
//! let result = minimize(&[0, 2], &[1, 3], &variables).unwrap();
//! assert_eq!(result.selected[0].product_string(&variables), "¬A");
//! ```
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade at `debug` and `trace` level.
//! Install any logger to see merge passes, essential implicants and Petrick
//! candidate counts.

pub mod batch;
pub mod calculator;
pub mod canonical;
pub mod cover;
pub mod error;
pub mod expression;
pub mod truth_table;

pub use boolean_calculator_macros::expr;

pub use calculator::{
    evaluate_expression, evaluate_expression_with, CalculatorConfig, Evaluation, FormDetails,
    MAX_VARIABLES,
};
pub use error::{CalculatorError, ErrorKind, Failure, InternalError, SemanticError, SyntaxError};
pub use expression::{BinaryOp, BoolExpr, ExprNode};
pub use truth_table::{TruthRow, TruthTable};

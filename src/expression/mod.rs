//! Boolean expression types, parsing and printing
//!
//! This module provides the abstract syntax tree every other stage of the
//! calculator consumes. A [`BoolExpr`] can be built in three ways:
//!
//! 1. Parsed from text: `BoolExpr::parse("A'B + C")`
//! 2. Method API: `a.and(&b).or(&c)`
//! 3. **`expr!` macro**: `expr!(a * b + c)`
//!
//! # Syntax
//!
//! Operators may be written as keywords (case-insensitive) or symbols:
//!
//! | Operator | Keyword | Symbols              |
//! |----------|---------|----------------------|
//! | NOT      | `NOT`   | `!` `~` `¬`, postfix `'` |
//! | AND      | `AND`   | `*` `·` `&` `&&` `∧` `×`, juxtaposition |
//! | NAND     | `NAND`  | `⊼`                  |
//! | XOR      | `XOR`   | `^` `⊕` `⊻`          |
//! | OR       | `OR`    | `+` `\|` `\|\|` `∨`  |
//! | NOR      | `NOR`   | `⊽`                  |
//!
//! Precedence from lowest to highest binding: OR/NOR, XOR, AND/NAND (including
//! implicit AND), NOT. All binary operators are left-associative.
//!
//! # Quick Start
//!
//! ```
//! use boolean_calculator::BoolExpr;
//!
//! # fn main() -> Result<(), boolean_calculator::SyntaxError> {
//! let expr = BoolExpr::parse("A'B + (C XOR D)")?;
//! println!("{}", expr);  // ¬A · B + (C ⊕ D)
//! # Ok(())
//! # }
//! ```

mod ast;
mod display;
pub mod error;
mod eval;
mod operators;
mod parser;
pub mod token;

pub use ast::ExprNode;
pub use eval::compare_variable_names;
pub use error::{Expected, SyntaxError};
pub use parser::{DEFAULT_MAX_NESTING_DEPTH, MAX_TREE_HEIGHT};
pub use token::{tokenize, Operator, Token, TokenKind};

use serde::Serialize;
use std::sync::Arc;

/// Binary operator of a [`BoolExpr::Binary`] node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    Nand,
    Nor,
}

impl BinaryOp {
    /// Precedence tier, higher binds tighter
    ///
    /// Shared by the parser and the infix printer so that printed output
    /// always parses back to the same tree.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or | BinaryOp::Nor => 1,
            BinaryOp::Xor => 2,
            BinaryOp::And | BinaryOp::Nand => 3,
        }
    }

    /// Apply the operator to two truth values
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryOp::And => left && right,
            BinaryOp::Or => left || right,
            BinaryOp::Xor => left != right,
            BinaryOp::Nand => !(left && right),
            BinaryOp::Nor => !(left || right),
        }
    }

    /// Symbol used by the infix printer
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "·",
            BinaryOp::Or => "+",
            BinaryOp::Xor => "⊕",
            BinaryOp::Nand => "⊼",
            BinaryOp::Nor => "⊽",
        }
    }

    pub(crate) fn from_operator(op: Operator) -> Option<Self> {
        match op {
            Operator::And => Some(BinaryOp::And),
            Operator::Or => Some(BinaryOp::Or),
            Operator::Xor => Some(BinaryOp::Xor),
            Operator::Nand => Some(BinaryOp::Nand),
            Operator::Nor => Some(BinaryOp::Nor),
            Operator::Not => None,
        }
    }
}

/// A boolean expression tree
///
/// A closed set of node kinds: every consumer (evaluator, printer, variable
/// collector, [`fold`](BoolExpr::fold)) matches over all four exhaustively.
///
/// # Examples
///
/// ```
/// use boolean_calculator::{BinaryOp, BoolExpr};
///
/// let a = BoolExpr::variable("A");
/// let b = BoolExpr::variable("B");
/// let expr = a.and(&b);
///
/// assert_eq!(expr, BoolExpr::binary(BinaryOp::And, a, b));
/// assert_eq!(expr.to_string(), "A · B");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum BoolExpr {
    /// A constant value (true or false)
    Const(bool),
    /// A named variable
    Var(Arc<str>),
    /// Logical NOT of an expression
    Not(Box<BoolExpr>),
    /// A binary operation
    Binary {
        op: BinaryOp,
        left: Box<BoolExpr>,
        right: Box<BoolExpr>,
    },
}

impl BoolExpr {
    /// Create a variable expression with the given name
    pub fn variable(name: &str) -> Self {
        BoolExpr::Var(Arc::from(name))
    }

    /// Create a constant expression (true or false)
    pub fn constant(value: bool) -> Self {
        BoolExpr::Const(value)
    }

    /// Create a binary node from owned operands
    pub fn binary(op: BinaryOp, left: BoolExpr, right: BoolExpr) -> Self {
        BoolExpr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a negation from an owned operand
    pub fn negated(inner: BoolExpr) -> Self {
        BoolExpr::Not(Box::new(inner))
    }

    /// Height of the tree; leaves have height 0
    pub fn height(&self) -> usize {
        self.fold(|node: ExprNode<usize>| match node {
            ExprNode::Constant(_) | ExprNode::Variable(_) => 0,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::Binary(_, left, right) => left.max(right) + 1,
        })
    }
}

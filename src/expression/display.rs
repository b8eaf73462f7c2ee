//! Infix printing for boolean expressions
//!
//! One printer serves the normalized input, the minimal forms and the
//! canonical forms. It uses the parser's precedence tiers so that the output
//! always parses back to the same tree.

use super::{BinaryOp, BoolExpr};
use std::fmt;

/// Precedence of NOT and of atoms, above every binary tier
const UNARY_PRECEDENCE: u8 = 4;
const ATOM_PRECEDENCE: u8 = 5;

impl BoolExpr {
    fn precedence(&self) -> u8 {
        match self {
            BoolExpr::Const(_) | BoolExpr::Var(_) => ATOM_PRECEDENCE,
            BoolExpr::Not(_) => UNARY_PRECEDENCE,
            BoolExpr::Binary { op, .. } => op.precedence(),
        }
    }

    /// Write `self` as an operand of a binary operator of tier `parent`
    ///
    /// Operators are left-associative: a left operand of the same tier needs no
    /// parentheses, a right operand of the same tier does.
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, parent: BinaryOp, is_right: bool) -> fmt::Result {
        let mine = self.precedence();
        let needs_parens = mine < parent.precedence() || (is_right && mine == parent.precedence());
        if needs_parens {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

/// Display formatting for boolean expressions
///
/// Uses `·` for AND, `+` for OR, `⊕` for XOR, `⊼` for NAND, `⊽` for NOR and
/// prefix `¬` for NOT, with the fewest parentheses that preserve the tree.
///
/// # Examples
///
/// ```
/// use boolean_calculator::BoolExpr;
///
/// let expr = BoolExpr::parse("(a OR b) AND NOT (c XOR d)").unwrap();
/// assert_eq!(expr.to_string(), "(a + b) · ¬(c ⊕ d)");
/// ```
impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolExpr::Const(value) => f.write_str(if *value { "1" } else { "0" }),
            BoolExpr::Var(name) => f.write_str(name),
            BoolExpr::Not(inner) => {
                // ¬ binds tighter than any binary operator
                if inner.precedence() >= UNARY_PRECEDENCE {
                    write!(f, "¬{}", inner)
                } else {
                    write!(f, "¬({})", inner)
                }
            }
            BoolExpr::Binary { op, left, right } => {
                left.fmt_operand(f, *op, false)?;
                write!(f, " {} ", op.symbol())?;
                right.fmt_operand(f, *op, true)
            }
        }
    }
}

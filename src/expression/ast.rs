//! Tree traversal over boolean expressions
//!
//! [`ExprNode`] exposes the node-kind/children shape of a [`BoolExpr`] without
//! handing out the boxes themselves, which is all a consumer such as a gate
//! diagram generator needs.

use super::{BinaryOp, BoolExpr};

/// Node type for expression tree folding
///
/// `T` is the result already computed for each child (bottom-up).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// A variable with the given name
    Variable(&'a str),
    /// A constant boolean value
    Constant(bool),
    /// Logical NOT with the result from the inner subtree
    Not(T),
    /// Binary operator with results from the left and right subtrees
    Binary(BinaryOp, T, T),
}

impl BoolExpr {
    /// Fold the expression tree depth-first from leaves to root
    ///
    /// The function receives an [`ExprNode`] holding the node kind and the
    /// results already computed for its children.
    ///
    /// # Examples
    ///
    /// Count gates, the way a diagram generator would size its canvas:
    ///
    /// ```
    /// use boolean_calculator::{BoolExpr, ExprNode};
    ///
    /// let expr = BoolExpr::parse("NOT (A NAND B) + C").unwrap();
    ///
    /// let gates = expr.fold(|node: ExprNode<usize>| match node {
    ///     ExprNode::Variable(_) | ExprNode::Constant(_) => 0,
    ///     ExprNode::Not(inner) => inner + 1,
    ///     ExprNode::Binary(_, l, r) => l + r + 1,
    /// });
    ///
    /// assert_eq!(gates, 3); // NAND, NOT, OR
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(ExprNode<T>) -> T + Copy,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<T, F>(&self, f: &F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        match self {
            BoolExpr::Var(name) => f(ExprNode::Variable(name)),
            BoolExpr::Const(value) => f(ExprNode::Constant(*value)),
            BoolExpr::Not(inner) => {
                let inner_result = inner.fold_impl(f);
                f(ExprNode::Not(inner_result))
            }
            BoolExpr::Binary { op, left, right } => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::Binary(*op, left_result, right_result))
            }
        }
    }
}

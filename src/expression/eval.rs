//! Evaluation and variable collection for boolean expressions

use super::{BoolExpr, ExprNode};
use crate::error::InternalError;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Primary collation weight: `_` before digits before letters, case folded
fn primary_weight(c: char) -> (u8, char) {
    match c {
        '_' => (0, c),
        '0'..='9' => (1, c),
        _ => (2, c.to_ascii_lowercase()),
    }
}

/// Order variable names the way a human-facing sort does
///
/// Names are compared case-insensitively first, with `_` ahead of digits and
/// digits ahead of letters. Names equal under that comparison are ordered by
/// the first position where case differs, lowercase first.
///
/// # Examples
///
/// ```
/// use boolean_calculator::expression::compare_variable_names;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_variable_names("a", "B"), Ordering::Less);
/// assert_eq!(compare_variable_names("a", "A"), Ordering::Less);
/// assert_eq!(compare_variable_names("A_1", "A1"), Ordering::Less);
/// ```
pub fn compare_variable_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight))
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map_or(Ordering::Equal, |(x, y)| {
                    y.is_ascii_lowercase().cmp(&x.is_ascii_lowercase())
                })
        })
}

impl BoolExpr {
    /// Collect all distinct variable names, sorted by [`compare_variable_names`]
    ///
    /// The sorted order is the one used for truth-table bit positions and for
    /// literal ordering in every printed form.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolean_calculator::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("c + B a + c'").unwrap();
    /// let names: Vec<String> = expr
    ///     .collect_variables()
    ///     .iter()
    ///     .map(|s| s.to_string())
    ///     .collect();
    /// assert_eq!(names, vec!["a", "B", "c"]);
    /// ```
    pub fn collect_variables(&self) -> Vec<Arc<str>> {
        let mut set = BTreeSet::new();
        self.collect_into(&mut set);
        let mut names: Vec<Arc<str>> = set.into_iter().collect();
        names.sort_by(|a, b| compare_variable_names(a, b));
        names
    }

    fn collect_into(&self, set: &mut BTreeSet<Arc<str>>) {
        match self {
            BoolExpr::Var(name) => {
                set.insert(Arc::clone(name));
            }
            BoolExpr::Const(_) => {}
            BoolExpr::Not(inner) => inner.collect_into(set),
            BoolExpr::Binary { left, right, .. } => {
                left.collect_into(set);
                right.collect_into(set);
            }
        }
    }

    /// Evaluate the expression with a given variable assignment
    ///
    /// Variables missing from the assignment evaluate to `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolean_calculator::BoolExpr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let expr = BoolExpr::parse("a NAND b").unwrap();
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("a"), true);
    /// assignment.insert(Arc::from("b"), true);
    /// assert_eq!(expr.evaluate(&assignment), false);
    ///
    /// assignment.insert(Arc::from("b"), false);
    /// assert_eq!(expr.evaluate(&assignment), true);
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        self.fold(|node: ExprNode<bool>| match node {
            ExprNode::Constant(value) => value,
            ExprNode::Variable(name) => assignment.get(name).copied().unwrap_or(false),
            ExprNode::Not(inner) => !inner,
            ExprNode::Binary(op, left, right) => op.apply(left, right),
        })
    }

    /// Evaluate against one truth-table row
    ///
    /// `variables` is the sorted variable list and `index` the row index; the
    /// first variable takes the most significant bit. A variable that is not in
    /// `variables` is an internal error rather than a silent `false`.
    pub fn evaluate_row(&self, variables: &[Arc<str>], index: usize) -> Result<bool, InternalError> {
        let width = variables.len();
        let lookup = |name: &str| -> Result<bool, InternalError> {
            let position = variables
                .iter()
                .position(|v| v.as_ref() == name)
                .ok_or_else(|| InternalError::UnboundVariable {
                    name: Arc::from(name),
                })?;
            Ok((index >> (width - position - 1)) & 1 == 1)
        };
        self.fold(|node: ExprNode<Result<bool, InternalError>>| match node {
            ExprNode::Constant(value) => Ok(value),
            ExprNode::Variable(name) => lookup(name),
            ExprNode::Not(inner) => inner.map(|v| !v),
            ExprNode::Binary(op, left, right) => Ok(op.apply(left?, right?)),
        })
    }
}

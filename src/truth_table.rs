//! Truth-table construction
//!
//! Row `index` assigns its bits, read most-significant first, to the sorted
//! variable list: the first variable takes the highest bit.

use crate::error::InternalError;
use crate::expression::BoolExpr;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// One row of a truth table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthRow {
    /// Row index in `0..2^n`
    pub index: usize,
    /// Value of every variable in this row
    pub assignment: BTreeMap<Arc<str>, bool>,
    /// Value of the expression in this row
    pub output: bool,
}

impl TruthRow {
    /// Variable values in variable-list order (most significant first)
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.assignment.values().copied()
    }
}

/// The complete truth table of an expression, `2^n` rows in index order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    pub variables: Vec<Arc<str>>,
    pub rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Evaluate `expr` on every assignment of `variables`
    ///
    /// `variables` must be sorted; every variable reachable from `expr` must be
    /// present, otherwise [`InternalError::UnboundVariable`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolean_calculator::{BoolExpr, TruthTable};
    ///
    /// let expr = BoolExpr::parse("A AND B").unwrap();
    /// let table = TruthTable::build(&expr, &expr.collect_variables()).unwrap();
    ///
    /// assert_eq!(table.rows.len(), 4);
    /// assert_eq!(table.outputs(), vec![false, false, false, true]);
    /// assert_eq!(table.minterms(), vec![3]);
    /// ```
    pub fn build(expr: &BoolExpr, variables: &[Arc<str>]) -> Result<Self, InternalError> {
        let width = variables.len();
        let rows = (0..1usize << width)
            .map(|index| -> Result<TruthRow, InternalError> {
                let assignment = variables
                    .iter()
                    .enumerate()
                    .map(|(position, name)| {
                        let bit = (index >> (width - position - 1)) & 1 == 1;
                        (Arc::clone(name), bit)
                    })
                    .collect();
                let output = expr.evaluate_row(variables, index)?;
                Ok(TruthRow {
                    index,
                    assignment,
                    output,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "truth table: {} variables, {} rows, {} true",
            width,
            rows.len(),
            rows.iter().filter(|r| r.output).count()
        );

        Ok(TruthTable {
            variables: variables.to_vec(),
            rows,
        })
    }

    /// Indices of the rows where the expression is true
    pub fn minterms(&self) -> Vec<usize> {
        self.indices_where(true)
    }

    /// Indices of the rows where the expression is false
    pub fn maxterms(&self) -> Vec<usize> {
        self.indices_where(false)
    }

    fn indices_where(&self, output: bool) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|row| row.output == output)
            .map(|row| row.index)
            .collect()
    }

    /// Output column in row order
    pub fn outputs(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.output).collect()
    }

    /// Number of variables
    pub fn width(&self) -> usize {
        self.variables.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn table(text: &str) -> TruthTable {
        let expr = BoolExpr::parse(text).unwrap();
        TruthTable::build(&expr, &expr.collect_variables()).unwrap()
    }

    #[test]
    fn test_rows_and_assignment_order() {
        let t = table("A AND B");
        let rendered: Vec<(bool, bool, bool)> = t
            .rows
            .iter()
            .map(|r| (r.assignment["A"], r.assignment["B"], r.output))
            .collect();
        assert_eq!(
            rendered,
            vec![
                (false, false, false),
                (false, true, false),
                (true, false, false),
                (true, true, true),
            ]
        );
    }

    #[test]
    fn test_bits_follow_variable_order() {
        let t = table("C + A'");
        let row = &t.rows[0b01];
        assert_eq!(row.bits().collect::<Vec<_>>(), vec![false, true]);
    }

    #[test]
    fn test_constant_expression_has_one_row() {
        let t = table("1");
        assert_eq!(t.width(), 0);
        assert_eq!(t.rows.len(), 1);
        assert!(t.rows[0].assignment.is_empty());
        assert_eq!(t.minterms(), vec![0]);
        assert!(t.maxterms().is_empty());
    }

    #[test]
    fn test_five_variables_give_32_rows() {
        let t = table("A B C D E");
        assert_eq!(t.rows.len(), 32);
        assert_eq!(t.minterms(), vec![31]);
        assert_eq!(t.maxterms().len(), 31);
    }

    #[test]
    fn test_missing_variable_is_internal_error() {
        let expr = BoolExpr::parse("A B").unwrap();
        let err = TruthTable::build(&expr, &[Arc::from("A")]).unwrap_err();
        assert!(matches!(err, InternalError::UnboundVariable { .. }));
    }
}

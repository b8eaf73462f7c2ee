//! Canonical disjunctive and conjunctive normal forms
//!
//! Both forms list every variable in every term, in sorted variable order,
//! and are printed through the same infix printer as everything else.

use crate::cover::Implicant;
use crate::expression::{BinaryOp, BoolExpr};
use crate::truth_table::TruthTable;

/// Canonical DNF: one full product term per true row
///
/// No true rows gives the constant `0`.
///
/// # Examples
///
/// ```
/// use boolean_calculator::{canonical, BoolExpr, TruthTable};
///
/// let expr = BoolExpr::parse("A OR NOT A").unwrap();
/// let table = TruthTable::build(&expr, &expr.collect_variables()).unwrap();
/// assert_eq!(canonical::dnf(&table).to_string(), "¬A + A");
/// ```
pub fn dnf(table: &TruthTable) -> BoolExpr {
    let terms = table
        .minterms()
        .into_iter()
        .map(|index| Implicant::from_index(index, table.width()).to_product(&table.variables));
    BoolExpr::chain(BinaryOp::Or, terms, BoolExpr::constant(false))
}

/// Canonical CNF: one full sum clause per false row
///
/// A clause negates the variables that are 1 in its row. No false rows gives
/// the constant `1`.
///
/// # Examples
///
/// ```
/// use boolean_calculator::{canonical, BoolExpr, TruthTable};
///
/// let expr = BoolExpr::parse("A AND B").unwrap();
/// let table = TruthTable::build(&expr, &expr.collect_variables()).unwrap();
/// assert_eq!(
///     canonical::cnf(&table).to_string(),
///     "(A + B) · (A + ¬B) · (¬A + B)"
/// );
/// ```
pub fn cnf(table: &TruthTable) -> BoolExpr {
    let clauses = table
        .maxterms()
        .into_iter()
        .map(|index| Implicant::from_index(index, table.width()).to_complemented_clause(&table.variables));
    BoolExpr::chain(BinaryOp::And, clauses, BoolExpr::constant(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(text: &str) -> TruthTable {
        let expr = BoolExpr::parse(text).unwrap();
        TruthTable::build(&expr, &expr.collect_variables()).unwrap()
    }

    fn outputs_of(expr: &BoolExpr, table: &TruthTable) -> Vec<bool> {
        (0..table.rows.len())
            .map(|i| expr.evaluate_row(&table.variables, i).unwrap())
            .collect()
    }

    #[test]
    fn test_dnf_of_and() {
        assert_eq!(dnf(&table("A AND B")).to_string(), "A · B");
    }

    #[test]
    fn test_dnf_lists_every_variable() {
        assert_eq!(
            dnf(&table("A XOR B")).to_string(),
            "¬A · B + A · ¬B"
        );
    }

    #[test]
    fn test_cnf_of_or() {
        assert_eq!(cnf(&table("A + B")).to_string(), "A + B");
        assert_eq!(cnf(&table("A XOR B")).to_string(), "(A + B) · (¬A + ¬B)");
    }

    #[test]
    fn test_degenerate_forms() {
        assert_eq!(dnf(&table("A A'")).to_string(), "0");
        assert_eq!(cnf(&table("A + A'")).to_string(), "1");
    }

    #[test]
    fn test_constant_expressions() {
        // no variables: the single row is either a minterm or a maxterm
        assert_eq!(dnf(&table("1")).to_string(), "1");
        assert_eq!(cnf(&table("1")).to_string(), "1");
        assert_eq!(dnf(&table("0")).to_string(), "0");
        assert_eq!(cnf(&table("0")).to_string(), "0");
    }

    #[test]
    fn test_forms_reproduce_truth_table() {
        for text in ["A B' + C", "A NAND (B NOR C)", "A ^ B ^ C", "(A + B)(C + D')"] {
            let t = table(text);
            let outputs = t.outputs();
            assert_eq!(outputs_of(&dnf(&t), &t), outputs, "DNF of {text}");
            assert_eq!(outputs_of(&cnf(&t), &t), outputs, "CNF of {text}");
        }
    }
}

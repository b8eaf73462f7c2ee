//! `expr!` builds the same trees as the text parser

use boolean_calculator::{evaluate_expression, expr, BoolExpr};
use pretty_assertions::assert_eq;

#[test]
fn test_macro_matches_parser() {
    let a = BoolExpr::variable("A");
    let b = BoolExpr::variable("B");
    let c = BoolExpr::variable("C");

    assert_eq!(expr!(a + b ^ c * a), BoolExpr::parse("A + B ^ C A").unwrap());
    assert_eq!(expr!(!(a | b) & c), BoolExpr::parse("(A + B)' C").unwrap());
    assert_eq!(expr!(~~a), BoolExpr::parse("NOT NOT A").unwrap());
}

#[test]
fn test_macro_literals_and_constants() {
    let built = expr!("X" * 1 + 0);
    assert_eq!(built, BoolExpr::parse("X 1 + 0").unwrap());
}

#[test]
fn test_macro_output_feeds_the_calculator() {
    let a = BoolExpr::variable("A");
    let b = BoolExpr::variable("B");
    let xor = expr!(a * !b + !a * b);

    let result = evaluate_expression(&xor.to_string()).unwrap();
    assert_eq!(result.truth_table.minterms(), vec![1, 2]);
    assert_eq!(result.minimal_sop, "¬A · B + A · ¬B");
}

//! End-to-end tests of `evaluate_expression`

use boolean_calculator::expression::{Expected, SyntaxError};
use boolean_calculator::{
    evaluate_expression, BinaryOp, BoolExpr, CalculatorError, ErrorKind, Evaluation, SemanticError,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Output column of `expr` over the variables of `evaluation`
fn outputs_over(expr: &BoolExpr, evaluation: &Evaluation) -> Vec<bool> {
    (0..evaluation.truth_table.rows.len())
        .map(|i| expr.evaluate_row(&evaluation.variables, i).unwrap())
        .collect()
}

fn reparsed(text: &str) -> BoolExpr {
    BoolExpr::parse(text).unwrap_or_else(|e| panic!("{:?} does not parse back: {}", text, e))
}

#[test]
fn test_example_and() {
    let result = evaluate_expression("A AND B").unwrap();
    let names: Vec<&str> = result.variables.iter().map(|v| v.as_ref()).collect();
    assert_eq!(names, vec!["A", "B"]);

    let rows: Vec<(bool, bool, bool)> = result
        .truth_table
        .rows
        .iter()
        .map(|r| (r.assignment["A"], r.assignment["B"], r.output))
        .collect();
    assert_eq!(
        rows,
        vec![
            (false, false, false),
            (false, true, false),
            (true, false, false),
            (true, true, true),
        ]
    );
    assert_eq!(result.canonical_dnf, "A · B");
    assert_eq!(result.minimal_sop, "A · B");
}

#[test]
fn test_example_tautology() {
    let result = evaluate_expression("A OR NOT A").unwrap();
    assert_eq!(result.variables.len(), 1);
    assert_eq!(result.truth_table.outputs(), vec![true, true]);
    assert_eq!(result.minimal_sop, "1");
    assert_eq!(result.canonical_dnf, "¬A + A");
}

#[test]
fn test_example_postfix_not() {
    assert_eq!(BoolExpr::parse("A'").unwrap(), BoolExpr::parse("NOT A").unwrap());
    let postfix = evaluate_expression("A'").unwrap();
    let prefix = evaluate_expression("NOT A").unwrap();
    assert_eq!(postfix.truth_table, prefix.truth_table);
    assert_eq!(postfix.minimal_sop, "¬A");
}

#[test]
fn test_example_empty_input() {
    for text in ["", "   ", "\t\n"] {
        assert_eq!(
            evaluate_expression(text).unwrap_err(),
            CalculatorError::Syntax(SyntaxError::EmptyExpression)
        );
    }
}

#[test]
fn test_example_variable_bound() {
    let five = evaluate_expression("A + B + C + D + E").unwrap();
    assert_eq!(five.truth_table.rows.len(), 32);

    let six = evaluate_expression("A + B + C + D + E + F").unwrap_err();
    assert_eq!(
        six,
        CalculatorError::Semantic(SemanticError::TooManyVariables { count: 6, limit: 5 })
    );
    assert_eq!(six.kind(), ErrorKind::SemanticError);
}

#[test]
fn test_mixed_case_variable_order() {
    let result = evaluate_expression("a + B").unwrap();
    let names: Vec<&str> = result.variables.iter().map(|v| v.as_ref()).collect();
    assert_eq!(names, vec!["a", "B"]);

    // row 1 sets the last variable only
    let row = &result.truth_table.rows[1];
    assert!(!row.assignment["a"]);
    assert!(row.assignment["B"]);
    assert_eq!(result.canonical_dnf, "¬a · B + a · ¬B + a · B");
    assert_eq!(result.canonical_cnf, "a + B");
}

#[test]
fn test_repeated_variables_count_once() {
    let result = evaluate_expression("A B C D E + A' B' C' D' E' + (A XOR E)").unwrap();
    assert_eq!(result.variables.len(), 5);
}

#[test]
fn test_syntax_failures_are_typed() {
    let cases: Vec<(&str, fn(&SyntaxError) -> bool)> = vec![
        ("A $ B", |e| matches!(e, SyntaxError::UnrecognizedSymbol { symbol: '$', .. })),
        ("A B)", |e| matches!(e, SyntaxError::UnexpectedToken { .. })),
        ("OR B", |e| matches!(e, SyntaxError::MissingOperand { .. })),
        ("(A + B", |e| {
            matches!(
                e,
                SyntaxError::ExpectedToken {
                    expected: Expected::ClosingParen,
                    ..
                }
            )
        }),
    ];
    for (text, check) in cases {
        match evaluate_expression(text) {
            Err(CalculatorError::Syntax(e)) => assert!(check(&e), "{text}: {e:?}"),
            other => panic!("{text}: expected a syntax error, got {other:?}"),
        }
    }
}

#[test]
fn test_majority_function() {
    let result = evaluate_expression("A B + A C + B C + A B C").unwrap();
    let terms: BTreeSet<&str> = result.minimal_sop.split(" + ").collect();
    assert_eq!(terms, BTreeSet::from(["A · B", "A · C", "B · C"]));
    assert_eq!(result.truth_table.minterms(), vec![3, 5, 6, 7]);
}

#[test]
fn test_nand_nor_inputs() {
    let nand = evaluate_expression("A NAND B").unwrap();
    assert_eq!(nand.normalized_infix, "A ⊼ B");
    assert_eq!(nand.minimal_pos, "¬A + ¬B");

    let nor = evaluate_expression("A ⊽ B").unwrap();
    assert_eq!(nor.minimal_sop, "¬A · ¬B");
}

#[test]
fn test_constant_only_expression() {
    let result = evaluate_expression("1 AND 0").unwrap();
    assert!(result.variables.is_empty());
    assert_eq!(result.truth_table.rows.len(), 1);
    assert_eq!(result.minimal_sop, "0");
    assert_eq!(result.minimal_pos, "0");
    assert_eq!(result.canonical_dnf, "0");
    assert_eq!(result.canonical_cnf, "0");
}

#[test]
fn test_derivation_trace_layout() {
    let result = evaluate_expression("A'B'C' + A'B'C + A'B C' + A B'C + A B C' + A B C").unwrap();
    let steps = &result.derivation_steps;
    assert!(steps[0].starts_with("Grouped terms by number of ones: "));
    assert!(steps
        .iter()
        .any(|s| s.starts_with("Selected additional implicants via Petrick's method: ")));
    let separator = steps.iter().position(|s| s == "---").unwrap();
    assert!(steps[separator + 1..].iter().all(|s| s.starts_with("[POS] ")));
}

fn arb_expr() -> impl Strategy<Value = BoolExpr> {
    let leaf = prop_oneof![
        4 => prop::sample::select(vec!["A", "B", "C", "D", "E"]).prop_map(BoolExpr::variable),
        1 => any::<bool>().prop_map(BoolExpr::constant),
    ];
    leaf.prop_recursive(5, 32, 2, |inner| {
        prop_oneof![
            1 => inner.clone().prop_map(BoolExpr::negated),
            3 => (
                prop::sample::select(vec![
                    BinaryOp::And,
                    BinaryOp::Or,
                    BinaryOp::Xor,
                    BinaryOp::Nand,
                    BinaryOp::Nor,
                ]),
                inner.clone(),
                inner,
            )
                .prop_map(|(op, left, right)| BoolExpr::binary(op, left, right)),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_printed_expression_parses_to_same_tree(expr in arb_expr()) {
        prop_assert_eq!(BoolExpr::parse(&expr.to_string()).unwrap(), expr);
    }

    #[test]
    fn prop_canonical_forms_reproduce_truth_table(expr in arb_expr()) {
        let result = evaluate_expression(&expr.to_string()).unwrap();
        let outputs = result.truth_table.outputs();
        prop_assert_eq!(outputs_over(&reparsed(&result.canonical_dnf), &result), outputs.clone());
        prop_assert_eq!(outputs_over(&reparsed(&result.canonical_cnf), &result), outputs);
    }

    #[test]
    fn prop_minimal_forms_are_equivalent(expr in arb_expr()) {
        let result = evaluate_expression(&expr.to_string()).unwrap();
        let outputs = result.truth_table.outputs();
        prop_assert_eq!(outputs_over(&reparsed(&result.minimal_sop), &result), outputs.clone());
        prop_assert_eq!(outputs_over(&reparsed(&result.minimal_pos), &result), outputs);
    }

    #[test]
    fn prop_covers_are_exact(expr in arb_expr()) {
        let result = evaluate_expression(&expr.to_string()).unwrap();
        let union = |implicants: &[boolean_calculator::cover::Implicant]| -> BTreeSet<usize> {
            implicants.iter().flat_map(|imp| imp.minterms().iter().copied()).collect()
        };
        let true_rows: BTreeSet<usize> = result.truth_table.minterms().into_iter().collect();
        let false_rows: BTreeSet<usize> = result.truth_table.maxterms().into_iter().collect();
        prop_assert_eq!(union(&result.sop.implicants), true_rows);
        prop_assert_eq!(union(&result.pos.implicants), false_rows);
    }

    #[test]
    fn prop_essential_implicants_selected(expr in arb_expr()) {
        let result = evaluate_expression(&expr.to_string()).unwrap();
        for form in [&result.sop, &result.pos] {
            let covered: BTreeSet<usize> = form.chart.iter().flat_map(|row| row.covers.iter().copied()).collect();
            for index in covered {
                let covering: Vec<_> = form.chart.iter().filter(|row| row.covers.contains(&index)).collect();
                if let [only] = covering.as_slice() {
                    prop_assert!(form.implicants.contains(&only.implicant));
                }
            }
        }
    }

    #[test]
    fn prop_minimizing_twice_is_stable(expr in arb_expr()) {
        let first = evaluate_expression(&expr.to_string()).unwrap();
        let second = evaluate_expression(&first.minimal_sop).unwrap();
        prop_assert_eq!(
            outputs_over(&reparsed(&second.minimal_sop), &first),
            first.truth_table.outputs()
        );
        let literals = |form: &boolean_calculator::FormDetails| -> usize {
            form.implicants.iter().map(|imp| imp.literal_count()).sum()
        };
        // same function, same optimum
        prop_assert_eq!(second.sop.implicants.len(), first.sop.implicants.len());
        prop_assert_eq!(literals(&second.sop), literals(&first.sop));
    }
}

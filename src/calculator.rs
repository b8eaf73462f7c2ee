//! End-to-end evaluation of a boolean expression
//!
//! [`evaluate_expression`] runs the whole pipeline in order and stops at the
//! first failure:
//!
//! 1. Tokenize and parse
//! 2. Collect and sort variable names; fail if there are too many
//! 3. Build the truth table
//! 4. Minimize the true rows (SOP) and the false rows (POS), independently
//! 5. Build canonical DNF/CNF
//! 6. Assemble the derivation trace
//!
//! Every call starts from scratch and shares nothing with other calls.

use crate::canonical;
use crate::cover::{minimize, Implicant, Minimization, PrimeChartRow, Step};
use crate::error::{CalculatorError, SemanticError};
use crate::expression::{BinaryOp, BoolExpr, DEFAULT_MAX_NESTING_DEPTH};
use crate::truth_table::TruthTable;
use serde::Serialize;
use std::sync::Arc;

/// Hard upper bound on distinct variables (32 truth-table rows)
pub const MAX_VARIABLES: usize = 5;

/// Separator between the SOP and POS parts of the derivation trace
pub const TRACE_SEPARATOR: &str = "---";

/// Prefix of every POS line in the derivation trace
pub const POS_TAG: &str = "[POS] ";

/// Limits applied by [`evaluate_expression_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Maximum number of distinct variables
    ///
    /// Values above [`MAX_VARIABLES`] are clamped to it.
    ///
    /// **Default:** `5`
    pub max_variables: usize,

    /// Maximum parenthesis/prefix-NOT nesting
    ///
    /// **Default:** `256`
    pub max_nesting_depth: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            max_variables: MAX_VARIABLES,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl CalculatorConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// The variable bound actually enforced
    pub fn variable_limit(&self) -> usize {
        self.max_variables.min(MAX_VARIABLES)
    }
}

/// Minimization details for one of the two minimal forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDetails {
    /// The minimal form as an expression tree
    pub expression: BoolExpr,
    /// Selected implicants, over true rows for SOP and false rows for POS
    pub implicants: Vec<Implicant>,
    /// Prime implicant chart of the target rows
    pub chart: Vec<PrimeChartRow>,
    /// Typed steps of this pass
    pub steps: Vec<Step>,
}

/// Successful result of [`evaluate_expression`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// The input exactly as given
    pub expression: String,
    /// The parsed expression tree
    pub ast: BoolExpr,
    /// The parsed expression printed back with minimal parentheses
    pub normalized_infix: String,
    /// Sorted variable names; the first is the most significant bit
    pub variables: Vec<Arc<str>>,
    pub truth_table: TruthTable,
    pub minimal_sop: String,
    pub minimal_pos: String,
    pub canonical_dnf: String,
    pub canonical_cnf: String,
    /// SOP steps, then `---` and the `[POS] `-tagged POS steps if there are any
    pub derivation_steps: Vec<String>,
    pub sop: FormDetails,
    pub pos: FormDetails,
}

impl Evaluation {
    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Evaluate `text` with the default [`CalculatorConfig`]
///
/// # Examples
///
/// ```
/// use boolean_calculator::evaluate_expression;
///
/// let result = evaluate_expression("A AND B").unwrap();
/// assert_eq!(result.variables.len(), 2);
/// assert_eq!(result.minimal_sop, "A · B");
/// assert_eq!(result.canonical_dnf, "A · B");
///
/// let tautology = evaluate_expression("A OR NOT A").unwrap();
/// assert_eq!(tautology.minimal_sop, "1");
/// assert_eq!(tautology.canonical_dnf, "¬A + A");
/// ```
pub fn evaluate_expression(text: &str) -> Result<Evaluation, CalculatorError> {
    evaluate_expression_with(text, &CalculatorConfig::default())
}

/// Evaluate `text` under explicit limits
pub fn evaluate_expression_with(text: &str, config: &CalculatorConfig) -> Result<Evaluation, CalculatorError> {
    let ast = BoolExpr::parse_with_limit(text, config.max_nesting_depth)?;

    let variables = ast.collect_variables();
    let limit = config.variable_limit();
    if variables.len() > limit {
        return Err(SemanticError::TooManyVariables {
            count: variables.len(),
            limit,
        }
        .into());
    }
    log::debug!("variables: {:?}", variables);

    let truth_table = TruthTable::build(&ast, &variables)?;
    let true_rows = truth_table.minterms();
    let false_rows = truth_table.maxterms();

    let sop_pass = minimize(&true_rows, &[], &variables)?;
    let pos_pass = minimize(&false_rows, &[], &variables)?;

    let sop = sop_details(sop_pass, &variables);
    let pos = pos_details(pos_pass, &variables);

    let mut derivation_steps: Vec<String> = sop.steps.iter().map(|s| s.render(&variables)).collect();
    if !pos.steps.is_empty() {
        derivation_steps.push(TRACE_SEPARATOR.to_string());
        derivation_steps.extend(
            pos.steps
                .iter()
                .map(|s| format!("{}{}", POS_TAG, s.render(&variables))),
        );
    }

    Ok(Evaluation {
        expression: text.to_string(),
        normalized_infix: ast.to_string(),
        ast,
        minimal_sop: sop.expression.to_string(),
        minimal_pos: pos.expression.to_string(),
        canonical_dnf: canonical::dnf(&truth_table).to_string(),
        canonical_cnf: canonical::cnf(&truth_table).to_string(),
        variables,
        truth_table,
        derivation_steps,
        sop,
        pos,
    })
}

/// Sum of the selected products; no true rows gives `0`
fn sop_details(pass: Minimization, variables: &[Arc<str>]) -> FormDetails {
    let terms = pass.selected.iter().map(|imp| imp.to_product(variables));
    FormDetails {
        expression: BoolExpr::chain(BinaryOp::Or, terms, BoolExpr::constant(false)),
        implicants: pass.selected,
        chart: pass.chart,
        steps: pass.steps,
    }
}

/// Product of the complemented false-row implicants
///
/// No false rows gives `1`. An all-dash implicant means every row is false, so
/// the whole form collapses to `0`.
fn pos_details(pass: Minimization, variables: &[Arc<str>]) -> FormDetails {
    let clauses: Vec<BoolExpr> = pass
        .selected
        .iter()
        .map(|imp| imp.to_complemented_clause(variables))
        .collect();
    let expression = if clauses.contains(&BoolExpr::Const(false)) {
        BoolExpr::constant(false)
    } else {
        BoolExpr::chain(BinaryOp::And, clauses, BoolExpr::constant(true))
    };
    FormDetails {
        expression,
        implicants: pass.selected,
        chart: pass.chart,
        steps: pass.steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, SyntaxError};
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_and_example() {
        let result = evaluate_expression("A AND B").unwrap();
        assert_eq!(result.normalized_infix, "A · B");
        assert_eq!(result.truth_table.outputs(), vec![false, false, false, true]);
        assert_eq!(result.minimal_sop, "A · B");
        assert_eq!(result.minimal_pos, "A · B");
        assert_eq!(result.canonical_dnf, "A · B");
        assert_eq!(result.canonical_cnf, "(A + B) · (A + ¬B) · (¬A + B)");
    }

    #[test]
    fn test_tautology() {
        let result = evaluate_expression("A OR NOT A").unwrap();
        assert_eq!(result.normalized_infix, "A + ¬A");
        assert_eq!(result.minimal_sop, "1");
        assert_eq!(result.minimal_pos, "1");
        assert_eq!(result.canonical_dnf, "¬A + A");
        assert_eq!(result.canonical_cnf, "1");
        // no false rows: no separator, no POS lines
        assert!(!result.derivation_steps.iter().any(|s| s == TRACE_SEPARATOR));
    }

    #[test]
    fn test_contradiction() {
        let result = evaluate_expression("A AND NOT A").unwrap();
        assert_eq!(result.minimal_sop, "0");
        assert_eq!(result.minimal_pos, "0");
        assert_eq!(result.canonical_dnf, "0");
        assert_eq!(result.canonical_cnf, "A · ¬A");
    }

    #[test]
    fn test_trace_has_tagged_pos_section() {
        let result = evaluate_expression("A XOR B").unwrap();
        let separator = result
            .derivation_steps
            .iter()
            .position(|s| s == TRACE_SEPARATOR)
            .unwrap();
        assert!(separator > 0);
        assert!(result.derivation_steps[separator + 1..]
            .iter()
            .all(|s| s.starts_with(POS_TAG)));
        assert!(result.derivation_steps[..separator]
            .iter()
            .all(|s| !s.starts_with(POS_TAG)));
    }

    #[test]
    fn test_single_minterm_trace() {
        let result = evaluate_expression("A B").unwrap();
        assert_eq!(
            result.derivation_steps[0],
            "Single minterm 3 results in term A · B."
        );
    }

    #[test]
    fn test_xor_forms() {
        let result = evaluate_expression("A ^ B").unwrap();
        assert_eq!(result.minimal_sop, "¬A · B + A · ¬B");
        assert_eq!(result.minimal_pos, "(A + B) · (¬A + ¬B)");
    }

    #[test]
    fn test_variable_limit() {
        assert!(evaluate_expression("A B C D E").is_ok());
        let err = evaluate_expression("A B C D E F").unwrap_err();
        assert_eq!(
            err,
            CalculatorError::Semantic(SemanticError::TooManyVariables { count: 6, limit: 5 })
        );
        assert_eq!(err.kind(), ErrorKind::SemanticError);
    }

    #[test]
    fn test_config_lowers_and_clamps_limit() {
        let strict = CalculatorConfig {
            max_variables: 2,
            ..CalculatorConfig::default()
        };
        assert!(matches!(
            evaluate_expression_with("A B C", &strict),
            Err(CalculatorError::Semantic(SemanticError::TooManyVariables { limit: 2, .. }))
        ));

        let loose = CalculatorConfig {
            max_variables: 64,
            ..CalculatorConfig::default()
        };
        assert_eq!(loose.variable_limit(), MAX_VARIABLES);
        assert!(evaluate_expression_with("A B C D E F", &loose).is_err());
    }

    #[test]
    fn test_config_nesting_depth() {
        let shallow = CalculatorConfig {
            max_nesting_depth: 2,
            ..CalculatorConfig::default()
        };
        assert_eq!(
            evaluate_expression_with("(((A)))", &shallow),
            Err(CalculatorError::Syntax(SyntaxError::RecursionLimitExceeded { limit: 2 }))
        );
    }

    #[test]
    fn test_long_flat_chain_is_accepted() {
        let chain = vec!["A", "B", "C"].repeat(100).join(" + ");
        let result = evaluate_expression(&chain).unwrap();
        assert_eq!(result.minimal_sop, "C + B + A");
    }

    #[test]
    fn test_syntax_error_stops_pipeline() {
        let err = evaluate_expression("   ").unwrap_err();
        assert_eq!(err, CalculatorError::Syntax(SyntaxError::EmptyExpression));
    }

    #[test]
    fn test_json_payload_fields() {
        let result = evaluate_expression("A + B").unwrap();
        let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        // essentials are listed in the order of the rows they were found for
        assert_eq!(json["minimal_sop"], "B + A");
        assert_eq!(json["variables"], serde_json::json!(["A", "B"]));
        assert_eq!(json["truth_table"]["rows"].as_array().unwrap().len(), 4);
        assert_eq!(json["sop"]["chart"].as_array().unwrap().len(), 2);
    }
}

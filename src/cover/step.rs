//! Typed derivation trace of one minimization pass

use super::Implicant;
use serde::Serialize;
use std::sync::Arc;

/// One line of the derivation trace
///
/// Steps are recorded as data and rendered against the variable list only
/// when a human-readable trace is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Step {
    /// The target had a single index and no don't-cares; no merging ran
    SingleMinterm { index: usize, term: Implicant },
    /// Seeds partitioned by number of ones, keyed in ascending order
    Grouped { groups: Vec<(usize, Vec<Implicant>)> },
    /// Two implicants of adjacent groups merged during pass `pass` (from 1)
    Combined {
        pass: usize,
        left: Implicant,
        right: Implicant,
        merged: Implicant,
    },
    /// `implicant` is the only prime implicant covering `index`
    Essential { implicant: Implicant, index: usize },
    /// Supplementary implicants chosen by Petrick's method
    Petrick { chosen: Vec<Implicant> },
}

impl Step {
    /// Render the step as a sentence
    ///
    /// # Examples
    ///
    /// ```
    /// use boolean_calculator::cover::{Implicant, Step};
    /// use std::sync::Arc;
    ///
    /// let variables: Vec<Arc<str>> = vec![Arc::from("A"), Arc::from("B")];
    /// let step = Step::SingleMinterm {
    ///     index: 3,
    ///     term: Implicant::from_index(3, 2),
    /// };
    /// assert_eq!(step.render(&variables), "Single minterm 3 results in term A · B.");
    /// ```
    pub fn render(&self, variables: &[Arc<str>]) -> String {
        match self {
            Step::SingleMinterm { index, term } => format!(
                "Single minterm {} results in term {}.",
                index,
                term.product_string(variables)
            ),
            Step::Grouped { groups } => {
                let parts: Vec<String> = groups
                    .iter()
                    .map(|(ones, members)| {
                        let desc: Vec<String> = members
                            .iter()
                            .map(|imp| format!("{} [{}]", imp, join_indices(imp)))
                            .collect();
                        format!("{}: {}", ones, desc.join("; "))
                    })
                    .collect();
                format!("Grouped terms by number of ones: {}.", parts.join(" | "))
            }
            Step::Combined {
                pass,
                left,
                right,
                merged,
            } => format!(
                "Iteration {}: Combined {} and {} → {} (Adjacency Law).",
                pass, left, right, merged
            ),
            Step::Essential { implicant, index } => format!(
                "Essential prime implicant {} covers minterm {}.",
                implicant.product_string(variables),
                index
            ),
            Step::Petrick { chosen } => {
                let terms: Vec<String> = chosen.iter().map(|imp| imp.product_string(variables)).collect();
                format!(
                    "Selected additional implicants via Petrick's method: {}.",
                    terms.join(", ")
                )
            }
        }
    }
}

fn join_indices(implicant: &Implicant) -> String {
    implicant
        .minterms()
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

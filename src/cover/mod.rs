//! Two-level minimization over truth-table row indices
//!
//! This module is independent of expressions and text: it works on sets of
//! row indices and `n`-bit [`Implicant`] patterns.
//!
//! - [`prime_implicants`]: the Quine–McCluskey engine
//! - [`select_cover`]: essential prime implicants plus Petrick's method
//! - [`prime_chart`]: which target indices each prime covers
//! - [`minimize`]: all three in sequence for one target set
//!
//! Every run owns its own state; nothing carries over between the SOP and POS
//! passes or between calls.
//!
//! # Examples
//!
//! ```
//! use boolean_calculator::cover::minimize;
//! use std::sync::Arc;
//!
//! let variables: Vec<Arc<str>> = vec![Arc::from("A"), Arc::from("B")];
//!
//! // XOR: rows 1 and 2
//! let result = minimize(&[1, 2], &[], &variables).unwrap();
//! let terms: Vec<String> = result
//!     .selected
//!     .iter()
//!     .map(|imp| imp.product_string(&variables))
//!     .collect();
//! assert_eq!(terms, vec!["¬A · B", "A · ¬B"]);
//! ```

mod chart;
mod implicant;
mod qm;
mod select;
mod step;

pub use chart::{prime_chart, PrimeChartRow};
pub use implicant::Implicant;
pub use qm::{prime_implicants, PrimeImplicants};
pub use select::{select_cover, CoverSelection};
pub use step::Step;

use crate::error::InternalError;
use std::sync::Arc;

/// Result of minimizing one target set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Minimization {
    /// Every prime implicant that covers at least one target index
    pub primes: Vec<Implicant>,
    /// The chosen cover
    pub selected: Vec<Implicant>,
    pub chart: Vec<PrimeChartRow>,
    /// Grouping, merge and selection steps
    pub steps: Vec<Step>,
}

/// Minimize `target` (with optional `dont_care` indices) over `variables`
///
/// An empty target produces an empty cover and no steps. The single-minterm
/// shortcut skips cover selection, since its one implicant is the cover.
pub fn minimize(
    target: &[usize],
    dont_care: &[usize],
    variables: &[Arc<str>],
) -> Result<Minimization, InternalError> {
    if target.is_empty() {
        return Ok(Minimization::default());
    }

    let generated = prime_implicants(target, dont_care, variables.len());
    let single = generated.is_single_minterm();
    let PrimeImplicants { primes, mut steps } = generated;
    let selected = if single {
        primes.clone()
    } else {
        let selection = select_cover(&primes, target)?;
        steps.extend(selection.steps);
        selection.selected
    };
    let chart = prime_chart(&primes, target, variables);

    Ok(Minimization {
        primes,
        selected,
        chart,
        steps,
    })
}

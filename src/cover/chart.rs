//! Prime implicant chart

use super::Implicant;
use serde::Serialize;
use std::sync::Arc;

/// One row of the prime implicant chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimeChartRow {
    pub implicant: Implicant,
    /// Product-term rendering of the implicant
    pub term: String,
    /// Target indices this implicant covers, ascending
    pub covers: Vec<usize>,
}

/// Build the chart of `primes` against `target`, one row per prime
///
/// Don't-care indices are left out of `covers`.
pub fn prime_chart(primes: &[Implicant], target: &[usize], variables: &[Arc<str>]) -> Vec<PrimeChartRow> {
    primes
        .iter()
        .map(|prime| PrimeChartRow {
            implicant: prime.clone(),
            term: prime.product_string(variables),
            covers: prime
                .minterms()
                .iter()
                .copied()
                .filter(|index| target.contains(index))
                .collect(),
        })
        .collect()
}

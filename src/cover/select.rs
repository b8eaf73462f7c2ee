//! Minimal cover selection: essential prime implicants, then Petrick's method

use super::{Implicant, Step};
use crate::error::InternalError;
use std::collections::{BTreeMap, BTreeSet};

/// The implicants chosen to cover a target set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverSelection {
    /// Essential implicants in discovery order, then Petrick's choice sorted by pattern
    pub selected: Vec<Implicant>,
    /// Essential and Petrick steps
    pub steps: Vec<Step>,
}

/// A candidate cover in Petrick's method, as positions into the prime list
type Product = BTreeSet<usize>;

/// Choose a minimal cover of `target` from `primes`
///
/// Target indices are visited in ascending order. Every prime implicant that
/// is the only one covering some index is essential and selected first. The
/// indices still uncovered are handed to Petrick's method, whose cheapest
/// product wins, ranked by implicant count, then total literal count, then
/// the sorted bit patterns with `-` < `0` < `1`.
///
/// Fails with [`InternalError::UncoverableIndex`] if some target index is not
/// covered by any prime.
///
/// # Examples
///
/// ```
/// use boolean_calculator::cover::{prime_implicants, select_cover};
///
/// // f(A, B, C) = A'B'C' + A'B'C + AB'C + ABC
/// let target = [0, 1, 5, 7];
/// let primes = prime_implicants(&target, &[], 3).primes;
/// let cover = select_cover(&primes, &target).unwrap();
///
/// let patterns: Vec<String> = cover.selected.iter().map(|p| p.pattern()).collect();
/// assert_eq!(patterns, vec!["00-", "1-1"]);
/// ```
pub fn select_cover(primes: &[Implicant], target: &[usize]) -> Result<CoverSelection, InternalError> {
    let chart = coverage_chart(primes, target)?;

    let mut selected: Vec<usize> = Vec::new();
    let mut steps = Vec::new();
    let mut covered: BTreeSet<usize> = BTreeSet::new();

    for (&index, covering) in &chart {
        if let [only] = covering.as_slice() {
            if !selected.contains(only) {
                selected.push(*only);
                steps.push(Step::Essential {
                    implicant: primes[*only].clone(),
                    index,
                });
            }
            covered.extend(primes[*only].minterms.iter().copied());
        }
    }
    log::debug!("{} essential prime implicants", selected.len());

    let remaining: Vec<&Vec<usize>> = chart
        .iter()
        .filter(|(index, _)| !covered.contains(index))
        .map(|(_, covering)| covering)
        .collect();

    if !remaining.is_empty() {
        let best = petrick(primes, &remaining);
        let mut chosen: Vec<&Implicant> = best.iter().map(|&p| &primes[p]).collect();
        chosen.sort();
        steps.push(Step::Petrick {
            chosen: chosen.iter().map(|imp| (*imp).clone()).collect(),
        });
        let mut by_pattern: Vec<usize> = best.into_iter().collect();
        by_pattern.sort_by(|&a, &b| primes[a].cmp(&primes[b]));
        for position in by_pattern {
            if !selected.contains(&position) {
                selected.push(position);
            }
        }
    }

    Ok(CoverSelection {
        selected: selected.into_iter().map(|p| primes[p].clone()).collect(),
        steps,
    })
}

/// Map each target index to the positions of the primes covering it
fn coverage_chart(primes: &[Implicant], target: &[usize]) -> Result<BTreeMap<usize, Vec<usize>>, InternalError> {
    let mut chart = BTreeMap::new();
    for &index in target {
        let covering: Vec<usize> = primes
            .iter()
            .enumerate()
            .filter(|(_, prime)| prime.covers(index))
            .map(|(position, _)| position)
            .collect();
        if covering.is_empty() {
            return Err(InternalError::UncoverableIndex { index });
        }
        chart.insert(index, covering);
    }
    Ok(chart)
}

/// Multiply out the clauses and return the cheapest product
///
/// Each clause is the list of primes covering one remaining index. Products
/// are deduplicated as sets, and any product that is a superset of another is
/// absorbed as soon as it appears.
fn petrick(primes: &[Implicant], clauses: &[&Vec<usize>]) -> Product {
    let mut products: BTreeSet<Product> = BTreeSet::from([Product::new()]);

    for clause in clauses {
        let mut expanded: BTreeSet<Product> = BTreeSet::new();
        for product in &products {
            if clause.iter().any(|p| product.contains(p)) {
                expanded.insert(product.clone());
                continue;
            }
            for &p in clause.iter() {
                let mut extended = product.clone();
                extended.insert(p);
                expanded.insert(extended);
            }
        }
        products = absorb(expanded);
    }
    log::debug!("Petrick's method: {} candidate covers", products.len());

    products
        .into_iter()
        .min_by(|a, b| rank(primes, a).cmp(&rank(primes, b)))
        .unwrap_or_default()
}

/// Drop every product that strictly contains another (X + XY = X)
fn absorb(products: BTreeSet<Product>) -> BTreeSet<Product> {
    let mut by_size: Vec<Product> = products.into_iter().collect();
    by_size.sort_by_key(|p| p.len());
    let mut kept: Vec<Product> = Vec::new();
    for product in by_size {
        if !kept.iter().any(|smaller| smaller.is_subset(&product)) {
            kept.push(product);
        }
    }
    kept.into_iter().collect()
}

fn rank<'a>(primes: &'a [Implicant], product: &Product) -> (usize, usize, Vec<&'a [Option<bool>]>) {
    let literals = product.iter().map(|&p| primes[p].literal_count()).sum();
    let mut patterns: Vec<&[Option<bool>]> = product.iter().map(|&p| primes[p].bits()).collect();
    patterns.sort();
    (product.len(), literals, patterns)
}

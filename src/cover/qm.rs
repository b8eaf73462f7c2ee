//! Quine–McCluskey prime implicant generation

use super::{Implicant, Step};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Prime implicants of a target set, with the trace that produced them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimeImplicants {
    /// Surviving prime implicants, sorted by pattern
    pub primes: Vec<Implicant>,
    /// Grouping and merge steps, in the order they happened
    pub steps: Vec<Step>,
}

impl PrimeImplicants {
    /// Whether the single-minterm shortcut produced this result
    pub fn is_single_minterm(&self) -> bool {
        matches!(self.steps.as_slice(), [Step::SingleMinterm { .. }])
    }
}

/// Compute the prime implicants covering `target` over `width` variables
///
/// `dont_care` indices may be absorbed into larger groups but never need to be
/// covered; a prime implicant that covers only don't-cares is dropped.
///
/// - An empty target yields no implicants and no steps.
/// - A single target index with no don't-cares yields its full pattern directly.
/// - Otherwise merge passes run until one makes no merge. The `used` marks of a
///   pass live only inside that pass.
///
/// # Examples
///
/// ```
/// use boolean_calculator::cover::prime_implicants;
///
/// // f(A, B) = A'B + AB' + AB
/// let result = prime_implicants(&[1, 2, 3], &[], 2);
/// let patterns: Vec<String> = result.primes.iter().map(|p| p.pattern()).collect();
/// assert_eq!(patterns, vec!["-1", "1-"]);
/// ```
pub fn prime_implicants(target: &[usize], dont_care: &[usize], width: usize) -> PrimeImplicants {
    if target.is_empty() {
        return PrimeImplicants::default();
    }

    if let ([index], []) = (target, dont_care) {
        let term = Implicant::from_index(*index, width);
        return PrimeImplicants {
            primes: vec![term.clone()],
            steps: vec![Step::SingleMinterm { index: *index, term }],
        };
    }

    let targets: BTreeSet<usize> = target.iter().copied().collect();
    let mut current: Vec<Implicant> = targets
        .iter()
        .chain(dont_care)
        .copied()
        .collect::<BTreeSet<usize>>()
        .into_iter()
        .map(|index| Implicant::from_index(index, width))
        .collect();

    let mut steps = vec![Step::Grouped {
        groups: group_by_ones(&current)
            .into_iter()
            .map(|(ones, members)| (ones, members.iter().map(|&i| current[i].clone()).collect()))
            .collect(),
    }];

    let mut primes = Vec::new();
    let mut pass = 1;
    loop {
        let (next, used) = merge_pass(&current, pass, &mut steps);
        log::debug!(
            "merge pass {}: {} implicants in, {} merged out",
            pass,
            current.len(),
            next.len()
        );
        primes.extend(
            current
                .into_iter()
                .zip(used)
                .filter(|(_, used)| !used)
                .map(|(implicant, _)| implicant),
        );
        if next.is_empty() {
            break;
        }
        current = next;
        pass += 1;
    }

    primes.retain(|prime| prime.minterms.iter().any(|m| targets.contains(m)));
    primes.sort();
    log::debug!("{} prime implicants after {} passes", primes.len(), pass);

    PrimeImplicants { primes, steps }
}

/// Partition implicant positions by number of ones
fn group_by_ones(implicants: &[Implicant]) -> BTreeMap<usize, Vec<usize>> {
    let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (position, implicant) in implicants.iter().enumerate() {
        groups.entry(implicant.ones()).or_default().push(position);
    }
    groups
}

/// Run one merge pass over `current`
///
/// Returns the deduplicated merged implicants for the next pass and, per input
/// implicant, whether it took part in a merge.
fn merge_pass(current: &[Implicant], pass: usize, steps: &mut Vec<Step>) -> (Vec<Implicant>, Vec<bool>) {
    let groups = group_by_ones(current);
    let mut used = vec![false; current.len()];
    let mut next: Vec<Implicant> = Vec::new();
    let mut seen: HashMap<Vec<Option<bool>>, usize> = HashMap::new();

    for (ones, lower) in &groups {
        let Some(upper) = groups.get(&(ones + 1)) else {
            continue;
        };
        for &i in lower {
            for &j in upper {
                let Some(merged) = current[i].try_merge(&current[j]) else {
                    continue;
                };
                used[i] = true;
                used[j] = true;
                log::trace!("pass {}: {} + {} -> {}", pass, current[i], current[j], merged);
                steps.push(Step::Combined {
                    pass,
                    left: current[i].clone(),
                    right: current[j].clone(),
                    merged: merged.clone(),
                });
                match seen.get(&merged.bits) {
                    Some(&existing) => next[existing].absorb(&merged),
                    None => {
                        seen.insert(merged.bits.clone(), next.len());
                        next.push(merged);
                    }
                }
            }
        }
    }

    (next, used)
}

//! Implicants: product terms with don't-care positions

use crate::expression::{BinaryOp, BoolExpr};
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// A product term over `n` variables together with the row indices it covers
///
/// Each position of `bits` is one variable in sorted order:
/// - `Some(true)` - the variable appears positively
/// - `Some(false)` - the variable appears negated
/// - `None` - the variable is absent (a dash)
///
/// Implicants order by their bit pattern with `-` < `0` < `1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Implicant {
    #[serde(rename = "pattern", serialize_with = "serialize_pattern")]
    pub(crate) bits: Vec<Option<bool>>,
    pub(crate) minterms: BTreeSet<usize>,
}

fn serialize_pattern<S: Serializer>(bits: &[Option<bool>], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&Pattern(bits))
}

struct Pattern<'a>(&'a [Option<bool>]);

impl fmt::Display for Pattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.0 {
            let c = match bit {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl Implicant {
    /// The full `width`-bit pattern of one row index, most significant bit first
    pub fn from_index(index: usize, width: usize) -> Self {
        let bits = (0..width)
            .map(|position| Some((index >> (width - position - 1)) & 1 == 1))
            .collect();
        Implicant {
            bits,
            minterms: BTreeSet::from([index]),
        }
    }

    /// Bit pattern, one entry per variable
    pub fn bits(&self) -> &[Option<bool>] {
        &self.bits
    }

    /// Row indices covered by this implicant
    pub fn minterms(&self) -> &BTreeSet<usize> {
        &self.minterms
    }

    /// Whether row `index` is covered
    pub fn covers(&self, index: usize) -> bool {
        self.minterms.contains(&index)
    }

    /// Number of positive positions; dashes are ignored
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|b| **b == Some(true)).count()
    }

    /// Number of non-dash positions
    pub fn literal_count(&self) -> usize {
        self.bits.iter().filter(|b| b.is_some()).count()
    }

    /// Bit pattern as text, e.g. `"01-"`
    pub fn pattern(&self) -> String {
        Pattern(&self.bits).to_string()
    }

    /// Combine two implicants that differ in exactly one non-dash position
    ///
    /// Both patterns must agree everywhere else, dash for dash. The result has a
    /// dash at the differing position and covers the union of both minterm sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolean_calculator::cover::Implicant;
    ///
    /// let a = Implicant::from_index(0b010, 3);
    /// let b = Implicant::from_index(0b011, 3);
    /// let merged = a.try_merge(&b).unwrap();
    /// assert_eq!(merged.pattern(), "01-");
    ///
    /// let c = Implicant::from_index(0b101, 3);
    /// assert!(a.try_merge(&c).is_none());
    /// ```
    pub fn try_merge(&self, other: &Implicant) -> Option<Implicant> {
        if self.bits.len() != other.bits.len() {
            return None;
        }
        let mut difference = None;
        for (position, (mine, theirs)) in self.bits.iter().zip(&other.bits).enumerate() {
            if mine == theirs {
                continue;
            }
            if mine.is_none() || theirs.is_none() || difference.is_some() {
                return None;
            }
            difference = Some(position);
        }
        let position = difference?;

        let mut bits = self.bits.clone();
        bits[position] = None;
        Some(Implicant {
            bits,
            minterms: self.minterms.union(&other.minterms).copied().collect(),
        })
    }

    /// Add the minterms of an implicant with the same pattern
    pub(crate) fn absorb(&mut self, other: &Implicant) {
        self.minterms.extend(other.minterms.iter().copied());
    }

    /// Render as a product of literals; an all-dash implicant is the constant `1`
    pub fn to_product(&self, variables: &[Arc<str>]) -> BoolExpr {
        let literals = self.literals(variables, false);
        BoolExpr::chain(BinaryOp::And, literals, BoolExpr::constant(true))
    }

    /// Render as the sum clause of the complemented product
    ///
    /// This turns an implicant of the false rows into a clause of the
    /// product-of-sums form: every literal flips polarity. An all-dash
    /// implicant is the constant `0`.
    pub fn to_complemented_clause(&self, variables: &[Arc<str>]) -> BoolExpr {
        let literals = self.literals(variables, true);
        BoolExpr::chain(BinaryOp::Or, literals, BoolExpr::constant(false))
    }

    /// Product-term text used in derivation steps and the prime chart
    pub fn product_string(&self, variables: &[Arc<str>]) -> String {
        self.to_product(variables).to_string()
    }

    fn literals<'a>(
        &'a self,
        variables: &'a [Arc<str>],
        complement: bool,
    ) -> impl Iterator<Item = BoolExpr> + 'a {
        self.bits
            .iter()
            .zip(variables)
            .filter_map(move |(bit, name)| {
                let positive = (*bit)? != complement;
                let var = BoolExpr::Var(Arc::clone(name));
                Some(if positive { var } else { BoolExpr::negated(var) })
            })
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Pattern(&self.bits))
    }
}

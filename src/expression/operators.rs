//! Operator overloading and builder methods for boolean expressions

use super::{BinaryOp, BoolExpr};
use std::ops::{Add, BitXor, Mul, Not};

/// Logical AND operator for references: `&a * &b`
///
/// # Examples
///
/// ```
/// use boolean_calculator::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let result = &a * &b;  // Equivalent to a.and(&b)
/// assert_eq!(result, a.and(&b));
/// ```
impl Mul for &BoolExpr {
    type Output = BoolExpr;

    fn mul(self, rhs: &BoolExpr) -> BoolExpr {
        self.and(rhs)
    }
}

impl Mul for BoolExpr {
    type Output = BoolExpr;

    fn mul(self, rhs: BoolExpr) -> BoolExpr {
        BoolExpr::binary(BinaryOp::And, self, rhs)
    }
}

/// Logical OR operator for references: `&a + &b`
impl Add for &BoolExpr {
    type Output = BoolExpr;

    fn add(self, rhs: &BoolExpr) -> BoolExpr {
        self.or(rhs)
    }
}

impl Add for BoolExpr {
    type Output = BoolExpr;

    fn add(self, rhs: BoolExpr) -> BoolExpr {
        BoolExpr::binary(BinaryOp::Or, self, rhs)
    }
}

/// Logical XOR operator for references: `&a ^ &b`
impl BitXor for &BoolExpr {
    type Output = BoolExpr;

    fn bitxor(self, rhs: &BoolExpr) -> BoolExpr {
        self.xor(rhs)
    }
}

impl BitXor for BoolExpr {
    type Output = BoolExpr;

    fn bitxor(self, rhs: BoolExpr) -> BoolExpr {
        BoolExpr::binary(BinaryOp::Xor, self, rhs)
    }
}

/// Logical NOT operator for references: `!&a`
impl Not for &BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::negated(self.clone())
    }
}

impl Not for BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::negated(self)
    }
}

impl BoolExpr {
    /// Logical AND of two expressions
    pub fn and(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr::binary(BinaryOp::And, self.clone(), other.clone())
    }

    /// Logical OR of two expressions
    pub fn or(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr::binary(BinaryOp::Or, self.clone(), other.clone())
    }

    /// Logical XOR of two expressions
    pub fn xor(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr::binary(BinaryOp::Xor, self.clone(), other.clone())
    }

    /// Logical NAND of two expressions
    pub fn nand(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr::binary(BinaryOp::Nand, self.clone(), other.clone())
    }

    /// Logical NOR of two expressions
    pub fn nor(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr::binary(BinaryOp::Nor, self.clone(), other.clone())
    }

    /// Logical NOT of this expression
    ///
    /// # Examples
    ///
    /// ```
    /// use boolean_calculator::BoolExpr;
    ///
    /// let a = BoolExpr::variable("A");
    /// assert_eq!(a.not(), BoolExpr::parse("A'").unwrap());
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> BoolExpr {
        BoolExpr::negated(self.clone())
    }

    /// Fold `terms` left-to-right with `op`, or return `empty` when there are none
    ///
    /// Used to assemble sum-of-products and product-of-sums trees so they print
    /// as flat chains.
    pub fn chain<I>(op: BinaryOp, terms: I, empty: BoolExpr) -> BoolExpr
    where
        I: IntoIterator<Item = BoolExpr>,
    {
        terms
            .into_iter()
            .reduce(|acc, term| BoolExpr::binary(op, acc, term))
            .unwrap_or(empty)
    }
}

//! Bound-aware cardinality arithmetic.

use crate::expr::TypeExpr;

/// Cardinality of a type, as precisely as a given bound cares about.
///
/// Anything larger than the bound collapses into `Beyond`, which is still
/// known to be nonzero: that is enough to get `huge * 0 = 0`, `huge ^ 0 = 1`,
/// and `1 ^ huge = 1` exactly right without ever computing `huge`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[expect(clippy::exhaustive_enums, reason = "a number is either small enough or not")]
pub enum Cardinality {
    /// Exactly this many inhabitants, no more than the bound.
    Exactly(u64),
    /// Strictly more inhabitants than the bound.
    Beyond,
}

impl Cardinality {
    /// `Exactly(n)` if `n` is within `limit`, else `Beyond`.
    #[inline]
    #[must_use]
    pub const fn within(n: u64, limit: u64) -> Self {
        if n > limit {
            Self::Beyond
        } else {
            Self::Exactly(n)
        }
    }

    /// The exact count, if it is within the bound.
    #[inline]
    #[must_use]
    pub const fn exactly(self) -> Option<u64> {
        match self {
            Self::Exactly(n) => Some(n),
            Self::Beyond => None,
        }
    }

    /// `|a + b|`.
    #[inline]
    #[must_use]
    pub const fn of_sum(self, other: Self, limit: u64) -> Self {
        match (self, other) {
            (Self::Exactly(a), Self::Exactly(b)) => match a.checked_add(b) {
                Some(n) => Self::within(n, limit),
                None => Self::Beyond,
            },
            (Self::Beyond, _) | (_, Self::Beyond) => Self::Beyond,
        }
    }

    /// `|a * b|`, exactly zero if either side is, however large the other.
    #[inline]
    #[must_use]
    pub const fn of_prod(self, other: Self, limit: u64) -> Self {
        match (self, other) {
            (Self::Exactly(0), _) | (_, Self::Exactly(0)) => Self::Exactly(0),
            (Self::Exactly(a), Self::Exactly(b)) => match a.checked_mul(b) {
                Some(n) => Self::within(n, limit),
                None => Self::Beyond,
            },
            (Self::Beyond, _) | (_, Self::Beyond) => Self::Beyond,
        }
    }

    /// `self ^ exponent`, with `x ^ 0 = 1` for every `x` (including `0 ^ 0`).
    #[inline]
    #[must_use]
    pub fn of_exp(self, exponent: Self, limit: u64) -> Self {
        match (self, exponent) {
            (_, Self::Exactly(0)) => Self::within(1, limit),
            (Self::Exactly(base @ (0 | 1)), _) => Self::within(base, limit),
            // base >= 2 and exponent > limit: `2 ^ e > e > limit`
            (Self::Beyond, _) | (_, Self::Beyond) => Self::Beyond,
            (Self::Exactly(base), Self::Exactly(e)) => u32::try_from(e)
                .ok()
                .and_then(|e| base.checked_pow(e))
                .map_or(Self::Beyond, |n| Self::within(n, limit)),
        }
    }
}

/// Count the inhabitants of `t`, tracking anything over `limit` as `Beyond`.
#[inline]
#[must_use]
pub fn count(t: &TypeExpr, limit: u64) -> Cardinality {
    match *t {
        TypeExpr::Zero => Cardinality::within(0, limit),
        TypeExpr::One => Cardinality::within(1, limit),
        TypeExpr::Atom(n) => Cardinality::within(n.get(), limit),
        TypeExpr::Sum(ref l, ref r) => count(l, limit).of_sum(count(r, limit), limit),
        TypeExpr::Product(ref l, ref r) => count(l, limit).of_prod(count(r, limit), limit),
        TypeExpr::Exp(ref b, ref e) => count(b, limit).of_exp(count(e, limit), limit),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const LIMIT: u64 = 1_000;

    fn n(n: u64) -> TypeExpr {
        TypeExpr::natural(n)
    }

    #[test]
    fn small_arithmetic_is_exact() {
        pretty_assertions::assert_eq!(count(&(n(2) + n(3)), LIMIT), Cardinality::Exactly(5));
        pretty_assertions::assert_eq!(count(&(n(2) * n(3)), LIMIT), Cardinality::Exactly(6));
        pretty_assertions::assert_eq!(count(&n(2).pow(n(3)), LIMIT), Cardinality::Exactly(8));
        pretty_assertions::assert_eq!(count(&n(3).pow(n(2)), LIMIT), Cardinality::Exactly(9));
    }

    #[test]
    fn zero_to_the_zero_is_one() {
        pretty_assertions::assert_eq!(count(&n(0).pow(n(0)), LIMIT), Cardinality::Exactly(1));
        pretty_assertions::assert_eq!(count(&n(0).pow(n(1)), LIMIT), Cardinality::Exactly(0));
    }

    #[test]
    fn huge_subtrees_still_absorb() {
        let huge = n(10).pow(n(10).pow(n(10)));
        pretty_assertions::assert_eq!(count(&huge, LIMIT), Cardinality::Beyond);
        pretty_assertions::assert_eq!(count(&(huge.clone() * n(0)), LIMIT), Cardinality::Exactly(0));
        pretty_assertions::assert_eq!(count(&huge.clone().pow(n(0)), LIMIT), Cardinality::Exactly(1));
        pretty_assertions::assert_eq!(count(&n(1).pow(huge.clone()), LIMIT), Cardinality::Exactly(1));
        pretty_assertions::assert_eq!(count(&n(0).pow(huge.clone()), LIMIT), Cardinality::Exactly(0));
        pretty_assertions::assert_eq!(count(&(huge + n(1)), LIMIT), Cardinality::Beyond);
    }

    #[test]
    fn bound_is_inclusive() {
        pretty_assertions::assert_eq!(count(&n(LIMIT), LIMIT), Cardinality::Exactly(LIMIT));
        pretty_assertions::assert_eq!(count(&(n(LIMIT) + n(1)), LIMIT), Cardinality::Beyond);
    }

    #[test]
    fn u64_overflow_is_beyond() {
        let big = n(u64::MAX);
        pretty_assertions::assert_eq!(count(&(big.clone() + big.clone()), u64::MAX), Cardinality::Beyond);
        pretty_assertions::assert_eq!(count(&(big.clone() * n(2)), u64::MAX), Cardinality::Beyond);
        pretty_assertions::assert_eq!(count(&big.pow(n(2)), u64::MAX), Cardinality::Beyond);
    }
}

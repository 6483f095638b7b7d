//! Finite types as expression trees.

use {
    alloc::sync::Arc,
    core::{fmt, num::NonZero, ops},
};

/// A finite type, built from `0`, `1`, sized atoms, sums, products, and exponentials.
///
/// Children are reference-counted, so cloning a tree (or reusing a subtree
/// in several places) never copies more than a few pointers.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TypeExpr {
    /// The uninhabited type: `!`, `Infallible`, an empty `enum`.
    Zero,
    /// The unit type: `()`, or any `struct` without fields.
    One,
    /// A type given directly by how many inhabitants it has, e.g. `bool` is `Atom(2)`.
    Atom(NonZero<u64>),
    /// Tagged union: every inhabitant of the left plus every inhabitant of the right.
    Sum(Arc<Self>, Arc<Self>),
    /// Pairs: one inhabitant of the left alongside one of the right.
    Product(Arc<Self>, Arc<Self>),
    /// Total functions from the exponent (second) into the base (first).
    Exp(Arc<Self>, Arc<Self>),
}

impl TypeExpr {
    /// The uninhabited type.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::Zero
    }

    /// The unit type.
    #[inline]
    #[must_use]
    pub const fn one() -> Self {
        Self::One
    }

    /// An opaque type with exactly `size` inhabitants.
    #[inline]
    #[must_use]
    pub const fn atom(size: NonZero<u64>) -> Self {
        Self::Atom(size)
    }

    /// An atom of `size` inhabitants, or `None` if `size` is zero.
    #[inline]
    #[must_use]
    pub const fn atom_of(size: u64) -> Option<Self> {
        match NonZero::new(size) {
            Some(nz) => Some(Self::Atom(nz)),
            None => None,
        }
    }

    /// The canonical type with `n` inhabitants:
    /// `Zero` for 0, `One` for 1, and an atom otherwise.
    #[inline]
    #[must_use]
    pub const fn natural(n: u64) -> Self {
        match n {
            0 => Self::Zero,
            1 => Self::One,
            _ => match NonZero::new(n) {
                Some(nz) => Self::Atom(nz),
                None => Self::Zero,
            },
        }
    }

    /// `left + right`.
    #[inline]
    #[must_use]
    pub fn sum<L: Into<Arc<Self>>, R: Into<Arc<Self>>>(left: L, right: R) -> Self {
        Self::Sum(left.into(), right.into())
    }

    /// `left * right`.
    #[inline]
    #[must_use]
    pub fn product<L: Into<Arc<Self>>, R: Into<Arc<Self>>>(left: L, right: R) -> Self {
        Self::Product(left.into(), right.into())
    }

    /// The function space `exponent -> base`.
    #[inline]
    #[must_use]
    pub fn exp<B: Into<Arc<Self>>, E: Into<Arc<Self>>>(base: B, exponent: E) -> Self {
        Self::Exp(base.into(), exponent.into())
    }

    /// `self ^ exponent`, i.e. functions from `exponent` into `self`.
    #[inline]
    #[must_use]
    pub fn pow<E: Into<Arc<Self>>>(self, exponent: E) -> Self {
        Self::exp(self, exponent)
    }

    /// Immediate subtrees, left to right (base before exponent).
    #[inline]
    #[must_use]
    pub fn children(&self) -> Option<(&Self, &Self)> {
        match *self {
            Self::Zero | Self::One | Self::Atom(_) => None,
            Self::Sum(ref l, ref r) | Self::Product(ref l, ref r) | Self::Exp(ref l, ref r) => {
                Some((l, r))
            }
        }
    }

    /// Number of nodes in this tree.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.children().map_or(1, |(l, r)| {
            l.size().saturating_add(r.size()).saturating_add(1)
        })
    }
}

impl ops::Add for TypeExpr {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::sum(self, rhs)
    }
}

impl ops::Mul for TypeExpr {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::product(self, rhs)
    }
}

/// Compound nodes are always parenthesized, so the output parses back
/// to the same tree (except `Atom(1)`, which prints as `1` and parses as `One`).
impl fmt::Display for TypeExpr {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Zero => write!(f, "0"),
            Self::One => write!(f, "1"),
            Self::Atom(n) => write!(f, "{n}"),
            Self::Sum(ref l, ref r) => write!(f, "({l} + {r})"),
            Self::Product(ref l, ref r) => write!(f, "({l} * {r})"),
            Self::Exp(ref b, ref e) => write!(f, "({b} ^ {e})"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn natural_picks_canonical_constructor() {
        pretty_assertions::assert_eq!(TypeExpr::natural(0), TypeExpr::Zero);
        pretty_assertions::assert_eq!(TypeExpr::natural(1), TypeExpr::One);
        pretty_assertions::assert_eq!(TypeExpr::natural(7), TypeExpr::atom_of(7).unwrap());
        pretty_assertions::assert_eq!(TypeExpr::atom_of(0), None);
    }

    #[test]
    fn operators_build_nodes() {
        let two = TypeExpr::natural(2);
        let three = TypeExpr::natural(3);
        pretty_assertions::assert_eq!(
            two.clone() + three.clone(),
            TypeExpr::sum(two.clone(), three.clone()),
        );
        pretty_assertions::assert_eq!(
            (two.clone() * three.clone()).pow(TypeExpr::one()),
            TypeExpr::exp(TypeExpr::product(two, three), TypeExpr::One),
        );
    }

    #[test]
    fn shared_subtrees_compare_structurally() {
        let shared = Arc::new(TypeExpr::natural(2) + TypeExpr::natural(2));
        let lhs = TypeExpr::product(Arc::clone(&shared), Arc::clone(&shared));
        let rhs = TypeExpr::product(
            TypeExpr::natural(2) + TypeExpr::natural(2),
            TypeExpr::natural(2) + TypeExpr::natural(2),
        );
        pretty_assertions::assert_eq!(lhs, rhs);
        pretty_assertions::assert_eq!(lhs.size(), 7);
    }

    #[test]
    fn display_parenthesizes_compound_nodes() {
        let t = (TypeExpr::natural(2) + TypeExpr::natural(2)) * TypeExpr::natural(2);
        pretty_assertions::assert_eq!(t.to_string(), "((2 + 2) * 2)");
        let f = TypeExpr::natural(3).pow(TypeExpr::natural(2));
        pretty_assertions::assert_eq!(f.to_string(), "(3 ^ 2)");
    }
}

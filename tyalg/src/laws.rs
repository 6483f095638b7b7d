//! Named identities of the algebra of types.

use {
    crate::{error::Error, expr::TypeExpr},
    core::{fmt, str::FromStr},
};

/// An algebraic identity between two type expressions,
/// parameterized over some number of operand types.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[expect(clippy::exhaustive_enums, reason = "`ALL` lists them")]
pub enum LawKind {
    /// `a + b = b + a`
    SumCommutative,
    /// `a * b = b * a`
    ProductCommutative,
    /// `(a + b) + c = a + (b + c)`
    SumAssociative,
    /// `(a * b) * c = a * (b * c)`
    ProductAssociative,
    /// `a * (b + c) = a * b + a * c`
    Distributive,
    /// `t + 0 = t`
    SumIdentity,
    /// `t * 1 = t`
    ProductIdentity,
    /// `t * 0 = 0`
    Absorption,
    /// `t ^ 0 = 1`
    ExpZero,
    /// `t ^ 1 = t`
    ExpOne,
    /// `1 ^ t = 1`
    OneExp,
    /// `a ^ (b + c) = a ^ b * a ^ c`
    ExpSum,
    /// `a ^ (b * c) = (a ^ b) ^ c`
    Currying,
    /// `(a * b) ^ c = a ^ c * b ^ c`
    ExpProduct,
}

/// The outcome of instantiating and checking a law.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct LawResult {
    /// The law checked.
    pub law: LawKind,
    /// The types substituted for the law's variables, in order.
    pub operands: Vec<TypeExpr>,
    /// Left-hand side, instantiated with `operands`.
    pub lhs: TypeExpr,
    /// Right-hand side, instantiated with `operands`.
    pub rhs: TypeExpr,
    /// `|lhs|`
    pub lhs_cardinality: u64,
    /// `|rhs|`
    pub rhs_cardinality: u64,
}

impl LawKind {
    /// Every law, in the order `tyalg laws` prints them.
    pub const ALL: [Self; 14] = [
        Self::SumCommutative,
        Self::ProductCommutative,
        Self::SumAssociative,
        Self::ProductAssociative,
        Self::Distributive,
        Self::SumIdentity,
        Self::ProductIdentity,
        Self::Absorption,
        Self::ExpZero,
        Self::ExpOne,
        Self::OneExp,
        Self::ExpSum,
        Self::Currying,
        Self::ExpProduct,
    ];

    /// How many operand types this law is stated over.
    #[inline]
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::SumIdentity
            | Self::ProductIdentity
            | Self::Absorption
            | Self::ExpZero
            | Self::ExpOne
            | Self::OneExp => 1,
            Self::SumCommutative | Self::ProductCommutative => 2,
            Self::SumAssociative
            | Self::ProductAssociative
            | Self::Distributive
            | Self::ExpSum
            | Self::Currying
            | Self::ExpProduct => 3,
        }
    }

    /// Kebab-case name, as accepted by `FromStr`.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SumCommutative => "sum-commutative",
            Self::ProductCommutative => "product-commutative",
            Self::SumAssociative => "sum-associative",
            Self::ProductAssociative => "product-associative",
            Self::Distributive => "distributive",
            Self::SumIdentity => "sum-identity",
            Self::ProductIdentity => "product-identity",
            Self::Absorption => "absorption",
            Self::ExpZero => "exp-zero",
            Self::ExpOne => "exp-one",
            Self::OneExp => "one-exp",
            Self::ExpSum => "exp-sum",
            Self::Currying => "currying",
            Self::ExpProduct => "exp-product",
        }
    }

    /// The law in symbols.
    #[inline]
    #[must_use]
    pub const fn statement(self) -> &'static str {
        match self {
            Self::SumCommutative => "a + b = b + a",
            Self::ProductCommutative => "a * b = b * a",
            Self::SumAssociative => "(a + b) + c = a + (b + c)",
            Self::ProductAssociative => "(a * b) * c = a * (b * c)",
            Self::Distributive => "a * (b + c) = a * b + a * c",
            Self::SumIdentity => "t + 0 = t",
            Self::ProductIdentity => "t * 1 = t",
            Self::Absorption => "t * 0 = 0",
            Self::ExpZero => "t ^ 0 = 1",
            Self::ExpOne => "t ^ 1 = t",
            Self::OneExp => "1 ^ t = 1",
            Self::ExpSum => "a ^ (b + c) = a ^ b * a ^ c",
            Self::Currying => "a ^ (b * c) = (a ^ b) ^ c",
            Self::ExpProduct => "(a * b) ^ c = a ^ c * b ^ c",
        }
    }

    /// Instantiate both sides of this law with `operands`.
    /// # Errors
    /// If the number of operands does not match the law's arity.
    #[inline]
    pub fn sides(self, operands: &[TypeExpr]) -> Result<(TypeExpr, TypeExpr), Error> {
        use TypeExpr as T;

        Ok(match (self, operands) {
            (Self::SumCommutative, [a, b]) => (T::sum(a.clone(), b.clone()), T::sum(b.clone(), a.clone())),
            (Self::ProductCommutative, [a, b]) => {
                (T::product(a.clone(), b.clone()), T::product(b.clone(), a.clone()))
            }
            (Self::SumAssociative, [a, b, c]) => (
                T::sum(T::sum(a.clone(), b.clone()), c.clone()),
                T::sum(a.clone(), T::sum(b.clone(), c.clone())),
            ),
            (Self::ProductAssociative, [a, b, c]) => (
                T::product(T::product(a.clone(), b.clone()), c.clone()),
                T::product(a.clone(), T::product(b.clone(), c.clone())),
            ),
            (Self::Distributive, [a, b, c]) => (
                T::product(a.clone(), T::sum(b.clone(), c.clone())),
                T::sum(T::product(a.clone(), b.clone()), T::product(a.clone(), c.clone())),
            ),
            (Self::SumIdentity, [t]) => (T::sum(t.clone(), T::Zero), t.clone()),
            (Self::ProductIdentity, [t]) => (T::product(t.clone(), T::One), t.clone()),
            (Self::Absorption, [t]) => (T::product(t.clone(), T::Zero), T::Zero),
            (Self::ExpZero, [t]) => (T::exp(t.clone(), T::Zero), T::One),
            (Self::ExpOne, [t]) => (T::exp(t.clone(), T::One), t.clone()),
            (Self::OneExp, [t]) => (T::exp(T::One, t.clone()), T::One),
            (Self::ExpSum, [a, b, c]) => (
                T::exp(a.clone(), T::sum(b.clone(), c.clone())),
                T::product(T::exp(a.clone(), b.clone()), T::exp(a.clone(), c.clone())),
            ),
            (Self::Currying, [a, b, c]) => (
                T::exp(a.clone(), T::product(b.clone(), c.clone())),
                T::exp(T::exp(a.clone(), b.clone()), c.clone()),
            ),
            (Self::ExpProduct, [a, b, c]) => (
                T::exp(T::product(a.clone(), b.clone()), c.clone()),
                T::product(T::exp(a.clone(), c.clone()), T::exp(b.clone(), c.clone())),
            ),
            _ => {
                return Err(Error::Arity {
                    law: self,
                    expected: self.arity(),
                    found: operands.len(),
                });
            }
        })
    }
}

impl LawResult {
    /// Whether both sides have the same number of inhabitants.
    #[inline]
    #[must_use]
    pub const fn holds(&self) -> bool {
        self.lhs_cardinality == self.rhs_cardinality
    }
}

impl fmt::Display for LawKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LawKind {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|law| law.name() == s)
            .ok_or_else(|| Error::UnknownLaw(s.to_owned()))
    }
}

impl fmt::Display for LawResult {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} has {}, {} has {}: {}",
            self.law,
            self.lhs,
            self.lhs_cardinality,
            self.rhs,
            self.rhs_cardinality,
            if self.holds() { "holds" } else { "FAILS" },
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_round_trip() {
        for law in LawKind::ALL {
            pretty_assertions::assert_eq!(law.name().parse::<LawKind>(), Ok(law));
        }
        pretty_assertions::assert_eq!(
            "commutative".parse::<LawKind>(),
            Err(Error::UnknownLaw("commutative".to_owned())),
        );
    }

    #[test]
    fn sides_follow_the_statement() {
        let a = TypeExpr::natural(2);
        let b = TypeExpr::natural(3);
        let c = TypeExpr::natural(5);
        let (lhs, rhs) = LawKind::Distributive
            .sides(&[a.clone(), b.clone(), c.clone()])
            .unwrap();
        pretty_assertions::assert_eq!(lhs.to_string(), "(2 * (3 + 5))");
        pretty_assertions::assert_eq!(rhs.to_string(), "((2 * 3) + (2 * 5))");
        let (lhs, rhs) = LawKind::Currying.sides(&[a, b, c]).unwrap();
        pretty_assertions::assert_eq!(lhs.to_string(), "(2 ^ (3 * 5))");
        pretty_assertions::assert_eq!(rhs.to_string(), "((2 ^ 3) ^ 5)");
    }

    #[test]
    fn wrong_arity_is_reported() {
        pretty_assertions::assert_eq!(
            LawKind::SumCommutative.sides(&[TypeExpr::One]),
            Err(Error::Arity {
                law: LawKind::SumCommutative,
                expected: 2,
                found: 1,
            }),
        );
    }
}

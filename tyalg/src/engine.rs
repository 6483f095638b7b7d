//! Cardinalities, enumeration, and law checking under a size bound.

use crate::{
    count::{Cardinality, count},
    enumerate::{Enumeration, Isomorphism, Value, rank},
    error::{Error, Overflow},
    expr::TypeExpr,
    laws::{LawKind, LawResult},
};

/// Evaluates type expressions, refusing anything with more than
/// `max_cardinality` inhabitants.
///
/// Stateless apart from the bound: every method is a pure function,
/// and an `Engine` can be shared freely across threads.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Engine {
    max_cardinality: u64,
}

impl Engine {
    /// The bound used by `Engine::default()`.
    pub const DEFAULT_MAX_CARDINALITY: u64 = 1 << 20;

    /// An engine refusing types with more than `max_cardinality` inhabitants.
    #[inline]
    #[must_use]
    pub const fn new(max_cardinality: u64) -> Self {
        Self { max_cardinality }
    }

    /// The configured bound.
    #[inline]
    #[must_use]
    pub const fn max_cardinality(&self) -> u64 {
        self.max_cardinality
    }

    /// Number of inhabitants of `t`.
    /// # Errors
    /// If that number exceeds the bound.
    /// Oversized subtrees alone are fine as long as the total is not:
    /// `huge * 0` is exactly `0`.
    #[inline]
    pub fn cardinality(&self, t: &TypeExpr) -> Result<u64, Overflow> {
        match count(t, self.max_cardinality) {
            Cardinality::Exactly(n) => Ok(n),
            Cardinality::Beyond => Err(Overflow::new(t, self.max_cardinality)),
        }
    }

    /// Every inhabitant of `t`, in canonical order.
    /// # Errors
    /// If `t` has too many inhabitants, or one of its function tables
    /// would need more entries than the bound (e.g. `1 ^ huge`)
    /// or than [`MAX_TABLE_WIDTH`](crate::enumerate::MAX_TABLE_WIDTH).
    #[inline]
    pub fn enumerate(&self, t: &TypeExpr) -> Result<Enumeration, Overflow> {
        Enumeration::new(t, self.max_cardinality)
    }

    /// Position of `value` in `enumerate(t)`, or `None` if it does not inhabit `t`.
    /// # Errors
    /// If `t` has too many inhabitants.
    #[inline]
    pub fn rank(&self, t: &TypeExpr, value: &Value) -> Result<Option<u64>, Overflow> {
        let _: u64 = self.cardinality(t)?;
        Ok(rank(t, value, self.max_cardinality))
    }

    /// Whether `a` and `b` have the same number of inhabitants.
    /// # Errors
    /// If either side exceeds the bound.
    #[inline]
    pub fn is_isomorphic(&self, a: &TypeExpr, b: &TypeExpr) -> Result<bool, Overflow> {
        Ok(self.cardinality(a)? == self.cardinality(b)?)
    }

    /// An explicit bijection between `a` and `b`, if they are isomorphic.
    /// # Errors
    /// If either side cannot be enumerated.
    #[inline]
    pub fn isomorphism(&self, a: &TypeExpr, b: &TypeExpr) -> Result<Option<Isomorphism>, Overflow> {
        Isomorphism::new(a, b, self.max_cardinality)
    }

    /// Instantiate `law` with `operands` and compare the cardinalities of both sides.
    /// # Errors
    /// If the operand count is wrong for `law`, or either side exceeds the bound.
    #[inline]
    pub fn check_law(&self, law: LawKind, operands: &[TypeExpr]) -> Result<LawResult, Error> {
        let (lhs, rhs) = law.sides(operands)?;
        let lhs_cardinality = self.cardinality(&lhs)?;
        let rhs_cardinality = self.cardinality(&rhs)?;
        let result = LawResult {
            law,
            operands: operands.to_vec(),
            lhs,
            rhs,
            lhs_cardinality,
            rhs_cardinality,
        };
        tracing::debug!(
            %law,
            lhs = lhs_cardinality,
            rhs = rhs_cardinality,
            holds = result.holds(),
            "checked law"
        );
        Ok(result)
    }
}

impl Default for Engine {
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_CARDINALITY)
    }
}

//! Errors.

use {
    crate::{expr::TypeExpr, laws::LawKind, parse::ParseError},
    thiserror::Error,
};

/// A type (or a function table inside one) outgrew the engine's bound.
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
#[error("`{expr}` has more than {limit} inhabitants")]
#[non_exhaustive]
pub struct Overflow {
    /// The offending (sub)expression.
    pub expr: TypeExpr,
    /// The bound it exceeded.
    pub limit: u64,
}

/// Anything that can go wrong outside of pure cardinality arithmetic.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// See [`Overflow`].
    #[error(transparent)]
    Overflow(#[from] Overflow),

    /// A law was given the wrong number of operands.
    #[error("`{law}` takes {expected} operand(s) but {found} were given")]
    Arity {
        law: LawKind,
        expected: usize,
        found: usize,
    },

    /// Malformed type expression text.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No law goes by this name.
    #[error("unknown law `{0}`")]
    UnknownLaw(String),
}

impl Overflow {
    #[inline]
    #[must_use]
    pub(crate) fn new(expr: &TypeExpr, limit: u64) -> Self {
        tracing::debug!(%expr, limit, "cardinality bound exceeded");
        Self {
            expr: expr.clone(),
            limit,
        }
    }
}

//! The algebra of Rust's own types.

use crate::expr::TypeExpr;

/// Rust types whose shape is a finite type expression.
///
/// Derive it with `#[derive(Algebraic)]`: an `enum` is the sum of its variants,
/// a variant or `struct` is the product of its fields,
/// and no fields at all is `One`.
pub trait Algebraic {
    /// The type expression this type is built from.
    #[must_use]
    fn type_expr() -> TypeExpr;
}

/// The uninhabited type, as a Rust type.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Void {}

/// Anything at all follows from an inhabitant of `Void`,
/// since there is none to be had.
#[inline]
pub const fn absurd<A>(never: Void) -> A {
    match never {}
}

impl Algebraic for Void {
    #[inline]
    fn type_expr() -> TypeExpr {
        TypeExpr::Zero
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Case analysis on a sum whose right side is uninhabited.
    fn describe(value: Result<bool, Void>) -> &'static str {
        value.map_or_else(absurd, |b| if b { "true" } else { "false" })
    }

    #[test]
    fn absurd_eliminates_the_empty_case() {
        pretty_assertions::assert_eq!(describe(Ok(true)), "true");
        pretty_assertions::assert_eq!(describe(Ok(false)), "false");
    }

    #[test]
    fn void_is_zero() {
        pretty_assertions::assert_eq!(Void::type_expr(), TypeExpr::Zero);
        pretty_assertions::assert_eq!(<Result<bool, Void>>::type_expr().to_string(), "(2 + 0)");
    }
}

//! Implementations for tuples.

use crate::{algebraic::Algebraic, expr::TypeExpr};

impl<A: Algebraic, B: Algebraic> Algebraic for (A, B) {
    #[inline]
    fn type_expr() -> TypeExpr {
        TypeExpr::product(A::type_expr(), B::type_expr())
    }
}

// NOTE: Nests to the right, like a cons list.
impl<A: Algebraic, B: Algebraic, C: Algebraic> Algebraic for (A, B, C) {
    #[inline]
    fn type_expr() -> TypeExpr {
        TypeExpr::product(A::type_expr(), <(B, C)>::type_expr())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pairs_and_triples() {
        pretty_assertions::assert_eq!(<(bool, u8)>::type_expr().to_string(), "(2 * 256)");
        pretty_assertions::assert_eq!(
            <(bool, (), bool)>::type_expr().to_string(),
            "(2 * (1 * 2))",
        );
    }
}

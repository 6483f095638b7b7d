//! Implementations for results (`Result<_, _>`) and options (`Option<_>`).

use crate::{algebraic::Algebraic, expr::TypeExpr};

impl<T: Algebraic, E: Algebraic> Algebraic for Result<T, E> {
    #[inline]
    fn type_expr() -> TypeExpr {
        TypeExpr::sum(T::type_expr(), E::type_expr())
    }
}

impl<T: Algebraic> Algebraic for Option<T> {
    #[inline]
    fn type_expr() -> TypeExpr {
        TypeExpr::sum(TypeExpr::One, T::type_expr())
    }
}

#[cfg(test)]
mod test {
    use {super::*, crate::engine::Engine};

    #[test]
    fn option_adds_one() {
        let engine = Engine::default();
        pretty_assertions::assert_eq!(engine.cardinality(&<Option<bool>>::type_expr()), Ok(3));
        pretty_assertions::assert_eq!(
            engine.cardinality(&<Option<Option<()>>>::type_expr()),
            Ok(3),
        );
    }

    #[test]
    fn result_adds_both_sides() {
        let engine = Engine::default();
        pretty_assertions::assert_eq!(
            engine.cardinality(&<Result<bool, Option<bool>>>::type_expr()),
            Ok(5),
        );
    }
}

//! Implementations for boxed values (`Box<_>`).

use crate::{algebraic::Algebraic, expr::TypeExpr};

impl<T: Algebraic> Algebraic for Box<T> {
    #[inline]
    fn type_expr() -> TypeExpr {
        T::type_expr()
    }
}

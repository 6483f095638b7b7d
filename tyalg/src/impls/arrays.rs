//! Implementations for arrays.

use crate::{algebraic::Algebraic, expr::TypeExpr};

impl<T: Algebraic, const N: usize> Algebraic for [T; N] {
    // NOTE: An array is a function from its indices, so `[T; N]` is `T ^ N`.
    #[inline]
    fn type_expr() -> TypeExpr {
        let n = u64::try_from(N).unwrap_or(u64::MAX);
        TypeExpr::exp(T::type_expr(), TypeExpr::natural(n))
    }
}

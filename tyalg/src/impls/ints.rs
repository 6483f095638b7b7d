//! Implementations for `bool`, `()`, `Infallible`, and integers up to 32 bits wide.

use {
    crate::{algebraic::Algebraic, expr::TypeExpr},
    core::convert::Infallible,
};

/// Implement `Algebraic` for integral types narrow enough
/// that their cardinality fits in a `u64`.
macro_rules! impl_narrow {
    ($($t:ident),* $(,)?) => {
        $(
            impl Algebraic for $t {
                #[inline]
                fn type_expr() -> TypeExpr {
                    TypeExpr::natural(1_u64 << <$t>::BITS)
                }
            }
        )*
    };
}

impl_narrow!(i8, u8, i16, u16, i32, u32);

impl Algebraic for bool {
    #[inline]
    fn type_expr() -> TypeExpr {
        TypeExpr::natural(2)
    }
}

impl Algebraic for () {
    #[inline]
    fn type_expr() -> TypeExpr {
        TypeExpr::One
    }
}

impl Algebraic for Infallible {
    #[inline]
    fn type_expr() -> TypeExpr {
        TypeExpr::Zero
    }
}

//! Inhabitants of finite types, and a canonical numbering of them.
//!
//! Every type with `n` inhabitants is numbered `0..n`:
//! sums list every `Left` before every `Right`,
//! products are lexicographic (left component first),
//! and a function is read as a base-`|base|` numeral whose digits are its outputs,
//! one per exponent inhabitant, with the first exponent inhabitant most significant.

use {
    crate::{
        count::{Cardinality, count},
        error::Overflow,
        expr::TypeExpr,
    },
    core::fmt,
};

/// Widest function table an enumeration will ever materialize,
/// whatever the cardinality bound.
pub const MAX_TABLE_WIDTH: u64 = 1 << 24;

/// An untyped inhabitant; see [`Inhabitant`] for one tagged with its type.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Value {
    /// The sole inhabitant of `One`.
    Unit,
    /// The `i`th inhabitant of an atom.
    Atom(u64),
    /// An inhabitant of the left side of a sum.
    Left(Box<Self>),
    /// An inhabitant of the right side of a sum.
    Right(Box<Self>),
    /// An inhabitant of a product: left component, then right.
    Pair(Box<Self>, Box<Self>),
    /// A total function, as its table of outputs:
    /// one per exponent inhabitant, in enumeration order.
    Function(Vec<Self>),
}

/// A value tagged with the type it inhabits.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Inhabitant {
    ty: TypeExpr,
    value: Value,
}

/// Size-annotated mirror of a `TypeExpr`, built once per enumeration.
#[derive(Clone, Debug)]
enum Shape {
    /// Uninhabited: nothing below here is ever reached.
    Empty,
    Unit,
    Atom(u64),
    Sum {
        left: Box<Self>,
        right: Box<Self>,
        split: u64,
    },
    Product {
        left: Box<Self>,
        right: Box<Self>,
        right_len: u64,
    },
    Exp {
        base: Box<Self>,
        base_len: u64,
        exponent_len: u64,
    },
}

/// Every inhabitant of a type, in canonical order.
///
/// Cloning (or calling `Engine::enumerate` again) restarts from the beginning.
#[derive(Clone, Debug)]
pub struct Enumeration {
    ty: TypeExpr,
    shape: Shape,
    next: u64,
    len: u64,
}

/// An explicit bijection between two types of equal cardinality.
#[derive(Clone, Debug)]
pub struct Isomorphism {
    from: TypeExpr,
    to: TypeExpr,
    from_shape: Shape,
    to_shape: Shape,
    limit: u64,
}

impl Value {
    /// Wrap this value as an inhabitant of `ty`, if it is one.
    #[inline]
    #[must_use]
    pub fn of(self, ty: TypeExpr) -> Option<Inhabitant> {
        rank(&ty, &self, u64::MAX).map(|_| Inhabitant { ty, value: self })
    }
}

impl Inhabitant {
    /// The type this value inhabits.
    #[inline]
    #[must_use]
    pub const fn ty(&self) -> &TypeExpr {
        &self.ty
    }

    /// The value, without its type.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Case analysis on an inhabitant of a sum type.
    /// `None` if this inhabitant is not of a sum type.
    #[inline]
    pub fn either<C, L: FnOnce(Self) -> C, R: FnOnce(Self) -> C>(
        self,
        left: L,
        right: R,
    ) -> Option<C> {
        match (self.ty, self.value) {
            (TypeExpr::Sum(ref l, _), Value::Left(v)) => Some(left(Self {
                ty: (**l).clone(),
                value: *v,
            })),
            (TypeExpr::Sum(_, ref r), Value::Right(v)) => Some(right(Self {
                ty: (**r).clone(),
                value: *v,
            })),
            _ => None,
        }
    }

    /// Both components of an inhabitant of a product type.
    #[inline]
    #[must_use]
    pub fn split(self) -> Option<(Self, Self)> {
        match (self.ty, self.value) {
            (TypeExpr::Product(ref l, ref r), Value::Pair(a, b)) => Some((
                Self {
                    ty: (**l).clone(),
                    value: *a,
                },
                Self {
                    ty: (**r).clone(),
                    value: *b,
                },
            )),
            _ => None,
        }
    }

    /// Evaluate a function inhabitant at `arg`, an inhabitant of its exponent.
    /// `None` if this is not a function or `arg` is not in its domain.
    #[inline]
    #[must_use]
    pub fn apply(&self, arg: &Value) -> Option<Self> {
        let (&TypeExpr::Exp(ref base, ref exponent), &Value::Function(ref table)) =
            (&self.ty, &self.value)
        else {
            return None;
        };
        let index = usize::try_from(rank(exponent, arg, u64::MAX)?).ok()?;
        Some(Self {
            ty: (**base).clone(),
            value: table.get(index)?.clone(),
        })
    }
}

impl Shape {
    fn build(t: &TypeExpr, limit: u64) -> Result<(Self, u64), Overflow> {
        let Cardinality::Exactly(len) = count(t, limit) else {
            return Err(Overflow::new(t, limit));
        };
        if len == 0 {
            return Ok((Self::Empty, 0));
        }
        let shape = match *t {
            TypeExpr::Zero => Self::Empty,
            TypeExpr::One => Self::Unit,
            TypeExpr::Atom(n) => Self::Atom(n.get()),
            TypeExpr::Sum(ref l, ref r) => {
                let (left, split) = Self::build(l, limit)?;
                let (right, _) = Self::build(r, limit)?;
                Self::Sum {
                    left: Box::new(left),
                    right: Box::new(right),
                    split,
                }
            }
            TypeExpr::Product(ref l, ref r) => {
                let (left, _) = Self::build(l, limit)?;
                let (right, right_len) = Self::build(r, limit)?;
                Self::Product {
                    left: Box::new(left),
                    right: Box::new(right),
                    right_len,
                }
            }
            TypeExpr::Exp(ref b, ref e) => {
                // The function table has one entry per exponent inhabitant,
                // so the exponent must itself fit, even when `|base| = 1`.
                let (_, exponent_len) = Self::build(e, limit.min(MAX_TABLE_WIDTH))?;
                let (base, base_len) = if exponent_len == 0 {
                    (Self::Empty, 0)
                } else {
                    Self::build(b, limit)?
                };
                Self::Exp {
                    base: Box::new(base),
                    base_len,
                    exponent_len,
                }
            }
        };
        Ok((shape, len))
    }

    fn unrank(&self, index: u64) -> Option<Value> {
        match *self {
            Self::Empty => None,
            Self::Unit => (index == 0).then_some(Value::Unit),
            Self::Atom(n) => (index < n).then_some(Value::Atom(index)),
            Self::Sum {
                ref left,
                ref right,
                split,
            } => Some(if let Some(index) = index.checked_sub(split) {
                Value::Right(Box::new(right.unrank(index)?))
            } else {
                Value::Left(Box::new(left.unrank(index)?))
            }),
            Self::Product {
                ref left,
                ref right,
                right_len,
            } => Some(Value::Pair(
                Box::new(left.unrank(index.checked_div(right_len)?)?),
                Box::new(right.unrank(index.checked_rem(right_len)?)?),
            )),
            Self::Exp {
                ref base,
                base_len,
                exponent_len,
            } => {
                let width = usize::try_from(exponent_len.min(MAX_TABLE_WIDTH)).ok()?;
                let mut table = Vec::with_capacity(width);
                let mut rest = index;
                for _ in 0..exponent_len {
                    let () = table.push(base.unrank(rest.checked_rem(base_len)?)?);
                    rest = rest.checked_div(base_len)?;
                }
                // Digits came out least significant first.
                let () = table.reverse();
                Some(Value::Function(table))
            }
        }
    }
}

/// Position of `value` in the canonical numbering of `t`,
/// or `None` if `value` does not inhabit `t`
/// (or some size needed along the way is over `limit`).
pub(crate) fn rank(t: &TypeExpr, value: &Value, limit: u64) -> Option<u64> {
    let len = |t: &TypeExpr| count(t, limit).exactly();
    match (t, value) {
        (&TypeExpr::One, &Value::Unit) => Some(0),
        (&TypeExpr::Atom(n), &Value::Atom(i)) => (i < n.get()).then_some(i),
        (&TypeExpr::Sum(ref l, _), &Value::Left(ref v)) => rank(l, v, limit),
        (&TypeExpr::Sum(ref l, ref r), &Value::Right(ref v)) => {
            len(l)?.checked_add(rank(r, v, limit)?)
        }
        (&TypeExpr::Product(ref l, ref r), &Value::Pair(ref a, ref b)) => rank(l, a, limit)?
            .checked_mul(len(r)?)?
            .checked_add(rank(r, b, limit)?),
        (&TypeExpr::Exp(ref base, ref exponent), &Value::Function(ref table)) => {
            if u64::try_from(table.len()).ok()? != len(exponent)? {
                return None;
            }
            // The empty function inhabits `b ^ 0` however large `b` is.
            if table.is_empty() {
                return Some(0);
            }
            let base_len = len(base)?;
            table.iter().try_fold(0_u64, |acc, v| {
                acc.checked_mul(base_len)?.checked_add(rank(base, v, limit)?)
            })
        }
        _ => None,
    }
}

impl Enumeration {
    #[inline]
    pub(crate) fn new(ty: &TypeExpr, limit: u64) -> Result<Self, Overflow> {
        let (shape, len) = Shape::build(ty, limit)?;
        tracing::trace!(%ty, len, "enumerating");
        Ok(Self {
            ty: ty.clone(),
            shape,
            next: 0,
            len,
        })
    }

    /// The type being enumerated.
    #[inline]
    #[must_use]
    pub const fn ty(&self) -> &TypeExpr {
        &self.ty
    }

    /// The `index`th inhabitant, regardless of iteration progress.
    #[inline]
    #[must_use]
    pub fn nth_inhabitant(&self, index: u64) -> Option<Inhabitant> {
        if index >= self.len {
            return None;
        }
        Some(Inhabitant {
            ty: self.ty.clone(),
            value: self.shape.unrank(index)?,
        })
    }
}

impl Iterator for Enumeration {
    type Item = Inhabitant;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let inhabitant = self.nth_inhabitant(self.next)?;
        self.next = self.next.checked_add(1)?;
        Some(inhabitant)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len.saturating_sub(self.next);
        usize::try_from(remaining).map_or((usize::MAX, None), |n| (n, Some(n)))
    }
}

impl ExactSizeIterator for Enumeration {}

impl Isomorphism {
    #[inline]
    pub(crate) fn new(from: &TypeExpr, to: &TypeExpr, limit: u64) -> Result<Option<Self>, Overflow> {
        let (from_shape, from_len) = Shape::build(from, limit)?;
        let (to_shape, to_len) = Shape::build(to, limit)?;
        Ok((from_len == to_len).then(|| Self {
            from: from.clone(),
            to: to.clone(),
            from_shape,
            to_shape,
            limit,
        }))
    }

    /// The type mapped from.
    #[inline]
    #[must_use]
    pub const fn source(&self) -> &TypeExpr {
        &self.from
    }

    /// The type mapped to.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &TypeExpr {
        &self.to
    }

    /// Carry an inhabitant of `from` across to `to`.
    #[inline]
    #[must_use]
    pub fn forward(&self, value: &Value) -> Option<Inhabitant> {
        let index = rank(&self.from, value, self.limit)?;
        Some(Inhabitant {
            ty: self.to.clone(),
            value: self.to_shape.unrank(index)?,
        })
    }

    /// Carry an inhabitant of `to` back to `from`.
    #[inline]
    #[must_use]
    pub fn backward(&self, value: &Value) -> Option<Inhabitant> {
        let index = rank(&self.to, value, self.limit)?;
        Some(Inhabitant {
            ty: self.from.clone(),
            value: self.from_shape.unrank(index)?,
        })
    }

    /// The same bijection, the other way around.
    #[inline]
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            from_shape: self.to_shape,
            to_shape: self.from_shape,
            limit: self.limit,
        }
    }
}

impl fmt::Display for Value {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Unit => write!(f, "()"),
            Self::Atom(i) => write!(f, "#{i}"),
            Self::Left(ref v) => write!(f, "L({v})"),
            Self::Right(ref v) => write!(f, "R({v})"),
            Self::Pair(ref a, ref b) => write!(f, "({a}, {b})"),
            Self::Function(ref table) => {
                write!(f, "[")?;
                for (i, v) in table.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl fmt::Display for Inhabitant {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.value, self.ty)
    }
}

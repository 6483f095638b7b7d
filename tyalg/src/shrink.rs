//! Reducing a witness to a minimal one.

use {
    crate::expr::TypeExpr,
    alloc::sync::Arc,
    core::hash::Hash,
    std::collections::HashSet,
};

/// Terms with a notion of "strictly smaller".
pub trait Shrink: Clone + Eq + Hash {
    /// A strictly smaller term that still satisfies `property`, if any.
    #[must_use]
    fn step<P: for<'s> FnMut(&'s Self) -> bool>(&self, property: &mut P) -> Option<Self>;
}

/// Shrink `t` step by step until no smaller term satisfies `property`.
#[inline]
#[must_use]
pub fn minimal<T: Shrink, P: for<'t> Fn(&'t T) -> bool>(t: &T, property: P) -> T {
    let mut reuse = HashSet::new();
    let mut property = move |t: &T| {
        if reuse.contains(t) {
            false
        } else {
            reuse.insert(t.clone()) && property(t)
        }
    };
    let Some(mut acc) = t.step(&mut property) else {
        return t.clone();
    };
    while let Some(reduced) = acc.step(&mut property) {
        acc = reduced;
    }
    acc
}

impl TypeExpr {
    /// Strictly simpler replacements for this whole node, simplest first.
    fn collapses(&self) -> Vec<Self> {
        match *self {
            Self::Zero => vec![],
            Self::One => vec![Self::Zero],
            Self::Atom(n) => {
                let n = n.get();
                let mut acc = vec![Self::Zero, Self::One];
                let half = n / 2;
                if half >= 2 {
                    let () = acc.push(Self::natural(half));
                }
                if let Some(pred) = n.checked_sub(1)
                    && pred > half
                    && pred >= 2
                {
                    let () = acc.push(Self::natural(pred));
                }
                acc
            }
            Self::Sum(ref l, ref r) | Self::Product(ref l, ref r) | Self::Exp(ref l, ref r) => {
                vec![Self::Zero, Self::One, (**l).clone(), (**r).clone()]
            }
        }
    }
}

/// Type-erased predicate, so that `step` is instantiated once
/// however deeply the tree nests.
type Property<'p> = &'p mut dyn FnMut(&TypeExpr) -> bool;

/// Shrink one side of a binary node at a time, keeping the other fixed.
fn step_children<F: Fn(TypeExpr, TypeExpr) -> TypeExpr>(
    l: &Arc<TypeExpr>,
    r: &Arc<TypeExpr>,
    property: Property<'_>,
    rebuild: F,
) -> Option<TypeExpr> {
    let shrunk_left = {
        let mut with_left: Property<'_> =
            &mut |t: &TypeExpr| property(&rebuild(t.clone(), (**r).clone()));
        l.step(&mut with_left)
    };
    if let Some(t) = shrunk_left {
        return Some(rebuild(t, (**r).clone()));
    }
    let mut with_right: Property<'_> =
        &mut |t: &TypeExpr| property(&rebuild((**l).clone(), t.clone()));
    let t = r.step(&mut with_right)?;
    Some(rebuild((**l).clone(), t))
}

impl Shrink for TypeExpr {
    #[inline]
    fn step<P: for<'s> FnMut(&'s Self) -> bool>(&self, property: &mut P) -> Option<Self> {
        if let Some(collapsed) = self.collapses().into_iter().find(|t| property(t)) {
            return Some(collapsed);
        }
        match *self {
            Self::Zero | Self::One | Self::Atom(_) => None,
            Self::Sum(ref l, ref r) => step_children(l, r, property, Self::sum::<Self, Self>),
            Self::Product(ref l, ref r) => step_children(l, r, property, Self::product::<Self, Self>),
            Self::Exp(ref l, ref r) => step_children(l, r, property, Self::exp::<Self, Self>),
        }
    }
}

impl<T: Shrink> Shrink for Vec<T> {
    #[inline]
    fn step<P: for<'s> FnMut(&'s Self) -> bool>(&self, property: &mut P) -> Option<Self> {
        let mut acc = self.clone();
        let mut any = false;
        for i in 0..acc.len() {
            let Some(current) = acc.get(i).cloned() else {
                continue;
            };
            let reduced = current.step(&mut |t: &T| {
                let mut acc = acc.clone();
                if let Some(slot) = acc.get_mut(i) {
                    *slot = t.clone();
                }
                property(&acc)
            });
            if let Some(reduced) = reduced
                && let Some(slot) = acc.get_mut(i)
            {
                *slot = reduced;
                any = true;
            }
        }
        any.then_some(acc)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn n(n: u64) -> TypeExpr {
        TypeExpr::natural(n)
    }

    #[test]
    fn atoms_shrink_to_the_smallest_passing_size() {
        let shrunk = minimal(&n(40), |t| matches!(*t, TypeExpr::Atom(k) if k.get() >= 7));
        pretty_assertions::assert_eq!(shrunk, n(7));
    }

    #[test]
    fn nodes_collapse_to_a_child() {
        let big = (n(5) * n(3)) + n(2).pow(n(4));
        let shrunk = minimal(&big, |t| matches!(*t, TypeExpr::Exp(..)));
        pretty_assertions::assert_eq!(shrunk, n(0).pow(n(0)));
    }

    #[test]
    fn shrinks_inside_a_node() {
        let big = n(9) + n(9);
        let shrunk = minimal(&big, |t| {
            matches!(*t, TypeExpr::Sum(ref l, _) if matches!(**l, TypeExpr::Atom(_)))
        });
        pretty_assertions::assert_eq!(shrunk, n(2) + n(0));
    }

    #[test]
    fn shrinks_deep_inside_nested_nodes() {
        let big = ((n(9) + n(8)) * n(7)).pow(n(6));
        let shrunk = minimal(&big, |t| {
            let TypeExpr::Exp(ref b, _) = *t else {
                return false;
            };
            let TypeExpr::Product(ref l, _) = **b else {
                return false;
            };
            matches!(**l, TypeExpr::Sum(ref ll, _) if matches!(**ll, TypeExpr::Atom(_)))
        });
        pretty_assertions::assert_eq!(shrunk, ((n(2) + n(0)) * n(0)).pow(n(0)));
    }

    #[test]
    fn vectors_shrink_elementwise() {
        let shrunk = minimal(&vec![n(9), n(9) * n(9)], |v: &Vec<TypeExpr>| v.len() == 2);
        pretty_assertions::assert_eq!(shrunk, vec![n(0), n(0)]);
    }

    #[test]
    fn nothing_passes_means_no_change() {
        let t = n(3) + n(4);
        pretty_assertions::assert_eq!(minimal(&t, |_| false), t);
    }
}

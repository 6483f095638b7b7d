//! Deterministic pseudorandom generation of type expressions.

use {
    crate::expr::TypeExpr,
    alloc::collections::BinaryHeap,
    core::{array, num::NonZero},
    rand_core::{RngCore as _, SeedableRng as _},
    rand_xoshiro::Xoshiro256PlusPlus,
};

/// Types that can be generated pseudorandomly from a `Seed`.
pub trait Conjure: Sized {
    /// Deterministically generate an arbitrary term of type `Self`.
    #[must_use]
    fn conjure(seed: Seed) -> Self;

    /// Deterministically generate a term with no recursive structure
    /// (for a type expression: a constant or an atom).
    #[must_use]
    fn leaf(seed: Seed) -> Self;
}

/// Deterministic pseudorandom number generator.
/// The `size` field bounds how many compound nodes
/// a generated term may contain.
#[derive(/* NOT Clone, NOT Copy, */ Debug)]
pub struct Seed {
    rng: Xoshiro256PlusPlus,
    size: usize,
}

/// Largest size budget `seeds()` hands out before starting over from zero.
pub const MAX_SIZE: usize = 6;

/// An infinite iterator of seeds whose sizes cycle through `0..=MAX_SIZE`.
#[derive(Debug)]
pub struct Seeds(Seed);

impl Seed {
    /// The fixed starting point, with a budget of `size` compound nodes.
    #[inline]
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(1337_1337_1337_1337_1337),
            size,
        }
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// A fresh, independent generator with the given size budget.
    #[inline]
    #[must_use]
    pub fn child(&mut self, size: usize) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(self.prng()),
            size,
        }
    }

    /// Use a stars-and-bars-style subroutine to
    /// split a total size among a known number of children
    /// and generate pseudorandom seeds for each.
    #[inline]
    #[must_use]
    pub fn split<const N: usize>(mut self) -> [Self; N] {
        let Some(nz) = NonZero::new(self.size) else {
            return array::from_fn(|_| self.child(0));
        };
        // Make a heap containing the endpoints (0 and `size`) as well as
        // `N - 1` random indices in `0..size`.
        // That is `N + 1` indices total, so consecutive pairs in sorted order
        // give `N` ranges covering all of `0..=size`.
        let mut heap: BinaryHeap<usize> = [0, self.size]
            .into_iter()
            .chain((1..N).map(|_| self.below(nz)))
            .collect();
        array::from_fn(|_| {
            let lhs = heap.pop().unwrap_or(0);
            let rhs = heap.peek().copied().unwrap_or(0);
            let size = lhs.saturating_sub(rhs);
            self.child(size)
        })
    }

    /// Generate a pseudorandom `u64`, ignoring this seed's `size` field.
    #[inline]
    #[must_use]
    pub fn prng(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// A pseudorandom index in `0..n`.
    #[inline]
    #[must_use]
    pub fn below(&mut self, n: NonZero<usize>) -> usize {
        let n = NonZero::<u64>::try_from(n).unwrap_or(NonZero::<u64>::MAX);
        usize::try_from(self.prng() % n).unwrap_or(0)
    }

    /// With a chance inversely proportional to `size`, stop recursing right now.
    /// Otherwise spend one unit of size on the node about to be built.
    #[inline]
    #[must_use]
    pub fn should_recurse(&mut self) -> bool {
        let Some(nz) = self.size.checked_add(1).and_then(NonZero::new) else {
            return false;
        };
        if self.below(nz) == 0 {
            return false;
        }
        self.size = self.size.saturating_sub(1);
        true
    }
}

impl Iterator for Seeds {
    type Item = Seed;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let size = self.0.size;
        let next = self.0.child(size);
        self.0.size = size.checked_add(1).filter(|&s| s <= MAX_SIZE).unwrap_or(0);
        Some(next)
    }
}

/// An infinite iterator of seeds, small to large and back again.
#[inline]
pub fn seeds() -> impl Iterator<Item = Seed> {
    Seeds(Seed::new(0))
}

impl Conjure for TypeExpr {
    #[inline]
    fn conjure(mut seed: Seed) -> Self {
        if !seed.should_recurse() {
            return Self::leaf(seed);
        }
        let variant = seed.prng() % 3;
        let [lhs, rhs] = seed.split();
        let (lhs, rhs) = (Self::conjure(lhs), Self::conjure(rhs));
        match variant {
            0 => Self::sum(lhs, rhs),
            1 => Self::product(lhs, rhs),
            _ => Self::exp(lhs, rhs),
        }
    }

    #[inline]
    fn leaf(mut seed: Seed) -> Self {
        // Mostly 2 and 3: they combine into the most varied small counts.
        Self::natural(match seed.prng() % 8 {
            0 => 0,
            1 => 1,
            2..=4 => 2,
            5 | 6 => 3,
            _ => 4,
        })
    }
}

/// `arity` independent terms, sharing `seed`'s size budget.
#[inline]
#[must_use]
pub fn several<T: Conjure>(mut seed: Seed, arity: usize) -> Vec<T> {
    let share = seed.size.checked_div(arity).unwrap_or(0);
    (0..arity).map(|_| T::conjure(seed.child(share))).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deterministic() {
        let a: Vec<TypeExpr> = seeds().take(50).map(TypeExpr::conjure).collect();
        let b: Vec<TypeExpr> = seeds().take(50).map(TypeExpr::conjure).collect();
        pretty_assertions::assert_eq!(a, b);
    }

    #[test]
    fn size_bounds_compound_nodes() {
        for seed in seeds().take(200) {
            let size = seed.size();
            let t = TypeExpr::conjure(seed);
            // `n` compound nodes make a tree of `2n + 1` nodes.
            assert!(t.size() <= size.saturating_mul(2).saturating_add(1), "{t} from size {size}");
        }
    }

    #[test]
    fn split_preserves_total_size() {
        for size in 0..100 {
            let parts = Seed::new(size).split::<3>();
            pretty_assertions::assert_eq!(parts.iter().map(Seed::size).sum::<usize>(), size);
        }
    }

    #[test]
    fn sizes_cycle() {
        let sizes: Vec<usize> = seeds().take(MAX_SIZE * 2 + 2).map(|s| s.size()).collect();
        let once: Vec<usize> = (0..=MAX_SIZE).collect();
        pretty_assertions::assert_eq!(sizes.get(..=MAX_SIZE), Some(once.as_slice()));
        pretty_assertions::assert_eq!(sizes.get(MAX_SIZE + 1..), Some(once.as_slice()));
    }

    #[test]
    fn eventually_compound() {
        assert!(
            seeds()
                .take(100)
                .map(TypeExpr::conjure)
                .any(|t| matches!(t, TypeExpr::Exp(..)))
        );
    }

    #[test]
    fn several_has_the_right_arity() {
        pretty_assertions::assert_eq!(several::<TypeExpr>(Seed::new(10), 3).len(), 3);
    }
}

//! The algebra of data types: cardinalities, inhabitants, and isomorphism laws of finite types.

extern crate alloc;

pub mod algebraic;
pub mod conjure;
pub mod count;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod expr;
pub mod laws;
pub mod parse;
pub mod shrink;

mod impls;

pub use {
    algebraic::{Algebraic, Void, absurd},
    engine::Engine,
    enumerate::{Enumeration, Inhabitant, Isomorphism, Value},
    error::{Error, Overflow},
    expr::TypeExpr,
    laws::{LawKind, LawResult},
    parse::ParseError,
};

#[cfg(feature = "derive")]
pub use ::tyalg_macros::Algebraic;

/// How many pseudorandom terms to try before giving up.
const N_TRIALS: usize = 1_000;

/// No witness turned up within `N_TRIALS` attempts.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NotFound;

/// Attempt to produce a small witness of a computable predicate.
/// # Errors
/// If one could not be found in time.
/// Note that this does *not* mean that one does not exist.
#[inline]
pub fn witness<T: conjure::Conjure + shrink::Shrink, P: Fn(&T) -> bool>(
    predicate: P,
) -> Result<T, NotFound> {
    for seed in conjure::seeds().take(N_TRIALS) {
        let witness = T::conjure(seed);
        if predicate(&witness) {
            return Ok(shrink::minimal(&witness, predicate));
        }
    }
    Err(NotFound)
}

/// Search pseudorandom operands for a violation of `law`,
/// returning the smallest one found.
/// Operands whose sides overflow the engine's bound are skipped.
/// # Errors
/// If no violation turned up (which, for a true law, is the expected outcome).
#[inline]
pub fn counterexample(engine: &Engine, law: LawKind) -> Result<LawResult, NotFound> {
    let violated = |operands: &Vec<TypeExpr>| {
        engine
            .check_law(law, operands)
            .is_ok_and(|result| !result.holds())
    };
    for seed in conjure::seeds().take(N_TRIALS) {
        let operands = conjure::several(seed, law.arity());
        if violated(&operands) {
            let minimal = shrink::minimal(&operands, violated);
            return engine.check_law(law, &minimal).map_err(|_| NotFound);
        }
    }
    tracing::debug!(%law, trials = N_TRIALS, "no counterexample found");
    Err(NotFound)
}

#[cfg(test)]
pub(crate) mod test_utils {
    /// Call this at the start of tests where you want to see logging output
    /// (filtered by `RUST_LOG`, defaulting to `debug`).
    pub(crate) fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}

#[cfg(test)]
#[expect(
    clippy::print_stdout,
    clippy::use_debug,
    reason = "failing tests ought to panic and be debugged"
)]
mod test {
    use {super::*, test_utils::init_test_logging};

    #[test]
    fn witness_cardinality_six() {
        let engine = Engine::default();
        let witness = witness(|t: &TypeExpr| {
            print!("{t}");
            let success = engine.cardinality(t) == Ok(6);
            println!(" {}", if success { 'Y' } else { 'N' });
            success
        });
        let witness = witness.unwrap();
        pretty_assertions::assert_eq!(engine.cardinality(&witness), Ok(6));
    }

    #[test]
    fn most_trials_stay_within_the_default_bound() {
        let engine = Engine::default();
        let terms = conjure::seeds()
            .take(N_TRIALS)
            .map(<TypeExpr as conjure::Conjure>::conjure)
            .filter(|t| engine.cardinality(t).is_ok())
            .count();
        assert!(terms >= N_TRIALS / 2, "only {terms} of {N_TRIALS} terms within bound");
        let evaluated = conjure::seeds()
            .take(N_TRIALS)
            .map(|seed| conjure::several::<TypeExpr>(seed, 2))
            .filter(|operands| engine.check_law(LawKind::SumCommutative, operands).is_ok())
            .count();
        assert!(
            evaluated >= N_TRIALS / 2,
            "only {evaluated} of {N_TRIALS} trials evaluated",
        );
    }

    #[test]
    fn witness_exponentials_do_not_commute() {
        let engine = Engine::default();
        let witness = witness(|t: &TypeExpr| {
            let TypeExpr::Exp(ref b, ref e) = *t else {
                return false;
            };
            let flipped = TypeExpr::exp(e.clone(), b.clone());
            matches!(
                (engine.cardinality(t), engine.cardinality(&flipped)),
                (Ok(x), Ok(y)) if x != y
            )
        });
        let (zero, one) = (TypeExpr::Zero, TypeExpr::One);
        let witness = witness.unwrap();
        assert!(
            witness == zero.clone().pow(one.clone()) || witness == one.pow(zero),
            "{witness:?}",
        );
    }

    #[test]
    fn no_counterexamples_to_true_laws() {
        init_test_logging();
        let engine = Engine::default();
        for law in LawKind::ALL {
            pretty_assertions::assert_eq!(counterexample(&engine, law), Err(NotFound), "{law}");
        }
    }
}

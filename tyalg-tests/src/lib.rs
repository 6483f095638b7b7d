//! Derived `Algebraic` types, and what the engine makes of them.

#![allow(
    clippy::missing_panics_doc,
    clippy::tests_outside_test_module,
    reason = "testing-only module"
)]

use tyalg::Algebraic;

#[cfg(test)]
use tyalg::{Engine, Inhabitant, LawKind, TypeExpr, Value, Void};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Algebraic)]
pub enum Zero {}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Algebraic)]
pub struct Unit;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Algebraic)]
pub enum Three {
    One,
    Two,
    Three,
}

/// A sum type with a name.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Algebraic)]
pub enum Add<A, B> {
    Left(A),
    Right(B),
}

/// A product type with a name.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Algebraic)]
pub struct Pair<A, B> {
    pub a: A,
    pub b: B,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Algebraic)]
pub struct SignPermissions {
    pub is_signed_in: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

/// The same information as far fewer states:
/// permissions only matter once signed in, and deleting implies editing.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Algebraic)]
pub enum SignPermissionsEnum {
    IsSignedOut,
    HasPermissions { can_edit: bool },
}

#[cfg(test)]
fn cardinality<T: Algebraic>() -> u64 {
    Engine::default().cardinality(&T::type_expr()).unwrap()
}

#[cfg(test)]
fn n(n: u64) -> TypeExpr {
    TypeExpr::natural(n)
}

#[test]
fn empty_enum_is_zero() {
    pretty_assertions::assert_eq!(Zero::type_expr(), TypeExpr::Zero);
    pretty_assertions::assert_eq!(cardinality::<Zero>(), 0);
}

#[test]
fn unit_struct_is_one() {
    pretty_assertions::assert_eq!(Unit::type_expr(), TypeExpr::One);
    pretty_assertions::assert_eq!(cardinality::<Unit>(), 1);
}

#[test]
fn fieldless_variants_count_one_each() {
    pretty_assertions::assert_eq!(Three::type_expr().to_string(), "(1 + (1 + 1))");
    pretty_assertions::assert_eq!(cardinality::<Three>(), 3);
}

#[test]
fn generic_sum() {
    pretty_assertions::assert_eq!(
        <Add<bool, Three>>::type_expr().to_string(),
        "(2 + (1 + (1 + 1)))",
    );
    pretty_assertions::assert_eq!(cardinality::<Add<bool, Three>>(), 5);
    pretty_assertions::assert_eq!(cardinality::<Add<bool, Void>>(), 2);
    pretty_assertions::assert_eq!(cardinality::<Add<Void, Zero>>(), 0);
}

#[test]
fn generic_sum_lists_left_before_right() {
    let values: Vec<Value> = Engine::default()
        .enumerate(&<Add<bool, Three>>::type_expr())
        .unwrap()
        .map(Inhabitant::into_value)
        .collect();
    let left = |i| Value::Left(Box::new(Value::Atom(i)));
    let right = |v| Value::Right(Box::new(v));
    let unit = || Box::new(Value::Unit);
    pretty_assertions::assert_eq!(
        values,
        vec![
            left(0),
            left(1),
            right(Value::Left(unit())),
            right(Value::Right(Box::new(Value::Left(unit())))),
            right(Value::Right(Box::new(Value::Right(unit())))),
        ],
    );
}

#[test]
fn generic_product() {
    pretty_assertions::assert_eq!(
        <Pair<bool, Three>>::type_expr().to_string(),
        "(2 * (1 + (1 + 1)))",
    );
    pretty_assertions::assert_eq!(cardinality::<Pair<bool, Three>>(), 6);
    pretty_assertions::assert_eq!(cardinality::<Pair<bool, ()>>(), 2);
    pretty_assertions::assert_eq!(cardinality::<Pair<bool, Void>>(), 0);
}

#[test]
fn named_fields_multiply() {
    pretty_assertions::assert_eq!(cardinality::<SignPermissions>(), 8);
    pretty_assertions::assert_eq!(cardinality::<SignPermissionsEnum>(), 3);
    let engine = Engine::default();
    pretty_assertions::assert_eq!(
        engine.is_isomorphic(
            &SignPermissions::type_expr(),
            &SignPermissionsEnum::type_expr(),
        ),
        Ok(false),
    );
}

#[test]
fn derived_types_agree_with_builtins() {
    let engine = Engine::default();
    pretty_assertions::assert_eq!(
        engine.is_isomorphic(&<Add<(), bool>>::type_expr(), &<Option<bool>>::type_expr()),
        Ok(true),
    );
    pretty_assertions::assert_eq!(
        engine.is_isomorphic(&<Pair<bool, bool>>::type_expr(), &<(bool, bool)>::type_expr()),
        Ok(true),
    );
    pretty_assertions::assert_eq!(
        engine.is_isomorphic(&<Pair<Three, Three>>::type_expr(), &<[Three; 2]>::type_expr()),
        Ok(true),
    );
}

#[test]
fn nested_generics() {
    pretty_assertions::assert_eq!(cardinality::<Add<Pair<bool, bool>, Option<Three>>>(), 8);
    pretty_assertions::assert_eq!(cardinality::<Pair<Add<bool, bool>, bool>>(), 8);
    pretty_assertions::assert_eq!(
        Engine::default().is_isomorphic(&((n(2) + n(2)) * n(2)), &n(8)),
        Ok(true),
    );
}

#[test]
fn isomorphism_between_derived_types() {
    let engine = Engine::default();
    let sum_of_pairs = <Add<Pair<bool, Three>, Pair<bool, bool>>>::type_expr();
    let pair_of_sum = <Pair<bool, Add<Three, bool>>>::type_expr();
    let iso = engine.isomorphism(&sum_of_pairs, &pair_of_sum).unwrap().unwrap();
    for inhabitant in engine.enumerate(&sum_of_pairs).unwrap() {
        let there = iso.forward(inhabitant.value()).unwrap();
        pretty_assertions::assert_eq!(there.ty(), &pair_of_sum);
        let back = iso.backward(there.value()).unwrap();
        pretty_assertions::assert_eq!(back, inhabitant);
    }
}

#[test]
fn laws_over_derived_types() {
    let engine = Engine::default();
    let operands = [
        <Add<bool, Unit>>::type_expr(),
        SignPermissionsEnum::type_expr(),
        <Pair<Three, Zero>>::type_expr(),
    ];
    for law in LawKind::ALL {
        let result = engine.check_law(law, &operands[..law.arity()]).unwrap();
        assert!(result.holds(), "{result}");
    }
}

#[test]
#[expect(clippy::print_stdout, reason = "failing tests ought to panic and be debugged")]
fn witness_finds_a_three() {
    let engine = Engine::default();
    let three = Three::type_expr();
    let witness = tyalg::witness(|t: &TypeExpr| {
        print!("{t}");
        let success = t.children().is_some() && engine.is_isomorphic(t, &three) == Ok(true);
        println!(" {}", if success { 'Y' } else { 'N' });
        success
    });
    let witness = witness.unwrap();
    pretty_assertions::assert_eq!(engine.cardinality(&witness), Ok(3));
}

//! Integration tests for the `tyalg` binary.

use {assert_cmd::Command, predicates::prelude::*};

fn tyalg() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tyalg"))
}

#[test]
fn count_simple_sum() {
    tyalg().args(["count", "2 + 3"]).assert().success().stdout("5\n");
}

#[test]
fn count_distributes() {
    tyalg()
        .args(["count", "(2 + 2) * 2"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn count_exponentials() {
    tyalg().args(["count", "2 ^ 3"]).assert().success().stdout("8\n");
    tyalg().args(["count", "3 ^ 2"]).assert().success().stdout("9\n");
    tyalg().args(["count", "0 ^ 0"]).assert().success().stdout("1\n");
}

#[test]
fn count_absorbs_huge_factors() {
    tyalg()
        .args(["count", "(99 ^ 99) * 0"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn count_over_the_bound_fails() {
    tyalg()
        .args(["--max-cardinality", "10", "count", "2 ^ 4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has more than 10 inhabitants"));
}

#[test]
fn count_rejects_bad_syntax() {
    tyalg()
        .args(["count", "2 +"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected end of input"));
}

#[test]
fn enumerate_lists_left_before_right() {
    tyalg()
        .args(["enumerate", "2 + 3"])
        .assert()
        .success()
        .stdout("L(#0)\nL(#1)\nR(#0)\nR(#1)\nR(#2)\n");
}

#[test]
fn enumerate_functions() {
    tyalg()
        .args(["enumerate", "2 ^ 2"])
        .assert()
        .success()
        .stdout("[#0, #0]\n[#0, #1]\n[#1, #0]\n[#1, #1]\n");
}

#[test]
fn enumerate_constants() {
    tyalg().args(["enumerate", "0"]).assert().success().stdout("");
    tyalg().args(["enumerate", "1"]).assert().success().stdout("()\n");
}

#[test]
fn enumerate_take() {
    tyalg()
        .args(["enumerate", "2 * 3", "--take", "2"])
        .assert()
        .success()
        .stdout("(#0, #0)\n(#0, #1)\n");
}

#[test]
fn iso_same_cardinality() {
    tyalg()
        .args(["iso", "(2 + 2) * 2", "8"])
        .assert()
        .success()
        .stdout("((2 + 2) * 2) has 8, 8 has 8: isomorphic\n");
}

#[test]
fn iso_different_cardinality() {
    tyalg()
        .args(["iso", "2", "3"])
        .assert()
        .success()
        .stdout("2 has 2, 3 has 3: not isomorphic\n");
}

#[test]
fn iso_witness() {
    tyalg()
        .args(["iso", "2 * 2", "4", "--witness"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(#0, #0) -> #0"))
        .stdout(predicate::str::contains("(#1, #1) -> #3"));
}

#[test]
fn check_holds() {
    tyalg()
        .args(["check", "distributive", "2", "3", "4"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("distributive:").and(predicate::str::contains("holds")));
}

#[test]
fn check_wrong_arity() {
    tyalg()
        .args(["check", "absorption", "2", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("takes 1 operand(s) but 2 were given"));
}

#[test]
fn check_unknown_law() {
    tyalg()
        .args(["check", "idempotence", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown law"));
}

#[test]
fn laws_walkthrough() {
    tyalg()
        .arg("laws")
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 + 3) = 5"))
        .stdout(predicate::str::contains("((2 + 2) * 2) = 8"))
        .stdout(predicate::str::contains("(3 ^ 2) = 9"))
        .stdout(predicate::str::contains("currying"))
        .stdout(predicate::str::contains("FAILS").not());
}

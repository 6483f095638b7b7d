//! `tyalg laws`: the classic walkthrough, from `2 + 3` to `3 ^ 2`,
//! followed by every law checked on small operands.

use {
    crate::error::CliResult,
    std::io::{self, Write as _},
    tyalg::{Engine, LawKind, TypeExpr},
};

fn n(n: u64) -> TypeExpr {
    TypeExpr::natural(n)
}

/// `bool + Three`, `bool * Three`, and so on, in the order they are usually introduced.
fn samples() -> Vec<TypeExpr> {
    vec![
        n(2) + n(3),
        n(2) + n(0),
        n(2) * n(3),
        n(2) * n(1),
        n(2) * n(0),
        (n(2) * n(2)) * n(2),
        (n(2) + n(2)) * n(2),
        n(1) + n(2),
        n(2).pow(n(2)),
        n(2).pow(n(3)),
        n(3).pow(n(2)),
        n(2).pow(n(1)),
        n(1).pow(n(2)),
        n(0).pow(n(1)),
        n(1).pow(n(0)),
    ]
}

pub fn run(engine: &Engine) -> CliResult<()> {
    let mut out = io::stdout().lock();
    for t in samples() {
        writeln!(out, "{t} = {}", engine.cardinality(&t)?)?;
    }

    writeln!(out)?;
    let operands = [n(2), n(3), n(4)];
    for law in LawKind::ALL {
        let used = operands.get(..law.arity()).unwrap_or(&operands);
        let result = engine.check_law(law, used)?;
        writeln!(out, "{:<20} {}", law.name(), law.statement())?;
        writeln!(out, "    {result}")?;
    }
    Ok(())
}

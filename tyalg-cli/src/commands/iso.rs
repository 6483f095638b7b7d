//! `tyalg iso <a> <b>`

use {
    crate::{cli::IsoArgs, error::CliResult},
    std::io::{self, Write as _},
    tyalg::Engine,
};

pub fn run(engine: &Engine, args: &IsoArgs) -> CliResult<()> {
    let (a, b) = (&args.a, &args.b);
    let (m, n) = (engine.cardinality(a)?, engine.cardinality(b)?);
    let verdict = if engine.is_isomorphic(a, b)? {
        "isomorphic"
    } else {
        "not isomorphic"
    };
    let mut out = io::stdout().lock();
    writeln!(out, "{a} has {m}, {b} has {n}: {verdict}")?;

    if args.witness
        && let Some(iso) = engine.isomorphism(a, b)?
    {
        for inhabitant in engine.enumerate(a)? {
            if let Some(image) = iso.forward(inhabitant.value()) {
                writeln!(out, "{} -> {}", inhabitant.value(), image.value())?;
            }
        }
    }
    Ok(())
}

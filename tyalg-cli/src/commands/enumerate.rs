//! `tyalg enumerate <expr>`

use {
    crate::{cli::EnumerateArgs, error::CliResult},
    std::io::{self, Write as _},
    tyalg::Engine,
};

pub fn run(engine: &Engine, args: &EnumerateArgs) -> CliResult<()> {
    let inhabitants = engine.enumerate(&args.expr)?;
    let mut out = io::stdout().lock();
    for inhabitant in inhabitants.take(args.take.unwrap_or(usize::MAX)) {
        writeln!(out, "{}", inhabitant.value())?;
    }
    Ok(())
}

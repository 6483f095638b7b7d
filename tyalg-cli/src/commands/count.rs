//! `tyalg count <expr>`

use {
    crate::{cli::CountArgs, error::CliResult},
    std::io::{self, Write as _},
    tyalg::Engine,
};

pub fn run(engine: &Engine, args: &CountArgs) -> CliResult<()> {
    let n = engine.cardinality(&args.expr)?;
    writeln!(io::stdout().lock(), "{n}")?;
    Ok(())
}

//! `tyalg check <law> <operands>...`

use {
    crate::{cli::CheckArgs, error::CliResult},
    std::io::{self, Write as _},
    tyalg::Engine,
};

pub fn run(engine: &Engine, args: &CheckArgs) -> CliResult<()> {
    let result = engine.check_law(args.law, &args.operands)?;
    writeln!(io::stdout().lock(), "{result}")?;
    Ok(())
}

//! `tyalg`: count, enumerate, and compare finite types from the command line.

mod cli;
mod commands;
mod error;

use {
    clap::Parser as _,
    cli::{Cli, Command},
    std::process::ExitCode,
    tyalg::Engine,
};

#[expect(clippy::print_stderr, reason = "the one place errors reach the user")]
fn main() -> ExitCode {
    use tracing_subscriber::{EnvFilter, fmt};

    // `RUST_LOG` controls the level, defaulting to warnings only.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let engine = Engine::new(cli.max_cardinality);
    tracing::debug!(max_cardinality = engine.max_cardinality(), "starting");

    let result = match cli.command {
        Command::Laws => commands::laws::run(&engine),
        Command::Count(args) => commands::count::run(&engine, &args),
        Command::Enumerate(args) => commands::enumerate::run(&engine, &args),
        Command::Iso(args) => commands::iso::run(&engine, &args),
        Command::Check(args) => commands::check::run(&engine, &args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

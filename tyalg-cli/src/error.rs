//! Error handling for the CLI.

use {std::io, thiserror::Error};

/// Anything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Tyalg(#[from] tyalg::Error),

    #[error(transparent)]
    Overflow(#[from] tyalg::Overflow),

    #[error("could not write output: {0}")]
    Io(#[from] io::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

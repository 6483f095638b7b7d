//! Command-line interface definitions.
//!
//! Only clap structs live here; the commands themselves are in `commands`.

use {
    clap::{Args, Parser, Subcommand},
    tyalg::{Engine, LawKind, TypeExpr},
};

/// Cardinalities, inhabitants, and isomorphism laws of finite types.
///
/// Types are written with `0`, `1`, larger numbers for atoms of that size,
/// and `+`, `*`, `^` (tightest, right-associative), e.g. `(2 + 2) * 2`.
#[derive(Debug, Parser)]
#[command(name = "tyalg", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Refuse any type with more inhabitants than this
    #[arg(long, global = true, default_value_t = Engine::DEFAULT_MAX_CARDINALITY)]
    pub max_cardinality: u64,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Walk through the classic sample types and check every law on them
    Laws,

    /// Print the number of inhabitants of a type
    Count(CountArgs),

    /// Print every inhabitant of a type, one per line, in canonical order
    Enumerate(EnumerateArgs),

    /// Decide whether two types are isomorphic
    Iso(IsoArgs),

    /// Instantiate a law with the given operands and check it
    Check(CheckArgs),
}

/// Arguments for the `count` command.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Type expression
    pub expr: TypeExpr,
}

/// Arguments for the `enumerate` command.
#[derive(Args, Debug)]
pub struct EnumerateArgs {
    /// Type expression
    pub expr: TypeExpr,

    /// Stop after this many inhabitants
    #[arg(long)]
    pub take: Option<usize>,
}

/// Arguments for the `iso` command.
#[derive(Args, Debug)]
pub struct IsoArgs {
    /// Source type expression
    pub a: TypeExpr,

    /// Target type expression
    pub b: TypeExpr,

    /// Also print an explicit bijection, one mapped inhabitant per line
    #[arg(long)]
    pub witness: bool,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Law name, e.g. `distributive` (see `tyalg laws`)
    pub law: LawKind,

    /// One type expression per operand of the law
    pub operands: Vec<TypeExpr>,
}

//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function
//! that writes its results to standard output.

pub mod check;
pub mod count;
pub mod enumerate;
pub mod iso;
pub mod laws;

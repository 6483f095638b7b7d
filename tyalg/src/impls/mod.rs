//! Implementations for common types.

mod arrays;
mod boxed;
mod ints;
mod result;
mod tuples;

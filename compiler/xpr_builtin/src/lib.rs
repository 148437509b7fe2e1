//! Built-in functions.
//!
//! Every configuration starts out with the functions in [`builtins`]. The
//! table is built once per process and shared: configurations copy the
//! `Arc`s into their own registry and may overlay host functions on top,
//! but the global table itself is never mutated.

mod function;
mod table;

pub use function::Function;
pub use table::{builtins, lookup};

//! Compiler extension hooks.

use std::any::Any;
use std::fmt;

/// A pass the compiler runs over the parsed expression before type checking.
///
/// The syntax tree belongs to the parser; this crate only stores visitors and
/// hands them to the compiler, so nodes are passed type-erased.
pub trait Visitor: fmt::Debug + Send + Sync {
    fn visit(&mut self, node: &mut dyn Any);
}

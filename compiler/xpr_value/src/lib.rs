//! Environment values for the xpr expression language.
//!
//! A host describes the evaluation environment as a [`Value`]: usually a
//! [`StructValue`] (fields and methods) or a [`MapValue`] (named entries).
//! Callables are [`NativeFn`]s, which carry an explicit [`Signature`] so that
//! nothing downstream needs to inspect a closure to learn its arity.
//!
//! [`fetch`] is the name-based lookup the configuration layer uses to resolve
//! constant functions.
//!
//! [`Signature`]: xpr_types::Signature

mod fetch;
mod map;
mod native;
mod record;
mod value;

pub use fetch::fetch;
pub use map::MapValue;
pub use native::{CallError, NativeBody, NativeFn};
pub use record::StructValue;
pub use value::Value;

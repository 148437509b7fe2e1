//! Type model for the xpr expression language.
//!
//! Environment values are described by a small, closed set of types. The
//! configuration layer never inspects host callables directly; it only ever
//! looks at a [`Signature`], produced once when the environment is introspected.
//!
//! # Layout
//!
//! - [`Kind`]: the runtime kind of a value or type
//! - [`Type`]: a full type descriptor
//! - [`Signature`]: input/output arity of anything callable
//! - [`StructType`]: the shape of a structured environment record

mod kind;
mod signature;
mod ty;

pub use kind::Kind;
pub use signature::Signature;
pub use ty::{FieldDef, MethodSig, StructType, Type};

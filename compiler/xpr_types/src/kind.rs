//! Runtime kind of a value or type.

use std::fmt;

/// Coarse classification of a type, independent of its parameters.
///
/// Two maps with different value types share `Kind::Map`; this is what the
/// environment binder and the constant-function registrar branch on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// No kind; the zero value. Used for "no expected result kind".
    #[default]
    Invalid,
    Bool,
    Int,
    Float,
    String,
    /// Dynamically typed slot (`any`).
    Any,
    Array,
    Map,
    Struct,
    Func,
}

impl Kind {
    /// Whether values of this kind can be called.
    #[inline]
    pub fn is_callable(self) -> bool {
        self == Kind::Func
    }

    /// Lowercase name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Any => "any",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Struct => "struct",
            Kind::Func => "func",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

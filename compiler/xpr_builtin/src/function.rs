//! Function descriptors.

use xpr_types::Signature;

/// A named function with one or more concrete overloads.
///
/// Overloads give ad-hoc polymorphism: `abs` is both `func(int) int` and
/// `func(float) float`. Consumers validate each overload on its own.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Function {
    pub name: String,
    pub types: Vec<Signature>,
}

impl Function {
    pub fn new(name: impl Into<String>, types: Vec<Signature>) -> Self {
        Function {
            name: name.into(),
            types,
        }
    }

    /// Whether any overload accepts `argc` arguments.
    pub fn accepts(&self, argc: usize) -> bool {
        self.types.iter().any(|sig| sig.accepts(argc))
    }
}

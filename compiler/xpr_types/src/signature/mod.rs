//! Callable signatures.
//!
//! A `Signature` is the only thing the configuration layer knows about a
//! callable: how many inputs it takes, how many outputs it yields, and their
//! types. Bound methods are stored with their receiver prepended as the first
//! input, so a method's external arity is `num_in() - 1`.

use std::fmt;

use crate::Type;

/// Input and output types of a callable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    inputs: Vec<Type>,
    outputs: Vec<Type>,
    variadic: bool,
}

impl Signature {
    /// Create a signature from its input and output types.
    pub fn new(inputs: Vec<Type>, outputs: Vec<Type>) -> Self {
        Signature {
            inputs,
            outputs,
            variadic: false,
        }
    }

    /// Shorthand for the common single-result case.
    pub fn returning(inputs: Vec<Type>, output: Type) -> Self {
        Self::new(inputs, vec![output])
    }

    /// Mark the last input as variadic (`...T`).
    #[must_use]
    pub fn variadic(mut self) -> Self {
        self.variadic = !self.inputs.is_empty();
        self
    }

    /// Prepend a receiver as the first input.
    ///
    /// Used when a method is exposed through the type catalogue: the catalogue
    /// stores the method's full signature, receiver included.
    #[must_use]
    pub fn with_receiver(&self, receiver: Type) -> Self {
        let mut inputs = Vec::with_capacity(self.inputs.len() + 1);
        inputs.push(receiver);
        inputs.extend(self.inputs.iter().cloned());
        Signature {
            inputs,
            outputs: self.outputs.clone(),
            variadic: self.variadic,
        }
    }

    /// Number of declared inputs.
    #[inline]
    pub fn num_in(&self) -> usize {
        self.inputs.len()
    }

    /// Number of declared outputs.
    #[inline]
    pub fn num_out(&self) -> usize {
        self.outputs.len()
    }

    #[inline]
    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    pub fn inputs(&self) -> &[Type] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Type] {
        &self.outputs
    }

    /// Exactly two inputs and one output: the shape of a binary operator.
    #[inline]
    pub fn is_binary(&self) -> bool {
        self.num_in() == 2 && self.num_out() == 1
    }

    /// Whether a call with `argc` arguments is accepted.
    pub fn accepts(&self, argc: usize) -> bool {
        if self.variadic {
            argc + 1 >= self.num_in()
        } else {
            argc == self.num_in()
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("func(")?;
        let last = self.inputs.len().saturating_sub(1);
        for (i, input) in self.inputs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if self.variadic && i == last {
                f.write_str("...")?;
            }
            write!(f, "{input}")?;
        }
        f.write_str(")")?;
        match self.outputs.as_slice() {
            [] => Ok(()),
            [single] => write!(f, " {single}"),
            many => {
                f.write_str(" (")?;
                for (i, output) in many.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{output}")?;
                }
                f.write_str(")")
            }
        }
    }
}

//! Host callables.

use std::fmt;
use std::sync::Arc;

use xpr_types::Signature;

use crate::Value;

/// Shared body of a host callable.
pub type NativeBody = Arc<dyn Fn(&[Value]) -> Result<Value, CallError> + Send + Sync>;

/// Failure raised when invoking a [`NativeFn`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    #[error("{name}: expected {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("{name}: method has no implementation")]
    MissingBody { name: String },
    #[error("{name}: {message}")]
    Failed { name: String, message: String },
}

/// A named host function with an explicit signature.
#[derive(Clone)]
pub struct NativeFn {
    name: String,
    signature: Signature,
    body: NativeBody,
}

impl NativeFn {
    pub fn new<F>(name: impl Into<String>, signature: Signature, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self::from_body(name, signature, Arc::new(body))
    }

    pub fn from_body(name: impl Into<String>, signature: Signature, body: NativeBody) -> Self {
        NativeFn {
            name: name.into(),
            signature,
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Invoke the function after checking the argument count.
    pub fn call(&self, args: &[Value]) -> Result<Value, CallError> {
        if !self.signature.accepts(args.len()) {
            return Err(CallError::ArityMismatch {
                name: self.name.clone(),
                expected: self.signature.num_in(),
                got: args.len(),
            });
        }
        tracing::trace!(name = %self.name, argc = args.len(), "native call");
        (self.body)(args)
    }
}

impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.signature == other.signature
            && Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFn")
            .field("name", &self.name)
            .field("signature", &self.signature.to_string())
            .finish_non_exhaustive()
    }
}

//! Configuration errors.
//!
//! Every error here is a setup mistake on the host side. None of them is
//! recoverable: a configuration that fails validation cannot be compiled
//! against.

use xpr_types::Signature;

/// Result of a registration or validation step.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A fatal configuration error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A constant function was registered before any environment was bound.
    #[error("no environment is specified for constant function `{name}`")]
    MissingEnvironment { name: String },

    /// A constant function target is missing or is not a function.
    #[error("constant function `{name}` must be a function")]
    NotCallable { name: String },

    /// An operator candidate is in neither the type catalogue nor the
    /// function registry.
    #[error(
        "function `{function}` for `{operator}` operator does not exist in the environment"
    )]
    UnknownOperatorFunction { function: String, operator: String },

    /// An operator candidate is not a binary function.
    #[error(
        "function `{function}` for `{operator}` operator does not have a correct signature: `{signature}`"
    )]
    BadSignature {
        function: String,
        operator: String,
        signature: Signature,
    },

    /// A registry function declares no overloads at all.
    #[error("function `{function}` for `{operator}` operator misses types")]
    MissingTypes { function: String, operator: String },
}

impl ConfigError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::MissingEnvironment { .. } => "E9001",
            ConfigError::NotCallable { .. } => "E9002",
            ConfigError::UnknownOperatorFunction { .. } => "E9003",
            ConfigError::BadSignature { .. } => "E9004",
            ConfigError::MissingTypes { .. } => "E9005",
        }
    }

    /// The operator this error was raised for, if any.
    pub fn operator(&self) -> Option<&str> {
        match self {
            ConfigError::UnknownOperatorFunction { operator, .. }
            | ConfigError::BadSignature { operator, .. }
            | ConfigError::MissingTypes { operator, .. } => Some(operator),
            ConfigError::MissingEnvironment { .. } | ConfigError::NotCallable { .. } => None,
        }
    }

    /// The function or constant name this error is about.
    pub fn function(&self) -> &str {
        match self {
            ConfigError::MissingEnvironment { name } | ConfigError::NotCallable { name } => name,
            ConfigError::UnknownOperatorFunction { function, .. }
            | ConfigError::BadSignature { function, .. }
            | ConfigError::MissingTypes { function, .. } => function,
        }
    }
}

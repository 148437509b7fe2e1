//! Functional options.
//!
//! Hosts usually describe a configuration as a list of options rather than
//! a sequence of method calls. Options apply in order, so `Env` must come
//! before any `ConstExpr` that depends on it.

use std::fmt;

use xpr_builtin::Function;
use xpr_types::Kind;
use xpr_value::Value;

use crate::{Config, ConfigResult, ValidatedConfig, Visitor};

/// One configuration step.
pub enum ConfigOption {
    /// Bind the environment.
    Env(Value),
    /// Register overload candidates for an operator.
    Operator(String, Vec<String>),
    /// Mark an environment function as foldable at compile time.
    ConstExpr(String),
    /// Add or replace a registry function.
    Function(Function),
    /// Require a result of this kind.
    Expect(Kind),
    /// Accept a result of any type.
    ExpectAny,
    Optimize(bool),
    Pipes(bool),
    /// Turn off strict identifier checking.
    AllowUndefinedVariables,
    /// Add a syntax-tree visitor.
    Patch(Box<dyn Visitor>),
}

impl ConfigOption {
    pub fn operator<I, S>(operator: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConfigOption::Operator(operator.into(), names.into_iter().map(Into::into).collect())
    }

    pub fn const_expr(name: impl Into<String>) -> Self {
        ConfigOption::ConstExpr(name.into())
    }
}

impl fmt::Debug for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigOption::Env(env) => f.debug_tuple("Env").field(&env.kind()).finish(),
            ConfigOption::Operator(op, names) => {
                f.debug_tuple("Operator").field(op).field(names).finish()
            }
            ConfigOption::ConstExpr(name) => f.debug_tuple("ConstExpr").field(name).finish(),
            ConfigOption::Function(func) => f.debug_tuple("Function").field(&func.name).finish(),
            ConfigOption::Expect(kind) => f.debug_tuple("Expect").field(kind).finish(),
            ConfigOption::ExpectAny => f.write_str("ExpectAny"),
            ConfigOption::Optimize(on) => f.debug_tuple("Optimize").field(on).finish(),
            ConfigOption::Pipes(on) => f.debug_tuple("Pipes").field(on).finish(),
            ConfigOption::AllowUndefinedVariables => f.write_str("AllowUndefinedVariables"),
            ConfigOption::Patch(visitor) => f.debug_tuple("Patch").field(visitor).finish(),
        }
    }
}

impl Config {
    /// Apply options in order, stopping at the first failure.
    pub fn apply<I>(&mut self, options: I) -> ConfigResult<()>
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        for option in options {
            tracing::trace!(?option, "applying option");
            match option {
                ConfigOption::Env(env) => self.bind_env(env),
                ConfigOption::Operator(op, names) => self.operator(&op, names),
                ConfigOption::ConstExpr(name) => self.const_expr(&name)?,
                ConfigOption::Function(func) => self.register_function(func),
                ConfigOption::Expect(kind) => self.expect_kind(kind),
                ConfigOption::ExpectAny => self.expect_any(),
                ConfigOption::Optimize(on) => self.set_optimize(on),
                ConfigOption::Pipes(on) => self.set_pipes(on),
                ConfigOption::AllowUndefinedVariables => self.allow_undefined_variables(),
                ConfigOption::Patch(visitor) => self.add_visitor(visitor),
            }
        }
        Ok(())
    }

    /// Build a configuration from options and validate it.
    pub fn build<I>(options: I) -> ConfigResult<ValidatedConfig>
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        let mut config = Config::new();
        config.apply(options)?;
        config.validate()
    }
}

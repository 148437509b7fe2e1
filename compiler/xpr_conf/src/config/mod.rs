//! The configuration aggregate.

use std::collections::BTreeMap;
use std::ops::Deref;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use xpr_builtin::{builtins, Function};
use xpr_types::{Kind, Type};
use xpr_value::{fetch, NativeFn, Value};

use crate::{
    create_types_table, ConfigError, ConfigFlags, ConfigResult, Features, OperatorsTable,
    TypesTable, Visitor,
};

/// Function name → descriptor. Built-ins are shared with the global table.
pub type FunctionTable = FxHashMap<String, Arc<Function>>;

/// Everything the compiler consults before compiling an expression.
///
/// Fields are private: the type catalogue only changes through
/// [`Config::bind_env`], and everything else only grows through the
/// registration methods.
#[derive(Debug)]
pub struct Config {
    env: Option<Value>,
    types: TypesTable,
    default_type: Option<Type>,
    operators: OperatorsTable,
    expect: Kind,
    features: Features,
    const_fns: BTreeMap<String, NativeFn>,
    visitors: Vec<Box<dyn Visitor>>,
    functions: FunctionTable,
}

impl Config {
    /// A configuration without an environment, seeded with every built-in.
    pub fn new() -> Self {
        let functions = builtins()
            .iter()
            .map(|f| (f.name.clone(), Arc::clone(f)))
            .collect();
        Config {
            env: None,
            types: TypesTable::new(),
            default_type: None,
            operators: OperatorsTable::new(),
            expect: Kind::Invalid,
            features: Features::default(),
            const_fns: BTreeMap::new(),
            visitors: Vec::new(),
            functions,
        }
    }

    /// A configuration bound to `env`.
    pub fn with_env(env: Value) -> Self {
        let mut config = Self::new();
        config.bind_env(env);
        config
    }

    /// Bind the environment and derive the type catalogue from it.
    ///
    /// - A string-keyed map of dynamically typed values sets `MAP_ENV`.
    /// - Any other map records its value type as the default type, used for
    ///   keys that are not in the catalogue.
    /// - Anything else is a structured environment.
    ///
    /// Binding always turns on strict type checking.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = %env.kind()))]
    pub fn bind_env(&mut self, env: Value) {
        let (map_env, default_type) = match &env {
            Value::Map(map) if map.is_dynamic() => (true, None),
            Value::Map(map) => (false, Some(map.value_type().clone())),
            _ => (false, None),
        };

        self.types = create_types_table(&env);
        self.features.set(Features::MAP_ENV, map_env);
        self.default_type = default_type;
        self.env = Some(env);
        self.features.insert(Features::STRICT);

        tracing::debug!(
            map_env,
            default_type = ?self.default_type,
            entries = self.types.len(),
            "environment bound"
        );
    }

    /// Register overload candidates for `operator`.
    ///
    /// Nothing is resolved here; see [`Config::check`].
    pub fn operator<I, S>(&mut self, operator: &str, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tracing::trace!(operator, "registering operator overloads");
        self.operators.register(operator, names);
    }

    /// Mark the environment function `name` as foldable at compile time.
    ///
    /// Calls to it whose arguments are all constants are replaced by their
    /// result during compilation.
    pub fn const_expr(&mut self, name: &str) -> ConfigResult<()> {
        let Some(env) = &self.env else {
            return Err(ConfigError::MissingEnvironment {
                name: name.to_owned(),
            });
        };
        match fetch(env, name) {
            Some(Value::Func(f)) => {
                tracing::debug!(name, signature = %f.signature(), "constant function registered");
                self.const_fns.insert(name.to_owned(), f);
                Ok(())
            }
            _ => Err(ConfigError::NotCallable {
                name: name.to_owned(),
            }),
        }
    }

    /// Add or replace a function in this configuration's registry.
    ///
    /// The global built-in table is unaffected.
    pub fn register_function(&mut self, function: Function) {
        tracing::debug!(
            name = %function.name,
            overloads = function.types.len(),
            "function registered"
        );
        self.functions
            .insert(function.name.clone(), Arc::new(function));
    }

    pub fn add_visitor(&mut self, visitor: Box<dyn Visitor>) {
        self.visitors.push(visitor);
    }

    /// Require the expression result to be of `kind`.
    pub fn expect_kind(&mut self, kind: Kind) {
        self.expect = kind;
    }

    /// Accept a result of any type.
    pub fn expect_any(&mut self) {
        self.features.insert(Features::EXPECT_ANY);
    }

    pub fn set_optimize(&mut self, enabled: bool) {
        self.features.set(Features::OPTIMIZE, enabled);
    }

    pub fn set_pipes(&mut self, enabled: bool) {
        self.features.set(Features::PIPES, enabled);
    }

    /// Let expressions reference identifiers missing from the catalogue.
    pub fn allow_undefined_variables(&mut self) {
        self.features.remove(Features::STRICT);
    }

    /// Check, then freeze.
    pub fn validate(self) -> ConfigResult<ValidatedConfig> {
        self.check()?;
        Ok(ValidatedConfig(self))
    }

    pub fn env(&self) -> Option<&Value> {
        self.env.as_ref()
    }

    pub fn types(&self) -> &TypesTable {
        &self.types
    }

    /// Value type of a typed map environment.
    pub fn default_type(&self) -> Option<&Type> {
        self.default_type.as_ref()
    }

    pub fn operators(&self) -> &OperatorsTable {
        &self.operators
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub fn const_fns(&self) -> &BTreeMap<String, NativeFn> {
        &self.const_fns
    }

    pub fn visitors(&self) -> &[Box<dyn Visitor>] {
        &self.visitors
    }

    pub fn expect(&self) -> Kind {
        self.expect
    }

    pub fn features(&self) -> Features {
        self.features
    }

    pub fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            features: self.features,
            expect: self.expect,
        }
    }

    #[inline]
    pub fn is_map_env(&self) -> bool {
        self.features.contains(Features::MAP_ENV)
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.features.contains(Features::STRICT)
    }

    #[inline]
    pub fn is_optimize(&self) -> bool {
        self.features.contains(Features::OPTIMIZE)
    }

    #[inline]
    pub fn is_pipes(&self) -> bool {
        self.features.contains(Features::PIPES)
    }

    #[inline]
    pub fn is_expect_any(&self) -> bool {
        self.features.contains(Features::EXPECT_ANY)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// A configuration that passed [`Config::check`].
///
/// Read-only: it derefs to [`Config`] but never mutably.
#[derive(Debug)]
pub struct ValidatedConfig(Config);

impl Deref for ValidatedConfig {
    type Target = Config;

    fn deref(&self) -> &Config {
        &self.0
    }
}

//! Compile-time configuration for the xpr expression language.
//!
//! A [`Config`] is everything the compiler needs to know before it sees an
//! expression: the bound environment and the type catalogue derived from it,
//! operator overloads, functions that may be folded into constants, feature
//! flags, and syntax-tree visitors.
//!
//! # Lifecycle
//!
//! ```text
//! Config::new()  ──bind_env / operator / const_expr / register_function──▶  Config
//!                                                                            │
//!                                                         validate() (runs check())
//!                                                                            ▼
//!                                                                   ValidatedConfig
//! ```
//!
//! Registration never validates; [`Config::check`] cross-validates every
//! operator candidate against the type catalogue and the function registry.
//! A [`ValidatedConfig`] only hands out shared references, so the compiler
//! cannot mutate a configuration after it passed validation.

mod check;
mod config;
mod error;
mod flags;
mod operators;
mod options;
mod types_table;
mod visitor;

pub use config::{Config, FunctionTable, ValidatedConfig};
pub use error::{ConfigError, ConfigResult};
pub use flags::{ConfigFlags, Features};
pub use operators::OperatorsTable;
pub use options::ConfigOption;
pub use types_table::{create_types_table, fields_from_struct, Tag, TypesTable};
pub use visitor::Visitor;

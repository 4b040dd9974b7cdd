//! Dialect-independent building blocks for the type mappers and the
//! default translator.
//!
//! - [`ColumnType`]: column constructor chosen by a dialect's type mapper
//! - [`DefaultIdioms`]: per-dialect spelling of database-side defaults
//! - [`DEFAULT_RULES`]: ordered rule table turning defaults into modifiers
//!
//! # Usage
//!
//! ```rust,ignore
//! let idioms = dialect.default_idioms();
//! let ctx = RuleContext { dialect: "mysql", display_name: "MySQL", idioms };
//! let modifier = defaults::translate(&default, &ctx, &mut imports)?;
//! ```

pub mod defaults;
mod typemap;

pub use defaults::{translate, DefaultIdioms, DefaultRule, NowIdiom, RuleContext, DEFAULT_RULES};
pub use typemap::{enum_value_list, ColumnKind, ColumnType};

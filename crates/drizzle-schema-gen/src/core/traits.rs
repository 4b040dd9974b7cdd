//! Core trait for dialect-specific code generation.
//!
//! A [`Dialect`] knows how one SQL backend is spelled in Drizzle ORM schema
//! code: which module the builders come from, which builder declares a table,
//! which column constructor stands for each scalar type, and which idioms
//! express database-side defaults. Everything else (modifier order, foreign
//! keys, indexes, relations, text assembly) is shared by the orchestrator.

use crate::core::imports::Imports;
use crate::core::schema::{Enum, Field};
use crate::dialect::{ColumnKind, ColumnType, DefaultIdioms};
use crate::error::Result;

/// Code generation strategy for one SQL backend.
///
/// Implementations are stateless unit structs; every per-run value (imports,
/// resolved enums) is passed in explicitly.
pub trait Dialect: Send + Sync {
    /// Dialect identifier (e.g., "postgres", "mssql").
    fn name(&self) -> &str;

    /// Human-readable backend name used in error messages (e.g., "PostgreSQL").
    fn display_name(&self) -> &str;

    /// Module the native builders are imported from.
    fn core_module(&self) -> &str;

    /// Builder that declares a table (`pgTable`, `mysqlTable`, ...).
    fn table_builder(&self) -> &str;

    /// Map a scalar or enum field to its column constructor.
    ///
    /// The constructor symbol is recorded in `imports`. Types the backend
    /// cannot represent yield [`GeneratorError::UnsupportedType`].
    ///
    /// [`GeneratorError::UnsupportedType`]: crate::error::GeneratorError::UnsupportedType
    fn map_type(
        &self,
        field: &Field,
        kind: ColumnKind<'_>,
        imports: &mut Imports,
    ) -> Result<ColumnType>;

    /// Default-value idioms consulted by the default rules.
    fn default_idioms(&self) -> &DefaultIdioms;

    /// Top-level declaration emitted for an enum, if the backend needs one.
    fn enum_declaration(&self, _enum_def: &Enum, _imports: &mut Imports) -> Option<String> {
        None
    }
}

//! PostgreSQL schema dialect (Strategy pattern).
//!
//! Maps scalar types onto `drizzle-orm/pg-core` builders. PostgreSQL is the
//! only backend with native list columns (`.array()`) and named enum types
//! (`pgEnum`), and it expresses autoincrement through `serial` column types
//! instead of a modifier.

use crate::core::identifier::quote_single;
use crate::core::imports::Imports;
use crate::core::schema::{Enum, Field, ScalarType};
use crate::core::traits::Dialect;
use crate::dialect::{ColumnKind, ColumnType, DefaultIdioms, NowIdiom};
use crate::drivers::common::{enum_values, unsupported_type, BIGINT_MODE, DECIMAL_PRECISION};
use crate::error::Result;

const IDIOMS: DefaultIdioms = DefaultIdioms {
    now: NowIdiom::Modifier(".defaultNow()"),
    // serial/bigserial already carry the sequence
    autoincrement: None,
    generated_fallback: "gen_random_uuid()",
    uuid_function: None,
    array_defaults: true,
};

/// PostgreSQL dialect implementation.
///
/// Implements the Strategy pattern for schema syntax differences.
#[derive(Debug, Clone, Default)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Create a new PostgreSQL dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &str {
        "postgres"
    }

    fn display_name(&self) -> &str {
        "PostgreSQL"
    }

    fn core_module(&self) -> &str {
        "drizzle-orm/pg-core"
    }

    fn table_builder(&self) -> &str {
        "pgTable"
    }

    fn map_type(
        &self,
        field: &Field,
        kind: ColumnKind<'_>,
        imports: &mut Imports,
    ) -> Result<ColumnType> {
        let autoincrement = field.default_generator() == Some("autoincrement");

        let column = match kind {
            ColumnKind::Scalar(scalar) => {
                let column = match scalar {
                    ScalarType::Int if autoincrement => ColumnType::new("serial"),
                    ScalarType::Int => ColumnType::new("integer"),
                    ScalarType::BigInt if autoincrement => {
                        ColumnType::with_argument("bigserial", BIGINT_MODE)
                    }
                    ScalarType::BigInt => ColumnType::with_argument("bigint", BIGINT_MODE),
                    ScalarType::Boolean => ColumnType::new("boolean"),
                    ScalarType::Bytes => return Err(unsupported_type(self, "binary")),
                    ScalarType::DateTime => {
                        ColumnType::with_argument("timestamp", "{ precision: 3 }")
                    }
                    ScalarType::Decimal => ColumnType::with_argument("decimal", DECIMAL_PRECISION),
                    ScalarType::Float => ColumnType::new("doublePrecision"),
                    ScalarType::Json => ColumnType::new("jsonb"),
                    ScalarType::String => ColumnType::new("text"),
                };
                imports.use_native(column.constructor.as_str());
                column
            }
            // The enum's own export is the column builder; it lives in this module.
            ColumnKind::Enum(enum_def) => ColumnType::new(enum_def.name.as_str()),
        };

        Ok(if field.is_list {
            column.into_array()
        } else {
            column
        })
    }

    fn default_idioms(&self) -> &DefaultIdioms {
        &IDIOMS
    }

    fn enum_declaration(&self, enum_def: &Enum, imports: &mut Imports) -> Option<String> {
        imports.use_native("pgEnum");
        Some(format!(
            "export const {} = pgEnum({}, {});",
            enum_def.name,
            quote_single(enum_def.type_name()),
            enum_values(enum_def)
        ))
    }
}

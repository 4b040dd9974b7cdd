//! SQLite schema dialect (Strategy pattern).
//!
//! SQLite has only a handful of storage classes, so most scalar types collapse
//! onto `int`, `text`, `real`, `numeric` or `blob` with a Drizzle `mode`.

use crate::core::imports::Imports;
use crate::core::schema::{Field, ScalarType};
use crate::core::traits::Dialect;
use crate::dialect::{ColumnKind, ColumnType, DefaultIdioms, NowIdiom};
use crate::drivers::common::enum_option;
use crate::error::Result;

const IDIOMS: DefaultIdioms = DefaultIdioms {
    now: NowIdiom::Sql("DATE('now')"),
    // INTEGER PRIMARY KEY is already a rowid alias
    autoincrement: None,
    generated_fallback: "lower(hex(randomblob(16)))",
    uuid_function: None,
    array_defaults: true,
};

/// SQLite dialect implementation.
#[derive(Debug, Clone, Default)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Create a new SQLite dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn display_name(&self) -> &str {
        "SQLite"
    }

    fn core_module(&self) -> &str {
        "drizzle-orm/sqlite-core"
    }

    fn table_builder(&self) -> &str {
        "sqliteTable"
    }

    fn map_type(
        &self,
        _field: &Field,
        kind: ColumnKind<'_>,
        imports: &mut Imports,
    ) -> Result<ColumnType> {
        let column = match kind {
            ColumnKind::Scalar(ScalarType::Int | ScalarType::BigInt) => ColumnType::new("int"),
            ColumnKind::Scalar(ScalarType::Boolean) => {
                ColumnType::with_argument("int", "{ mode: 'boolean' }")
            }
            ColumnKind::Scalar(ScalarType::Bytes) => {
                ColumnType::with_argument("blob", "{ mode: 'buffer' }")
            }
            ColumnKind::Scalar(ScalarType::DateTime | ScalarType::Decimal) => {
                ColumnType::new("numeric")
            }
            ColumnKind::Scalar(ScalarType::Float) => ColumnType::new("real"),
            ColumnKind::Scalar(ScalarType::Json) => {
                ColumnType::with_argument("text", "{ mode: 'json' }")
            }
            ColumnKind::Scalar(ScalarType::String) => ColumnType::new("text"),
            ColumnKind::Enum(enum_def) => ColumnType::with_argument("text", enum_option(enum_def)),
        };

        imports.use_native(column.constructor.as_str());
        Ok(column)
    }

    fn default_idioms(&self) -> &DefaultIdioms {
        &IDIOMS
    }
}

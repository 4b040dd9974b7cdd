//! Microsoft SQL Server schema dialect (Strategy pattern).
//!
//! Maps scalar types onto `drizzle-orm/mssql-core` builders. SQL Server has
//! no JSON column type and no array literals, and spells defaults with its
//! own column methods (`defaultGetDate`, `identity`).

use crate::core::imports::Imports;
use crate::core::schema::{Field, ScalarType};
use crate::core::traits::Dialect;
use crate::dialect::{ColumnKind, ColumnType, DefaultIdioms, NowIdiom};
use crate::drivers::common::{enum_option, unsupported_type, BIGINT_MODE, DECIMAL_PRECISION};
use crate::error::Result;

const IDIOMS: DefaultIdioms = DefaultIdioms {
    now: NowIdiom::Modifier(".defaultGetDate()"),
    autoincrement: Some(".identity({ seed: 1, increment: 1 })"),
    generated_fallback: "NEWID()",
    uuid_function: Some("NEWSEQUENTIALID()"),
    array_defaults: false,
};

/// MSSQL dialect implementation.
///
/// Implements the Strategy pattern for schema syntax differences.
#[derive(Debug, Clone, Default)]
pub struct MssqlDialect;

impl MssqlDialect {
    /// Create a new MSSQL dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for MssqlDialect {
    fn name(&self) -> &str {
        "mssql"
    }

    fn display_name(&self) -> &str {
        "MSSQL"
    }

    fn core_module(&self) -> &str {
        "drizzle-orm/mssql-core"
    }

    fn table_builder(&self) -> &str {
        "mssqlTable"
    }

    fn map_type(
        &self,
        _field: &Field,
        kind: ColumnKind<'_>,
        imports: &mut Imports,
    ) -> Result<ColumnType> {
        let column = match kind {
            ColumnKind::Scalar(ScalarType::Int) => ColumnType::new("int"),
            ColumnKind::Scalar(ScalarType::BigInt) => {
                ColumnType::with_argument("bigint", BIGINT_MODE)
            }
            ColumnKind::Scalar(ScalarType::Boolean) => ColumnType::new("bit"),
            ColumnKind::Scalar(ScalarType::Bytes) => ColumnType::new("varbinary"),
            ColumnKind::Scalar(ScalarType::DateTime) => {
                ColumnType::with_argument("datetime", "{ mode: 'date' }")
            }
            ColumnKind::Scalar(ScalarType::Decimal) => {
                ColumnType::with_argument("decimal", DECIMAL_PRECISION)
            }
            ColumnKind::Scalar(ScalarType::Float) => ColumnType::new("float"),
            ColumnKind::Scalar(ScalarType::Json) => return Err(unsupported_type(self, "JSON")),
            ColumnKind::Scalar(ScalarType::String) => ColumnType::new("varchar"),
            ColumnKind::Enum(enum_def) => ColumnType::with_argument("varchar", enum_option(enum_def)),
        };

        imports.use_native(column.constructor.as_str());
        Ok(column)
    }

    fn default_idioms(&self) -> &DefaultIdioms {
        &IDIOMS
    }
}

//! MySQL/MariaDB schema dialect (Strategy pattern).
//!
//! Maps scalar types onto `drizzle-orm/mysql-core` builders.

use crate::core::imports::Imports;
use crate::core::schema::{Field, ScalarType};
use crate::core::traits::Dialect;
use crate::dialect::{ColumnKind, ColumnType, DefaultIdioms, NowIdiom};
use crate::drivers::common::{enum_values, unsupported_type, BIGINT_MODE, DECIMAL_PRECISION};
use crate::error::Result;

const IDIOMS: DefaultIdioms = DefaultIdioms {
    now: NowIdiom::Sql("CURRENT_TIMESTAMP"),
    autoincrement: Some(".autoincrement()"),
    generated_fallback: "UUID()",
    uuid_function: None,
    array_defaults: true,
};

/// MySQL/MariaDB dialect implementation.
///
/// Implements the Strategy pattern for schema syntax differences.
#[derive(Debug, Clone, Default)]
pub struct MysqlDialect;

impl MysqlDialect {
    /// Create a new MySQL dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for MysqlDialect {
    fn name(&self) -> &str {
        "mysql"
    }

    fn display_name(&self) -> &str {
        "MySQL"
    }

    fn core_module(&self) -> &str {
        "drizzle-orm/mysql-core"
    }

    fn table_builder(&self) -> &str {
        "mysqlTable"
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
            ColumnKind::Scalar(ScalarType::Boolean) => ColumnType::new("boolean"),
            ColumnKind::Scalar(ScalarType::Bytes) => {
                return Err(unsupported_type(self, "binary"))
            }
            ColumnKind::Scalar(ScalarType::DateTime) => {
                ColumnType::with_argument("datetime", "{ fsp: 3 }")
            }
            ColumnKind::Scalar(ScalarType::Decimal) => {
                ColumnType::with_argument("decimal", DECIMAL_PRECISION)
            }
            ColumnKind::Scalar(ScalarType::Float) => ColumnType::new("double"),
            ColumnKind::Scalar(ScalarType::Json) => ColumnType::new("json"),
            // 191 keeps utf8mb4 keys inside the InnoDB index prefix limit
            ColumnKind::Scalar(ScalarType::String) => {
                ColumnType::with_argument("varchar", "{ length: 191 }")
            }
            ColumnKind::Enum(enum_def) => ColumnType::with_argument("mysqlEnum", enum_values(enum_def)),
        };

        imports.use_native(column.constructor.as_str());
        Ok(column)
    }

    fn default_idioms(&self) -> &DefaultIdioms {
        &IDIOMS
    }
}

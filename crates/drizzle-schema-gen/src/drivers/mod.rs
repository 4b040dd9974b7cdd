//! Dialect driver implementations.
//!
//! This module provides backend-specific implementations of the core
//! [`Dialect`] trait:
//!
//! - [`mssql`]: Microsoft SQL Server
//! - [`mysql`]: MySQL/MariaDB
//! - [`postgres`]: PostgreSQL
//! - [`sqlite`]: SQLite
//! - [`common`]: Shared helpers (error messages, enum value lists)
//!
//! # Static dispatch
//!
//! Instead of dynamic dispatch via `Box<dyn Dialect>`, [`DialectImpl`] is an
//! enum whose variants implement the trait directly, so the orchestrator is
//! generic over one concrete type.
//!
//! # Adding New Databases
//!
//! 1. Create a new module under `drivers/` (e.g., `drivers/cockroach/`)
//! 2. Implement `Dialect` for a unit struct
//! 3. Add variants to `DialectKind` and `DialectImpl`

pub mod common;
pub mod mssql;
pub mod mysql;
pub mod postgres;
pub mod sqlite;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use mssql::MssqlDialect;
pub use mysql::MysqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

use crate::core::imports::Imports;
use crate::core::schema::{Enum, Field};
use crate::core::traits::Dialect;
use crate::dialect::{ColumnKind, ColumnType, DefaultIdioms};
use crate::error::{GeneratorError, Result};

/// Supported backends, as named in configuration and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    #[serde(alias = "sqlserver", alias = "sql_server")]
    Mssql,
    #[serde(alias = "mariadb")]
    Mysql,
    #[serde(alias = "postgresql", alias = "pg")]
    Postgres,
    #[serde(alias = "sqlite3")]
    Sqlite,
}

impl DialectKind {
    /// Every supported backend.
    pub const ALL: [DialectKind; 4] = [
        DialectKind::Mssql,
        DialectKind::Mysql,
        DialectKind::Postgres,
        DialectKind::Sqlite,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DialectKind::Mssql => "mssql",
            DialectKind::Mysql => "mysql",
            DialectKind::Postgres => "postgres",
            DialectKind::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mssql" | "sqlserver" | "sql_server" => Ok(DialectKind::Mssql),
            "mysql" | "mariadb" => Ok(DialectKind::Mysql),
            "postgres" | "postgresql" | "pg" => Ok(DialectKind::Postgres),
            "sqlite" | "sqlite3" => Ok(DialectKind::Sqlite),
            other => Err(GeneratorError::Config(format!(
                "Unknown dialect: '{}'. Supported dialects: mssql, mysql, postgres, sqlite",
                other
            ))),
        }
    }
}

/// Enum-based static dispatch for dialects.
///
/// The compiler generates a match statement instead of using vtable dispatch.
#[derive(Debug, Clone)]
pub enum DialectImpl {
    Mssql(MssqlDialect),
    Mysql(MysqlDialect),
    Postgres(PostgresDialect),
    Sqlite(SqliteDialect),
}

impl DialectImpl {
    /// Create the dialect implementation for a backend.
    pub fn new(kind: DialectKind) -> Self {
        match kind {
            DialectKind::Mssql => DialectImpl::Mssql(MssqlDialect::new()),
            DialectKind::Mysql => DialectImpl::Mysql(MysqlDialect::new()),
            DialectKind::Postgres => DialectImpl::Postgres(PostgresDialect::new()),
            DialectKind::Sqlite => DialectImpl::Sqlite(SqliteDialect::new()),
        }
    }

    /// Backend this implementation targets.
    pub fn kind(&self) -> DialectKind {
        match self {
            DialectImpl::Mssql(_) => DialectKind::Mssql,
            DialectImpl::Mysql(_) => DialectKind::Mysql,
            DialectImpl::Postgres(_) => DialectKind::Postgres,
            DialectImpl::Sqlite(_) => DialectKind::Sqlite,
        }
    }
}

impl Dialect for DialectImpl {
    fn name(&self) -> &str {
        match self {
            DialectImpl::Mssql(d) => d.name(),
            DialectImpl::Mysql(d) => d.name(),
            DialectImpl::Postgres(d) => d.name(),
            DialectImpl::Sqlite(d) => d.name(),
        }
    }

    fn display_name(&self) -> &str {
        match self {
            DialectImpl::Mssql(d) => d.display_name(),
            DialectImpl::Mysql(d) => d.display_name(),
            DialectImpl::Postgres(d) => d.display_name(),
            DialectImpl::Sqlite(d) => d.display_name(),
        }
    }

    fn core_module(&self) -> &str {
        match self {
            DialectImpl::Mssql(d) => d.core_module(),
            DialectImpl::Mysql(d) => d.core_module(),
            DialectImpl::Postgres(d) => d.core_module(),
            DialectImpl::Sqlite(d) => d.core_module(),
        }
    }

    fn table_builder(&self) -> &str {
        match self {
            DialectImpl::Mssql(d) => d.table_builder(),
            DialectImpl::Mysql(d) => d.table_builder(),
            DialectImpl::Postgres(d) => d.table_builder(),
            DialectImpl::Sqlite(d) => d.table_builder(),
        }
    }

    fn map_type(
        &self,
        field: &Field,
        kind: ColumnKind<'_>,
        imports: &mut Imports,
    ) -> Result<ColumnType> {
        match self {
            DialectImpl::Mssql(d) => d.map_type(field, kind, imports),
            DialectImpl::Mysql(d) => d.map_type(field, kind, imports),
            DialectImpl::Postgres(d) => d.map_type(field, kind, imports),
            DialectImpl::Sqlite(d) => d.map_type(field, kind, imports),
        }
    }

    fn default_idioms(&self) -> &DefaultIdioms {
        match self {
            DialectImpl::Mssql(d) => d.default_idioms(),
            DialectImpl::Mysql(d) => d.default_idioms(),
            DialectImpl::Postgres(d) => d.default_idioms(),
            DialectImpl::Sqlite(d) => d.default_idioms(),
        }
    }

    fn enum_declaration(&self, enum_def: &Enum, imports: &mut Imports) -> Option<String> {
        match self {
            DialectImpl::Mssql(d) => d.enum_declaration(enum_def, imports),
            DialectImpl::Mysql(d) => d.enum_declaration(enum_def, imports),
            DialectImpl::Postgres(d) => d.enum_declaration(enum_def, imports),
            DialectImpl::Sqlite(d) => d.enum_declaration(enum_def, imports),
        }
    }
}

//! Microsoft SQL Server driver.
//!
//! - [`MssqlDialect`]: schema syntax strategy for `drizzle-orm/mssql-core`

mod dialect;

pub use dialect::MssqlDialect;

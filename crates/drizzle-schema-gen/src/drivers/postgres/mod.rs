//! PostgreSQL driver.
//!
//! - [`PostgresDialect`]: schema syntax strategy for `drizzle-orm/pg-core`

mod dialect;

pub use dialect::PostgresDialect;

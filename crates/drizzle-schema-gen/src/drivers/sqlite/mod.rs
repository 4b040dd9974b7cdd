//! SQLite driver.
//!
//! - [`SqliteDialect`]: schema syntax strategy for `drizzle-orm/sqlite-core`

mod dialect;

pub use dialect::SqliteDialect;

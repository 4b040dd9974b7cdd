//! # drizzle-schema-gen
//!
//! Translate a relational datamodel (the JSON DMMF document produced by the
//! Prisma toolchain) into a Drizzle ORM TypeScript schema module.
//!
//! Four backends are supported:
//!
//! - **PostgreSQL** with native enums and array columns
//! - **MySQL** with inline enum columns
//! - **SQLite** with mode-tagged integer, blob and text columns
//! - **MSSQL** with identity columns and `getdate()` defaults
//!
//! Each run produces the import block, enum declarations, one table
//! declaration per model (foreign keys, indexes and composite keys included)
//! and a `defineRelations` map. Implicit many-to-many relations get a
//! synthesized junction table.
//!
//! ## Example
//!
//! ```rust,no_run
//! use drizzle_schema_gen::{Datamodel, DialectKind, Generator};
//!
//! fn main() -> drizzle_schema_gen::Result<()> {
//!     let datamodel = Datamodel::load("schema.json")?;
//!     let schema = Generator::new(DialectKind::Postgres).generate(&datamodel)?;
//!     println!("{}", schema);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod dialect;
pub mod drivers;
pub mod error;
pub mod orchestrator;
pub mod relations;

// Re-exports for convenient access
pub use config::{Config, OutputConfig};
pub use core::schema::Datamodel;
pub use drivers::{DialectImpl, DialectKind};
pub use error::{GeneratorError, Result};
pub use orchestrator::{generate_all, GeneratedSchema, Generator};

//! Core abstractions for schema generation.
//!
//! This module provides the foundational types and traits used throughout
//! the generator:
//!
//! - [`schema`]: Datamodel, model, field, enum and index types
//! - [`identifier`]: Escaping of names and raw SQL embedded in generated code
//! - [`value`]: Rendering of default values into TypeScript literals
//! - [`imports`]: Per-run import accumulator
//! - [`traits`]: The `Dialect` strategy implemented by each backend
//!
//! # Architecture
//!
//! The core module holds everything that is independent of the target
//! backend. Driver modules (`drivers/mssql`, `drivers/postgres`, etc.)
//! implement [`Dialect`] on top of it, and the orchestrator combines the two.

pub mod identifier;
pub mod imports;
pub mod schema;
pub mod traits;
pub mod value;

// Re-export commonly used types for convenience
pub use imports::Imports;
pub use schema::{
    Datamodel, DefaultGenerator, DefaultValue, Enum, EnumValue, Field, FieldKind, IndexDef,
    IndexField, Model, PrimaryKey, ScalarType, UniqueIndex,
};
pub use traits::Dialect;

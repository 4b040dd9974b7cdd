//! Helpers shared by the dialect drivers.

use crate::core::schema::Enum;
use crate::core::traits::Dialect;
use crate::dialect::enum_value_list;
use crate::error::GeneratorError;

/// Options argument shared by every 64-bit integer column.
pub const BIGINT_MODE: &str = "{ mode: 'bigint' }";

/// Options argument shared by every decimal column.
pub const DECIMAL_PRECISION: &str = "{ precision: 65, scale: 30 }";

/// Error for a scalar type the backend has no column for.
pub fn unsupported_type<D: Dialect + ?Sized>(dialect: &D, what: &str) -> GeneratorError {
    GeneratorError::unsupported_type(
        dialect.name(),
        format!(
            "Drizzle ORM doesn't support {} data type for {}",
            what,
            dialect.display_name()
        ),
    )
}

/// Stored values of an enum as a quoted list.
pub fn enum_values(enum_def: &Enum) -> String {
    enum_value_list(enum_def.values.iter().map(|v| v.stored_value()))
}

/// `{ enum: [...] }` options object for text-backed enum columns.
pub fn enum_option(enum_def: &Enum) -> String {
    format!("{{ enum: {} }}", enum_values(enum_def))
}

//! Error types for schema generation.

use thiserror::Error;

/// Exit code for configuration errors.
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for constructs the requested dialect cannot represent.
pub const EXIT_UNSUPPORTED: u8 = 2;
/// Exit code for malformed relation metadata.
pub const EXIT_RELATION_ERROR: u8 = 3;
/// Exit code for file system errors.
pub const EXIT_IO_ERROR: u8 = 7;

/// Main error type for generation runs.
///
/// A generation run never returns partial output: the first error aborts the
/// whole run and is handed back to the caller.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Scalar type with no representation on the dialect.
    #[error("{message}")]
    UnsupportedType { dialect: String, message: String },

    /// Default value shape with no representation on the dialect.
    #[error("{message}")]
    UnsupportedDefault { dialect: String, message: String },

    /// Enum field whose enum is not declared in the datamodel.
    #[error("Field {model}.{field} references unknown enum {name}")]
    UnknownEnum {
        model: String,
        field: String,
        name: String,
    },

    /// Relation carries a delete action outside the known set.
    #[error("Unknown delete action on relation {relation}: {action}")]
    UnknownDeleteAction { relation: String, action: String },

    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeneratorError {
    /// Create an UnsupportedType error.
    pub fn unsupported_type(dialect: impl Into<String>, message: impl Into<String>) -> Self {
        GeneratorError::UnsupportedType {
            dialect: dialect.into(),
            message: message.into(),
        }
    }

    /// Create an UnsupportedDefault error.
    pub fn unsupported_default(dialect: impl Into<String>, message: impl Into<String>) -> Self {
        GeneratorError::UnsupportedDefault {
            dialect: dialect.into(),
            message: message.into(),
        }
    }

    /// Whether the error describes a construct the dialect cannot express.
    pub fn is_unsupported_construct(&self) -> bool {
        matches!(
            self,
            GeneratorError::UnsupportedType { .. }
                | GeneratorError::UnsupportedDefault { .. }
                | GeneratorError::UnknownEnum { .. }
        )
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            GeneratorError::UnsupportedType { .. }
            | GeneratorError::UnsupportedDefault { .. }
            | GeneratorError::UnknownEnum { .. } => EXIT_UNSUPPORTED,
            GeneratorError::UnknownDeleteAction { .. } => EXIT_RELATION_ERROR,
            GeneratorError::Io(_) => EXIT_IO_ERROR,
            GeneratorError::Config(_) | GeneratorError::Yaml(_) | GeneratorError::Json(_) => {
                EXIT_CONFIG_ERROR
            }
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::drivers::DialectKind;

/// Placeholder replaced by the dialect name in output file names.
pub const DIALECT_PLACEHOLDER: &str = "{dialect}";

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the datamodel JSON document.
    pub schema: PathBuf,

    /// Where generated modules are written.
    pub output: OutputConfig,

    /// Dialects to generate (default: postgres).
    #[serde(default = "default_dialects")]
    pub dialects: Vec<DialectKind>,
}

/// Output location configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory.
    pub dir: PathBuf,

    /// File name template (default: "{dialect}-schema.ts").
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            file_name: default_file_name(),
        }
    }
}

impl OutputConfig {
    /// Output path for one dialect.
    pub fn path_for(&self, dialect: DialectKind) -> PathBuf {
        self.dir
            .join(self.file_name.replace(DIALECT_PLACEHOLDER, dialect.as_str()))
    }
}

fn default_dialects() -> Vec<DialectKind> {
    vec![DialectKind::Postgres]
}

fn default_file_name() -> String {
    format!("{}-schema.ts", DIALECT_PLACEHOLDER)
}

//! Configuration validation.

use std::collections::BTreeSet;

use super::{Config, DIALECT_PLACEHOLDER};
use crate::error::{GeneratorError, Result};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.schema.as_os_str().is_empty() {
        return Err(GeneratorError::Config("schema is required".into()));
    }
    if config.output.dir.as_os_str().is_empty() {
        return Err(GeneratorError::Config("output.dir is required".into()));
    }
    if config.output.file_name.is_empty() {
        return Err(GeneratorError::Config("output.file_name must not be empty".into()));
    }

    if config.dialects.is_empty() {
        return Err(GeneratorError::Config(
            "dialects must name at least one dialect".into(),
        ));
    }
    let mut seen = BTreeSet::new();
    for dialect in &config.dialects {
        if !seen.insert(dialect) {
            return Err(GeneratorError::Config(format!(
                "dialect '{}' is listed more than once",
                dialect
            )));
        }
    }

    // Several dialects would overwrite the same file
    if config.dialects.len() > 1 && !config.output.file_name.contains(DIALECT_PLACEHOLDER) {
        return Err(GeneratorError::Config(format!(
            "output.file_name must contain '{}' when generating {} dialects",
            DIALECT_PLACEHOLDER,
            config.dialects.len()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use crate::drivers::DialectKind;

    fn valid_config() -> Config {
        Config {
            schema: "prisma/schema.json".into(),
            output: OutputConfig {
                dir: "src/db".into(),
                file_name: "{dialect}-schema.ts".to_string(),
            },
            dialects: vec![DialectKind::Postgres, DialectKind::Mysql],
        }
    }

    #[test]
    fn test_valid_config() {
        let config = valid_config();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_missing_schema() {
        let mut config = valid_config();
        config.schema = "".into();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_missing_output_dir() {
        let mut config = valid_config();
        config.output.dir = "".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("output.dir"));
    }

    #[test]
    fn test_no_dialects() {
        let mut config = valid_config();
        config.dialects.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_duplicate_dialect() {
        let mut config = valid_config();
        config.dialects.push(DialectKind::Postgres);
        let err = validate(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: dialect 'postgres' is listed more than once"
        );
    }

    #[test]
    fn test_fixed_file_name_needs_single_dialect() {
        let mut config = valid_config();
        config.output.file_name = "schema.ts".to_string();
        assert!(validate(&config).is_err());

        config.dialects = vec![DialectKind::Sqlite];
        assert!(validate(&config).is_ok());
    }
}

//! drizzle-schema-gen CLI - Drizzle ORM schema modules from a Prisma datamodel.

use clap::{Args, Parser, Subcommand};
use drizzle_schema_gen::{generate_all, Config, Datamodel, DialectKind, GeneratorError, OutputConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(name = "drizzle-schema-gen")]
#[command(about = "Generate Drizzle ORM schema modules from a Prisma datamodel")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "warn")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

/// Overrides shared by every subcommand.
#[derive(Args)]
struct Overrides {
    /// Override the datamodel JSON path
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Override the output directory
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Override the dialects to generate (repeatable or comma-separated)
    #[arg(long, value_delimiter = ',')]
    dialect: Vec<DialectKind>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one schema module per dialect
    Generate {
        #[command(flatten)]
        overrides: Overrides,

        /// Print the modules to stdout instead of writing files
        #[arg(long)]
        stdout: bool,
    },

    /// Generate every dialect without writing, reporting the first failure
    Check {
        #[command(flatten)]
        overrides: Overrides,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), GeneratorError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format).map_err(GeneratorError::Config)?;

    match cli.command {
        Commands::Generate { overrides, stdout } => {
            let config = resolve_config(cli.config.as_ref(), overrides)?;
            let datamodel = Datamodel::load(&config.schema)?;
            info!(
                "Loaded {} models and {} enums from {:?}",
                datamodel.models.len(),
                datamodel.enums.len(),
                config.schema
            );

            let schemas = generate_all(&datamodel, &config.dialects)?;

            if stdout {
                for schema in &schemas {
                    println!("{}", schema.content);
                }
                return Ok(());
            }

            std::fs::create_dir_all(&config.output.dir)?;
            let mut written = Vec::with_capacity(schemas.len());
            for schema in &schemas {
                let path = config.output.path_for(schema.dialect);
                std::fs::write(&path, format!("{}\n", schema.content))?;
                info!("{}: wrote {:?}", schema.dialect, path);
                written.push((schema.dialect, path));
            }

            if cli.output_json {
                let files: Vec<_> = written
                    .iter()
                    .map(|(dialect, path)| serde_json::json!({ "dialect": dialect, "path": path }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&files)?);
            } else {
                for (dialect, path) in &written {
                    println!("{}: {}", dialect, path.display());
                }
            }
        }

        Commands::Check { overrides } => {
            let config = resolve_config(cli.config.as_ref(), overrides)?;
            let datamodel = Datamodel::load(&config.schema)?;
            let schemas = generate_all(&datamodel, &config.dialects)?;

            if cli.output_json {
                let dialects: Vec<_> = schemas.iter().map(|s| s.dialect).collect();
                println!("{}", serde_json::json!({ "ok": true, "dialects": dialects }));
            } else {
                for schema in &schemas {
                    println!("{}: OK", schema.dialect);
                }
            }
        }
    }

    Ok(())
}

/// Load the configuration file, if any, and apply command-line overrides.
fn resolve_config(path: Option<&PathBuf>, overrides: Overrides) -> Result<Config, GeneratorError> {
    let mut config = match path {
        Some(path) => {
            let config = Config::load(path)?;
            info!("Loaded configuration from {:?}", path);
            config
        }
        None => {
            let schema = overrides.schema.clone().ok_or_else(|| {
                GeneratorError::Config("--schema is required when no --config is given".to_string())
            })?;
            Config {
                schema,
                output: OutputConfig::default(),
                dialects: vec![DialectKind::Postgres],
            }
        }
    };

    if let Some(schema) = overrides.schema {
        config.schema = schema;
    }
    if let Some(dir) = overrides.out_dir {
        config.output.dir = dir;
    }
    if !overrides.dialect.is_empty() {
        config.dialects = overrides.dialect;
    }

    config.validate()?;
    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

fn setup_logging(verbosity: &str, format: &str) -> Result<(), String> {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // Logs go to stderr so generated modules can be piped from stdout
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        "json" => subscriber.json().init(),
        "text" => subscriber.init(),
        other => return Err(format!("Unknown log format: '{}'", other)),
    }

    Ok(())
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};

use crate::config::{FcConfig, OutputFormat};
use crate::error::{ConfigError, FcError, Result, ResultExt, ValidationError};
use crate::rules::{RuleKind, RuleRegistry, SchemaValidator, ValidationReport};
use crate::schema::Schema;

use super::args::{CheckArgs, Cli, Commands, InitArgs};

/// Options resolved from the config file and global flags.
struct Settings {
    format: OutputFormat,
    strict: bool,
}

impl Settings {
    fn resolve(cli: &Cli, config: &FcConfig) -> Self {
        Self {
            format: cli.format.unwrap_or(config.output.format),
            strict: cli.strict || config.validation.strict,
        }
    }
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        FcConfig::load_from(config_path)?
    } else {
        FcConfig::load()?
    };

    if !config.output.color {
        console::set_colors_enabled(false);
    }

    let settings = Settings::resolve(&cli, &config);

    // Dispatch to the appropriate command handler
    match &cli.command {
        Commands::Check(args) => run_check(&settings, args),
        Commands::Demo => run_demo(&settings),
        Commands::Rules => run_rules(&settings),
        Commands::Version => run_version(),
        Commands::Init(args) => run_init(args),
    }
}

/// Run the check command.
fn run_check(settings: &Settings, args: &CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let schema = Schema::load(&args.schema)?;
    let validator = SchemaValidator::default();

    if settings.strict {
        validator.check_schema(&schema)?;
    }

    let input = read_input(args.input.as_deref())?;
    let objects = input_objects(&input)?;

    let reports: Vec<ValidationReport> = objects
        .iter()
        .map(|obj| validator.validate(obj, &schema))
        .collect();

    match (settings.format, input.is_array()) {
        (OutputFormat::Json, true) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&reports).unwrap_or_default()
            );
        }
        (format, _) => {
            for report in &reports {
                report.print(format);
            }
        }
    }

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    if invalid > 0 {
        Err(FcError::Validation(ValidationError::Failed {
            invalid,
            total: reports.len(),
        }))
    } else {
        Ok(())
    }
}

/// Read and parse the input document from a file or stdin.
fn read_input(path: Option<&Path>) -> Result<Value> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .context(format!("reading input {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    serde_json::from_str::<Value>(&content).context("parsing input")
}

/// Split the input into the objects to validate.
fn input_objects(input: &Value) -> Result<Vec<&Map<String, Value>>> {
    match input {
        Value::Object(obj) => Ok(vec![obj]),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_object()
                    .ok_or(FcError::Validation(ValidationError::UnsupportedInput))
            })
            .collect(),
        _ => Err(FcError::Validation(ValidationError::UnsupportedInput)),
    }
}

/// Run the demo command.
fn run_demo(settings: &Settings) -> Result<()> {
    use super::demo::{demo_schema, invalid_input, valid_input};

    tracing::debug!("Running demo command");

    let schema = demo_schema();
    let validator = SchemaValidator::default();
    let valid = validator.validate(&valid_input(), &schema);
    let invalid = validator.validate(&invalid_input(), &schema);

    match settings.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "valid_input": valid,
                "invalid_input": invalid,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        OutputFormat::Text => {
            println!("Valid input test:");
            valid.print(OutputFormat::Text);
            println!("\nInvalid input test:");
            invalid.print(OutputFormat::Text);
        }
    }

    Ok(())
}

/// Run the rules command.
fn run_rules(settings: &Settings) -> Result<()> {
    let rules = RuleRegistry::shared().rules();

    match settings.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&rules).unwrap_or_default()
            );
        }
        OutputFormat::Text => {
            for rule in &rules {
                let usage = match rule.kind {
                    RuleKind::Named => format!("\"{}\"", rule.name),
                    RuleKind::Parameterized => {
                        format!("{{\"name\": \"{}\", \"arg\": N}}", rule.name)
                    }
                };
                println!(
                    "{:<36} {}",
                    usage,
                    console::style(&rule.code).yellow()
                );
            }
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("fieldcheck {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: &InitArgs) -> Result<()> {
    use crate::config::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("fieldcheck.toml");

    if config_path.exists() && !args.force {
        return Err(FcError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).context("writing fieldcheck.toml")?;

    println!("✓ Created fieldcheck.toml");

    Ok(())
}

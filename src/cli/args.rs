// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

/// fieldcheck - declarative field validation
///
/// Validates JSON objects against a schema of per-field rules.
#[derive(Parser, Debug)]
#[command(name = "fieldcheck")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Declarative field validation for JSON objects", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for reports
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Reject schemas that reference unknown rules
    #[arg(long, global = true)]
    pub strict: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FIELDCHECK_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate input against a schema
    Check(CheckArgs),

    /// Run the built-in sample schema against a valid and an invalid input
    Demo,

    /// List the available rules and their error codes
    Rules,

    /// Print version information
    Version,

    /// Initialize fieldcheck configuration
    Init(InitArgs),
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Schema file (JSON)
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Input file (JSON object or array of objects); reads stdin if omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

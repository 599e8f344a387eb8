//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for nbreport using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// nbreport - Notebook to PDF Report Export Tool
#[derive(Parser, Debug)]
#[command(name = "nbreport")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "nbreport.toml", env = "NBREPORT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "NBREPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the configured notebook to a PDF report
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for MediVault using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// MediVault - Inventory Export Tool
#[derive(Parser, Debug)]
#[command(name = "medivault")]
#[command(version, about, long_about = None)]
#[command(author = "MediVault Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "medivault.toml", env = "MEDIVAULT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MEDIVAULT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the inventory as CSV (or a photo-bundling ZIP backup)
    Export(commands::export::ExportArgs),

    /// Show inventory counts from the configured store
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

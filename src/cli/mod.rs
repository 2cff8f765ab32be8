// ABOUTME: CLI argument parsing and command routing for signup
//
// Provides command-line interface for:
// - Running the interactive wizard (tui, default)
// - Computing an order summary headlessly (summary)
// - Inspecting per-step wizard state (steps)
// - Printing or writing the effective configuration (config)

pub mod config;
pub mod steps;
pub mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::AppConfig;

/// Multi-step subscription signup form
#[derive(Parser)]
#[command(name = "signup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use only this configuration file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive wizard (default if no command given)
    Tui,

    /// Print the order summary for a plan, billing period and add-ons
    Summary(SummaryArgs),

    /// Print panel, indicators and navigation state for every step
    Steps,

    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

/// Arguments for the summary command
#[derive(clap::Args, Debug, Default)]
pub struct SummaryArgs {
    /// Plan name (case-insensitive)
    #[arg(long)]
    pub plan: String,

    /// Bill yearly instead of monthly
    #[arg(long)]
    pub yearly: bool,

    /// Add-on title, repeatable (case-insensitive)
    #[arg(long = "addon")]
    pub addons: Vec<String>,
}

/// Arguments for the config command
#[derive(clap::Args, Debug, Default)]
pub struct ConfigArgs {
    /// Write the configuration to this file instead of printing it
    #[arg(long)]
    pub write: Option<PathBuf>,
}

/// Problems with command-line selections
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unknown plan '{name}' (available: {available})")]
    UnknownPlan { name: String, available: String },

    #[error("unknown add-on '{name}' (available: {available})")]
    UnknownAddon { name: String, available: String },
}

/// Explicit `--config` file, or the layered default locations
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
}

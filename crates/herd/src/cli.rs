//! CLI definitions for the `herd` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Herd - store unicorns in SQLite or in memory
#[derive(Debug, Parser)]
#[command(name = "herd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Storage backend.
    #[arg(long, short, env = "HERD_BACKEND", default_value = "sqlite")]
    pub backend: Backend,

    /// Property file read when the deployment marker is not set.
    #[arg(long, env = "HERD_PROPERTIES", default_value = "config.properties")]
    pub properties: PathBuf,

    /// Output format.
    #[arg(long, short, default_value = "pretty")]
    pub output: OutputFormat,

    /// Replace the store contents with the sample unicorns first.
    #[arg(long)]
    pub seed: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Storage backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Volatile `HashMap` store.
    Memory,
    /// SQLite database reached through the connection pool.
    Sqlite,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run the create/get/update/delete walkthrough (default).
    #[default]
    Demo,
    /// List every stored unicorn.
    List,
}

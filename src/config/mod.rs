pub mod page;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "form-enhancer")]
#[command(about = "Normalize form field input and replay page interactions")]
pub struct CliConfig {
    /// Path to a TOML configuration file with extra field rules
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Transform a single value the way the field's input handler would
    Apply {
        #[arg(short, long)]
        field: String,
        value: String,
    },
    /// List the effective field table
    Fields {
        #[arg(long)]
        json: bool,
    },
    /// Load a page fixture, replay its events and print a JSON report
    Simulate {
        #[arg(short, long)]
        page: PathBuf,

        /// Emit logs as JSON lines on stderr
        #[arg(long)]
        json_logs: bool,
    },
}

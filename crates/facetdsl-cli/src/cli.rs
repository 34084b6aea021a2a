use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors (default)
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser)]
#[command(name = "facetdsl")]
#[command(about = "facetdsl - translate faceted-search URLs into DSL queries")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses config file value or defaults to 'warn'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/facetdsl/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides config file)
    #[arg(short = 'f', long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate a URL into a DSL query
    Convert {
        /// Faceted-search URL, e.g. https://app.dimensions.ai/discover/publication?and_facet_year=2024
        url: String,

        /// Facet for the `return` clause (defaults to the detected entity type)
        #[arg(short = 'r', long = "return", value_name = "FACET")]
        return_facet: Option<String>,

        /// Drop repeated values within an OR group
        #[arg(long)]
        dedupe: bool,

        /// Accept URLs from any host
        #[arg(long)]
        any_host: bool,
    },

    /// Print the entity type a URL targets
    Detect {
        url: String,
    },

    /// List the return facets offered for an entity type
    Facets {
        /// Entity type (publications, grants, datasets, patents, clinical_trials, policy_documents)
        entity: String,
    },

    /// Show the facet-to-field mapping for an entity type
    Catalog {
        /// Entity type (publications, grants, datasets, patents, clinical_trials, policy_documents)
        entity: String,
    },

    /// List all entity types
    Entities,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize a new config file
    Init {
        /// Path for the config file (defaults to ~/.config/facetdsl/config.toml)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite existing config file
        #[arg(short = 'F', long)]
        force: bool,
    },

    /// Show the current effective configuration as TOML
    Show,

    /// Print the config file path in use
    Path,
}

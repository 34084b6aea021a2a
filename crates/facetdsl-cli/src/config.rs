use anyhow::{Context, Result};
use clap::ValueEnum;
use facetdsl_query::{BuilderOptions, EngineOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::cli::{LogLevel, OutputFormat};

/// Host the source site serves its search pages from
pub const DEFAULT_REQUIRED_HOST: &str = "app.dimensions.ai";

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log level used when neither --log-level nor --verbose is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,

    /// Translation settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Translation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Only accept URLs on this host; empty disables the check
    #[serde(default = "default_required_host")]
    pub required_host: String,

    /// Drop repeated values within an OR group
    #[serde(default)]
    pub dedupe_or_values: bool,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            required_host: default_required_host(),
            dedupe_or_values: false,
        }
    }
}

fn default_required_host() -> String {
    DEFAULT_REQUIRED_HOST.to_string()
}

/// An environment override that was ignored because its value did not parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvRejection {
    pub key: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl std::fmt::Display for EnvRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ignoring {}={:?}, expected {}", self.key, self.value, self.expected)
    }
}

impl EnvRejection {
    /// Report through tracing; call once a subscriber is installed
    pub fn log(&self) {
        warn!("{}", self);
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl CliConfig {
    /// Load configuration with precedence: defaults < file < env < args
    ///
    /// Logging is usually not set up yet, so rejected environment values
    /// are returned for the caller to report.
    pub fn load(
        config_file: Option<PathBuf>,
        format: Option<OutputFormat>,
    ) -> Result<(Self, Vec<EnvRejection>)> {
        let mut config = Self::from_file_or_default(config_file)?;

        let rejected = config.apply_env(|key| std::env::var(key).ok());

        if let Some(format) = format {
            config.output.format = format;
        }

        Ok((config, rejected))
    }

    /// Apply `FACETDSL_*` overrides from `lookup`, returning the ones that did not parse
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<EnvRejection> {
        let mut rejected = Vec::new();

        if let Some(host) = lookup("FACETDSL_REQUIRED_HOST") {
            self.translation.required_host = host;
        }
        if let Some(raw) = lookup("FACETDSL_DEDUPE_OR_VALUES") {
            match parse_bool(&raw) {
                Some(flag) => self.translation.dedupe_or_values = flag,
                None => rejected.push(EnvRejection {
                    key: "FACETDSL_DEDUPE_OR_VALUES",
                    value: raw,
                    expected: "a boolean",
                }),
            }
        }
        if let Some(raw) = lookup("FACETDSL_FORMAT") {
            match OutputFormat::from_str(&raw, true) {
                Ok(format) => self.output.format = format,
                Err(_) => rejected.push(EnvRejection {
                    key: "FACETDSL_FORMAT",
                    value: raw,
                    expected: "text or json",
                }),
            }
        }

        rejected
    }

    /// The host check, if enabled
    pub fn required_host(&self) -> Option<&str> {
        let host = self.translation.required_host.trim();
        (!host.is_empty()).then_some(host)
    }

    /// Engine options derived from this config
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            required_host: self.required_host().map(str::to_string),
            builder: BuilderOptions {
                dedupe_or_values: self.translation.dedupe_or_values,
            },
        }
    }

    /// Get default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = match std::env::var_os("FACETDSL_CONFIG_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .context("Could not determine config directory")?
                .join("facetdsl"),
        };
        Ok(config_dir.join("config.toml"))
    }

    /// Create a new config file with example values
    pub fn create_example(path: &Path) -> Result<()> {
        let example = r#"# facetdsl Configuration
# Location: ~/.config/facetdsl/config.toml

# Log level when --log-level/--verbose are not given
# Options: off, error, warn, info, debug, trace
# log_level = "warn"

[translation]
# Reject URLs that are not on this host; set to "" to accept any host
required_host = "app.dimensions.ai"

# Collapse repeated identical values inside an OR group
# e.g. or_facet_for=1101&or_facet_for=1101 -> category_for = "1101"
dedupe_or_values = false

[output]
# Options: text, json
format = "text"
"#;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        std::fs::write(path, example).context("Failed to write config file")?;

        Ok(())
    }

    /// Load config from file or return default
    fn from_file_or_default(config_file: Option<PathBuf>) -> Result<Self> {
        let path = config_file
            .or_else(|| Self::default_config_path().ok())
            .filter(|p| p.exists());

        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Display the current configuration as TOML
    pub fn display_as_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config as TOML")
    }
}

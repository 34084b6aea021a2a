use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::ConfigCommands;
use crate::config::CliConfig;

/// Execute config subcommand
pub fn execute(cmd: ConfigCommands, config: &CliConfig, config_path: Option<PathBuf>) -> Result<()> {
    match cmd {
        ConfigCommands::Init { path, force } => init(path.or(config_path), force),
        ConfigCommands::Show => show(config),
        ConfigCommands::Path => path(config_path),
    }
}

/// Initialize a new config file
pub fn init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = match path {
        Some(path) => path,
        None => CliConfig::default_config_path().context("Could not determine config file path")?,
    };

    if config_path.exists() && !force {
        println!(
            "{} Config file already exists at: {}",
            "Error:".red().bold(),
            config_path.display()
        );
        println!("Use {} to overwrite", "--force".yellow());
        return Ok(());
    }

    CliConfig::create_example(&config_path)?;

    println!(
        "{} Created config file at: {}",
        "Success:".green().bold(),
        config_path.display()
    );

    Ok(())
}

/// Show the current effective configuration
pub fn show(config: &CliConfig) -> Result<()> {
    println!("{}", config.display_as_toml()?);
    Ok(())
}

/// Print the config file location
pub fn path(config_path: Option<PathBuf>) -> Result<()> {
    let path = match config_path {
        Some(path) => path,
        None => CliConfig::default_config_path()?,
    };
    let status = if path.exists() { "" } else { " (not created)" };
    println!("{}{}", path.display(), status.dimmed());
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use facetdsl_cli::{
    cli::{Cli, Commands, ConfigCommands},
    commands::{self, convert::ConvertArgs},
    config, logging,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // These must keep working when the config file itself is broken
    match &cli.command {
        Commands::Config(ConfigCommands::Init { path, force }) => {
            logging::init(logging::resolve_level(cli.verbose, cli.log_level, None));
            return commands::config::init(path.clone().or(cli.config), *force);
        }
        Commands::Config(ConfigCommands::Path) => {
            logging::init(logging::resolve_level(cli.verbose, cli.log_level, None));
            return commands::config::path(cli.config);
        }
        _ => {}
    }

    // Load configuration with CLI overrides
    let (config, rejected) = config::CliConfig::load(cli.config.clone(), cli.format)?;

    logging::init(logging::resolve_level(
        cli.verbose,
        cli.log_level,
        config.log_level,
    ));
    for rejection in &rejected {
        rejection.log();
    }
    debug!(?config, "configuration loaded");

    let format = config.output.format;
    match cli.command {
        Commands::Convert {
            url,
            return_facet,
            dedupe,
            any_host,
        } => commands::convert::execute(
            &config,
            ConvertArgs {
                url,
                return_facet,
                dedupe,
                any_host,
            },
        )?,

        Commands::Detect { url } => commands::detect::execute(&url, format)?,

        Commands::Facets { entity } => commands::facets::execute(&entity, format)?,

        Commands::Catalog { entity } => commands::catalog::execute(&entity, format)?,

        Commands::Entities => commands::entities::execute(format)?,

        Commands::Config(cmd) => commands::config::execute(cmd, &config, cli.config)?,
    }

    Ok(())
}

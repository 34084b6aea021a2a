use anyhow::{Context, Result};
use colored::Colorize;
use facetdsl_query::{TranslationEngine, TranslationResult};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::error::CliError;

/// Flags accepted by `convert`
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    pub url: String,
    pub return_facet: Option<String>,
    pub dedupe: bool,
    pub any_host: bool,
}

/// Translate and check the return facet against the detected entity
pub fn translate(config: &CliConfig, args: &ConvertArgs) -> Result<TranslationResult> {
    let mut options = config.engine_options();
    if args.dedupe {
        options.builder.dedupe_or_values = true;
    }
    if args.any_host {
        options.required_host = None;
    }
    debug!(?options, "converting URL");

    let engine = TranslationEngine::new(options);
    let result = engine
        .translate(&args.url, args.return_facet.as_deref())
        .context("Failed to translate URL")?;

    let allowed = TranslationEngine::available_return_facets(result.entity_type);
    if !allowed.iter().any(|f| *f == result.return_facet) {
        return Err(CliError::InvalidReturnFacet {
            facet: result.return_facet,
            entity: result.entity_type,
            allowed: allowed.to_vec(),
        }
        .into());
    }

    Ok(result)
}

/// Execute convert command
pub fn execute(config: &CliConfig, args: ConvertArgs) -> Result<()> {
    let result = translate(config, &args)?;

    match config.output.format {
        OutputFormat::Text => {
            println!("{}", result.query);
            if let Some(warning) = result.unsupported_warning() {
                eprintln!("{}", warning.yellow());
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .context("Failed to serialize translation result")?;
            println!("{}", json);
        }
    }

    Ok(())
}

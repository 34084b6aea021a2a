use anyhow::Result;
use facetdsl_query::TranslationEngine;

use crate::cli::OutputFormat;
use crate::commands::parse_entity;

/// Execute facets command
pub fn execute(entity: &str, format: OutputFormat) -> Result<()> {
    let entity = parse_entity(entity)?;
    let facets = TranslationEngine::available_return_facets(entity);

    match format {
        OutputFormat::Text => {
            for facet in facets {
                println!("{}", facet);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(facets)?),
    }

    Ok(())
}

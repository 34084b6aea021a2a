use anyhow::{Context, Result};
use facetdsl_query::detect_entity_type;
use serde_json::json;

use crate::cli::OutputFormat;

/// Execute detect command
pub fn execute(url: &str, format: OutputFormat) -> Result<()> {
    let entity = detect_entity_type(url).context("Could not detect entity type")?;

    match format {
        OutputFormat::Text => println!("{}", entity),
        OutputFormat::Json => println!("{}", json!({ "entity_type": entity })),
    }

    Ok(())
}

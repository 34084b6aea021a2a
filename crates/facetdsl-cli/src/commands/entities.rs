use anyhow::Result;
use facetdsl_query::EntityType;

use crate::cli::OutputFormat;

/// Execute entities command
pub fn execute(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for entity in EntityType::ALL {
                println!("{}", entity);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&EntityType::ALL)?),
    }

    Ok(())
}

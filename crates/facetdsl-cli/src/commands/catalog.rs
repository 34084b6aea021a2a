use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use facetdsl_query::{EntityType, FacetCatalog, FacetTarget};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::parse_entity;

/// One facet mapping as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRow {
    pub facet: &'static str,
    /// `None` when the entity has no field for this facet
    pub field: Option<&'static str>,
    pub numeric: bool,
}

/// Rows for `entity` in catalog order
pub fn rows(entity: EntityType) -> Vec<CatalogRow> {
    let catalog = FacetCatalog::builtin().for_entity(entity);
    catalog
        .entries()
        .iter()
        .map(|&(facet, target)| match target {
            FacetTarget::Field(field) => CatalogRow {
                facet,
                field: Some(field),
                numeric: catalog.is_numeric(field),
            },
            FacetTarget::Unsupported => CatalogRow {
                facet,
                field: None,
                numeric: false,
            },
        })
        .collect()
}

fn render_table(rows: &[CatalogRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["URL facet", "DSL field", "Numeric"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.facet),
            Cell::new(row.field.unwrap_or("unsupported")),
            Cell::new(if row.numeric { "yes" } else { "" }),
        ]);
    }
    table
}

/// Execute catalog command
pub fn execute(entity: &str, format: OutputFormat) -> Result<()> {
    let entity = parse_entity(entity)?;
    let rows = rows(entity);

    match format {
        OutputFormat::Text => println!("{}", render_table(&rows)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    Ok(())
}

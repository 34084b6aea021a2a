//! Subcommand implementations.

pub mod catalog;
pub mod config;
pub mod convert;
pub mod detect;
pub mod entities;
pub mod facets;

use anyhow::{Context, Result};
use facetdsl_query::EntityType;

/// Parse an entity type argument
pub(crate) fn parse_entity(raw: &str) -> Result<EntityType> {
    raw.parse::<EntityType>()
        .with_context(|| format!("Invalid entity type argument '{}'", raw))
}

//! Errors raised at the CLI boundary.

use facetdsl_query::EntityType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("'{facet}' cannot be returned for {entity}; choose one of: {}", allowed.join(", "))]
    InvalidReturnFacet {
        facet: String,
        entity: EntityType,
        allowed: Vec<&'static str>,
    },
}

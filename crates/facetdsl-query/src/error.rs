//! Error types for the translation pipeline.

use thiserror::Error;

/// Why an input was rejected before any translation happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputRejection {
    /// The input was empty or only whitespace
    Blank,
    /// The URL parsed but points at a host other than the expected one
    ForeignHost {
        expected: String,
        found: Option<String>,
    },
}

impl std::fmt::Display for InputRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputRejection::Blank => write!(f, "no URL given"),
            InputRejection::ForeignHost { expected, found } => match found {
                Some(host) => write!(f, "expected a {} URL, got host '{}'", expected, host),
                None => write!(f, "expected a {} URL, got a URL without a host", expected),
            },
        }
    }
}

/// Errors that abort a translation.
///
/// Unsupported facets are not errors; they are reported in
/// [`TranslationResult::unsupported_facets`](crate::TranslationResult).
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Empty input: {reason}")]
    EmptyInput { reason: InputRejection },

    #[error("Malformed URL '{input}': {source}")]
    MalformedUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

/// Errors raised while building a facet catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{entity}: numeric field '{field}' is not the target of any facet")]
    OrphanNumericField { entity: String, field: String },

    #[error("{entity}: facet key '{key}' is mapped more than once")]
    DuplicateFacetKey { entity: String, key: String },

    #[error("{entity}: no facet table")]
    MissingTable { entity: String },

    #[error("{entity}: return facets must start with '{entity}'")]
    MissingEntityFacet { entity: String },

    #[error("{entity}: empty return facet name")]
    EmptyReturnFacet { entity: String },
}

/// Error for strings that do not name an entity type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown entity type '{input}' (expected one of: {expected})")]
pub struct EntityParseError {
    pub input: String,
    pub expected: String,
}

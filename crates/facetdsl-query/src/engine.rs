//! Translation facade.
//!
//! `TranslationEngine::translate` runs the whole pipeline for one URL:
//! detect the entity type, decode the query string, build conditions against
//! the catalog and render the DSL text. Each call is independent; the engine
//! only holds read-only configuration.

use crate::builder::{BuilderOptions, ConditionBuilder};
use crate::catalog::{self, FacetCatalog};
use crate::entity::EntityType;
use crate::error::{InputRejection, TranslateError};
use crate::ir::DslQuery;
use crate::params;
use crate::render::{DslRenderer, QueryRenderer};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// When set, URLs on any other host are rejected before translation
    #[serde(default)]
    pub required_host: Option<String>,
    #[serde(default)]
    pub builder: BuilderOptions,
}

/// Result of a successful translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub query: String,
    pub entity_type: EntityType,
    pub return_facet: String,
    /// Facet keys that produced no condition, duplicates kept, in URL order
    pub unsupported_facets: Vec<String>,
}

impl TranslationResult {
    /// User-facing warning naming every skipped facet, or `None` if none were.
    pub fn unsupported_warning(&self) -> Option<String> {
        if self.unsupported_facets.is_empty() {
            return None;
        }
        let names = self
            .unsupported_facets
            .iter()
            .map(|f| format!("\"{}\"", f))
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!(
            "Warning: The following filters are not supported in the {} API and were not \
             included: {}. All other filters were processed.",
            self.entity_type, names
        ))
    }
}

/// Translates faceted-search URLs into DSL queries.
pub struct TranslationEngine {
    catalog: &'static FacetCatalog,
    renderer: Box<dyn QueryRenderer>,
    options: EngineOptions,
}

impl Default for TranslationEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl TranslationEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            catalog: FacetCatalog::builtin(),
            renderer: Box::new(DslRenderer),
            options,
        }
    }

    /// Swap the renderer (the default is [`DslRenderer`])
    pub fn with_renderer(mut self, renderer: impl QueryRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Return facets a caller may offer for `entity`.
    pub fn available_return_facets(entity: EntityType) -> &'static [&'static str] {
        catalog::available_return_facets(entity)
    }

    /// Translate `input` into a DSL query.
    ///
    /// `return_facet` defaults to the detected entity type when `None` or
    /// blank. It is not checked against the entity's return facets.
    pub fn translate(
        &self,
        input: &str,
        return_facet: Option<&str>,
    ) -> Result<TranslationResult, TranslateError> {
        let url = self.parse_input(input)?;
        let entity = EntityType::from_path(url.path());
        let params = params::parse_query(url.query().unwrap_or_default());

        let built = ConditionBuilder::new(self.catalog.for_entity(entity))
            .with_options(self.options.builder.clone())
            .build(&params);

        let return_facet = return_facet
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(entity.as_str())
            .to_string();

        debug!(
            %entity,
            conditions = built.conditions.len(),
            unsupported = built.unsupported.len(),
            renderer = self.renderer.name(),
            "translated URL"
        );

        let query = DslQuery {
            entity,
            conditions: built.conditions,
            return_facet,
        };

        Ok(TranslationResult {
            query: self.renderer.render(&query),
            entity_type: entity,
            return_facet: query.return_facet,
            unsupported_facets: built.unsupported,
        })
    }

    fn parse_input(&self, input: &str) -> Result<Url, TranslateError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TranslateError::EmptyInput {
                reason: InputRejection::Blank,
            });
        }

        let url = Url::parse(input).map_err(|source| TranslateError::MalformedUrl {
            input: input.to_string(),
            source,
        })?;

        if let Some(expected) = self.options.required_host.as_deref() {
            let matches = url
                .host_str()
                .is_some_and(|host| host.eq_ignore_ascii_case(expected));
            if !matches {
                return Err(TranslateError::EmptyInput {
                    reason: InputRejection::ForeignHost {
                        expected: expected.to_string(),
                        found: url.host_str().map(str::to_string),
                    },
                });
            }
        }

        Ok(url)
    }
}

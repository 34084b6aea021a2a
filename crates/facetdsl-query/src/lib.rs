//! # facetdsl-query
//!
//! Translation pipeline from faceted-search URLs to a three-clause search DSL.
//!
//! ```text
//! URL ──► entity::EntityType::from_path ──► catalog::EntityCatalog
//!     └─► params::parse_query ──► builder::ConditionBuilder ──► render::DslRenderer
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use facetdsl_query::TranslationEngine;
//!
//! let engine = TranslationEngine::default();
//! let result = engine
//!     .translate(
//!         "https://app.dimensions.ai/discover/grant?and_facet_year=2020",
//!         None,
//!     )
//!     .unwrap();
//! assert_eq!(result.query, "search grants\nwhere start_year = 2020\nreturn grants");
//! ```

pub mod builder;
pub mod catalog;
pub mod engine;
pub mod entity;
pub mod error;
pub mod ir;
pub mod params;
pub mod render;

pub use builder::{BuilderOptions, ConditionBuilder};
pub use catalog::{available_return_facets, FacetCatalog, FacetTarget};
pub use engine::{EngineOptions, TranslationEngine, TranslationResult};
pub use entity::{detect_entity_type, EntityType};
pub use error::{CatalogError, EntityParseError, InputRejection, TranslateError};
pub use ir::{Condition, DslQuery, Literal};
pub use render::{DslRenderer, QueryRenderer};

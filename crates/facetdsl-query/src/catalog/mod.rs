//! Per-entity facet catalog.
//!
//! The catalog is the single source of truth for how a URL facet key maps to
//! a DSL field, which DSL fields take numeric literals, and which facets can
//! be requested in the `return` clause. It is validated once when built and
//! never mutated afterwards.

mod tables;

use crate::entity::EntityType;
use crate::error::CatalogError;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Process-wide built-in catalog.
static BUILTIN: Lazy<FacetCatalog> = Lazy::new(|| {
    FacetCatalog::new(EntityType::ALL.map(tables::table_for))
        .expect("built-in facet tables are consistent")
});

/// What a URL facet key resolves to for one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum FacetTarget {
    /// The facet maps onto this DSL field
    Field(&'static str),
    /// Known URL facet with no counterpart in this entity's schema
    Unsupported,
}

/// Raw table data for one entity type, before validation.
#[derive(Debug, Clone)]
pub struct EntityTable {
    pub entity: EntityType,
    pub facets: Vec<(&'static str, Option<&'static str>)>,
    pub numeric_fields: Vec<&'static str>,
    pub return_facets: Vec<&'static str>,
}

/// Validated catalog for a single entity type.
#[derive(Debug, Clone)]
pub struct EntityCatalog {
    entity: EntityType,
    entries: Vec<(&'static str, FacetTarget)>,
    index: HashMap<&'static str, usize>,
    numeric_fields: Vec<&'static str>,
    return_facets: Vec<&'static str>,
}

impl EntityCatalog {
    fn from_table(table: EntityTable) -> Result<Self, CatalogError> {
        let entity = table.entity;
        let mut entries = Vec::with_capacity(table.facets.len());
        let mut index = HashMap::with_capacity(table.facets.len());

        for (key, field) in table.facets {
            if index.insert(key, entries.len()).is_some() {
                return Err(CatalogError::DuplicateFacetKey {
                    entity: entity.to_string(),
                    key: key.to_string(),
                });
            }
            let target = match field {
                Some(field) => FacetTarget::Field(field),
                None => FacetTarget::Unsupported,
            };
            entries.push((key, target));
        }

        for numeric in &table.numeric_fields {
            let targeted = entries
                .iter()
                .any(|(_, target)| *target == FacetTarget::Field(*numeric));
            if !targeted {
                return Err(CatalogError::OrphanNumericField {
                    entity: entity.to_string(),
                    field: numeric.to_string(),
                });
            }
        }

        if table.return_facets.iter().any(|f| f.trim().is_empty()) {
            return Err(CatalogError::EmptyReturnFacet {
                entity: entity.to_string(),
            });
        }
        if table.return_facets.first() != Some(&entity.as_str()) {
            return Err(CatalogError::MissingEntityFacet {
                entity: entity.to_string(),
            });
        }

        Ok(Self {
            entity,
            entries,
            index,
            numeric_fields: table.numeric_fields,
            return_facets: table.return_facets,
        })
    }

    pub fn entity(&self) -> EntityType {
        self.entity
    }

    /// Resolve a URL facet key. `None` means the key is not in the table at all.
    pub fn lookup(&self, key: &str) -> Option<FacetTarget> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    /// The DSL field for `key`, if this entity supports it.
    pub fn field_for(&self, key: &str) -> Option<&'static str> {
        match self.lookup(key) {
            Some(FacetTarget::Field(field)) => Some(field),
            _ => None,
        }
    }

    /// Whether literals for `field` render unquoted when numeric.
    pub fn is_numeric(&self, field: &str) -> bool {
        self.numeric_fields.iter().any(|f| *f == field)
    }

    /// All facet mappings in table order.
    pub fn entries(&self) -> &[(&'static str, FacetTarget)] {
        &self.entries
    }

    pub fn numeric_fields(&self) -> &[&'static str] {
        &self.numeric_fields
    }

    /// Facets that may appear in the `return` clause, entity name first.
    pub fn return_facets(&self) -> &[&'static str] {
        &self.return_facets
    }
}

/// Facet catalog covering every entity type.
#[derive(Debug, Clone)]
pub struct FacetCatalog {
    entities: HashMap<EntityType, EntityCatalog>,
}

impl FacetCatalog {
    /// Build and validate a catalog from one table per entity type.
    pub fn new(tables: impl IntoIterator<Item = EntityTable>) -> Result<Self, CatalogError> {
        let mut entities = HashMap::new();
        for table in tables {
            let catalog = EntityCatalog::from_table(table)?;
            entities.insert(catalog.entity, catalog);
        }

        for entity in EntityType::ALL {
            if !entities.contains_key(&entity) {
                return Err(CatalogError::MissingTable {
                    entity: entity.to_string(),
                });
            }
        }

        Ok(Self { entities })
    }

    /// The built-in catalog shared by every translation.
    pub fn builtin() -> &'static FacetCatalog {
        &BUILTIN
    }

    pub fn for_entity(&self, entity: EntityType) -> &EntityCatalog {
        // Completeness is checked in `new`
        &self.entities[&entity]
    }
}

/// Return facets offered for `entity`, in display order.
pub fn available_return_facets(entity: EntityType) -> &'static [&'static str] {
    FacetCatalog::builtin().for_entity(entity).return_facets()
}

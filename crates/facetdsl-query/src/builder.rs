//! Condition construction.
//!
//! Turns decoded query parameters into ordered `where` clauses for one entity
//! type:
//! 1. the free-text term, if any
//! 2. AND facets, in encounter order
//! 3. OR groups, one per DSL field, in first-seen order
//!
//! Facets the entity cannot express are collected instead of emitted.

use crate::catalog::{EntityCatalog, FacetTarget};
use crate::ir::{Condition, Literal};
use crate::params::{self, Polarity, RawParam};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Knobs for condition construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderOptions {
    /// Drop repeated identical literals within one OR group
    #[serde(default)]
    pub dedupe_or_values: bool,
}

/// OR-polarity values collected for one DSL field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionGroup {
    pub field: &'static str,
    pub values: Vec<Literal>,
}

impl ConditionGroup {
    fn into_condition(self) -> Condition {
        let field = self.field.to_string();
        let mut values = self.values;
        if values.len() == 1 {
            Condition::Eq {
                field,
                value: values.remove(0),
            }
        } else {
            Condition::In { field, values }
        }
    }
}

/// Output of [`ConditionBuilder::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuiltConditions {
    pub conditions: Vec<Condition>,
    /// Facet keys with no DSL field, duplicates kept, in encounter order
    pub unsupported: Vec<String>,
}

/// Builds conditions against one entity's catalog.
pub struct ConditionBuilder<'a> {
    catalog: &'a EntityCatalog,
    options: BuilderOptions,
}

impl<'a> ConditionBuilder<'a> {
    pub fn new(catalog: &'a EntityCatalog) -> Self {
        Self {
            catalog,
            options: BuilderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BuilderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(&self, params: &[RawParam]) -> BuiltConditions {
        let mut built = BuiltConditions::default();
        let mut groups: Vec<ConditionGroup> = Vec::new();

        if let Some(term) = params::free_text(params) {
            flag_embedded_quote("search", term);
            built.conditions.push(Condition::FreeText {
                term: term.to_string(),
            });
        }

        for param in params {
            let Some(facet) = param.as_facet() else {
                continue;
            };

            let field = match self.catalog.lookup(facet.key) {
                Some(FacetTarget::Field(field)) => field,
                target => {
                    debug!(
                        entity = %self.catalog.entity(),
                        facet = facet.key,
                        known = target.is_some(),
                        "facet not supported, skipping"
                    );
                    built.unsupported.push(facet.key.to_string());
                    continue;
                }
            };

            let value = Literal::classify(facet.value, self.catalog.is_numeric(field));
            if let Literal::Text(text) = &value {
                flag_embedded_quote(facet.key, text);
            }

            match facet.polarity {
                Polarity::And => built.conditions.push(Condition::Eq {
                    field: field.to_string(),
                    value,
                }),
                Polarity::Or => self.push_or_value(&mut groups, field, value),
            }
        }

        built
            .conditions
            .extend(groups.into_iter().map(ConditionGroup::into_condition));
        built
    }

    fn push_or_value(&self, groups: &mut Vec<ConditionGroup>, field: &'static str, value: Literal) {
        match groups.iter_mut().find(|g| g.field == field) {
            Some(group) => {
                if self.options.dedupe_or_values && group.values.contains(&value) {
                    return;
                }
                group.values.push(value);
            }
            None => groups.push(ConditionGroup {
                field,
                values: vec![value],
            }),
        }
    }
}

// Quoted values are emitted verbatim, so an embedded quote breaks the literal.
fn flag_embedded_quote(source: &str, value: &str) {
    if value.contains('"') {
        warn!(source, value, "value contains a double quote and is not escaped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FacetCatalog;
    use crate::entity::EntityType;
    use crate::params::parse_query;

    fn build(entity: EntityType, query: &str) -> BuiltConditions {
        let catalog = FacetCatalog::builtin().for_entity(entity);
        ConditionBuilder::new(catalog).build(&parse_query(query))
    }

    fn eq(field: &str, value: Literal) -> Condition {
        Condition::Eq {
            field: field.to_string(),
            value,
        }
    }

    fn text(v: &str) -> Literal {
        Literal::Text(v.to_string())
    }

    fn num(v: &str) -> Literal {
        Literal::Number(v.to_string())
    }

    #[test]
    fn test_and_facets_keep_encounter_order() {
        let built = build(
            EntityType::Publications,
            "and_facet_researcher=ur.1&and_facet_year=2020&and_facet_funder=grid.1",
        );

        assert_eq!(
            built.conditions,
            vec![
                eq("researchers", text("ur.1")),
                eq("year", num("2020")),
                eq("funders", text("grid.1")),
            ]
        );
        assert!(built.unsupported.is_empty());
    }

    #[test]
    fn test_or_groups_follow_and_conditions() {
        let built = build(
            EntityType::Publications,
            "or_facet_for=1101&and_facet_year=2024&or_facet_for=1103&and_facet_funder=f",
        );

        assert_eq!(
            built.conditions,
            vec![
                eq("year", num("2024")),
                eq("funders", text("f")),
                Condition::In {
                    field: "category_for".to_string(),
                    values: vec![text("1101"), text("1103")],
                },
            ]
        );
    }

    #[test]
    fn test_single_or_value_is_plain_equality() {
        let built = build(EntityType::Grants, "or_facet_active_year=2021");
        assert_eq!(built.conditions, vec![eq("active_year", num("2021"))]);
    }

    #[test]
    fn test_or_groups_in_first_seen_field_order() {
        let built = build(
            EntityType::Publications,
            "or_facet_sdg=3&or_facet_for=1101&or_facet_sdg=4",
        );

        assert_eq!(
            built.conditions,
            vec![
                Condition::In {
                    field: "category_sdg".to_string(),
                    values: vec![text("3"), text("4")],
                },
                eq("category_for", text("1101")),
            ]
        );
    }

    #[test]
    fn test_duplicates_preserved_by_default() {
        let built = build(
            EntityType::Publications,
            "or_facet_for=1101&or_facet_for=1101",
        );
        assert_eq!(
            built.conditions,
            vec![Condition::In {
                field: "category_for".to_string(),
                values: vec![text("1101"), text("1101")],
            }]
        );
    }

    #[test]
    fn test_dedupe_option_collapses_repeats() {
        let catalog = FacetCatalog::builtin().for_entity(EntityType::Publications);
        let built = ConditionBuilder::new(catalog)
            .with_options(BuilderOptions {
                dedupe_or_values: true,
            })
            .build(&parse_query(
                "or_facet_for=1101&or_facet_for=1103&or_facet_for=1101",
            ));

        assert_eq!(
            built.conditions,
            vec![Condition::In {
                field: "category_for".to_string(),
                values: vec![text("1101"), text("1103")],
            }]
        );
    }

    #[test]
    fn test_dedupe_down_to_one_value_is_equality() {
        let catalog = FacetCatalog::builtin().for_entity(EntityType::Publications);
        let built = ConditionBuilder::new(catalog)
            .with_options(BuilderOptions {
                dedupe_or_values: true,
            })
            .build(&parse_query("or_facet_for=1101&or_facet_for=1101"));

        assert_eq!(built.conditions, vec![eq("category_for", text("1101"))]);
    }

    #[test]
    fn test_unsupported_facets_recorded_in_order_with_duplicates() {
        let built = build(
            EntityType::ClinicalTrials,
            "and_facet_research_org_country=Australia&and_facet_unknown=x\
             &or_facet_research_org_country=Chile&and_facet_phase=3",
        );

        assert_eq!(
            built.unsupported,
            vec!["research_org_country", "unknown", "research_org_country"]
        );
        assert_eq!(built.conditions, vec![eq("phase", text("3"))]);
    }

    #[test]
    fn test_non_facet_params_are_ignored() {
        let built = build(
            EntityType::Publications,
            "utm_source=mail&facet_year=2020&and_facet_year=2020",
        );
        assert_eq!(built.conditions, vec![eq("year", num("2020"))]);
        assert!(built.unsupported.is_empty());
    }

    #[test]
    fn test_free_text_comes_first() {
        let built = build(
            EntityType::Publications,
            "and_facet_year=2020&search=%20graphene%20",
        );
        assert_eq!(
            built.conditions,
            vec![
                Condition::FreeText {
                    term: "graphene".to_string()
                },
                eq("year", num("2020")),
            ]
        );
    }

    #[test]
    fn test_blank_free_text_is_dropped() {
        let built = build(EntityType::Publications, "search=+++");
        assert!(built.conditions.is_empty());
    }

    #[test]
    fn test_numeric_field_with_text_value_is_quoted() {
        let built = build(EntityType::Publications, "and_facet_year=recent");
        assert_eq!(built.conditions, vec![eq("year", text("recent"))]);
    }

    #[test]
    fn test_numeric_value_on_string_field_is_quoted() {
        let built = build(EntityType::Publications, "and_facet_for=1101");
        assert_eq!(built.conditions, vec![eq("category_for", text("1101"))]);
    }

    #[test]
    fn test_entity_specific_numeric_fields() {
        let trials = build(EntityType::ClinicalTrials, "and_facet_active_year=2019");
        assert_eq!(trials.conditions, vec![eq("active_years", num("2019"))]);

        let grants = build(EntityType::Grants, "and_facet_year=2019");
        assert_eq!(grants.conditions, vec![eq("start_year", num("2019"))]);

        // Policy documents have no active-year facet at all
        let policy = build(EntityType::PolicyDocuments, "and_facet_active_year=2019");
        assert!(policy.conditions.is_empty());
        assert_eq!(policy.unsupported, vec!["active_year"]);
    }

    #[test]
    fn test_malformed_param_is_skipped_not_reported() {
        let built = build(
            EntityType::Publications,
            "and_facet_funder=%C3%28&and_facet_year=2020",
        );
        assert_eq!(built.conditions, vec![eq("year", num("2020"))]);
        assert!(built.unsupported.is_empty());
    }
}

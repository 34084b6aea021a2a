//! Built-in facet tables.
//!
//! `None` marks a facet the URL vocabulary offers but the entity's DSL schema
//! lacks; those keys are reported as unsupported instead of being guessed.

use super::EntityTable;
use crate::entity::EntityType;

type Facets = &'static [(&'static str, Option<&'static str>)];

const PEOPLE_AND_FUNDING: Facets = &[
    ("researcher", Some("researchers")),
    ("funder", Some("funders")),
    ("funder_country", Some("funder_countries")),
];

const RESEARCH_ORGS: Facets = &[
    ("research_org", Some("research_orgs")),
    ("org_type", Some("research_org_types")),
    ("research_org_country", Some("research_org_countries")),
    ("research_org_state", Some("research_org_state_names")),
    ("research_org_city", Some("research_org_cities")),
];

const CATEGORIES: Facets = &[
    ("for", Some("category_for")),
    ("rcdc", Some("category_rcdc")),
    ("hrcs_hc", Some("category_hrcs_hc")),
    ("hrcs_rac", Some("category_hrcs_rac")),
    ("broad_research_areas", Some("category_bra")),
    ("health_research_areas", Some("category_hra")),
    ("cancer_types", Some("category_icrp_ct")),
    ("cso", Some("category_icrp_cso")),
    ("sdg", Some("category_sdg")),
];

const UNITS_OF_ASSESSMENT: Facets = &[("uoa", Some("category_uoa"))];

const PUBLICATION_SOURCES: Facets = &[
    ("publication_type", Some("type")),
    ("document_type", Some("document_type")),
    ("source_title", Some("source_title")),
    ("publisher", Some("publisher")),
    ("open_access_status", Some("open_access")),
    ("journal_list", Some("journal_lists")),
];

const GRANT_DATES: Facets = &[
    ("year", Some("start_year")),
    ("active_year", Some("active_year")),
    ("active_status", Some("active_status")),
];

const DATASET_ORGS: Facets = &[
    ("research_org", Some("research_orgs")),
    ("research_org_country", Some("research_org_countries")),
    ("research_org_state", Some("research_org_states")),
    ("research_org_city", Some("research_org_cities")),
];

const DATASET_SOURCES: Facets = &[
    ("repository", Some("repository")),
    ("source_title", Some("journal")),
];

const PATENT_DATES: Facets = &[
    ("year", Some("year")),
    ("granted_year", Some("granted_year")),
    ("priority_year", Some("priority_year")),
    ("filed_year", Some("filed_year")),
];

const PATENT_ASSIGNEES: Facets = &[
    ("research_org", Some("assignees")),
    ("org_type", Some("assignee_org_types")),
    ("research_org_country", Some("assignee_countries")),
    ("research_org_state", Some("assignee_state_codes")),
    ("research_org_city", Some("assignee_cities")),
];

const PATENT_CLASSIFICATION: Facets = &[
    ("ipcr", Some("ipcr")),
    ("cpc", Some("cpc")),
    ("jurisdiction", Some("jurisdiction")),
    ("legal_status", Some("legal_status")),
    ("filing_status", Some("filing_status")),
    ("kind", Some("kind")),
    ("additional_filters", Some("additional_filters")),
];

const TRIAL_DATES: Facets = &[
    ("year", Some("year")),
    ("active_year", Some("active_years")),
    ("active_status", Some("status")),
];

// Trials carry organisations but no organisation geography.
const TRIAL_ORGS: Facets = &[
    ("research_org", Some("research_orgs")),
    ("org_type", Some("org_types")),
    ("research_org_country", None),
    ("research_org_state", None),
    ("research_org_city", None),
];

const TRIAL_DETAILS: Facets = &[
    ("condition", Some("conditions")),
    ("phase", Some("phase")),
    ("gender", Some("gender")),
    ("registry", Some("registry")),
];

const POLICY_PUBLISHERS: Facets = &[
    ("research_org", Some("publisher_org")),
    ("research_org_country", Some("publisher_org_country")),
    ("research_org_state", Some("publisher_org_state")),
    ("research_org_city", Some("publisher_org_city")),
];

const YEAR: Facets = &[("year", Some("year"))];

/// The built-in table for `entity`.
pub fn table_for(entity: EntityType) -> EntityTable {
    match entity {
        EntityType::Publications => EntityTable {
            entity,
            facets: [
                YEAR,
                PEOPLE_AND_FUNDING,
                RESEARCH_ORGS,
                CATEGORIES,
                UNITS_OF_ASSESSMENT,
                PUBLICATION_SOURCES,
            ]
            .concat(),
            numeric_fields: vec!["year"],
            return_facets: vec![
                "publications",
                "authors_count",
                "category_bra",
                "category_for",
                "category_for_2020",
            ],
        },
        EntityType::Grants => EntityTable {
            entity,
            facets: [
                GRANT_DATES,
                PEOPLE_AND_FUNDING,
                RESEARCH_ORGS,
                CATEGORIES,
                UNITS_OF_ASSESSMENT,
            ]
            .concat(),
            // `year` is not a grants field; the URL year lands on start_year
            numeric_fields: vec!["start_year", "active_year"],
            return_facets: vec![
                "grants",
                "active_status",
                "active_year",
                "category_bra",
                "category_for",
            ],
        },
        EntityType::Datasets => EntityTable {
            entity,
            facets: [
                YEAR,
                PEOPLE_AND_FUNDING,
                DATASET_ORGS,
                CATEGORIES,
                DATASET_SOURCES,
            ]
            .concat(),
            numeric_fields: vec!["year"],
            return_facets: vec!["datasets", "authors", "category_bra", "category_for"],
        },
        EntityType::Patents => EntityTable {
            entity,
            facets: [
                PATENT_DATES,
                PEOPLE_AND_FUNDING,
                PATENT_ASSIGNEES,
                CATEGORIES,
                PATENT_CLASSIFICATION,
            ]
            .concat(),
            numeric_fields: vec!["year", "granted_year", "priority_year", "filed_year"],
            return_facets: vec!["patents", "assignee_cities", "category_bra", "category_for"],
        },
        EntityType::ClinicalTrials => EntityTable {
            entity,
            facets: [
                TRIAL_DATES,
                PEOPLE_AND_FUNDING,
                TRIAL_ORGS,
                CATEGORIES,
                TRIAL_DETAILS,
            ]
            .concat(),
            numeric_fields: vec!["year", "active_years"],
            return_facets: vec![
                "clinical_trials",
                "active_years",
                "category_bra",
                "category_for",
            ],
        },
        EntityType::PolicyDocuments => EntityTable {
            entity,
            facets: [YEAR, POLICY_PUBLISHERS, CATEGORIES].concat(),
            numeric_fields: vec!["year"],
            return_facets: vec!["policy_documents", "category_bra", "category_for"],
        },
    }
}

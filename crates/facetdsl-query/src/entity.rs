//! Entity type detection.
//!
//! The searchable collection is inferred from the URL path:
//! - `/discover/grant?...` → `grants`
//! - `/discover/dataset?...` → `datasets`
//! - `/discover/patent?...` → `patents`
//! - `/discover/clinical_trial?...` → `clinical_trials`
//! - `/discover/policy_document?...` → `policy_documents`
//! - anything else → `publications`

use crate::error::{EntityParseError, TranslateError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// A searchable collection in the target DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Publications,
    Grants,
    Datasets,
    Patents,
    ClinicalTrials,
    PolicyDocuments,
}

/// Path markers checked in order; first match wins.
const PATH_MARKERS: [(&str, EntityType); 5] = [
    ("/grant", EntityType::Grants),
    ("/dataset", EntityType::Datasets),
    ("/patent", EntityType::Patents),
    ("/clinical_trial", EntityType::ClinicalTrials),
    ("/policy_document", EntityType::PolicyDocuments),
];

impl EntityType {
    /// Every entity type, in catalog order.
    pub const ALL: [EntityType; 6] = [
        EntityType::Publications,
        EntityType::Grants,
        EntityType::Datasets,
        EntityType::Patents,
        EntityType::ClinicalTrials,
        EntityType::PolicyDocuments,
    ];

    /// Name used in the `search` clause.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Publications => "publications",
            EntityType::Grants => "grants",
            EntityType::Datasets => "datasets",
            EntityType::Patents => "patents",
            EntityType::ClinicalTrials => "clinical_trials",
            EntityType::PolicyDocuments => "policy_documents",
        }
    }

    /// Classify a URL path. Falls back to `Publications`.
    pub fn from_path(path: &str) -> Self {
        let path = path.to_lowercase();
        PATH_MARKERS
            .iter()
            .find(|(marker, _)| path.contains(marker))
            .map(|(_, entity)| *entity)
            .unwrap_or(EntityType::Publications)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = EntityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        EntityType::ALL
            .into_iter()
            .find(|e| e.as_str() == needle)
            .ok_or_else(|| EntityParseError {
                input: s.to_string(),
                expected: EntityType::ALL
                    .iter()
                    .map(|e| e.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Parse `input` as an absolute URL and classify its path.
pub fn detect_entity_type(input: &str) -> Result<EntityType, TranslateError> {
    let url = Url::parse(input).map_err(|source| TranslateError::MalformedUrl {
        input: input.to_string(),
        source,
    })?;
    Ok(EntityType::from_path(url.path()))
}

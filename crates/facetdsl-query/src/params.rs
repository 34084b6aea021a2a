//! Query-string decomposition.
//!
//! Pairs are split on `&` and `=`, `+` becomes a space, and percent-escapes
//! are decoded. A pair whose escapes do not decode to UTF-8 is skipped on its
//! own; the rest of the query string is still used.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Reserved parameter carrying the free-text search term.
pub const FREE_TEXT_PARAM: &str = "search";

/// `and_facet_<key>` / `or_facet_<key>`
static FACET_PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(and|or)_facet_(.*)$").unwrap());

/// How values of one facet combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    And,
    Or,
}

/// A decoded `(name, value)` pair from the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParam {
    pub name: String,
    pub value: String,
}

/// A facet parameter split into polarity and facet key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetParam<'a> {
    pub polarity: Polarity,
    pub key: &'a str,
    pub value: &'a str,
}

impl RawParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Split the name into polarity and key; `None` for non-facet parameters.
    pub fn as_facet(&self) -> Option<FacetParam<'_>> {
        let caps = FACET_PARAM_RE.captures(&self.name)?;
        let polarity = match caps.get(1)?.as_str() {
            "and" => Polarity::And,
            _ => Polarity::Or,
        };
        Some(FacetParam {
            polarity,
            key: caps.get(2)?.as_str(),
            value: &self.value,
        })
    }

    pub fn is_free_text(&self) -> bool {
        self.name == FREE_TEXT_PARAM
    }
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    urlencoding::decode(&spaced).ok().map(Cow::into_owned)
}

/// Decode a raw query string (without the leading `?`) into parameters.
pub fn parse_query(query: &str) -> Vec<RawParam> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            match (decode_component(name), decode_component(value)) {
                (Some(name), Some(value)) => Some(RawParam { name, value }),
                _ => {
                    debug!(pair, "skipping undecodable query parameter");
                    None
                }
            }
        })
        .collect()
}

/// First well-formed free-text term, trimmed; `None` when absent or blank.
pub fn free_text(params: &[RawParam]) -> Option<&str> {
    params
        .iter()
        .find(|p| p.is_free_text())
        .map(|p| p.value.trim())
        .filter(|term| !term.is_empty())
}

//! Intermediate representation handed from the condition builder to renderers.

use crate::entity::EntityType;
use serde::Serialize;
use std::fmt;

/// A literal value in a condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Literal {
    /// Rendered verbatim, unquoted
    Number(String),
    /// Rendered inside double quotes, without escaping
    Text(String),
}

impl Literal {
    /// Unquoted when `numeric_field` is set and `raw` is a finite number.
    pub fn classify(raw: &str, numeric_field: bool) -> Self {
        if numeric_field && is_number(raw) {
            Literal::Number(raw.to_string())
        } else {
            Literal::Text(raw.to_string())
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            Literal::Number(v) | Literal::Text(v) => v,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(v) => f.write_str(v),
            Literal::Text(v) => write!(f, "\"{}\"", v),
        }
    }
}

fn is_number(raw: &str) -> bool {
    !raw.is_empty() && raw.parse::<f64>().is_ok_and(f64::is_finite)
}

/// One clause of the `where` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Condition {
    /// Free-text term, rendered as a bare quoted string
    FreeText { term: String },
    /// `field = literal`
    Eq { field: String, value: Literal },
    /// `field in [literal,...]`
    In { field: String, values: Vec<Literal> },
}

/// A query ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DslQuery {
    pub entity: EntityType,
    pub conditions: Vec<Condition>,
    pub return_facet: String,
}

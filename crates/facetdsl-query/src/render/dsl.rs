//! Three-clause DSL renderer.
//!
//! ```text
//! search <entity>
//! where <cond> and <cond> ...
//! return <facet>
//! ```
//!
//! The `where` line is left out when there are no conditions.

use crate::ir::{Condition, DslQuery};
use crate::render::QueryRenderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct DslRenderer;

impl DslRenderer {
    fn render_condition(condition: &Condition) -> String {
        match condition {
            Condition::FreeText { term } => format!("\"{}\"", term),
            Condition::Eq { field, value } => format!("{} = {}", field, value),
            Condition::In { field, values } => {
                let list = values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{} in [{}]", field, list)
            }
        }
    }
}

impl QueryRenderer for DslRenderer {
    fn name(&self) -> &str {
        "dsl"
    }

    fn render(&self, query: &DslQuery) -> String {
        let mut out = format!("search {}", query.entity);

        if !query.conditions.is_empty() {
            out.push_str("\nwhere ");
            for (i, condition) in query.conditions.iter().enumerate() {
                if i > 0 {
                    out.push_str(" and ");
                }
                out.push_str(&Self::render_condition(condition));
            }
        }

        out.push_str("\nreturn ");
        out.push_str(&query.return_facet);
        out
    }
}

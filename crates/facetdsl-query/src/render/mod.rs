//! Target renderers for DslQuery.
//!
//! Renderers turn the builder's IR into query text.

mod dsl;

pub use dsl::DslRenderer;

use crate::ir::DslQuery;

/// Trait for rendering a DslQuery to text.
pub trait QueryRenderer: Send + Sync {
    /// Unique name for this renderer
    fn name(&self) -> &str;

    /// Render the query. Rendering never fails; the IR is already valid.
    fn render(&self, query: &DslQuery) -> String;
}

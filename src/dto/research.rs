use serde::Deserialize;

use crate::table::TableContext;

/// Query parameters accepted by the research papers list page.
#[derive(Debug, Default, Deserialize)]
pub struct ResearchQuery {
    pub q: Option<String>,
    /// Publication-year window; applied only when both bounds are present.
    pub year_from: Option<i64>,
    pub year_to: Option<i64>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// Data required to render the research list template.
pub struct ResearchPageData {
    pub table: TableContext,
    pub search_query: Option<String>,
    pub year_from: Option<i64>,
    pub year_to: Option<i64>,
    pub error: Option<String>,
}

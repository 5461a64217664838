use serde::Deserialize;

use crate::table::TableContext;

/// Query parameters accepted by the articles list page.
#[derive(Debug, Default, Deserialize)]
pub struct ArticlesQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// Data required to render the articles list template.
pub struct ArticlesPageData {
    pub table: TableContext,
    pub search_query: Option<String>,
    pub category: Option<String>,
    pub error: Option<String>,
}

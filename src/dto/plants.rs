use serde::Deserialize;

use crate::table::TableContext;

/// Query parameters accepted by the plants list page.
#[derive(Debug, Default, Deserialize)]
pub struct PlantsQuery {
    /// Free-form search string entered by the user.
    pub q: Option<String>,
    /// Botanical family filter; empty means no filter.
    pub family: Option<String>,
    /// Sort field and direction requested by a column header click.
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// Data required to render the plants list template.
pub struct PlantsPageData {
    pub table: TableContext,
    /// Search string echoed back into the search box.
    pub search_query: Option<String>,
    /// Active family filter echoed back into the select.
    pub family: Option<String>,
    /// Fetch error duplicated for the page-level alert.
    pub error: Option<String>,
}

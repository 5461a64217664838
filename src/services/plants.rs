use crate::client::{Filter, PageFetcher, SearchQuery, SortBy, SortDirection};
use crate::domain::plant::Plant;
use crate::dto::plants::{PlantsPageData, PlantsQuery};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::search::SearchController;
use crate::services::normalized;
use crate::table::{Column, DataTable};

fn plants_table() -> DataTable<Plant> {
    DataTable::new(vec![
        Column::new("name", "Name", |p: &Plant| p.name.clone()),
        Column::new("latin_name", "Latin name", |p: &Plant| p.latin_name.clone())
            .class("latin"),
        Column::new("family", "Family", |p: &Plant| p.family.clone()),
        Column::new("usage", "Medicinal usage", |p: &Plant| {
            p.usage.clone().unwrap_or_default()
        }),
    ])
    .empty_message("No plants matched your search")
}

fn parse_sort(field: &Option<String>, dir: &Option<String>) -> Option<SortBy> {
    let field = field.as_deref().map(str::trim).filter(|f| !f.is_empty())?;
    let direction = match dir.as_deref() {
        Some("desc") => SortDirection::Desc,
        _ => SortDirection::Asc,
    };
    Some(SortBy::new(field, direction))
}

/// Loads one page of the plants list for the index template.
///
/// Fetch failures do not fail the page; they surface through the table's
/// error state and the `error` echo.
pub async fn load_plants_page<F>(fetcher: &F, params: PlantsQuery) -> PlantsPageData
where
    F: PageFetcher<Plant> + ?Sized,
{
    let search_query = normalized(params.q);
    let family = normalized(params.family);

    let mut query = SearchQuery::new().paginate(
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
    );
    if let Some(term) = &search_query {
        query = query.keyword(term.clone());
    }
    if let Some(family) = &family {
        query = query.filter("family", Filter::equals(family.clone()));
    }
    if let Some(sort) = parse_sort(&params.sort, &params.dir) {
        query = query.sort(sort);
    }

    let mut controller = SearchController::new(fetcher, query);
    controller.load().await;
    let state = controller.state();

    PlantsPageData {
        error: state.error.clone(),
        table: plants_table().render(state),
        search_query,
        family,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockFetcher;
    use crate::client::PageResult;

    fn plant(name: &str, family: &str) -> Plant {
        Plant {
            name: name.to_string(),
            latin_name: format!("{name}us officinalis"),
            family: family.to_string(),
            ..Plant::default()
        }
    }

    #[actix_web::test]
    async fn renders_rows_and_transmits_family_filter() {
        let mut fetcher = MockFetcher::<Plant>::new();
        fetcher
            .expect_fetch_page()
            .withf(|query| {
                query
                    .query_pairs()
                    .contains(&("filters[family]".to_string(), "Lamiaceae".to_string()))
            })
            .return_once(|_| {
                Ok(PageResult {
                    content: vec![plant("Mint", "Lamiaceae")],
                    total_elements: 1,
                    total_pages: 1,
                })
            });

        let params = PlantsQuery {
            family: Some("Lamiaceae".to_string()),
            ..PlantsQuery::default()
        };
        let data = load_plants_page(&fetcher, params).await;

        assert_eq!(data.table.state, "rows");
        assert_eq!(data.table.rows[0][0], "Mint");
        assert!(data.error.is_none());
    }

    #[actix_web::test]
    async fn fetch_failure_surfaces_as_error_state() {
        let mut fetcher = MockFetcher::<Plant>::new();
        fetcher
            .expect_fetch_page()
            .return_once(|_| Err(crate::client::errors::ApiError::Network("offline".into())));

        let data = load_plants_page(&fetcher, PlantsQuery::default()).await;

        assert_eq!(data.table.state, "error");
        assert_eq!(data.error.as_deref(), Some("network error: offline"));
        assert!(data.table.pagination.is_none());
    }
}

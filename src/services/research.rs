use crate::client::{Filter, PageFetcher, SearchQuery};
use crate::domain::research::ResearchPaper;
use crate::dto::research::{ResearchPageData, ResearchQuery};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::search::SearchController;
use crate::services::normalized;
use crate::table::{Column, DataTable};

fn research_table() -> DataTable<ResearchPaper> {
    DataTable::new(vec![
        Column::new("title", "Title", |r: &ResearchPaper| r.title.clone()),
        Column::new("authors", "Authors", ResearchPaper::authors_line),
        Column::new("journal", "Journal", |r: &ResearchPaper| {
            r.journal.clone().unwrap_or_default()
        }),
        Column::new("year", "Year", |r: &ResearchPaper| {
            r.year.map(|y| y.to_string()).unwrap_or_default()
        })
        .class("date"),
    ])
    .empty_message("No research papers matched your search")
}

/// The year window applies only when both bounds are present and ordered.
fn year_filter(from: Option<i64>, to: Option<i64>) -> Filter {
    match (from, to) {
        (Some(min), Some(max)) if min <= max => Filter::Range { min, max },
        _ => Filter::NoFilter,
    }
}

/// Loads one page of the research papers list.
pub async fn load_research_page<F>(fetcher: &F, params: ResearchQuery) -> ResearchPageData
where
    F: PageFetcher<ResearchPaper> + ?Sized,
{
    let search_query = normalized(params.q);

    let mut query = SearchQuery::new()
        .paginate(
            params.page.unwrap_or(1),
            params.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
        )
        .filter("year", year_filter(params.year_from, params.year_to));
    if let Some(term) = &search_query {
        query = query.keyword(term.clone());
    }

    let mut controller = SearchController::new(fetcher, query);
    controller.load().await;
    let state = controller.state();

    ResearchPageData {
        error: state.error.clone(),
        table: research_table().render(state),
        search_query,
        year_from: params.year_from,
        year_to: params.year_to,
    }
}

#[cfg(test)]
mod tests {
    use super::year_filter;
    use crate::client::Filter;

    #[test]
    fn year_window_requires_both_ordered_bounds() {
        assert_eq!(
            year_filter(Some(2010), Some(2020)),
            Filter::Range {
                min: 2010,
                max: 2020
            }
        );
        assert_eq!(year_filter(Some(2020), Some(2010)), Filter::NoFilter);
        assert_eq!(year_filter(Some(2010), None), Filter::NoFilter);
        assert_eq!(year_filter(None, None), Filter::NoFilter);
    }
}

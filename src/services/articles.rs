use crate::client::{Filter, PageFetcher, SearchQuery};
use crate::domain::article::Article;
use crate::dto::articles::{ArticlesPageData, ArticlesQuery};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::search::SearchController;
use crate::services::normalized;
use crate::table::{Column, DataTable};

fn articles_table() -> DataTable<Article> {
    DataTable::new(vec![
        Column::new("title", "Title", |a: &Article| a.title.clone()),
        Column::new("category", "Category", |a: &Article| a.category.clone()),
        Column::new("author", "Author", |a: &Article| {
            a.author.clone().unwrap_or_default()
        }),
        Column::new("published_at", "Published", |a: &Article| {
            a.published_at
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
        .class("date"),
    ])
    .empty_message("No articles matched your search")
}

/// Loads one page of the articles list.
pub async fn load_articles_page<F>(fetcher: &F, params: ArticlesQuery) -> ArticlesPageData
where
    F: PageFetcher<Article> + ?Sized,
{
    let search_query = normalized(params.q);
    let category = normalized(params.category);

    let mut query = SearchQuery::new().paginate(
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
    );
    if let Some(term) = &search_query {
        query = query.keyword(term.clone());
    }
    if let Some(category) = &category {
        query = query.filter("category", Filter::equals(category.clone()));
    }

    let mut controller = SearchController::new(fetcher, query);
    controller.load().await;
    let state = controller.state();

    ArticlesPageData {
        error: state.error.clone(),
        table: articles_table().render(state),
        search_query,
        category,
    }
}

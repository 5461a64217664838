use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::client::http::HttpSearchClient;
use crate::dto::research::ResearchQuery;
use crate::routes::{alert_level_to_str, render_template};
use crate::services::research as research_service;

#[get("/research")]
pub async fn show_research(
    params: web::Query<ResearchQuery>,
    api: web::Data<HttpSearchClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = research_service::load_research_page(api.get_ref(), params.into_inner()).await;

    let mut alerts = flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();
    if let Some(message) = &data.error {
        alerts.push((message.clone(), "danger"));
    }

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", "research");
    context.insert("search_query", &data.search_query.clone().unwrap_or_default());
    context.insert(
        "year_from",
        &data.year_from.map(|y| y.to_string()).unwrap_or_default(),
    );
    context.insert(
        "year_to",
        &data.year_to.map(|y| y.to_string()).unwrap_or_default(),
    );
    context.insert("table", &data.table);

    render_template(&tera, "research/index.html", &context)
}

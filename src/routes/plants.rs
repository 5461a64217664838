use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::client::http::HttpSearchClient;
use crate::dto::plants::PlantsQuery;
use crate::routes::{alert_level_to_str, render_template};
use crate::services::plants as plants_service;

#[get("/")]
pub async fn show_plants(
    params: web::Query<PlantsQuery>,
    api: web::Data<HttpSearchClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = plants_service::load_plants_page(api.get_ref(), params.into_inner()).await;

    let mut alerts = flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();
    if let Some(message) = &data.error {
        alerts.push((message.clone(), "danger"));
    }

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", "plants");
    context.insert("search_query", &data.search_query.clone().unwrap_or_default());
    context.insert("family", &data.family.clone().unwrap_or_default());
    context.insert("table", &data.table);

    render_template(&tera, "plants/index.html", &context)
}

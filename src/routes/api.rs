use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde_json::json;

use crate::client::http::HttpSearchClient;
use crate::domain::article::Article;
use crate::domain::plant::Plant;
use crate::domain::research::ResearchPaper;
use crate::dto::api::ListQuery;
use crate::services::api as api_service;

fn upstream_failure(resource: &str, err: &crate::services::ServiceError) -> HttpResponse {
    error!("Failed to list {resource}: {err}");
    HttpResponse::BadGateway().json(json!({
        "success": false,
        "message": err.to_string(),
    }))
}

#[get("/v1/plants")]
pub async fn api_v1_plants(
    params: web::Query<ListQuery>,
    api: web::Data<HttpSearchClient>,
) -> impl Responder {
    match api_service::list_resource::<Plant, _>(api.get_ref(), params.into_inner()).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => upstream_failure("plants", &e),
    }
}

#[get("/v1/articles")]
pub async fn api_v1_articles(
    params: web::Query<ListQuery>,
    api: web::Data<HttpSearchClient>,
) -> impl Responder {
    match api_service::list_resource::<Article, _>(api.get_ref(), params.into_inner()).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => upstream_failure("articles", &e),
    }
}

#[get("/v1/research")]
pub async fn api_v1_research(
    params: web::Query<ListQuery>,
    api: web::Data<HttpSearchClient>,
) -> impl Responder {
    match api_service::list_resource::<ResearchPaper, _>(api.get_ref(), params.into_inner()).await
    {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => upstream_failure("research", &e),
    }
}

//! HTTP route handlers for the browsing pages and the JSON API.

use actix_web::HttpResponse;
use actix_web_flash_messages::Level;
use log::error;
use tera::{Context, Tera};

pub mod api;
pub mod articles;
pub mod plants;
pub mod research;

/// Maps a flash message level onto the stylesheet's alert class.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Renders a template, answering 500 when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("Failed to render {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

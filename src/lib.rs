pub mod client;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
#[cfg(feature = "server")]
pub mod routes;
pub mod search;
pub mod services;
pub mod table;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: models::config::ServerConfig) -> std::io::Result<()> {
    use std::sync::Arc;

    use actix_cors::Cors;
    use actix_files::Files;
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::client::StaticToken;
    use crate::client::http::HttpSearchClient;
    use crate::routes::api::{api_v1_articles, api_v1_plants, api_v1_research};
    use crate::routes::articles::show_articles;
    use crate::routes::plants::show_plants;
    use crate::routes::research::show_research;

    // Credentials are fixed at startup and injected into the Data API client.
    let credentials = Arc::new(StaticToken::new(server_config.api_token.clone()));
    let api = HttpSearchClient::new(server_config.api_base_url.as_str(), credentials)
        .map_err(|e| std::io::Error::other(format!("Failed to build Data API client: {e}")))?;

    // Key and store for flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", server_config.assets_dir.clone()))
            .service(
                web::scope("/api")
                    .service(api_v1_plants)
                    .service(api_v1_articles)
                    .service(api_v1_research),
            )
            .service(show_plants)
            .service(show_articles)
            .service(show_research)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(api.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

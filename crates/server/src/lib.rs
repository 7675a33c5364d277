//! Hand Evaluation Server
//!
//! actix-web application serving the batch hand evaluation API backed by
//! PostgreSQL persistence.
//!
//! ## Submodules
//!
//! - [`api`] — Request-scoped evaluation pipeline over an injected sink
//! - [`handlers`] — JSON route handlers
//! - [`runtime`] — Logger initialization and interrupt handling

pub mod api;
pub mod handlers;
pub mod runtime;

pub use api::API;
pub use runtime::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use showdown_dto::Message;
use std::sync::Arc;
use tokio_postgres::Client;

async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

/// An undecodable body fails the whole request with the 400 message body;
/// no partial results are produced.
fn malformed(err: actix_web::error::JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    actix_web::error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(Message::malformed()),
    )
    .into()
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let client = showdown_database::db().await;
    let api = web::Data::new(API::new(client.clone()));
    let client = web::Data::new(client);
    log::info!("starting evaluation server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(api.clone())
            .app_data(client.clone())
            .app_data(web::JsonConfig::default().error_handler(malformed))
            .route("/health", web::get().to(health))
            .route("/results", web::post().to(handlers::results))
    })
    .workers(6)
    .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
    .run()
    .await
}

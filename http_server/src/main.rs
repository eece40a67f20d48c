use crate::authentication::AuthSettings;
use crate::configuration::{ApplicationSettings, Settings};
use crate::use_case_app_container::UseCaseAppContainer;
use actix_cors::Cors;
use actix_web::http::{header, Method};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use document_renderer::PdfRenderer;
use notifications::email::EmailNotifier;
use shared_kernel::tracing::{config_telemetry, shutdown_global_tracer_provider};
use sqlx_postgres::repository::Repository;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use use_cases::AppImpl;

mod authentication;
mod configuration;
mod errors;
mod routes;
#[cfg(test)]
mod test_support;
mod use_case_app_container;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config_telemetry("contact_form_http_server")?;
    let result = serve().await;
    shutdown_global_tracer_provider();
    result
}

async fn serve() -> anyhow::Result<()> {
    let settings = Settings::parse()?;

    let repository = Repository::new(&settings.database).await?;
    repository.migrate().await?;
    let renderer = Arc::new(PdfRenderer::new(&settings.documents).await?);
    let notifier = Arc::new(EmailNotifier::new(&settings.email)?);

    let app_container = web::Data::new(UseCaseAppContainer::new(AppImpl::new(
        repository.clone(),
        renderer,
        notifier,
    )));
    let auth_settings: web::Data<AuthSettings> = web::Data::new(settings.authentication);
    let application = settings.application;
    let address = (application.host.clone(), application.port);

    tracing::info!(host = %address.0, port = address.1, "Starting server");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&application))
            .wrap(TracingLogger::default())
            .app_data(app_container.clone())
            .app_data(auth_settings.clone())
            .configure(routes::config)
    })
    .bind(address)
    .context("Failed to bind server address")?
    .run()
    .await
    .context("Server failed to run");

    repository.close().await;
    server
}

fn cors(settings: &ApplicationSettings) -> Cors {
    let cors = if settings.allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        settings
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods([Method::GET, Method::POST, Method::DELETE])
        .allowed_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_DISPOSITION])
        .max_age(3600)
}

mod catalog;
mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod pages;
mod remote;
mod views;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware::from_fn, web};
use anyhow::Context;
use tera::Tera;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::handlers::ApiClient;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // .env first so RUST_LOG from it reaches the filter
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let tera = Tera::new(&config.template_glob())
        .with_context(|| format!("loading templates from {}", config.template_dir.display()))?;
    let api = ApiClient::new(config.api_base_url.clone(), config.api_timeout)
        .context("building API client")?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        api = %config.api_base_url,
        "starting storefront"
    );

    let tera = web::Data::new(tera);
    let api = web::Data::new(api);
    let static_dir = config.static_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(middleware::log_requests))
            .app_data(tera.clone())
            .app_data(api.clone())
            .service(Files::new("/static", &static_dir))
            .configure(pages::configure)
            .default_service(web::to(pages::not_found))
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("binding {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}

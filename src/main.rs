use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;
mod db;
mod domain;

use domain::pedido::PedidoStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cookies_pedidos=debug")),
        )
        .init();

    tracing::info!("🍪 Starting cookies pedidos backend");

    // === 1. Load configuration ===
    let config = config::Config::from_env()?;

    // === 2. Open the database and bring the schema up to date ===
    tracing::info!(path = %config.database_path, "Opening database");
    let pool = db::connect(&config.database_path).await?;
    db::migrate(&pool).await?;

    let store = web::Data::new(PedidoStore::new(pool));

    // === 3. Serve the API ===
    tracing::info!("🚀 Listening on http://{}:{}", config.bind, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(store.clone())
            .configure(api::configure)
    })
    .bind((config.bind.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

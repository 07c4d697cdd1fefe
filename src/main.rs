use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use merchant_summary::config::Config;
use merchant_summary::core::LocalClock;
use merchant_summary::middleware::{MetricsCollector, MetricsMiddleware, RequestId};
use merchant_summary::modules;
use merchant_summary::summaries::{MySqlSummaryStore, SummaryService, SummaryStore};
use merchant_summary::telemetry;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    telemetry::init(&config.app);

    tracing::info!("Starting Merchant Summary Service");
    tracing::info!("Environment: {}", config.app.env);

    // Connect to the summary document store
    let pool = config
        .database
        .create_pool()
        .context("Failed to create database pool")?;
    let store = MySqlSummaryStore::new(pool);

    tracing::info!("Connecting to summary store...");
    store
        .wait_until_ready(config.database.ready_timeout())
        .await
        .context("Summary store not ready")?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations")
            .run(store.pool())
            .await
            .context("Failed to run migrations")?;
        tracing::info!("Migrations applied");
    }

    tracing::info!(
        "Summary store ready ({} max connections)",
        config.database.max_connections
    );

    let store: Arc<dyn SummaryStore> = Arc::new(store);
    let service = Arc::new(SummaryService::with_concurrency(
        store.clone(),
        Arc::new(LocalClock),
        config.summary.fetch_concurrency,
    ));
    let metrics = MetricsCollector::new();

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(MetricsMiddleware::new(metrics.clone()))
            .wrap(RequestId)
            .app_data(web::Data::new(service.clone()))
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(metrics.clone()))
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);
    tracing::info!("Endpoint: POST http://{}/api/merchant/summary", bind_address);

    server.await.context("Server terminated with error")
}

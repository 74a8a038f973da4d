use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use billetflow::config::Config;
use billetflow::modules::batches::{BatchLedger, PgBatchLedger};
use billetflow::modules::billets::{run_billet_pipeline, BillingPipeline};
use billetflow::modules::gateways::{BilletGateway, HttpBilletGateway};
use billetflow::modules::installments::{InstallmentSelector, PgInstallmentRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "billetflow=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting billetflow billing microservice");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.max_connections
    );

    // Wire the pipeline components
    let selector: Arc<dyn InstallmentSelector> =
        Arc::new(PgInstallmentRepository::new(db_pool.clone()));
    let ledger: Arc<dyn BatchLedger> = Arc::new(PgBatchLedger::new(db_pool.clone()));
    let gateway: Arc<dyn BilletGateway> = Arc::new(
        HttpBilletGateway::new(&config.billet_api).expect("Failed to build billet gateway"),
    );
    let pipeline = Arc::new(BillingPipeline::new(
        selector,
        ledger,
        gateway,
        config.cutoff,
    ));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(pipeline.clone()))
            .route("/health", web::get().to(health_check))
            .route("/v1/billets/run", web::post().to(run_billet_pipeline))
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "billetflow"
    }))
}

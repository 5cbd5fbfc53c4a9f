use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use backend::config::Config;
use backend::services::MemoryCatalog;
use backend::{api, health_check, AppState};

fn init_tracing() {
    // Initialize tracing with env-filter
    // RUST_LOG environment variable controls log levels
    // Default: debug for our crate, info for axum, warn for dependencies
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("backend=debug,tower_http=debug,axum=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the movie catalog, seeding it from the configured file if present.
fn build_catalog(config: &Config) -> MemoryCatalog {
    match &config.catalog.seed_path {
        Some(path) => match MemoryCatalog::from_seed_file(path) {
            Ok(catalog) => {
                tracing::info!(movies = catalog.len(), "Catalog seeded from {:?}", path);
                catalog
            }
            Err(e) => {
                tracing::error!("Failed to load catalog seed: {}", e);
                std::process::exit(1);
            }
        },
        None => MemoryCatalog::new(),
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing first so we can log configuration loading
    init_tracing();

    tracing::info!("Starting Marquee Backend v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match Config::load() {
        Ok(cfg) => {
            tracing::info!("Configuration loaded successfully");
            tracing::debug!("Server: {}:{}", cfg.server.host, cfg.server.port);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let catalog = build_catalog(&config);

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        catalog: Arc::new(catalog),
    };

    // Build movies routes
    let movies_routes = Router::new().route("/:id", get(api::movies::get_movie));

    // Build main router with state
    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/movies", movies_routes)
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = config.server_addr();
    tracing::info!("Marquee Backend listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

//! SalesDash Backend Server
//!
//! In-memory sales analytics API for the dashboard front end.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   SALESDASH BACKEND                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌──────────┐   ┌───────────────────────┐ │
//! │  │  API     │   │  Filter  │   │  Aggregation Engine   │ │
//! │  │  (Axum)  │──▶│  Engine  │──▶│  (KPIs, series,       │ │
//! │  └──────────┘   └──────────┘   │   pivot, export)      │ │
//! │        │                       └───────────────────────┘ │
//! │        ▼                                                 │
//! │  ┌─────────────────┐      ┌───────────────────────┐      │
//! │  │  Record Store   │◀─────│  Synthetic Generator  │      │
//! │  │  (in-memory)    │      │  (seed + live feed)   │      │
//! │  └─────────────────┘      └───────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod analytics;
mod config;
mod error;
mod export;
mod generator;
mod handlers;
mod models;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use parking_lot::Mutex;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use generator::SampleGenerator;
use store::RecordStore;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salesdash=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("SalesDash backend starting...");

    // Seed the store with the deterministic bulk corpus
    let mut generator = SampleGenerator::new(config.rng_seed);
    let seed_batch = generator.bulk(config.seed_records, chrono::Utc::now().date_naive());

    let store = Arc::new(RecordStore::new());
    store.append(seed_batch);
    tracing::info!("Store seeded with {} records", store.len());

    // Build application state
    let state = AppState {
        store,
        generator: Arc::new(Mutex::new(generator)),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub generator: Arc<Mutex<SampleGenerator>>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/data", get(handlers::data::fetch))
        .route("/api/export", get(handlers::export::download))
        .route("/api/realtime", get(handlers::realtime::simulate))
        .route("/api/stats", get(handlers::stats::overview))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use services::BookingLedger;
use store::BookingStore;

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub ledger: BookingLedger,
}

impl AppState {
    pub fn new(store: Arc<dyn BookingStore>) -> Arc<Self> {
        Arc::new(Self { ledger: BookingLedger::new(store) })
    }
}

/// Builds the full HTTP router over the given state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

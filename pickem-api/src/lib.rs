//! pickem-api library - weighted activity picker service
//!
//! Exposes the router and state for the binary and for integration testing.

use axum::Router;
use pickem_common::CatalogStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod error;
pub mod logging;
pub mod pick;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// File-backed catalog; single writer, many readers
    pub store: CatalogStore,
}

impl AppState {
    /// Create new application state
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }
}

/// Build application router
///
/// CORS is permissive: the browser front end is served from another origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::category_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

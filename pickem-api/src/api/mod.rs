//! HTTP API handlers for pickem-api

pub mod categories;
pub mod health;
pub mod pick;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::AppState;

pub use categories::{add_item, edit_item, get_category, list_categories, remove_item};
pub use health::health_routes;
pub use pick::pick_item;

/// Catalog and pick routes
///
/// `/categories/pick` is a static segment and takes precedence over the
/// `/categories/:category` capture.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/pick", get(pick_item))
        .route("/categories/:category", get(get_category))
        .route("/categories/:category/add", post(add_item))
        .route("/categories/:category/edit/:name", put(edit_item))
        .route("/categories/:category/remove/:name", delete(remove_item))
}

//! Catalog management endpoints
//!
//! Listing, fetching, adding, editing and removing items. Mutations go
//! through `CatalogStore`, which persists before publishing the change.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use pickem_common::models::ItemPatch;
use pickem_common::{Category, Item, Tier};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{ApiError, ApiResult, AppState};

/// Body of an add request; tiers are validated here rather than by serde so
/// a bad tier gets the same 400 error shape as every other input error
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub name: String,
    pub interest: String,
    pub effort: String,
}

/// Body of an edit request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct EditItemRequest {
    #[serde(default)]
    pub interest: Option<String>,
    #[serde(default)]
    pub effort: Option<String>,
}

/// GET /categories
///
/// Category names in catalog order.
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.store.read().await.category_names())
}

/// GET /categories/:category
///
/// An unknown category is reported with an empty `choices` list, not a 404.
pub async fn get_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Category> {
    let catalog = state.store.read().await;
    let found = catalog.category(&category).cloned().unwrap_or(Category {
        name: category,
        choices: Vec::new(),
    });
    Json(found)
}

/// POST /categories/:category/add
///
/// Creates the category on first use. 409 if the name is taken.
pub async fn add_item(
    State(state): State<AppState>,
    Path(category): Path<String>,
    body: Result<Json<AddItemRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let Json(request) = body?;
    let item = Item::new(
        request.name,
        parse_tier(&request.interest)?,
        parse_tier(&request.effort)?,
    );
    let item_name = item.name.clone();

    let updated = state.store.add_item(&category, item).await?;
    info!("Added {} to {}", item_name, category);
    Ok((StatusCode::CREATED, Json(updated)))
}

/// PUT /categories/:category/edit/:name
pub async fn edit_item(
    State(state): State<AppState>,
    Path((category, name)): Path<(String, String)>,
    body: Result<Json<EditItemRequest>, JsonRejection>,
) -> ApiResult<Json<Item>> {
    let Json(request) = body?;
    let name = decode_plus(&name);
    let patch = ItemPatch {
        interest: request.interest.as_deref().map(parse_tier).transpose()?,
        effort: request.effort.as_deref().map(parse_tier).transpose()?,
    };
    if patch.is_empty() {
        return Err(ApiError::BadRequest(
            "Nothing to change: give interest and/or effort".to_string(),
        ));
    }

    let item = state.store.edit_item(&category, &name, patch).await?;
    info!("Edited {} in {}", name, category);
    Ok(Json(item))
}

/// DELETE /categories/:category/remove/:name
///
/// Responds 202 with the whole catalog as committed by this removal.
/// Removing the last item of a category removes the category.
pub async fn remove_item(
    State(state): State<AppState>,
    Path((category, name)): Path<(String, String)>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let name = decode_plus(&name);
    let (_, catalog) = state.store.remove_item(&category, &name).await?;
    info!("Removed {} from {}", name, category);

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "categories": catalog.categories() })),
    ))
}

fn parse_tier(value: &str) -> Result<Tier, ApiError> {
    value.parse::<Tier>().map_err(ApiError::from)
}

/// Item names arrive with `+` standing for a space
fn decode_plus(name: &str) -> String {
    name.replace('+', " ")
}

//! Pick endpoint
//!
//! GET /categories/pick?categories=a&categories=b&interest=medium&effort=high
//!
//! `categories` may repeat; `interest` and `effort` default to `low`.

use axum::{
    extract::{RawQuery, State},
    Json,
};

use crate::pick::{self, PickRequest, PickResult};
use crate::{ApiError, ApiResult, AppState};

const DEFAULT_TIER: &str = "low";

/// Raw query values before validation
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PickQuery {
    pub categories: Vec<String>,
    pub interest: Option<String>,
    pub effort: Option<String>,
}

impl PickQuery {
    /// Parse a query string, keeping every `categories` value in order
    ///
    /// Blank category values are dropped; for `interest` and `effort` the
    /// first occurrence wins.
    pub fn from_query(query: Option<&str>) -> ApiResult<Self> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query.unwrap_or(""))
            .map_err(|e| ApiError::BadRequest(format!("Malformed query string: {}", e)))?;

        let mut parsed = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "categories" if !value.trim().is_empty() => parsed.categories.push(value),
                "interest" if parsed.interest.is_none() => parsed.interest = Some(value),
                "effort" if parsed.effort.is_none() => parsed.effort = Some(value),
                _ => {}
            }
        }
        Ok(parsed)
    }

    pub fn into_request(self) -> ApiResult<PickRequest> {
        let request = PickRequest::parse(
            self.categories,
            self.interest.as_deref().unwrap_or(DEFAULT_TIER),
            self.effort.as_deref().unwrap_or(DEFAULT_TIER),
        )?;
        Ok(request)
    }
}

/// GET /categories/pick
///
/// 200 with either a selection or `{"outcome": "no_match"}`; 400 when the
/// tiers or category list are invalid.
pub async fn pick_item(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<PickResult>> {
    let request = PickQuery::from_query(query.as_deref())?.into_request()?;

    // Hold the read guard for the whole pick so it sees one snapshot
    let catalog = state.store.read().await;
    let result = pick::pick(&*catalog, &request)?;
    Ok(Json(result))
}

//! Route handlers for the product API.
//!
//! One handler per endpoint; each performs a direct operation against the
//! store and returns JSON, or an `ApiError` for the normalization layer.

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::http::validation::{parse_draft, parse_patch};
use crate::store::model::Product;

/// Query parameters for the list endpoint.
///
/// `page` and `limit` arrive as raw strings and coerce leniently:
/// unparseable or zero values fall back to the defaults (page 1, no
/// pagination) instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub products: Vec<Product>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

pub async fn root() -> &'static str {
    "Welcome to the Product API! Go to /api/products to see all products."
}

pub async fn hello() -> &'static str {
    "Hello world!"
}

/// GET /api/products — list, with optional category filter and pagination.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ListResponse> {
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let filtered = match category {
        Some(category) => state.store.by_category(category),
        None => state.store.all(),
    };

    let total = filtered.len();
    let page = positive_number(query.page).unwrap_or(1);
    let limit = positive_number(query.limit).unwrap_or(total);

    let products = filtered
        .into_iter()
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .collect();

    Json(ListResponse {
        page,
        limit,
        total,
        products,
    })
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    state
        .store
        .get(&id)
        .map(Json)
        .ok_or_else(ApiError::product_not_found)
}

/// GET /api/products/search?q=... — substring match on name.
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    match query.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => Ok(Json(state.store.search_name(q))),
        _ => Err(ApiError::validation("Search query (q) is required.")),
    }
}

/// GET /api/products/stats — category → record count.
pub async fn product_stats(State(state): State<AppState>) -> Json<BTreeMap<String, usize>> {
    Json(state.store.stats())
}

/// POST /api/products — validate, assign a fresh id, append.
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(body) = body.map_err(bad_body)?;
    let draft = parse_draft(&body)?;

    let product = draft.into_product(Uuid::new_v4().to_string());
    state.store.insert(product.clone());

    tracing::info!(id = %product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id} — existence check, then validated partial merge.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    if state.store.get(&id).is_none() {
        return Err(ApiError::product_not_found());
    }

    let Json(body) = body.map_err(bad_body)?;
    let patch = parse_patch(&body)?;

    let updated = state
        .store
        .update(&id, patch)
        .ok_or_else(ApiError::product_not_found)?;

    tracing::info!(id = %updated.id, "Product updated");
    Ok(Json(updated))
}

/// DELETE /api/products/{id} — remove and return the record.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let removed = state
        .store
        .remove(&id)
        .ok_or_else(ApiError::product_not_found)?;

    tracing::info!(id = %removed.id, "Product deleted");
    Ok(Json(removed))
}

/// Fallback for paths no route matched.
pub async fn not_found_fallback() -> ApiError {
    ApiError::NotFound("Resource not found".to_string())
}

fn bad_body(_: JsonRejection) -> ApiError {
    ApiError::validation("Request body must be valid JSON.")
}

fn positive_number(raw: Option<String>) -> Option<usize> {
    raw.and_then(|s| s.parse::<usize>().ok()).filter(|&n| n >= 1)
}

//! Payload shape validation for create and update.
//!
//! # Responsibilities
//! - Check presence and type of name, description, price, category, inStock
//! - Report the first violation in field order, never aggregate
//! - Strict full payload on create; present-fields-only on update
//!
//! # Design Decisions
//! - Handlers take raw `serde_json::Value` bodies so a shape error renders
//!   this system's 400 envelope instead of the extractor's rejection
//! - Update accepts partial payloads: a field may be absent or null, but a
//!   field that is present must satisfy the same rule as on create

use serde_json::Value;

use crate::http::error::ApiError;
use crate::store::model::{ProductDraft, ProductPatch};

const NAME_MSG: &str = "Product name is required and must be a string.";
const DESCRIPTION_MSG: &str = "Description is required and must be a string.";
const PRICE_MSG: &str = "Price is required and must be a non-negative number.";
const CATEGORY_MSG: &str = "Category is required and must be a string.";
const IN_STOCK_MSG: &str = "inStock is required and must be a boolean.";

/// Validate a full create payload.
pub fn parse_draft(body: &Value) -> Result<ProductDraft, ApiError> {
    Ok(ProductDraft {
        name: require_string(body, "name", NAME_MSG)?,
        description: require_string(body, "description", DESCRIPTION_MSG)?,
        price: require_price(body)?,
        category: require_string(body, "category", CATEGORY_MSG)?,
        in_stock: require_bool(body)?,
    })
}

/// Validate a partial update payload. Absent and null fields become `None`.
pub fn parse_patch(body: &Value) -> Result<ProductPatch, ApiError> {
    Ok(ProductPatch {
        name: optional(body, "name", |b| require_string(b, "name", NAME_MSG))?,
        description: optional(body, "description", |b| {
            require_string(b, "description", DESCRIPTION_MSG)
        })?,
        price: optional(body, "price", require_price)?,
        category: optional(body, "category", |b| {
            require_string(b, "category", CATEGORY_MSG)
        })?,
        in_stock: optional(body, "inStock", require_bool)?,
    })
}

fn require_string(body: &Value, field: &str, message: &str) -> Result<String, ApiError> {
    match body.get(field).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(ApiError::validation(message)),
    }
}

fn require_price(body: &Value) -> Result<f64, ApiError> {
    match body.get("price").and_then(Value::as_f64) {
        Some(price) if price >= 0.0 => Ok(price),
        _ => Err(ApiError::validation(PRICE_MSG)),
    }
}

fn require_bool(body: &Value) -> Result<bool, ApiError> {
    body.get("inStock")
        .and_then(Value::as_bool)
        .ok_or_else(|| ApiError::validation(IN_STOCK_MSG))
}

fn optional<T>(
    body: &Value,
    field: &str,
    check: impl Fn(&Value) -> Result<T, ApiError>,
) -> Result<Option<T>, ApiError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => check(body).map(Some),
    }
}

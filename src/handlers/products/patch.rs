use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::domain::{Product, ProductFields};
use crate::handlers::AppState;
use crate::middleware::{ApiResponse, ApiResult};

use super::parse_id;

/// Partial-update payload: absent fields keep their prior values.
#[derive(Debug, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub code_value: Option<String>,
    pub is_published: Option<bool>,
    pub expiration: Option<String>,
    pub price: Option<f64>,
}

/// PATCH /products/:id - merge the supplied fields over the stored record
/// and write the result back as a full update.
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ProductPatch>,
) -> ApiResult<Product> {
    let id = parse_id(&id)?;
    let existing = state.service.get_by_id(id).await?;

    let merged = ProductFields {
        name: body.name.unwrap_or(existing.name),
        quantity: body.quantity.unwrap_or(existing.quantity),
        code_value: body.code_value.unwrap_or(existing.code_value),
        is_published: body.is_published.unwrap_or(existing.is_published),
        expiration: body.expiration.unwrap_or(existing.expiration),
        price: body.price.unwrap_or(existing.price),
    };

    let product = state.service.update(id, merged).await?;
    Ok(ApiResponse::success(product))
}

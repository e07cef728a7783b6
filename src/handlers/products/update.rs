use axum::{
    extract::{Path, State},
    Json,
};

use crate::catalog::validation::{validate_expiration, validate_required_fields};
use crate::domain::{Product, ProductFields};
use crate::handlers::AppState;
use crate::middleware::{ApiResponse, ApiResult};

use super::parse_id;

/// PUT /products/:id - full update. Every field is replaced, the id is
/// preserved, and create-level validation applies.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<ProductFields>,
) -> ApiResult<Product> {
    let id = parse_id(&id)?;
    validate_required_fields(&fields)?;
    validate_expiration(&fields.expiration)?;

    let product = state.service.update(id, fields).await?;
    Ok(ApiResponse::success(product))
}

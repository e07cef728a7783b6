use axum::{extract::State, Json};

use crate::catalog::validation::{validate_expiration, validate_required_fields};
use crate::domain::{Product, ProductFields};
use crate::handlers::AppState;
use crate::middleware::{ApiResponse, ApiResult};

/// POST /products - create a product. The id is assigned by the service;
/// clients never supply one.
pub async fn create(
    State(state): State<AppState>,
    Json(fields): Json<ProductFields>,
) -> ApiResult<Product> {
    validate_required_fields(&fields)?;
    validate_expiration(&fields.expiration)?;

    let product = state.service.create(fields).await?;
    Ok(ApiResponse::created(product))
}

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::domain::Product;
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::middleware::{ApiResponse, ApiResult};

use super::parse_id;

#[derive(Debug, Deserialize)]
pub struct UpdateNameRequest {
    #[serde(default)]
    pub name: String,
}

/// PATCH /products/:id/name - rename a product, leaving every other field
/// untouched.
pub async fn update_name(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateNameRequest>,
) -> ApiResult<Product> {
    let id = parse_id(&id)?;
    if body.name.is_empty() {
        return Err(ApiError::validation_error("name is required"));
    }

    let product = state.service.update_name(id, &body.name).await?;
    Ok(ApiResponse::success(product))
}

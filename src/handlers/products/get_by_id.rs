use axum::extract::{Path, State};

use crate::domain::Product;
use crate::handlers::AppState;
use crate::middleware::{ApiResponse, ApiResult};

use super::parse_id;

/// GET /products/:id - show a single product
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Product> {
    let id = parse_id(&id)?;
    let product = state.service.get_by_id(id).await?;
    Ok(ApiResponse::success(product))
}

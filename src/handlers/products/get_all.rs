use axum::extract::State;

use crate::domain::Product;
use crate::handlers::AppState;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /products - list the full catalog. An empty catalog is a successful
/// empty list, never an error.
pub async fn get_all(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    let products = state.service.get_all().await?;
    Ok(ApiResponse::success(products))
}

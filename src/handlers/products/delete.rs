use axum::extract::{Path, State};

use crate::handlers::AppState;
use crate::middleware::{ApiResponse, ApiResult};

use super::parse_id;

/// DELETE /products/:id - remove a product. Responds 200 with a
/// confirmation message; the id is never reassigned.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<String> {
    let id = parse_id(&id)?;
    state.service.delete(id).await?;
    Ok(ApiResponse::success(format!(
        "product {} has been deleted",
        id
    )))
}

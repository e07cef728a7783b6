use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::domain::Product;
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Minimum price, exclusive. Unparseable or absent values filter nothing.
    #[serde(rename = "priceGt")]
    pub price_gt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub results: usize,
    pub data: Vec<Product>,
}

/// GET /products/search?priceGt=<n> - linear scan for products priced
/// strictly above the threshold. An empty match set is a 404, not an
/// empty list.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<SearchResults> {
    let threshold: f64 = query
        .price_gt
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default();

    let matches: Vec<Product> = state
        .service
        .get_all()
        .await?
        .into_iter()
        .filter(|p| p.price > threshold)
        .collect();

    if matches.is_empty() {
        return Err(ApiError::not_found("results are empty"));
    }

    Ok(ApiResponse::success(SearchResults {
        results: matches.len(),
        data: matches,
    }))
}
